//! Footer colors, columns, CTA band, social icons, and copyright bar.

use crate::css::color::contrast_text_for;
use crate::css::concern::{px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::ResolvedStyleSet;

const FOOTER: &str = ".site-footer";
const MAX_COLUMNS: f64 = 6.0;

/// Footer colors, padding, and widget columns.
pub struct FooterConcern;

impl Concern for FooterConcern {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let f = styles.footer();
        let non_negative = |field: &str| f.num(field).filter(|v| *v >= 0.0).map(px);

        let mut footer = CssRule::new(FOOTER);
        footer.push_opt("background-color", f.color("footer_bg_color"));
        footer.push_opt("color", f.color("footer_text_color"));
        footer.push_opt("padding-top", non_negative("footer_padding_top"));
        footer.push_opt("padding-bottom", non_negative("footer_padding_bottom"));

        let mut links = CssRule::new(".site-footer a");
        links.push_opt("color", f.color("footer_link_color"));

        let mut links_hover = CssRule::many(&[".site-footer a:hover", ".site-footer a:focus"]);
        links_hover.push_opt("color", f.color("footer_link_hover_color"));

        let mut headings = CssRule::many(&[".site-footer .widget-title", ".site-footer h2", ".site-footer h3"]);
        headings.push_opt("color", f.color("footer_heading_color"));

        let mut blocks: Vec<CssBlock> = vec![
            footer.into(),
            links.into(),
            links_hover.into(),
            headings.into(),
        ];

        if let Some(columns) = f.num("footer_columns") {
            let columns = columns.round().clamp(1.0, MAX_COLUMNS) as u32;
            blocks.push(
                CssRule::new(".site-footer .footer-widgets")
                    .decl("display", "grid")
                    .decl("grid-template-columns", format!("repeat({}, minmax(0, 1fr))", columns))
                    .decl("gap", "32px")
                    .into(),
            );
            if columns > 1 {
                blocks.push(CssBlock::media(
                    "(max-width: 768px)",
                    vec![CssRule::new(".site-footer .footer-widgets")
                        .decl("grid-template-columns", "1fr")],
                ));
            }
        }

        blocks
    }
}

/// Call-to-action band above the footer widgets.
pub struct FooterCtaConcern;

impl Concern for FooterCtaConcern {
    fn name(&self) -> &'static str {
        "footer-cta"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let f = styles.footer();
        match f.flag("footer_cta_enabled") {
            Some(true) => {}
            Some(false) => {
                return vec![CssRule::new(".footer-cta").decl("display", "none").into()];
            }
            None => return Vec::new(),
        }

        let mut band = CssRule::new(".footer-cta");
        band.push_opt("background-color", f.color("footer_cta_bg_color"));
        band.push_opt("color", f.color("footer_cta_text_color"));

        let button_bg = f.color("footer_cta_button_bg");
        let button_text = f
            .color("footer_cta_button_text")
            .or_else(|| button_bg.as_deref().and_then(contrast_text_for).map(String::from));

        let mut button = CssRule::new(".footer-cta .button");
        button.push_opt("background-color", button_bg);
        button.push_opt("color", button_text);

        vec![band.into(), button.into()]
    }
}

/// Social icon shape, size, and colors.
pub struct SocialIconsConcern;

fn icon_radius(style: &str) -> Option<&'static str> {
    match style {
        "circle" => Some("50%"),
        "rounded" => Some("6px"),
        "square" => Some("0"),
        _ => None,
    }
}

impl Concern for SocialIconsConcern {
    fn name(&self) -> &'static str {
        "social-icons"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let f = styles.footer();
        match f.flag("social_enabled") {
            Some(true) => {}
            Some(false) => {
                return vec![CssRule::new(".social-links").decl("display", "none").into()];
            }
            None => return Vec::new(),
        }

        let style = f.text_or("social_icon_style", "circle");
        let mut icon = CssRule::new(".social-links a");

        if let Some(size) = f.num("social_icon_size").filter(|s| *s > 0.0) {
            icon.push("width", px(size));
            icon.push("height", px(size));
            icon.push("font-size", px((size * 0.5).round()));
            icon.push("display", "inline-flex");
            icon.push("align-items", "center");
            icon.push("justify-content", "center");
        }
        icon.push_opt("color", f.color("social_icon_color"));

        if style == "plain" {
            icon.push("background-color", "transparent");
        } else {
            icon.push_opt("background-color", f.color("social_icon_bg"));
            icon.push_opt("border-radius", icon_radius(&style).map(String::from));
        }

        let mut hover = CssRule::many(&[".social-links a:hover", ".social-links a:focus"]);
        hover.push_opt("color", f.color("social_icon_hover_color"));

        vec![icon.into(), hover.into()]
    }
}

/// Bottom copyright bar.
pub struct CopyrightConcern;

impl Concern for CopyrightConcern {
    fn name(&self) -> &'static str {
        "copyright"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let f = styles.footer();

        let mut bar = CssRule::new(".site-info");
        bar.push_opt("background-color", f.color("copyright_bg_color"));
        bar.push_opt("color", f.color("copyright_text_color"));
        bar.push_opt(
            "font-size",
            f.num("copyright_font_size").filter(|s| *s > 0.0).map(px),
        );
        bar.push_opt(
            "text-align",
            f.text("copyright_alignment")
                .filter(|a| matches!(a.as_str(), "left" | "center" | "right")),
        );

        let mut links = CssRule::new(".site-info a");
        links.push_opt("color", f.color("copyright_text_color"));

        vec![bar.into(), links.into()]
    }
}
