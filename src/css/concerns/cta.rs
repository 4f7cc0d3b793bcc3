//! Header call-to-action button.

use crate::css::color::{contrast_text_for, with_alpha};
use crate::css::concern::{px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::ResolvedStyleSet;

const BUTTON: &str = ".site-header .header-cta";
const BUTTON_HOVER: [&str; 2] = [".site-header .header-cta:hover", ".site-header .header-cta:focus"];

/// Button style variants: solid, outline, ghost, gradient.
pub struct CtaConcern;

impl Concern for CtaConcern {
    fn name(&self) -> &'static str {
        "cta"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();

        match h.flag("cta_enabled") {
            Some(false) => {
                return vec![CssRule::new(BUTTON).decl("display", "none").into()];
            }
            None => return Vec::new(),
            Some(true) => {}
        }

        let bg = h.color("cta_bg_color").or_else(|| h.color("header_accent_color"));
        let text = h
            .color("cta_text_color")
            .or_else(|| bg.as_deref().and_then(contrast_text_for).map(String::from));
        let hover_bg = h.color("cta_hover_bg_color");

        let mut button = CssRule::new(BUTTON)
            .decl("display", "inline-block")
            .decl("text-decoration", "none");
        if let Some(radius) = h.num("cta_border_radius").filter(|r| *r >= 0.0) {
            button.push("border-radius", px(radius));
        }

        let mut hover = CssRule::many(&BUTTON_HOVER);

        match h.text_or("cta_style", "solid").as_str() {
            "outline" => {
                button.push("background-color", "transparent");
                if let Some(bg) = &bg {
                    button.push("color", bg.clone());
                    button.push("border", format!("2px solid {}", bg));
                    hover.push("background-color", hover_bg.clone().unwrap_or_else(|| bg.clone()));
                    hover.push_opt("color", text.clone());
                }
            }
            "ghost" => {
                button.push("background-color", "transparent");
                button.push("border", "2px solid transparent");
                button.push_opt("color", bg.clone());
                if let Some(bg) = &bg {
                    hover.push(
                        "background-color",
                        hover_bg.clone().unwrap_or_else(|| with_alpha(bg, 0.1)),
                    );
                }
            }
            "gradient" => {
                if let Some(bg) = &bg {
                    let end = hover_bg.clone().unwrap_or_else(|| bg.clone());
                    button.push(
                        "background-image",
                        format!("linear-gradient(135deg, {}, {})", bg, end),
                    );
                    button.push("border", "none");
                }
                button.push_opt("color", text.clone());
                hover.push("filter", "brightness(1.1)");
            }
            _ => {
                button.push_opt("background-color", bg.clone());
                button.push_opt("color", text.clone());
                if bg.is_some() {
                    button.push("border", "none");
                }
                hover.push_opt("background-color", hover_bg.clone());
                if let Some(hover_text) = hover_bg.as_deref().and_then(contrast_text_for) {
                    hover.push("color", hover_text);
                }
            }
        }

        vec![button.into(), hover.into()]
    }
}
