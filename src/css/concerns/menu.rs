//! Menu typography and hover effects.

use super::MENU_LINK;
use crate::css::color::contrast_text_for;
use crate::css::concern::{ms, px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::{format_number, ResolvedStyleSet, ScopeView};

const DEFAULT_TRANSITION_MS: f64 = 300.0;

/// Font size, weight, spacing, and case of menu links.
pub struct MenuConcern;

impl Concern for MenuConcern {
    fn name(&self) -> &'static str {
        "menu"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();

        let mut link = CssRule::new(MENU_LINK);
        link.push_opt(
            "font-size",
            h.num("menu_font_size").filter(|s| *s > 0.0).map(px),
        );
        link.push_opt(
            "font-weight",
            h.num("menu_font_weight").map(format_number),
        );
        link.push_opt("letter-spacing", h.num("menu_letter_spacing").map(px));
        link.push_opt(
            "text-transform",
            h.text("menu_text_transform")
                .filter(|t| matches!(t.as_str(), "none" | "uppercase" | "lowercase" | "capitalize")),
        );

        vec![link.into()]
    }
}

/// Underline, background, or scale effect on menu hover.
pub struct HoverEffectConcern;

fn hover_color(h: &ScopeView<'_>) -> Option<String> {
    h.color("header_hover_color")
        .or_else(|| h.color("header_accent_color"))
}

/// Background plus readable text for the hovered item.
fn background_hover(bg: String) -> CssBlock {
    let mut rule = CssRule::many(&[".main-navigation a:hover", ".main-navigation a:focus"]);
    if let Some(text) = contrast_text_for(&bg) {
        rule.push("color", text);
    }
    rule.push("background-color", bg);
    rule.push("border-radius", "4px");
    rule.into()
}

impl Concern for HoverEffectConcern {
    fn name(&self) -> &'static str {
        "hover-effect"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        let speed = h
            .num("transition_speed")
            .filter(|s| *s >= 0.0)
            .unwrap_or(DEFAULT_TRANSITION_MS);
        let explicit_bg = h.color("menu_hover_bg_color");

        let mut blocks = Vec::new();

        match h.text("hover_effect").as_deref() {
            Some("none") => {
                blocks.push(
                    CssRule::new(".main-navigation a::after")
                        .decl("display", "none")
                        .into(),
                );
            }
            Some("underline") => {
                blocks.push(
                    CssRule::new(MENU_LINK)
                        .decl("position", "relative")
                        .into(),
                );
                let mut line = CssRule::new(".main-navigation a::after")
                    .decl("content", "\"\"")
                    .decl("position", "absolute")
                    .decl("left", "0")
                    .decl("bottom", "-4px")
                    .decl("width", "0")
                    .decl("height", "2px")
                    .decl("transition", format!("width {} ease", ms(speed)));
                line.push_opt("background-color", hover_color(&h));
                blocks.push(line.into());
                blocks.push(
                    CssRule::many(&[
                        ".main-navigation a:hover::after",
                        ".main-navigation a:focus::after",
                    ])
                    .decl("width", "100%")
                    .into(),
                );
            }
            Some("background") => {
                let bg = explicit_bg.clone().or_else(|| h.color("header_accent_color"));
                if let Some(bg) = bg {
                    blocks.push(background_hover(bg));
                }
            }
            Some("scale") => {
                blocks.push(
                    CssRule::new(MENU_LINK)
                        .decl("display", "inline-block")
                        .decl("transition", format!("transform {} ease", ms(speed)))
                        .into(),
                );
                blocks.push(
                    CssRule::many(&[".main-navigation a:hover", ".main-navigation a:focus"])
                        .decl("transform", "scale(1.05)")
                        .into(),
                );
            }
            _ => {}
        }

        // An explicit hover background applies whatever the effect.
        if h.text("hover_effect").as_deref() != Some("background") {
            if let Some(bg) = explicit_bg {
                blocks.push(background_hover(bg));
            }
        }

        blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::concerns::test_support::{find_rule, header};
    use serde_json::json;

    #[test]
    fn menu_typography() {
        let s = header(json!({
            "menu_font_size": 15,
            "menu_font_weight": "600",
            "menu_letter_spacing": 0.5,
            "menu_text_transform": "uppercase"
        }));
        let blocks = MenuConcern.rules(&s);
        let link = find_rule(&blocks, MENU_LINK).unwrap();
        assert_eq!(link.get("font-size"), Some("15px"));
        assert_eq!(link.get("font-weight"), Some("600"));
        assert_eq!(link.get("letter-spacing"), Some("0.5px"));
        assert_eq!(link.get("text-transform"), Some("uppercase"));
    }

    #[test]
    fn unknown_text_transform_is_dropped() {
        let s = header(json!({"menu_text_transform": "shout"}));
        let blocks = MenuConcern.rules(&s);
        assert!(find_rule(&blocks, MENU_LINK).unwrap().is_empty());
    }

    #[test]
    fn white_hover_background_gets_dark_text() {
        let s = header(json!({"hover_effect": "background", "menu_hover_bg_color": "#ffffff"}));
        let blocks = HoverEffectConcern.rules(&s);
        let hover = find_rule(&blocks, ".main-navigation a:hover").unwrap();
        assert_eq!(hover.get("background-color"), Some("#ffffff"));
        assert_eq!(hover.get("color"), Some("#111111"));
    }

    #[test]
    fn black_hover_background_gets_light_text() {
        let s = header(json!({"menu_hover_bg_color": "#000000"}));
        let blocks = HoverEffectConcern.rules(&s);
        let hover = find_rule(&blocks, ".main-navigation a:hover").unwrap();
        assert_eq!(hover.get("color"), Some("#ffffff"));
    }

    #[test]
    fn background_effect_falls_back_to_accent() {
        let s = header(json!({"hover_effect": "background", "header_accent_color": "#E5C902"}));
        let blocks = HoverEffectConcern.rules(&s);
        let hover = find_rule(&blocks, ".main-navigation a:hover").unwrap();
        assert_eq!(hover.get("background-color"), Some("#E5C902"));
        assert_eq!(hover.get("color"), Some("#111111"));
    }

    #[test]
    fn underline_uses_speed_and_accent() {
        let s = header(json!({
            "hover_effect": "underline",
            "transition_speed": 200,
            "header_accent_color": "#0b66a3"
        }));
        let blocks = HoverEffectConcern.rules(&s);
        let line = find_rule(&blocks, ".main-navigation a::after").unwrap();
        assert_eq!(line.get("transition"), Some("width 200ms ease"));
        assert_eq!(line.get("background-color"), Some("#0b66a3"));
        assert!(find_rule(&blocks, ".main-navigation a:hover::after").is_some());
    }

    #[test]
    fn none_hides_pseudo_element() {
        let s = header(json!({"hover_effect": "none"}));
        let blocks = HoverEffectConcern.rules(&s);
        assert_eq!(
            find_rule(&blocks, ".main-navigation a::after")
                .unwrap()
                .get("display"),
            Some("none")
        );
    }

    #[test]
    fn scale_transforms_on_hover() {
        let s = header(json!({"hover_effect": "scale"}));
        let blocks = HoverEffectConcern.rules(&s);
        assert_eq!(
            find_rule(&blocks, ".main-navigation a:hover")
                .unwrap()
                .get("transform"),
            Some("scale(1.05)")
        );
    }
}
