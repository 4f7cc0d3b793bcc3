//! Mobile breakpoint: toggle, menu panel, and tighter padding.

use super::HEADER_INNER;
use crate::css::concern::{px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::{format_number, ResolvedStyleSet};

const DEFAULT_BREAKPOINT: f64 = 768.0;
const MOBILE_PADDING: f64 = 16.0;

/// Everything below the mobile breakpoint.
pub struct MobileConcern;

impl Concern for MobileConcern {
    fn name(&self) -> &'static str {
        "mobile"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        let breakpoint = h
            .num("mobile_breakpoint")
            .filter(|b| *b > 0.0)
            .map(f64::round)
            .unwrap_or(DEFAULT_BREAKPOINT);

        let mut rules = vec![
            CssRule::new(".site-header .main-navigation").decl("display", "none"),
        ];

        let mut toggle = CssRule::new(".site-header .menu-toggle").decl("display", "block");
        toggle.push_opt("color", h.color("hamburger_color"));
        rules.push(toggle);

        if let Some(color) = h.color("hamburger_color") {
            rules.push(
                CssRule::many(&[
                    ".menu-toggle .hamburger-line",
                    ".menu-toggle .hamburger-line::before",
                    ".menu-toggle .hamburger-line::after",
                ])
                .decl("background-color", color),
            );
        }

        let mut panel = CssRule::new(".mobile-menu");
        panel.push_opt("background-color", h.color("mobile_menu_bg_color"));
        panel.push_opt("color", h.color("mobile_menu_text_color"));
        match h.text_or("mobile_menu_style", "dropdown").as_str() {
            "slide" => {
                panel.push("position", "fixed");
                panel.push("top", "0");
                panel.push("bottom", "0");
                panel.push("right", "0");
                panel.push("width", "80%");
                panel.push("max-width", "360px");
                panel.push("transform", "translateX(100%)");
                panel.push("transition", "transform 0.3s ease");
            }
            "fullscreen" => {
                panel.push("position", "fixed");
                panel.push("inset", "0");
                panel.push("z-index", "1000");
            }
            _ => {
                panel.push("position", "absolute");
                panel.push("top", "100%");
                panel.push("left", "0");
                panel.push("right", "0");
            }
        }
        rules.push(panel);

        let mut panel_links = CssRule::new(".mobile-menu a");
        panel_links.push_opt("color", h.color("mobile_menu_text_color"));
        rules.push(panel_links);

        let mut inner = CssRule::new(HEADER_INNER);
        for side in ["left", "right"] {
            let field = format!("header_padding_{}", side);
            if h.num(&field).is_some_and(|p| p > MOBILE_PADDING) {
                inner.push(&format!("padding-{}", side), px(MOBILE_PADDING));
            }
        }
        rules.push(inner);

        vec![
            CssBlock::media(format!("(max-width: {})", px(breakpoint)), rules),
            CssBlock::media(
                format!("(min-width: {}px)", format_number(breakpoint + 1.0)),
                vec![
                    CssRule::many(&[".site-header .menu-toggle", ".mobile-menu"])
                        .decl("display", "none"),
                ],
            ),
        ]
    }
}
