//! Site-wide colors, typography, and container width.

use crate::css::concern::{px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::{format_number, ResolvedStyleSet};

/// Base colors and typography from the general scope.
pub struct GeneralConcern;

impl Concern for GeneralConcern {
    fn name(&self) -> &'static str {
        "general"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let g = styles.general();

        let mut root = CssRule::new(":root");
        root.push_opt("--ross-primary", g.color("primary_color"));
        root.push_opt("--ross-secondary", g.color("secondary_color"));
        if let Some(width) = g.num("container_width").filter(|w| *w > 0.0) {
            root.push("--ross-container", px(width));
        }

        let mut body = CssRule::new("body");
        body.push_opt("color", g.color("body_text_color"));
        body.push_opt("background-color", g.color("body_bg_color"));
        body.push_opt(
            "font-size",
            g.num("body_font_size").filter(|s| *s > 0.0).map(px),
        );
        body.push_opt(
            "line-height",
            g.num("body_line_height")
                .filter(|l| *l > 0.0)
                .map(format_number),
        );

        let mut links = CssRule::new("a");
        links.push_opt("color", g.color("link_color").or_else(|| g.color("primary_color")));

        let mut links_hover = CssRule::many(&["a:hover", "a:focus"]);
        links_hover.push_opt(
            "color",
            g.color("link_hover_color")
                .or_else(|| g.color("secondary_color")),
        );

        let mut headings = CssRule::many(&["h1", "h2", "h3", "h4", "h5", "h6"]);
        headings.push_opt(
            "font-weight",
            g.num("heading_font_weight").map(format_number),
        );

        let mut container = CssRule::many(&[".container", ".site-container"]);
        container.push_opt(
            "max-width",
            g.num("container_width").filter(|w| *w > 0.0).map(px),
        );

        vec![
            root.into(),
            body.into(),
            links.into(),
            links_hover.into(),
            headings.into(),
            container.into(),
        ]
    }
}
