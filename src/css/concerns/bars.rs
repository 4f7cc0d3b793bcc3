//! Top bar and announcement bar above the header.

use crate::css::concern::{px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::ResolvedStyleSet;

/// Colors and size of the utility bar above the header.
pub struct TopbarConcern;

impl Concern for TopbarConcern {
    fn name(&self) -> &'static str {
        "topbar"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        if !h.flag_or("topbar_enabled", false) {
            return Vec::new();
        }

        let text = h.color("topbar_text_color");

        let mut bar = CssRule::new(".ross-topbar");
        bar.push_opt("background-color", h.color("topbar_bg_color"));
        bar.push_opt("color", text.clone());
        bar.push_opt(
            "font-size",
            h.num("topbar_font_size").filter(|s| *s > 0.0).map(px),
        );

        let mut links = CssRule::new(".ross-topbar a");
        links.push_opt("color", text);

        vec![bar.into(), links.into()]
    }
}

/// Announcement strip colors and dismiss button.
pub struct AnnouncementConcern;

impl Concern for AnnouncementConcern {
    fn name(&self) -> &'static str {
        "announcement"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        if !h.flag_or("announcement_enabled", false) {
            return Vec::new();
        }

        let text = h.color("announcement_text_color");

        let mut bar = CssRule::new(".ross-announcement");
        bar.push_opt("background-color", h.color("announcement_bg_color"));
        bar.push_opt("color", text.clone());

        let mut links = CssRule::new(".ross-announcement a");
        if let Some(text) = text {
            links.push("color", text);
            links.push("text-decoration", "underline");
        }

        let mut blocks = vec![bar.into(), links.into()];
        if h.flag("announcement_dismissible") == Some(false) {
            blocks.push(
                CssRule::new(".ross-announcement .announcement-close")
                    .decl("display", "none")
                    .into(),
            );
        }
        blocks
    }
}
