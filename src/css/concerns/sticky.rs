//! Sticky header and shrink-on-scroll sizing.
//!
//! The front-end script toggles `.is-sticky` once the page scrolls and
//! `.is-shrunk` once it scrolls past the header. Only the sizes live here.

use super::{HEADER_INNER, LOGO};
use crate::css::concern::{px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::ResolvedStyleSet;

const STICKY: &str = ".site-header.is-sticky";
const SHRUNK: &str = ".site-header.is-sticky.is-shrunk";

const DEFAULT_PADDING: f64 = 20.0;
const DEFAULT_SHRINK_HEIGHT: f64 = 60.0;
const MIN_SHRINK_PADDING: f64 = 8.0;
const MIN_SHRINK_LOGO: f64 = 20.0;
const SHRINK_FACTOR: f64 = 0.6;

/// Sizes applied while the header is shrunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkMetrics {
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub logo_max_height: f64,
}

/// Compute shrunk padding and logo height.
///
/// Each padding shrinks to 60% (rounded) but never below 8px. The logo
/// gets whatever of `shrink_height` is left after padding, but at least
/// 20px.
pub fn shrink_metrics(
    padding_top: f64,
    padding_bottom: f64,
    shrink_height: f64,
    logo_padding: f64,
) -> ShrinkMetrics {
    let shrink = |p: f64| (p * SHRINK_FACTOR).round().max(MIN_SHRINK_PADDING);
    let padding_top = shrink(padding_top);
    let padding_bottom = shrink(padding_bottom);
    let logo_max_height = (shrink_height - (padding_top + padding_bottom + 2.0 * logo_padding))
        .max(MIN_SHRINK_LOGO);

    ShrinkMetrics {
        padding_top,
        padding_bottom,
        logo_max_height,
    }
}

/// Fixed positioning, sticky background, and shrink sizing.
pub struct StickyConcern;

impl Concern for StickyConcern {
    fn name(&self) -> &'static str {
        "sticky"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        if !h.flag_or("sticky_header", false) {
            return Vec::new();
        }

        let mut sticky = CssRule::new(STICKY)
            .decl("position", "fixed")
            .decl("top", "0")
            .decl("left", "0")
            .decl("right", "0")
            .decl("z-index", "999");
        sticky.push_opt("background-color", h.color("sticky_bg_color"));

        let mut blocks: Vec<CssBlock> = vec![
            sticky.into(),
            CssRule::new(".admin-bar .site-header.is-sticky")
                .decl("top", "32px")
                .into(),
            CssBlock::media(
                "(max-width: 782px)",
                vec![CssRule::new(".admin-bar .site-header.is-sticky").decl("top", "46px")],
            ),
        ];

        if !h.flag_or("sticky_shrink", false) {
            return blocks;
        }

        let non_negative = |field: &str, fallback: f64| {
            h.num(field).filter(|v| *v >= 0.0).unwrap_or(fallback)
        };
        let metrics = shrink_metrics(
            non_negative("header_padding_top", DEFAULT_PADDING),
            non_negative("header_padding_bottom", DEFAULT_PADDING),
            h.num("sticky_shrink_height")
                .filter(|v| *v > 0.0)
                .unwrap_or(DEFAULT_SHRINK_HEIGHT),
            non_negative("logo_padding", 0.0),
        );

        let shrunk_inner = format!("{} .header-inner", SHRUNK);
        blocks.push(
            CssRule::new(shrunk_inner)
                .decl("padding-top", px(metrics.padding_top))
                .decl("padding-bottom", px(metrics.padding_bottom))
                .decl("min-height", "0")
                .into(),
        );

        let shrunk_logo: Vec<String> = LOGO
            .iter()
            .map(|sel| sel.replacen(".site-header", SHRUNK, 1))
            .collect();
        let shrunk_logo: Vec<&str> = shrunk_logo.iter().map(String::as_str).collect();
        blocks.push(
            CssRule::many(&shrunk_logo)
                .decl("max-height", px(metrics.logo_max_height))
                .into(),
        );

        blocks.push(
            CssRule::many(&[HEADER_INNER, LOGO[0], LOGO[1]])
                .decl(
                    "transition",
                    "padding 0.3s ease, max-height 0.3s ease, min-height 0.3s ease",
                )
                .into(),
        );

        blocks
    }
}
