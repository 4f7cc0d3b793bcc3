//! Built-in concerns.

pub mod animation;
pub mod background;
pub mod bars;
pub mod cta;
pub mod footer;
pub mod general;
pub mod header;
pub mod menu;
pub mod mobile;
pub mod sticky;

pub use animation::AnimationConcern;
pub use background::{background_layers, BackgroundConcern, BackgroundLayer};
pub use bars::{AnnouncementConcern, TopbarConcern};
pub use cta::CtaConcern;
pub use footer::{CopyrightConcern, FooterConcern, FooterCtaConcern, SocialIconsConcern};
pub use general::GeneralConcern;
pub use header::{HeaderColorsConcern, HeaderLayoutConcern, HeaderSpacingConcern};
pub use menu::{HoverEffectConcern, MenuConcern};
pub use mobile::MobileConcern;
pub use sticky::{shrink_metrics, ShrinkMetrics, StickyConcern};

/// Selector for the header element.
pub const HEADER: &str = ".site-header";

/// Selector for the header's inner flex row.
pub const HEADER_INNER: &str = ".site-header .header-inner";

/// Selector for primary menu links.
pub const MENU_LINK: &str = ".main-navigation a";

/// Selectors for the logo image.
pub const LOGO: [&str; 2] = [".site-header .custom-logo", ".site-header .site-logo img"];

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::Value;

    use crate::css::rule::{CssBlock, CssRule};
    use crate::options::{coerce_option_set, Scope};
    use crate::resolve::ResolvedStyleSet;

    /// Build a resolved set directly from JSON objects.
    pub fn styles(header: Value, footer: Value, general: Value) -> ResolvedStyleSet {
        ResolvedStyleSet {
            template_id: None,
            header: coerce_option_set(Scope::Header, header),
            footer: coerce_option_set(Scope::Footer, footer),
            general: coerce_option_set(Scope::General, general),
        }
    }

    /// Header-only shorthand.
    pub fn header(header: Value) -> ResolvedStyleSet {
        styles(header, Value::Null, Value::Null)
    }

    /// First top-level rule whose selector list contains `selector`.
    pub fn find_rule<'a>(blocks: &'a [CssBlock], selector: &str) -> Option<&'a CssRule> {
        blocks
            .iter()
            .filter_map(CssBlock::as_rule)
            .find(|r| r.selectors.iter().any(|s| s == selector))
    }

    /// First rule inside any media block whose selectors contain `selector`.
    pub fn find_media_rule<'a>(
        blocks: &'a [CssBlock],
        query: &str,
        selector: &str,
    ) -> Option<&'a CssRule> {
        blocks.iter().find_map(|b| match b {
            CssBlock::Media { query: q, rules } if q == query => rules
                .iter()
                .find(|r| r.selectors.iter().any(|s| s == selector)),
            _ => None,
        })
    }
}
