//! Header template schema.
//!
//! A template is a named, immutable preset of header defaults. The nested
//! records mirror how the presets are authored; [`Template::defaults`]
//! flattens them into option keys so the resolver can fall back to them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::options::{is_unset, OptionSet};

/// A named header preset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Template {
    /// Template identifier (unique)
    pub id: String,

    /// Display title
    pub title: String,

    /// Short description for the template picker
    #[serde(default)]
    pub description: String,

    /// Icon shown in the picker
    #[serde(default)]
    pub icon: String,

    /// Picker grouping (e.g., "business", "creative")
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub layout: LayoutDefaults,

    #[serde(default)]
    pub design: DesignDefaults,

    #[serde(default)]
    pub typography: TypographyDefaults,

    #[serde(default)]
    pub spacing: SpacingDefaults,

    #[serde(default)]
    pub features: FeatureDefaults,

    #[serde(default)]
    pub cta: CtaDefaults,

    #[serde(default)]
    pub mobile: MobileDefaults,

    #[serde(default)]
    pub animation: AnimationDefaults,

    #[serde(default)]
    pub topbar: TopbarDefaults,

    #[serde(default)]
    pub announcement: AnnouncementDefaults,
}

/// Position and width choices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutDefaults {
    pub logo_position: Option<Position>,
    pub menu_position: Option<Position>,
    pub header_width: Option<HeaderWidth>,
}

/// Horizontal placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Center,
    Right,
}

/// Header container width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderWidth {
    Contained,
    Full,
}

/// Color defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignDefaults {
    pub background: Option<String>,
    pub text: Option<String>,
    pub accent: Option<String>,
    pub hover: Option<String>,
    pub border_color: Option<String>,
    pub border_width: Option<u32>,
    pub shadow: Option<String>,
}

/// Menu typography defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TypographyDefaults {
    pub menu_font_size: Option<u32>,
    pub menu_font_weight: Option<u32>,
    pub menu_letter_spacing: Option<f64>,
    pub menu_text_transform: Option<String>,
}

/// Spacing defaults, all in px.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpacingDefaults {
    pub header_height: Option<u32>,
    pub padding_top: Option<u32>,
    pub padding_bottom: Option<u32>,
    pub padding_left: Option<u32>,
    pub padding_right: Option<u32>,
    pub logo_max_height: Option<u32>,
    pub logo_padding: Option<u32>,
}

/// Feature switches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDefaults {
    pub sticky: Option<bool>,
    pub search: Option<bool>,
    pub cta: Option<bool>,
    pub topbar: Option<bool>,
    pub announcement: Option<bool>,
}

/// Call-to-action button defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CtaDefaults {
    pub text: Option<String>,
    pub url: Option<String>,
    pub style: Option<String>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub border_radius: Option<u32>,
}

/// Mobile menu defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileDefaults {
    pub breakpoint: Option<u32>,
    pub menu_style: Option<String>,
    pub menu_bg_color: Option<String>,
    pub hamburger_color: Option<String>,
}

/// Transition and sticky-shrink defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationDefaults {
    pub transition_speed: Option<u32>,
    pub hover_effect: Option<String>,
    pub sticky_shrink: Option<bool>,
    pub shrink_height: Option<u32>,
}

/// Top bar defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopbarDefaults {
    pub text: Option<String>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
}

/// Announcement bar defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementDefaults {
    pub text: Option<String>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
    pub dismissible: Option<bool>,
}

/// Template record path → header option key.
pub static FIELD_MAP: &[(&str, &str)] = &[
    ("layout.logo_position", "logo_position"),
    ("layout.menu_position", "menu_position"),
    ("layout.header_width", "header_width"),
    ("design.background", "header_bg_color"),
    ("design.text", "header_text_color"),
    ("design.accent", "header_accent_color"),
    ("design.hover", "header_hover_color"),
    ("design.border_color", "header_border_color"),
    ("design.border_width", "header_border_width"),
    ("design.shadow", "header_shadow"),
    ("typography.menu_font_size", "menu_font_size"),
    ("typography.menu_font_weight", "menu_font_weight"),
    ("typography.menu_letter_spacing", "menu_letter_spacing"),
    ("typography.menu_text_transform", "menu_text_transform"),
    ("spacing.header_height", "header_height"),
    ("spacing.padding_top", "header_padding_top"),
    ("spacing.padding_bottom", "header_padding_bottom"),
    ("spacing.padding_left", "header_padding_left"),
    ("spacing.padding_right", "header_padding_right"),
    ("spacing.logo_max_height", "logo_max_height"),
    ("spacing.logo_padding", "logo_padding"),
    ("features.sticky", "sticky_header"),
    ("features.search", "header_search_enabled"),
    ("features.cta", "cta_enabled"),
    ("features.topbar", "topbar_enabled"),
    ("features.announcement", "announcement_enabled"),
    ("cta.text", "cta_text"),
    ("cta.url", "cta_url"),
    ("cta.style", "cta_style"),
    ("cta.bg_color", "cta_bg_color"),
    ("cta.text_color", "cta_text_color"),
    ("cta.border_radius", "cta_border_radius"),
    ("mobile.breakpoint", "mobile_breakpoint"),
    ("mobile.menu_style", "mobile_menu_style"),
    ("mobile.menu_bg_color", "mobile_menu_bg_color"),
    ("mobile.hamburger_color", "hamburger_color"),
    ("animation.transition_speed", "transition_speed"),
    ("animation.hover_effect", "hover_effect"),
    ("animation.sticky_shrink", "sticky_shrink"),
    ("animation.shrink_height", "sticky_shrink_height"),
    ("topbar.text", "topbar_text"),
    ("topbar.bg_color", "topbar_bg_color"),
    ("topbar.text_color", "topbar_text_color"),
    ("announcement.text", "announcement_text"),
    ("announcement.bg_color", "announcement_bg_color"),
    ("announcement.text_color", "announcement_text_color"),
    ("announcement.dismissible", "announcement_dismissible"),
];

impl Template {
    /// Flatten the nested defaults into header option keys.
    ///
    /// Fields the template leaves out are absent from the result.
    pub fn defaults(&self) -> OptionSet {
        let tree = match serde_json::to_value(self) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("Could not flatten template '{}': {}", self.id, e);
                return OptionSet::new();
            }
        };

        let mut out = OptionSet::new();
        for (path, key) in FIELD_MAP {
            if let Some(value) = lookup_path(&tree, path) {
                if !is_unset(value) {
                    out.insert((*key).to_string(), value.clone());
                }
            }
        }
        out
    }

    /// Header option keys this template provides a default for.
    pub fn provided_fields(&self) -> Vec<String> {
        self.defaults().keys().cloned().collect()
    }
}

fn lookup_path<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(tree, |node, part| node.get(part))
}
