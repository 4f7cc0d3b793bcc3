//! Known option fields for each scope.
//!
//! The schema types submitted form values and groups fields into the
//! sections that the reset action clears. Fields outside the schema are
//! still stored; they are simply kept as strings.

use serde_json::Value;

use super::scope::Scope;

/// How a field's submitted value is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Color,
    Number,
    Bool,
    Text,
    Choice,
    Url,
}

/// One known option field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
    pub section: &'static str,
}

const fn field(name: &'static str, kind: FieldKind, section: &'static str) -> FieldDef {
    FieldDef {
        name,
        kind,
        section,
    }
}

use FieldKind::{Bool, Choice, Color, Number, Text, Url};

static HEADER_FIELDS: &[FieldDef] = &[
    field("header_template", Text, "template"),
    field("logo_position", Choice, "layout"),
    field("menu_position", Choice, "layout"),
    field("header_width", Choice, "layout"),
    field("header_search_enabled", Bool, "layout"),
    field("header_bg_color", Color, "colors"),
    field("header_text_color", Color, "colors"),
    field("header_accent_color", Color, "colors"),
    field("header_hover_color", Color, "colors"),
    field("header_border_color", Color, "colors"),
    field("header_border_width", Number, "colors"),
    field("header_shadow", Choice, "colors"),
    field("menu_font_size", Number, "typography"),
    field("menu_font_weight", Number, "typography"),
    field("menu_letter_spacing", Number, "typography"),
    field("menu_text_transform", Choice, "typography"),
    field("menu_hover_bg_color", Color, "typography"),
    field("header_height", Number, "spacing"),
    field("header_padding_top", Number, "spacing"),
    field("header_padding_bottom", Number, "spacing"),
    field("header_padding_left", Number, "spacing"),
    field("header_padding_right", Number, "spacing"),
    field("logo_max_height", Number, "spacing"),
    field("logo_padding", Number, "spacing"),
    field("sticky_header", Bool, "sticky"),
    field("sticky_shrink", Bool, "sticky"),
    field("sticky_shrink_height", Number, "sticky"),
    field("sticky_bg_color", Color, "sticky"),
    field("cta_enabled", Bool, "cta"),
    field("cta_text", Text, "cta"),
    field("cta_url", Url, "cta"),
    field("cta_style", Choice, "cta"),
    field("cta_bg_color", Color, "cta"),
    field("cta_text_color", Color, "cta"),
    field("cta_hover_bg_color", Color, "cta"),
    field("cta_border_radius", Number, "cta"),
    field("header_bg_type", Choice, "background"),
    field("header_bg_image", Url, "background"),
    field("header_bg_gradient_start", Color, "background"),
    field("header_bg_gradient_end", Color, "background"),
    field("header_bg_gradient_angle", Number, "background"),
    field("header_bg_size", Choice, "background"),
    field("header_bg_position", Choice, "background"),
    field("header_bg_repeat", Choice, "background"),
    field("header_bg_opacity", Number, "background"),
    field("header_overlay_enabled", Bool, "overlay"),
    field("header_overlay_type", Choice, "overlay"),
    field("header_overlay_color", Color, "overlay"),
    field("header_overlay_gradient_start", Color, "overlay"),
    field("header_overlay_gradient_end", Color, "overlay"),
    field("header_overlay_gradient_angle", Number, "overlay"),
    field("header_overlay_image", Url, "overlay"),
    field("header_overlay_opacity", Number, "overlay"),
    field("mobile_breakpoint", Number, "mobile"),
    field("mobile_menu_style", Choice, "mobile"),
    field("mobile_menu_bg_color", Color, "mobile"),
    field("mobile_menu_text_color", Color, "mobile"),
    field("hamburger_color", Color, "mobile"),
    field("transition_speed", Number, "animation"),
    field("hover_effect", Choice, "animation"),
    field("topbar_enabled", Bool, "topbar"),
    field("topbar_text", Text, "topbar"),
    field("topbar_bg_color", Color, "topbar"),
    field("topbar_text_color", Color, "topbar"),
    field("topbar_font_size", Number, "topbar"),
    field("announcement_enabled", Bool, "announcement"),
    field("announcement_text", Text, "announcement"),
    field("announcement_bg_color", Color, "announcement"),
    field("announcement_text_color", Color, "announcement"),
    field("announcement_dismissible", Bool, "announcement"),
];

static FOOTER_FIELDS: &[FieldDef] = &[
    field("footer_bg_color", Color, "colors"),
    field("footer_text_color", Color, "colors"),
    field("footer_link_color", Color, "colors"),
    field("footer_link_hover_color", Color, "colors"),
    field("footer_heading_color", Color, "colors"),
    field("footer_columns", Number, "layout"),
    field("footer_padding_top", Number, "layout"),
    field("footer_padding_bottom", Number, "layout"),
    field("footer_cta_enabled", Bool, "cta"),
    field("footer_cta_text", Text, "cta"),
    field("footer_cta_bg_color", Color, "cta"),
    field("footer_cta_text_color", Color, "cta"),
    field("footer_cta_button_bg", Color, "cta"),
    field("footer_cta_button_text", Color, "cta"),
    field("social_enabled", Bool, "social"),
    field("social_icon_style", Choice, "social"),
    field("social_icon_size", Number, "social"),
    field("social_icon_color", Color, "social"),
    field("social_icon_bg", Color, "social"),
    field("social_icon_hover_color", Color, "social"),
    field("copyright_text", Text, "copyright"),
    field("copyright_bg_color", Color, "copyright"),
    field("copyright_text_color", Color, "copyright"),
    field("copyright_font_size", Number, "copyright"),
    field("copyright_alignment", Choice, "copyright"),
];

static GENERAL_FIELDS: &[FieldDef] = &[
    field("primary_color", Color, "colors"),
    field("secondary_color", Color, "colors"),
    field("body_text_color", Color, "colors"),
    field("body_bg_color", Color, "colors"),
    field("link_color", Color, "colors"),
    field("link_hover_color", Color, "colors"),
    field("body_font_size", Number, "typography"),
    field("body_line_height", Number, "typography"),
    field("heading_font_weight", Number, "typography"),
    field("container_width", Number, "layout"),
];

/// All known fields for a scope, in form order.
pub fn fields(scope: Scope) -> &'static [FieldDef] {
    match scope {
        Scope::Header => HEADER_FIELDS,
        Scope::Footer => FOOTER_FIELDS,
        Scope::General => GENERAL_FIELDS,
    }
}

/// Look up a field definition by name.
pub fn field_def(scope: Scope, name: &str) -> Option<&'static FieldDef> {
    fields(scope).iter().find(|f| f.name == name)
}

/// Section names for a scope, in first-seen order.
pub fn sections(scope: Scope) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for f in fields(scope) {
        if !out.contains(&f.section) {
            out.push(f.section);
        }
    }
    out
}

/// Field names belonging to a section, or `None` for an unknown section.
pub fn section_fields(scope: Scope, section: &str) -> Option<Vec<&'static str>> {
    let names: Vec<&'static str> = fields(scope)
        .iter()
        .filter(|f| f.section == section)
        .map(|f| f.name)
        .collect();
    if names.is_empty() {
        None
    } else {
        Some(names)
    }
}

/// Parse a truthy/falsy string the way checkbox posts arrive.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// Type a raw submitted string according to the field's kind.
///
/// Empty strings stay empty strings so the resolver treats them as unset.
pub fn typed_value(def: Option<&FieldDef>, raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }
    match def.map(|d| d.kind) {
        Some(FieldKind::Bool) => match parse_flag(raw) {
            Some(b) => Value::Bool(b),
            None => Value::String(raw.to_string()),
        },
        Some(FieldKind::Number) => parse_number(raw).unwrap_or_else(|| Value::String(raw.to_string())),
        _ => Value::String(raw.to_string()),
    }
}

fn parse_number(raw: &str) -> Option<Value> {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(Value::from(i));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_scope_has_fields() {
        for scope in Scope::ALL {
            assert!(!fields(scope).is_empty(), "{} has no fields", scope);
        }
    }

    #[test]
    fn field_names_are_unique_per_scope() {
        for scope in Scope::ALL {
            let names: Vec<_> = fields(scope).iter().map(|f| f.name).collect();
            let mut deduped = names.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(names.len(), deduped.len(), "duplicate field in {}", scope);
        }
    }

    #[test]
    fn header_sections_are_ordered() {
        let sections = sections(Scope::Header);
        assert_eq!(sections[0], "template");
        assert!(sections.contains(&"overlay"));
        assert!(sections.contains(&"announcement"));
    }

    #[test]
    fn section_fields_lists_members() {
        let sticky = section_fields(Scope::Header, "sticky").unwrap();
        assert_eq!(
            sticky,
            vec![
                "sticky_header",
                "sticky_shrink",
                "sticky_shrink_height",
                "sticky_bg_color"
            ]
        );
        assert!(section_fields(Scope::Header, "nope").is_none());
    }

    #[test]
    fn parse_flag_accepts_checkbox_values() {
        assert_eq!(parse_flag("on"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("False"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn typed_value_by_kind() {
        let bool_def = field_def(Scope::Header, "sticky_header");
        let num_def = field_def(Scope::Header, "header_height");
        let color_def = field_def(Scope::Header, "header_bg_color");

        assert_eq!(typed_value(bool_def, "0"), json!(false));
        assert_eq!(typed_value(num_def, "80"), json!(80));
        assert_eq!(typed_value(num_def, "0.5"), json!(0.5));
        assert_eq!(typed_value(num_def, "tall"), json!("tall"));
        assert_eq!(typed_value(color_def, "#fff"), json!("#fff"));
        assert_eq!(typed_value(None, "anything"), json!("anything"));
    }

    #[test]
    fn typed_value_keeps_empty_strings() {
        let num_def = field_def(Scope::Header, "header_height");
        assert_eq!(typed_value(num_def, ""), json!(""));
    }
}
