//! Header colors, layout, and spacing.

use super::{HEADER, HEADER_INNER, LOGO, MENU_LINK};
use crate::css::concern::{px, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::ResolvedStyleSet;

/// Container width used for a contained header when none is configured.
const DEFAULT_CONTAINER: f64 = 1200.0;

/// Text, accent, hover, border, and shadow.
pub struct HeaderColorsConcern;

fn shadow_value(choice: &str) -> Option<&'static str> {
    match choice {
        "none" => Some("none"),
        "small" => Some("0 1px 3px rgba(0, 0, 0, 0.08)"),
        "medium" => Some("0 4px 12px rgba(0, 0, 0, 0.12)"),
        "large" => Some("0 10px 30px rgba(0, 0, 0, 0.18)"),
        _ => None,
    }
}

impl Concern for HeaderColorsConcern {
    fn name(&self) -> &'static str {
        "header-colors"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        let text = h.color("header_text_color");

        let mut header = CssRule::new(HEADER);
        header.push_opt("color", text.clone());

        match (h.num("header_border_width"), h.color("header_border_color")) {
            (Some(w), _) if w <= 0.0 => header.push("border-bottom", "none"),
            (width, Some(color)) => header.push(
                "border-bottom",
                format!("{} solid {}", px(width.unwrap_or(1.0)), color),
            ),
            _ => {}
        }

        if let Some(shadow) = h.text("header_shadow").as_deref().and_then(shadow_value) {
            header.push("box-shadow", shadow);
        }

        let mut title = CssRule::many(&[
            ".site-header .site-title a",
            ".site-header .site-description",
            MENU_LINK,
        ]);
        title.push_opt("color", text);

        let mut active = CssRule::many(&[
            ".main-navigation .current-menu-item > a",
            ".main-navigation .current_page_item > a",
        ]);
        active.push_opt("color", h.color("header_accent_color"));

        let mut hover = CssRule::many(&[".main-navigation a:hover", ".main-navigation a:focus"]);
        hover.push_opt(
            "color",
            h.color("header_hover_color")
                .or_else(|| h.color("header_accent_color")),
        );

        let mut blocks: Vec<CssBlock> =
            vec![header.into(), title.into(), active.into(), hover.into()];

        if h.flag("header_search_enabled") == Some(false) {
            blocks.push(
                CssRule::new(".site-header .header-search")
                    .decl("display", "none")
                    .into(),
            );
        }

        blocks
    }
}

/// Logo and menu placement, header width.
pub struct HeaderLayoutConcern;

fn order_of(position: &str) -> Option<&'static str> {
    match position {
        "left" => Some("0"),
        "center" => Some("1"),
        "right" => Some("2"),
        _ => None,
    }
}

fn justify_of(position: &str) -> Option<&'static str> {
    match position {
        "left" => Some("flex-start"),
        "center" => Some("center"),
        "right" => Some("flex-end"),
        _ => None,
    }
}

impl Concern for HeaderLayoutConcern {
    fn name(&self) -> &'static str {
        "header-layout"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        let logo = h.text("logo_position");
        let menu = h.text("menu_position");

        let mut inner = CssRule::new(HEADER_INNER);
        if logo.is_some() || menu.is_some() {
            inner.push("display", "flex");
            inner.push("align-items", "center");
        }
        if logo.as_deref() == Some("center") && menu.as_deref() == Some("center") {
            inner.push("flex-direction", "column");
        }

        match h.text("header_width").as_deref() {
            Some("full") => {
                inner.push("max-width", "none");
                inner.push("width", "100%");
            }
            Some("contained") => {
                let width = styles
                    .general()
                    .num("container_width")
                    .filter(|w| *w > 0.0)
                    .unwrap_or(DEFAULT_CONTAINER);
                inner.push("max-width", px(width));
                inner.push("margin-left", "auto");
                inner.push("margin-right", "auto");
            }
            _ => {}
        }

        let mut branding = CssRule::new(".site-header .site-branding");
        branding.push_opt(
            "order",
            logo.as_deref().and_then(order_of).map(String::from),
        );

        let mut nav = CssRule::new(".site-header .main-navigation");
        nav.push_opt("order", menu.as_deref().and_then(order_of).map(String::from));
        if menu.as_deref() == Some("center") && logo.as_deref() != Some("center") {
            nav.push("flex", "1");
        }

        let mut menu_list = CssRule::new(".main-navigation ul");
        if let Some(justify) = menu.as_deref().and_then(justify_of) {
            menu_list.push("display", "flex");
            menu_list.push("justify-content", justify);
        }

        vec![inner.into(), branding.into(), nav.into(), menu_list.into()]
    }
}

/// Height, per-side padding, and logo size.
pub struct HeaderSpacingConcern;

impl Concern for HeaderSpacingConcern {
    fn name(&self) -> &'static str {
        "header-spacing"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        let non_negative = |field: &str| h.num(field).filter(|v| *v >= 0.0).map(px);

        let mut inner = CssRule::new(HEADER_INNER);
        inner.push_opt(
            "min-height",
            h.num("header_height").filter(|v| *v > 0.0).map(px),
        );
        inner.push_opt("padding-top", non_negative("header_padding_top"));
        inner.push_opt("padding-right", non_negative("header_padding_right"));
        inner.push_opt("padding-bottom", non_negative("header_padding_bottom"));
        inner.push_opt("padding-left", non_negative("header_padding_left"));

        let mut logo = CssRule::many(&LOGO);
        logo.push_opt(
            "max-height",
            h.num("logo_max_height").filter(|v| *v > 0.0).map(px),
        );
        logo.push_opt("padding", non_negative("logo_padding"));
        if !logo.is_empty() {
            logo.push("width", "auto");
        }

        vec![inner.into(), logo.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::concerns::test_support::{find_rule, header, styles};
    use serde_json::json;

    #[test]
    fn border_from_color_and_width() {
        let s = header(json!({"header_border_color": "#e5e7eb", "header_border_width": 2}));
        let blocks = HeaderColorsConcern.rules(&s);
        let rule = find_rule(&blocks, HEADER).unwrap();
        assert_eq!(rule.get("border-bottom"), Some("2px solid #e5e7eb"));
    }

    #[test]
    fn zero_border_width_removes_border() {
        let s = header(json!({"header_border_color": "#e5e7eb", "header_border_width": 0}));
        let blocks = HeaderColorsConcern.rules(&s);
        let rule = find_rule(&blocks, HEADER).unwrap();
        assert_eq!(rule.get("border-bottom"), Some("none"));
    }

    #[test]
    fn shadow_choices() {
        let s = header(json!({"header_shadow": "medium"}));
        let blocks = HeaderColorsConcern.rules(&s);
        assert_eq!(
            find_rule(&blocks, HEADER).unwrap().get("box-shadow"),
            Some("0 4px 12px rgba(0, 0, 0, 0.12)")
        );

        let s = header(json!({"header_shadow": "enormous"}));
        let blocks = HeaderColorsConcern.rules(&s);
        assert!(find_rule(&blocks, HEADER).unwrap().get("box-shadow").is_none());
    }

    #[test]
    fn hover_falls_back_to_accent() {
        let s = header(json!({"header_accent_color": "#E5C902"}));
        let blocks = HeaderColorsConcern.rules(&s);
        let hover = find_rule(&blocks, ".main-navigation a:hover").unwrap();
        assert_eq!(hover.get("color"), Some("#E5C902"));
    }

    #[test]
    fn disabled_search_is_hidden() {
        let s = header(json!({"header_search_enabled": false}));
        let blocks = HeaderColorsConcern.rules(&s);
        assert!(find_rule(&blocks, ".site-header .header-search").is_some());
    }

    #[test]
    fn contained_width_uses_general_container() {
        let s = styles(
            json!({"header_width": "contained"}),
            json!({}),
            json!({"container_width": 1140}),
        );
        let blocks = HeaderLayoutConcern.rules(&s);
        assert_eq!(
            find_rule(&blocks, HEADER_INNER).unwrap().get("max-width"),
            Some("1140px")
        );
    }

    #[test]
    fn contained_width_default() {
        let s = header(json!({"header_width": "contained"}));
        let blocks = HeaderLayoutConcern.rules(&s);
        assert_eq!(
            find_rule(&blocks, HEADER_INNER).unwrap().get("max-width"),
            Some("1200px")
        );
    }

    #[test]
    fn positions_map_to_order_and_justify() {
        let s = header(json!({"logo_position": "left", "menu_position": "right"}));
        let blocks = HeaderLayoutConcern.rules(&s);
        assert_eq!(
            find_rule(&blocks, ".site-header .site-branding")
                .unwrap()
                .get("order"),
            Some("0")
        );
        assert_eq!(
            find_rule(&blocks, ".main-navigation ul")
                .unwrap()
                .get("justify-content"),
            Some("flex-end")
        );
    }

    #[test]
    fn both_centered_stacks_vertically() {
        let s = header(json!({"logo_position": "center", "menu_position": "center"}));
        let blocks = HeaderLayoutConcern.rules(&s);
        assert_eq!(
            find_rule(&blocks, HEADER_INNER)
                .unwrap()
                .get("flex-direction"),
            Some("column")
        );
    }

    #[test]
    fn zero_padding_is_emitted() {
        let s = header(json!({"header_padding_top": 0, "header_padding_left": "24"}));
        let blocks = HeaderSpacingConcern.rules(&s);
        let inner = find_rule(&blocks, HEADER_INNER).unwrap();
        assert_eq!(inner.get("padding-top"), Some("0px"));
        assert_eq!(inner.get("padding-left"), Some("24px"));
        assert!(inner.get("padding-right").is_none());
    }

    #[test]
    fn logo_sizing() {
        let s = header(json!({"logo_max_height": 56, "logo_padding": 4}));
        let blocks = HeaderSpacingConcern.rules(&s);
        let logo = find_rule(&blocks, ".site-header .custom-logo").unwrap();
        assert_eq!(logo.get("max-height"), Some("56px"));
        assert_eq!(logo.get("padding"), Some("4px"));
        assert_eq!(logo.get("width"), Some("auto"));
    }
}
