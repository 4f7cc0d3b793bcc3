//! Transition timing for interactive header elements.

use super::{HEADER, MENU_LINK};
use crate::css::concern::{ms, Concern};
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::ResolvedStyleSet;

/// Transition speed for header, menu links, and CTA.
pub struct AnimationConcern;

impl Concern for AnimationConcern {
    fn name(&self) -> &'static str {
        "animation"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        let Some(speed) = h.num("transition_speed").filter(|s| *s >= 0.0) else {
            return Vec::new();
        };

        let targets = [HEADER, MENU_LINK, ".site-header .header-cta"];
        let transition = if speed == 0.0 {
            "none".to_string()
        } else {
            let t = ms(speed);
            format!(
                "color {t} ease, background-color {t} ease, border-color {t} ease, box-shadow {t} ease"
            )
        };

        vec![CssRule::many(&targets).decl("transition", transition).into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::concerns::test_support::{find_rule, header};
    use serde_json::json;

    #[test]
    fn speed_applies_to_every_property() {
        let blocks = AnimationConcern.rules(&header(json!({"transition_speed": 250})));
        let rule = find_rule(&blocks, MENU_LINK).unwrap();
        assert_eq!(
            rule.get("transition"),
            Some("color 250ms ease, background-color 250ms ease, border-color 250ms ease, box-shadow 250ms ease")
        );
    }

    #[test]
    fn zero_disables_transitions() {
        let blocks = AnimationConcern.rules(&header(json!({"transition_speed": 0})));
        assert_eq!(find_rule(&blocks, HEADER).unwrap().get("transition"), Some("none"));
    }

    #[test]
    fn unset_speed_emits_nothing() {
        assert!(AnimationConcern.rules(&header(json!({}))).is_empty());
    }
}
