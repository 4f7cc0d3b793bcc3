//! Concern definitions.
//!
//! A concern is one independent, conditional group of generated rules
//! (header colors, sticky sizing, footer CTA, ...). Each is a pure
//! function of the resolved style set, so each can be tested alone.

use super::concerns::{
    AnimationConcern, AnnouncementConcern, BackgroundConcern, CopyrightConcern, CtaConcern,
    FooterConcern, FooterCtaConcern, GeneralConcern, HeaderColorsConcern, HeaderLayoutConcern,
    HeaderSpacingConcern, HoverEffectConcern, MenuConcern, MobileConcern, SocialIconsConcern,
    StickyConcern, TopbarConcern,
};
use super::rule::CssBlock;
use crate::resolve::{format_number, ResolvedStyleSet};

/// One independent CSS-generating rule group.
pub trait Concern: Send + Sync {
    /// Stable name, also used as the section comment.
    fn name(&self) -> &'static str;

    /// Rules for this concern. Missing or invalid options simply produce
    /// fewer rules.
    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock>;
}

/// Ordered list of concerns.
///
/// Order matters only where a later rule must win at equal specificity,
/// so registration order is emission order.
pub struct ConcernRegistry {
    concerns: Vec<Box<dyn Concern>>,
}

impl ConcernRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            concerns: Vec::new(),
        }
    }

    /// Create a registry with all built-in concerns.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(GeneralConcern));
        registry.register(Box::new(TopbarConcern));
        registry.register(Box::new(AnnouncementConcern));
        registry.register(Box::new(HeaderColorsConcern));
        registry.register(Box::new(HeaderLayoutConcern));
        registry.register(Box::new(HeaderSpacingConcern));
        registry.register(Box::new(BackgroundConcern));
        registry.register(Box::new(MenuConcern));
        registry.register(Box::new(HoverEffectConcern));
        registry.register(Box::new(CtaConcern));
        registry.register(Box::new(StickyConcern));
        registry.register(Box::new(MobileConcern));
        registry.register(Box::new(AnimationConcern));
        registry.register(Box::new(FooterConcern));
        registry.register(Box::new(FooterCtaConcern));
        registry.register(Box::new(SocialIconsConcern));
        registry.register(Box::new(CopyrightConcern));
        registry
    }

    /// Register a concern at the end.
    ///
    /// A concern with an already-registered name replaces it in place.
    pub fn register(&mut self, concern: Box<dyn Concern>) {
        match self
            .concerns
            .iter()
            .position(|c| c.name() == concern.name())
        {
            Some(i) => self.concerns[i] = concern,
            None => self.concerns.push(concern),
        }
    }

    /// Get a concern by name.
    pub fn get(&self, name: &str) -> Option<&dyn Concern> {
        self.concerns
            .iter()
            .find(|c| c.name() == name)
            .map(|c| c.as_ref())
    }

    /// Iterate in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Concern> {
        self.concerns.iter().map(|c| c.as_ref())
    }

    /// Get the number of registered concerns.
    pub fn len(&self) -> usize {
        self.concerns.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.concerns.is_empty()
    }
}

impl Default for ConcernRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Format a pixel length.
pub fn px(n: f64) -> String {
    format!("{}px", format_number(n))
}

/// Format a millisecond duration.
pub fn ms(n: f64) -> String {
    format!("{}ms", format_number(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::rule::CssRule;

    struct FixedConcern {
        name: &'static str,
        color: &'static str,
    }

    impl Concern for FixedConcern {
        fn name(&self) -> &'static str {
            self.name
        }
        fn rules(&self, _styles: &ResolvedStyleSet) -> Vec<CssBlock> {
            vec![CssRule::new(".x").decl("color", self.color).into()]
        }
    }

    #[test]
    fn builtins_have_unique_names() {
        let registry = ConcernRegistry::with_builtins();
        let mut names: Vec<_> = registry.iter().map(|c| c.name()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 17);
    }

    #[test]
    fn builtins_start_with_general_and_end_with_copyright() {
        let registry = ConcernRegistry::with_builtins();
        let names: Vec<_> = registry.iter().map(|c| c.name()).collect();
        assert_eq!(names.first(), Some(&"general"));
        assert_eq!(names.last(), Some(&"copyright"));
    }

    #[test]
    fn register_replaces_same_name_in_place() {
        let mut registry = ConcernRegistry::new();
        registry.register(Box::new(FixedConcern {
            name: "a",
            color: "red",
        }));
        registry.register(Box::new(FixedConcern {
            name: "b",
            color: "red",
        }));
        registry.register(Box::new(FixedConcern {
            name: "a",
            color: "blue",
        }));

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["a", "b"]);

        let blocks = registry
            .get("a")
            .unwrap()
            .rules(&ResolvedStyleSet::default());
        assert_eq!(blocks[0].as_rule().unwrap().get("color"), Some("blue"));
    }

    #[test]
    fn unit_helpers() {
        assert_eq!(px(12.0), "12px");
        assert_eq!(px(1.5), "1.5px");
        assert_eq!(ms(300.0), "300ms");
    }
}
