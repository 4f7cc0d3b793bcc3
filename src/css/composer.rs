//! Stylesheet composition.

use super::concern::ConcernRegistry;
use super::rule::Stylesheet;
use crate::resolve::ResolvedStyleSet;

/// Runs every registered concern over a resolved style set.
pub struct CssComposer {
    registry: ConcernRegistry,
}

impl CssComposer {
    /// Composer with the built-in concerns.
    pub fn new() -> Self {
        Self::with_registry(ConcernRegistry::with_builtins())
    }

    /// Composer with a custom concern list.
    pub fn with_registry(registry: ConcernRegistry) -> Self {
        Self { registry }
    }

    /// The concerns in emission order.
    pub fn registry(&self) -> &ConcernRegistry {
        &self.registry
    }

    /// Build the stylesheet. Concerns that produce nothing are omitted.
    pub fn compose(&self, styles: &ResolvedStyleSet) -> Stylesheet {
        let mut sheet = Stylesheet::new();
        for concern in self.registry.iter() {
            sheet.push_section(concern.name(), concern.rules(styles));
        }
        tracing::debug!(
            "Composed {} of {} concerns for template {:?}",
            sheet.sections().len(),
            self.registry.len(),
            styles.template_id
        );
        sheet
    }
}

impl Default for CssComposer {
    fn default() -> Self {
        Self::new()
    }
}
