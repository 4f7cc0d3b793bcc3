//! Template registry.
//!
//! Header templates are compiled into the binary and never change at
//! runtime. The registry hands them out by id and enumerates them in the
//! manifest's declaration order for the template picker.
//!
//! # Example
//!
//! ```
//! use ross_styles::registry::Registry;
//!
//! let registry = Registry::builtin().unwrap();
//! let creative = registry.get("creative-agency").unwrap();
//! assert_eq!(creative.design.accent.as_deref(), Some("#E5C902"));
//!
//! // Unknown ids fall back to the manifest default
//! let fallback = registry.get_or_default("does-not-exist");
//! assert_eq!(fallback.id, registry.default_id());
//! ```

pub mod builtin;
pub mod manifest;
pub mod template;

use std::collections::HashMap;

use crate::error::{Result, RossError};

pub use manifest::{Category, RegistryManifest};
pub use template::{HeaderWidth, Position, Template};

/// Immutable set of header templates.
#[derive(Debug, Clone)]
pub struct Registry {
    templates: HashMap<String, Template>,
    manifest: RegistryManifest,
}

impl Registry {
    /// Load the embedded templates.
    pub fn builtin() -> Result<Self> {
        Self::from_parts(builtin::load_templates()?, builtin::load_manifest()?)
    }

    /// Build a registry from already-loaded parts.
    ///
    /// The manifest default must name a loaded template.
    pub fn from_parts(
        templates: HashMap<String, Template>,
        manifest: RegistryManifest,
    ) -> Result<Self> {
        if !templates.contains_key(&manifest.default_template) {
            return Err(RossError::UnknownTemplate {
                name: manifest.default_template.clone(),
            });
        }
        for id in &manifest.order {
            if !templates.contains_key(id) {
                tracing::warn!("Manifest order lists unknown template '{}'", id);
            }
        }
        Ok(Self {
            templates,
            manifest,
        })
    }

    /// Get a template by id.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    /// Get a template by id, falling back to the default template.
    pub fn get_or_default(&self, id: &str) -> &Template {
        match self.templates.get(id) {
            Some(t) => t,
            None => {
                tracing::warn!(
                    "Unknown template '{}', using '{}'",
                    id,
                    self.manifest.default_template
                );
                self.default_template()
            }
        }
    }

    /// The fallback template.
    pub fn default_template(&self) -> &Template {
        // from_parts guarantees the default exists
        &self.templates[&self.manifest.default_template]
    }

    /// Id of the fallback template.
    pub fn default_id(&self) -> &str {
        &self.manifest.default_template
    }

    /// All templates in declaration order.
    ///
    /// Templates missing from the manifest order are appended sorted by id.
    pub fn list(&self) -> Vec<&Template> {
        let mut out: Vec<&Template> = self
            .manifest
            .order
            .iter()
            .filter_map(|id| self.templates.get(id))
            .collect();

        let mut extra: Vec<&Template> = self
            .templates
            .values()
            .filter(|t| !self.manifest.order.contains(&t.id))
            .collect();
        extra.sort_by(|a, b| a.id.cmp(&b.id));
        out.extend(extra);
        out
    }

    /// Get the manifest.
    pub fn manifest(&self) -> &RegistryManifest {
        &self.manifest
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry holds no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
