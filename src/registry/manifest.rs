//! Registry manifest definitions.
//!
//! The manifest fixes the declaration order that the template picker
//! enumerates, the category grouping, and the fallback template.

use serde::{Deserialize, Serialize};

/// Registry manifest defining available templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryManifest {
    /// Manifest version.
    #[serde(default = "default_manifest_version")]
    pub version: u32,

    /// Template used when the requested one is unknown.
    pub default_template: String,

    /// Template ids in declaration order.
    #[serde(default)]
    pub order: Vec<String>,

    /// Template categories.
    #[serde(default)]
    pub categories: Vec<Category>,
}

fn default_manifest_version() -> u32 {
    1
}

/// Template category for organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub name: String,

    /// Human-readable description.
    pub description: String,

    /// Templates in this category.
    #[serde(default)]
    pub templates: Vec<String>,
}

impl RegistryManifest {
    /// Get all template names from all categories.
    pub fn all_template_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| c.templates.iter().map(|s| s.as_str()))
            .collect()
    }

    /// Find the category a template belongs to.
    pub fn category_of(&self, id: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.templates.iter().any(|t| t == id))
    }
}
