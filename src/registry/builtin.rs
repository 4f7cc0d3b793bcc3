//! Built-in templates embedded at compile time.

use crate::error::{Result, RossError};
use crate::registry::manifest::RegistryManifest;
use crate::registry::template::Template;
use include_dir::{include_dir, Dir};
use std::collections::HashMap;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Load the built-in registry manifest.
pub fn load_manifest() -> Result<RegistryManifest> {
    let manifest_file =
        TEMPLATES_DIR
            .get_file("registry.yml")
            .ok_or_else(|| RossError::ConfigParseError {
                path: "templates/registry.yml".into(),
                message: "file missing from build".to_string(),
            })?;

    let content = manifest_file
        .contents_utf8()
        .ok_or_else(|| RossError::ConfigParseError {
            path: "templates/registry.yml".into(),
            message: "Invalid UTF-8".to_string(),
        })?;

    serde_yaml::from_str(content).map_err(|e| RossError::ConfigParseError {
        path: "templates/registry.yml".into(),
        message: e.to_string(),
    })
}

/// Load all built-in header templates keyed by id.
pub fn load_templates() -> Result<HashMap<String, Template>> {
    let mut templates = HashMap::new();

    let Some(header) = TEMPLATES_DIR.get_dir("header") else {
        return Ok(templates);
    };

    for file in header.files() {
        let is_yaml = file
            .path()
            .extension()
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if !is_yaml {
            continue;
        }

        let Some(content) = file.contents_utf8() else {
            continue;
        };

        let template: Template =
            serde_yaml::from_str(content).map_err(|e| RossError::ConfigParseError {
                path: file.path().to_path_buf(),
                message: e.to_string(),
            })?;
        templates.insert(template.id.clone(), template);
    }

    Ok(templates)
}
