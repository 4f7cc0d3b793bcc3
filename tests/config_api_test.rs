//! Integration tests for config module public API.

use ross_styles::config::{load_merged_config, validate, ConfigPaths, RossConfig};
use ross_styles::engine::StyleEngine;
use ross_styles::registry::Registry;
use std::fs;
use tempfile::TempDir;

fn project(config: &str, local: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    let ross_dir = temp.path().join(".ross");
    fs::create_dir_all(&ross_dir).unwrap();
    fs::write(ross_dir.join("config.yml"), config).unwrap();
    if let Some(local) = local {
        fs::write(ross_dir.join("config.local.yml"), local).unwrap();
    }
    temp
}

#[test]
fn public_api_is_accessible() {
    let config = RossConfig::default();
    let registry = Registry::builtin().unwrap();
    validate(&config, &registry).unwrap();
}

#[test]
fn full_config_workflow() {
    let temp = project(
        r#"
default_template: minimal-modern
data_dir: var/ross
cache:
  ttl_seconds: 120
security:
  secret: shared-secret
"#,
        Some("cache:\n  disk: false\n"),
    );

    let paths = ConfigPaths::discover(temp.path());
    assert_eq!(paths.all_existing().len(), 2);

    let config = load_merged_config(temp.path()).unwrap();
    validate(&config, &Registry::builtin().unwrap()).unwrap();
    assert_eq!(config.cache.ttl_seconds, 120);
    assert!(!config.cache.disk);

    let mut engine = StyleEngine::open(temp.path(), &config).unwrap();
    let options = engine.options().unwrap();
    assert_eq!(engine.active_template_id(&options), "minimal-modern");

    let token = engine.token("ross_save_general");
    engine
        .save_form(&format!("general[primary_color]=%23336699&_wpnonce={}", token))
        .unwrap();

    assert!(temp.path().join("var/ross/options/general.json").exists());
    // memory cache, nothing on disk
    assert!(!temp.path().join("var/ross/cache").exists());
    // configured secret, nothing generated
    assert!(!temp.path().join("var/ross/secret").exists());
}

#[test]
fn invalid_values_fail_validation() {
    let temp = project("default_template: neon-club\ncss:\n  style_id: \"1 bad\"\n", None);
    let config = load_merged_config(temp.path()).unwrap();
    let err = validate(&config, &Registry::builtin().unwrap()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("neon-club"));
    assert!(msg.contains("1 bad"));
}

#[test]
fn configured_secret_is_stable_across_opens() {
    let temp = project("security:\n  secret: abc\n", None);
    let config = load_merged_config(temp.path()).unwrap();

    let first = StyleEngine::open(temp.path(), &config).unwrap();
    let second = StyleEngine::open(temp.path(), &config).unwrap();
    assert_eq!(
        first.token("ross_save_header"),
        second.token("ross_save_header")
    );
}
