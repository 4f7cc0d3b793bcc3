//! Integration tests for the request pipeline on a real project directory.

use ross_styles::config::RossConfig;
use ross_styles::engine::StyleEngine;
use ross_styles::options::{OptionStore, ResetRequest, Scope};
use ross_styles::security::APPLY_TEMPLATE_ACTION;
use ross_styles::RossError;
use std::fs;
use tempfile::TempDir;

fn config() -> RossConfig {
    let mut config = RossConfig::default();
    config.security.secret = Some("integration-secret".into());
    config
}

fn open(temp: &TempDir) -> StyleEngine<ross_styles::options::FileStore> {
    StyleEngine::open(temp.path(), &config()).unwrap()
}

#[test]
fn write_then_read_never_serves_stale_css() {
    let temp = TempDir::new().unwrap();
    let reader = open(&temp);
    let mut writer = open(&temp);

    let before = reader.render_css().unwrap();
    assert_eq!(reader.cache().unwrap().stats().entries, 1);

    for color in ["%23aa0000", "%2300aa00", "%230000aa"] {
        let token = writer.token("ross_save_footer");
        writer
            .save_form(&format!(
                "footer[footer_bg_color]={}&_wpnonce={}",
                color, token
            ))
            .unwrap();

        let expected = color.replace("%23", "#");
        let css = reader.render_css().unwrap();
        assert!(css.contains(&expected), "missing {} in fresh CSS", expected);
        assert_ne!(css, before);
    }
}

#[test]
fn missing_token_rejected_before_mutation() {
    let temp = TempDir::new().unwrap();
    let mut engine = open(&temp);
    engine.render_css().unwrap();

    let err = engine
        .save_form("header[header_bg_color]=%23123456")
        .unwrap_err();
    assert!(matches!(err, RossError::MissingToken { .. }));

    assert!(!temp.path().join(".ross/data/options/header.json").exists());
    // rejected writes leave the cache alone
    assert_eq!(engine.cache().unwrap().stats().entries, 1);

    let err = engine
        .reset(&ResetRequest::scope(Scope::Header, Some("forged".into())))
        .unwrap_err();
    assert!(matches!(err, RossError::InvalidToken { .. }));

    let err = engine
        .apply_template("minimal-modern", None, true)
        .unwrap_err();
    assert!(matches!(err, RossError::MissingToken { .. }));
}

#[test]
fn creative_agency_accent_end_to_end() {
    let temp = TempDir::new().unwrap();
    let mut engine = open(&temp);

    let token = engine.token("ross_save_header");
    engine
        .save_form(&format!(
            "header[header_accent_color]=&header[sticky_header]=0&_wpnonce={}",
            token
        ))
        .unwrap();
    let apply = engine.token(APPLY_TEMPLATE_ACTION);
    engine
        .apply_template("creative-agency", Some(&apply), false)
        .unwrap();

    let options = engine.options().unwrap();
    assert_eq!(engine.active_template_id(&options), "creative-agency");

    let resolved = engine.resolve().unwrap();
    assert_eq!(resolved.header["header_accent_color"], "#E5C902");
    // explicit false beats the template's sticky default
    assert_eq!(resolved.header["sticky_header"], false);

    let css = engine.render_css().unwrap();
    assert!(css.contains("#E5C902"));
    assert!(!css.contains(".is-sticky"));
}

#[test]
fn malformed_store_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    let options_dir = temp.path().join(".ross/data/options");
    fs::create_dir_all(&options_dir).unwrap();
    fs::write(options_dir.join("header.json"), "{not json").unwrap();
    fs::write(options_dir.join("footer.json"), "[1, 2, 3]").unwrap();

    let engine = open(&temp);
    assert!(engine.store().get_options(Scope::Header).unwrap().is_empty());
    assert!(engine.store().get_options(Scope::Footer).unwrap().is_empty());

    let pristine = open(&TempDir::new().unwrap()).render_css().unwrap();
    assert_eq!(engine.render_css().unwrap(), pristine);
}

#[test]
fn section_reset_restores_template_default() {
    let temp = TempDir::new().unwrap();
    let mut engine = open(&temp);

    let token = engine.token("ross_save_header");
    engine
        .save_form(&format!(
            "header[sticky_header]=0&header[header_bg_color]=%23101010&_wpnonce={}",
            token
        ))
        .unwrap();
    assert!(!engine.render_css().unwrap().contains(".is-sticky"));

    let reset = engine.token("ross_reset_header");
    let removed = engine
        .reset(&ResetRequest::section(Scope::Header, "sticky", Some(reset)))
        .unwrap();
    assert_eq!(removed, ["sticky_header"]);

    // business-classic turns sticky on again; other sections are untouched
    let css = engine.render_css().unwrap();
    assert!(css.contains("#101010"));
    assert!(css.contains(".is-sticky"));
}

#[test]
fn disabled_cache_still_renders() {
    let temp = TempDir::new().unwrap();
    let mut config = config();
    config.cache.enabled = false;

    let engine = StyleEngine::open(temp.path(), &config).unwrap();
    assert!(engine.cache().is_none());
    assert_eq!(engine.render_css().unwrap(), engine.render_css_uncached().unwrap());
    assert_eq!(engine.invalidate(), 0);
}

#[test]
fn generated_secret_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let config = RossConfig::default();
    assert!(config.security.secret.is_none());

    let first = StyleEngine::open(temp.path(), &config).unwrap();
    let token = first.token("ross_save_header");

    let mut second = StyleEngine::open(temp.path(), &config).unwrap();
    assert_eq!(second.token("ross_save_header"), token);
    second
        .save_form(&format!("header[header_height]=90&_wpnonce={}", token))
        .unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(temp.path().join(".ross/data/secret"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

#[test]
fn hostile_background_options_stay_inside_the_style_tag() {
    let temp = TempDir::new().unwrap();
    let mut engine = open(&temp);

    let token = engine.token("ross_save_header");
    engine
        .save_form(&format!(
            "header[header_bg_type]=image\
             &header[header_bg_color]=%23202020\
             &header[header_bg_image]=%2Fa.jpg%5C\
             &header[header_bg_size]=cover%3C%2Fstyle%3E%3Cscript%3Ealert(1)%3C%2Fscript%3E\
             &_wpnonce={}",
            token
        ))
        .unwrap();

    let tag = engine.style_tag().unwrap();
    assert!(!tag.contains("<script>"));
    assert_eq!(tag.matches("</style>").count(), 1);
    assert!(!tag.contains("a.jpg\\"));
    // the color declaration survives its broken siblings
    assert!(tag.contains("#202020"));
}
