//! Header background compositing.
//!
//! The header background is a stack of `background-image` layers listed
//! top-first, as CSS draws them:
//!
//! ```text
//! [overlay layers] [tint layer] [base layer]
//! ```
//!
//! - base: the image (`type=image`) or gradient (`type=gradient`)
//! - tint: for images with opacity < 1, a flat wash of the background
//!   color at `1 - opacity` so the image reads faded
//! - overlay: optional color / gradient / image laid over everything
//!
//! A solid `background-color` is always emitted when a color resolves, so
//! color changes stay visible with no image or gradient set.
//!
//! Image URLs and the size/position/repeat fields are free text in the
//! store. A value that could break out of its declaration drops that
//! declaration only.

use std::sync::LazyLock;

use regex::Regex;

use super::HEADER;
use crate::css::color::{hex_to_rgba, with_alpha, Rgb};
use crate::css::concern::Concern;
use crate::css::rule::{CssBlock, CssRule};
use crate::resolve::{format_number, ResolvedStyleSet, ScopeView};

const DEFAULT_GRADIENT_ANGLE: f64 = 135.0;
const DEFAULT_OVERLAY_ANGLE: f64 = 180.0;
const DEFAULT_OVERLAY_OPACITY: f64 = 0.5;

const REPEAT_VALUES: [&str; 6] = ["repeat", "no-repeat", "repeat-x", "repeat-y", "space", "round"];

/// Keywords, lengths, and percentages: `cover`, `50% 20%`, `100px auto`.
static LAYER_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9%. -]+$").expect("layer value regex must compile")
});

/// One `background-image` layer with its per-layer properties.
///
/// `None` marks a stored value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundLayer {
    pub image: String,
    pub size: Option<String>,
    pub position: Option<String>,
    pub repeat: Option<String>,
    pub kind: LayerKind,
}

/// Where a layer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Overlay,
    Tint,
    Base,
}

impl BackgroundLayer {
    fn flat(image: String, kind: LayerKind) -> Self {
        Self {
            image,
            size: Some("cover".to_string()),
            position: Some("center".to_string()),
            repeat: Some("no-repeat".to_string()),
            kind,
        }
    }
}

/// Quote an image URL, or refuse it when it can't be made safe.
fn url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty()
        || raw
            .chars()
            .any(|c| c.is_control() || matches!(c, '\\' | '<' | '>'))
    {
        tracing::debug!("Dropping unusable image URL {:?}", raw);
        return None;
    }

    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => escaped.push_str("%22"),
            '\'' => escaped.push_str("%27"),
            '(' => escaped.push_str("%28"),
            ')' => escaped.push_str("%29"),
            ' ' => escaped.push_str("%20"),
            c => escaped.push(c),
        }
    }
    Some(format!("url(\"{}\")", escaped))
}

/// A size or position value, the fallback when unset.
fn layer_value(h: &ScopeView<'_>, field: &str, fallback: &str) -> Option<String> {
    let Some(raw) = h.text(field) else {
        return Some(fallback.to_string());
    };
    let value = raw.trim().to_ascii_lowercase();
    if LAYER_VALUE_REGEX.is_match(&value) {
        Some(value)
    } else {
        tracing::debug!("Dropping {} value {:?}", field, raw);
        None
    }
}

fn repeat_value(h: &ScopeView<'_>) -> Option<String> {
    let Some(raw) = h.text("header_bg_repeat") else {
        return Some("no-repeat".to_string());
    };
    let value = raw.trim().to_ascii_lowercase();
    REPEAT_VALUES.contains(&value.as_str()).then_some(value)
}

fn solid(color: &str) -> String {
    format!("linear-gradient({0}, {0})", color)
}

fn gradient(angle: f64, start: &str, end: &str) -> String {
    format!("linear-gradient({}deg, {}, {})", format_number(angle), start, end)
}

fn opacity_of(view: &ScopeView<'_>, field: &str, fallback: f64) -> f64 {
    view.num(field).unwrap_or(fallback).clamp(0.0, 1.0)
}

fn base_layer(h: &ScopeView<'_>, bg_type: &str, opacity: f64) -> Option<BackgroundLayer> {
    match bg_type {
        "image" => {
            let image = url(&h.text("header_bg_image")?)?;
            Some(BackgroundLayer {
                image,
                size: layer_value(h, "header_bg_size", "cover"),
                position: layer_value(h, "header_bg_position", "center center"),
                repeat: repeat_value(h),
                kind: LayerKind::Base,
            })
        }
        "gradient" => {
            let start = h
                .color("header_bg_gradient_start")
                .or_else(|| h.color("header_bg_color"))?;
            let end = h
                .color("header_bg_gradient_end")
                .unwrap_or_else(|| start.clone());
            let angle = h.num_or("header_bg_gradient_angle", DEFAULT_GRADIENT_ANGLE);
            let (start, end) = if opacity < 1.0 {
                (with_alpha(&start, opacity), with_alpha(&end, opacity))
            } else {
                (start, end)
            };
            Some(BackgroundLayer::flat(
                gradient(angle, &start, &end),
                LayerKind::Base,
            ))
        }
        _ => None,
    }
}

fn overlay_layers(h: &ScopeView<'_>) -> Vec<BackgroundLayer> {
    if !h.flag_or("header_overlay_enabled", false) {
        return Vec::new();
    }

    let opacity = opacity_of(h, "header_overlay_opacity", DEFAULT_OVERLAY_OPACITY);
    let layer = match h.text_or("header_overlay_type", "color").as_str() {
        "color" => h
            .color("header_overlay_color")
            .and_then(|c| hex_to_rgba(&c, opacity))
            .map(|c| BackgroundLayer::flat(solid(&c), LayerKind::Overlay)),
        "gradient" => {
            let start = h
                .color("header_overlay_gradient_start")
                .and_then(|c| hex_to_rgba(&c, opacity));
            let end = h
                .color("header_overlay_gradient_end")
                .and_then(|c| hex_to_rgba(&c, opacity));
            match (start, end) {
                (Some(s), Some(e)) => {
                    let angle = h.num_or("header_overlay_gradient_angle", DEFAULT_OVERLAY_ANGLE);
                    Some(BackgroundLayer::flat(
                        gradient(angle, &s, &e),
                        LayerKind::Overlay,
                    ))
                }
                _ => None,
            }
        }
        "image" => h
            .text("header_overlay_image")
            .and_then(|img| url(&img))
            .map(|img| BackgroundLayer::flat(img, LayerKind::Overlay)),
        _ => None,
    };

    layer.into_iter().collect()
}

/// Comma list of one property across layers; any invalid layer drops it.
fn join(
    layers: &[BackgroundLayer],
    field: impl Fn(&BackgroundLayer) -> Option<&str>,
) -> Option<String> {
    layers
        .iter()
        .map(field)
        .collect::<Option<Vec<_>>>()
        .map(|values| values.join(", "))
}

/// Compute the header's background layers, top-first.
pub fn background_layers(styles: &ResolvedStyleSet) -> Vec<BackgroundLayer> {
    let h = styles.header();
    let bg_type = h.text_or("header_bg_type", "color");
    let opacity = opacity_of(&h, "header_bg_opacity", 1.0);

    let base = base_layer(&h, &bg_type, opacity);

    let tint = match (&base, bg_type.as_str()) {
        (Some(_), "image") if opacity < 1.0 => {
            let wash = h
                .color("header_bg_color")
                .and_then(|c| Rgb::parse_hex(&c))
                .unwrap_or(Rgb::new(255, 255, 255));
            Some(BackgroundLayer::flat(
                solid(&wash.to_rgba(1.0 - opacity)),
                LayerKind::Tint,
            ))
        }
        _ => None,
    };

    let mut layers = overlay_layers(&h);
    layers.extend(tint);
    layers.extend(base);
    layers
}

/// Solid color, layered images, and overlay.
pub struct BackgroundConcern;

impl Concern for BackgroundConcern {
    fn name(&self) -> &'static str {
        "background"
    }

    fn rules(&self, styles: &ResolvedStyleSet) -> Vec<CssBlock> {
        let h = styles.header();
        let bg_type = h.text_or("header_bg_type", "color");
        let opacity = opacity_of(&h, "header_bg_opacity", 1.0);

        let mut rule = CssRule::new(HEADER);

        if let Some(color) = h.color("header_bg_color") {
            let color = if bg_type == "color" && opacity < 1.0 {
                with_alpha(&color, opacity)
            } else {
                color
            };
            rule.push("background-color", color);
        }

        let layers = background_layers(styles);
        if !layers.is_empty() {
            rule.push_opt("background-image", join(&layers, |l| Some(l.image.as_str())));
            rule.push_opt("background-size", join(&layers, |l| l.size.as_deref()));
            rule.push_opt(
                "background-position",
                join(&layers, |l| l.position.as_deref()),
            );
            rule.push_opt("background-repeat", join(&layers, |l| l.repeat.as_deref()));
        }

        vec![rule.into()]
    }
}
