//! Dynamic stylesheet composition.
//!
//! This module turns a [`ResolvedStyleSet`](crate::resolve::ResolvedStyleSet)
//! into CSS:
//! - Rule, block, and stylesheet types in [`rule`]
//! - Color parsing, contrast, and sanitization in [`color`]
//! - The [`Concern`] trait and its ordered registry in [`concern`]
//! - Built-in concerns in [`concerns`]
//! - The [`CssComposer`] driver in [`composer`]
//!
//! # Example
//!
//! ```
//! use ross_styles::css::CssComposer;
//! use ross_styles::options::{Scope, ScopedOptions};
//! use ross_styles::registry::Registry;
//! use ross_styles::resolve::OptionResolver;
//!
//! let registry = Registry::builtin().unwrap();
//! let options = ScopedOptions::new().with(Scope::Header, "header_bg_color", "#101010");
//! let styles = OptionResolver::new(registry.get("business-classic"), &options).resolve();
//!
//! let css = CssComposer::new().compose(&styles).to_css();
//! assert!(css.contains("background-color: #101010 !important;"));
//! ```

pub mod color;
pub mod composer;
pub mod concern;
pub mod concerns;
pub mod rule;

pub use color::{contrast_text_for, sanitize_color, Rgb};
pub use composer::CssComposer;
pub use concern::{Concern, ConcernRegistry};
pub use rule::{CssBlock, CssRule, Declaration, Stylesheet};
