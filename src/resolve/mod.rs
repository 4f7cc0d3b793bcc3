//! Option resolution.
//!
//! Merges a template's defaults with stored option sets into a
//! [`ResolvedStyleSet`], the sole input of the CSS composer.
//!
//! # Example
//!
//! ```
//! use ross_styles::options::{Scope, ScopedOptions};
//! use ross_styles::registry::Registry;
//! use ross_styles::resolve::OptionResolver;
//!
//! let registry = Registry::builtin().unwrap();
//! let template = registry.get("creative-agency");
//! let options = ScopedOptions::new().with(Scope::Header, "header_accent_color", "");
//!
//! let resolver = OptionResolver::new(template, &options);
//! assert_eq!(resolver.str_or("header", "header_accent_color", "#000"), "#E5C902");
//! ```

pub mod resolver;
pub mod styles;
pub mod value;

pub use resolver::OptionResolver;
pub use styles::{ResolvedStyleSet, ScopeView};
pub use value::format_number;
