//! Persisted theme options.
//!
//! This module covers everything about stored option sets:
//! - Scopes in [`scope`]
//! - Option sets and defensive coercion in [`set`]
//! - The known field schema in [`schema`]
//! - Storage backends in [`store`]
//! - Admin form decoding in [`form`]
//! - Reset actions in [`reset`]
//!
//! # Example
//!
//! ```
//! use ross_styles::options::{MemoryStore, OptionStore, Scope, FormSubmission};
//!
//! let form = FormSubmission::parse("header[header_height]=90").unwrap();
//! let mut store = MemoryStore::new();
//! store.set_options(form.scope, form.options).unwrap();
//!
//! let header = store.get_options(Scope::Header).unwrap();
//! assert_eq!(header["header_height"], 90);
//! ```

pub mod form;
pub mod reset;
pub mod schema;
pub mod scope;
pub mod set;
pub mod store;

pub use form::{FormSubmission, TOKEN_FIELD};
pub use reset::ResetRequest;
pub use schema::{FieldDef, FieldKind};
pub use scope::Scope;
pub use set::{coerce_option_set, is_unset, OptionSet, ScopedOptions};
pub use store::{FileStore, MemoryStore, OptionStore};
