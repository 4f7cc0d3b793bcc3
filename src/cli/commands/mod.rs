//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that touch the site
//! open the engine through a shared [`ProjectContext`], so config
//! loading and validation warnings behave the same everywhere.

pub mod cache;
pub mod completions;
pub mod css;
pub mod dispatcher;
pub mod options;
pub mod resolve;
pub mod templates;
pub mod token;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, ProjectContext};
