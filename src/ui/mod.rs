//! User interface abstraction.
//!
//! Commands never print directly. They talk to a [`UserInterface`], which
//! is a styled terminal when stdout is a TTY, plain line output otherwise,
//! and a recording [`MockUI`] in tests.

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, RossTheme};

use crate::error::Result;

/// Everything a command may show or ask.
pub trait UserInterface {
    /// Current verbosity.
    fn output_mode(&self) -> OutputMode;

    /// Informational line. Suppressed in silent mode.
    fn message(&mut self, msg: &str);

    /// Command payload such as CSS or JSON.
    ///
    /// Always written to stdout so it can be piped, whatever the mode.
    fn data(&mut self, text: &str);

    fn success(&mut self, msg: &str);

    fn warning(&mut self, msg: &str);

    /// Errors are shown in every mode.
    fn error(&mut self, msg: &str);

    /// Section title.
    fn show_header(&mut self, title: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;

    /// Whether a person can answer questions.
    fn is_interactive(&self) -> bool;
}
