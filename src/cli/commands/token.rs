//! `ross token <action>` - mint a security token.
//!
//! Lets scripts and admin forms obtain the token a save, reset, or
//! template-apply request must carry.

use crate::cli::args::TokenArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The token command implementation.
pub struct TokenCommand {
    ctx: ProjectContext,
    args: TokenArgs,
}

impl TokenCommand {
    pub fn new(ctx: ProjectContext, args: TokenArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for TokenCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = self.ctx.open_engine(ui)?;
        if !self.args.action.starts_with("ross_") {
            ui.warning(&format!(
                "'{}' is not an action this site checks",
                self.args.action
            ));
        }
        ui.data(&engine.token(&self.args.action));
        Ok(CommandResult::success())
    }
}
