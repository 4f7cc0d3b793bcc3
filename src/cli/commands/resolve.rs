//! `ross resolve <scope>` - show effective option values.

use crate::cli::args::ResolveArgs;
use crate::error::Result;
use crate::options::{is_unset, Scope};
use crate::resolve::value::as_text;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The resolve command implementation.
pub struct ResolveCommand {
    ctx: ProjectContext,
    args: ResolveArgs,
}

impl ResolveCommand {
    pub fn new(ctx: ProjectContext, args: ResolveArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = self.ctx.open_engine(ui)?;
        let options = engine.options()?;
        let resolved = engine.resolve_options(&options);
        let set = match self.args.scope {
            Scope::Header => &resolved.header,
            Scope::Footer => &resolved.footer,
            Scope::General => &resolved.general,
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(set).map_err(anyhow::Error::from)?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        if self.args.scope == Scope::Header {
            ui.show_header(&format!(
                "header (template: {})",
                engine.active_template_id(&options)
            ));
        } else {
            ui.show_header(self.args.scope.as_str());
        }

        if set.is_empty() {
            ui.message("No options set");
            return Ok(CommandResult::success());
        }

        let explicit = options.get(self.args.scope);
        let width = set.keys().map(|k| k.len()).max().unwrap_or(0);
        for (key, value) in set {
            let shown = as_text(value).unwrap_or_else(|| value.to_string());
            let origin = if explicit.get(key).map_or(true, is_unset) {
                "  (template)"
            } else {
                ""
            };
            ui.data(&format!("{:width$}  {}{}", key, shown, origin, width = width));
        }

        Ok(CommandResult::success())
    }
}
