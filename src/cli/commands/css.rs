//! `ross css` - print the generated stylesheet.

use crate::cli::args::CssArgs;
use crate::css::Stylesheet;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// The css command implementation.
pub struct CssCommand {
    ctx: ProjectContext,
    args: CssArgs,
}

impl CssCommand {
    pub fn new(ctx: ProjectContext, args: CssArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for CssCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let engine = self.ctx.open_engine(ui)?;

        if ui.output_mode().is_verbose() {
            let options = engine.options()?;
            ui.message(&format!(
                "Template: {}",
                engine.active_template_id(&options)
            ));
        }

        let css = if self.args.no_cache {
            engine.render_css_uncached()?
        } else {
            engine.render_css()?
        };

        if self.args.tag {
            let tag = Stylesheet::style_tag(&engine.settings().style_id, &css);
            ui.data(tag.trim_end());
        } else {
            ui.data(css.trim_end());
        }

        Ok(CommandResult::success())
    }
}
