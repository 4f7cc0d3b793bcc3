//! Templates command implementation.
//!
//! Provides `ross templates list`, `show` and `apply`.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::error::{Result, RossError};
use crate::resolve::value::as_text;
use crate::security::APPLY_TEMPLATE_ACTION;
use crate::ui::UserInterface;

use super::dispatcher::{token_or_mint, Command, CommandResult, ProjectContext};

/// Arguments for the templates command.
#[derive(Debug, Clone, Args)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: TemplatesSubcommand,
}

/// Templates subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum TemplatesSubcommand {
    /// List templates in picker order.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the defaults a template provides.
    Show {
        /// Template id.
        id: String,
    },
    /// Make a template the active header template.
    Apply {
        /// Template id.
        id: String,
        /// Clear stored header values the template provides.
        #[arg(long)]
        reset_fields: bool,
        /// Security token for ross_apply_template (minted locally if omitted).
        #[arg(long)]
        token: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct TemplateSummary<'a> {
    id: &'a str,
    title: &'a str,
    category: &'a str,
    description: &'a str,
    active: bool,
}

/// The templates command implementation.
pub struct TemplatesCommand {
    ctx: ProjectContext,
    args: TemplatesArgs,
}

impl TemplatesCommand {
    pub fn new(ctx: ProjectContext, args: TemplatesArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for TemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut engine = self.ctx.open_engine(ui)?;

        match &self.args.command {
            TemplatesSubcommand::List { json } => {
                let options = engine.options()?;
                let active = engine.active_template_id(&options).to_string();
                let summaries: Vec<TemplateSummary> = engine
                    .registry()
                    .list()
                    .into_iter()
                    .map(|t| TemplateSummary {
                        id: &t.id,
                        title: &t.title,
                        category: &t.category,
                        description: &t.description,
                        active: t.id == active,
                    })
                    .collect();

                if *json {
                    let out =
                        serde_json::to_string_pretty(&summaries).map_err(anyhow::Error::from)?;
                    ui.data(&out);
                    return Ok(CommandResult::success());
                }

                ui.show_header("Header templates");
                for t in &summaries {
                    let marker = if t.active { "*" } else { " " };
                    ui.data(&format!("{} {:<18} {:<10} {}", marker, t.id, t.category, t.title));
                }
            }
            TemplatesSubcommand::Show { id } => {
                let template =
                    engine
                        .registry()
                        .get(id)
                        .ok_or_else(|| RossError::UnknownTemplate {
                            name: id.clone(),
                        })?;

                ui.show_header(&format!("{} ({})", template.title, template.id));
                if !template.description.is_empty() {
                    ui.message(&template.description);
                }
                for (key, value) in template.defaults() {
                    let shown = as_text(&value).unwrap_or_else(|| value.to_string());
                    ui.data(&format!("{:<28} {}", key, shown));
                }
            }
            TemplatesSubcommand::Apply {
                id,
                reset_fields,
                token,
            } => {
                let token = token_or_mint(&engine, token.clone(), APPLY_TEMPLATE_ACTION, ui);
                let removed = engine.apply_template(id, Some(&token), *reset_fields)?;

                ui.success(&format!("Applied template {}", id));
                if !removed.is_empty() {
                    ui.message(&format!("Reset {} fields: {}", removed.len(), removed.join(", ")));
                }
            }
        }

        Ok(CommandResult::success())
    }
}
