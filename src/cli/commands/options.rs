//! Options command implementation.
//!
//! Provides `ross options get`, `save` and `reset`. Save takes the same
//! urlencoded body the admin settings form posts.

use std::fs;

use clap::{Args, Subcommand};

use crate::error::Result;
use crate::options::{FormSubmission, OptionStore, ResetRequest, Scope};
use crate::resolve::value::as_text;
use crate::ui::UserInterface;

use super::dispatcher::{token_or_mint, Command, CommandResult, ProjectContext};

/// Arguments for the options command.
#[derive(Debug, Clone, Args)]
pub struct OptionsArgs {
    #[command(subcommand)]
    pub command: OptionsSubcommand,
}

/// Options subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum OptionsSubcommand {
    /// Show the stored options for a scope.
    Get {
        /// Scope (header, footer, general).
        scope: Scope,
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Save a settings form body, replacing the scope it names.
    Save {
        /// Urlencoded body, or @path to read it from a file.
        body: String,
        /// Security token, used when the body carries none (minted locally if omitted).
        #[arg(long)]
        token: Option<String>,
    },
    /// Reset a scope, or one section of it.
    Reset {
        /// Scope (header, footer, general).
        scope: Scope,
        /// Only reset this section's fields.
        #[arg(long)]
        section: Option<String>,
        /// Security token for ross_reset_<scope> (minted locally if omitted).
        #[arg(long)]
        token: Option<String>,
        /// Don't prompt for confirmation.
        #[arg(short, long)]
        force: bool,
    },
}

/// The options command implementation.
pub struct OptionsCommand {
    ctx: ProjectContext,
    args: OptionsArgs,
}

impl OptionsCommand {
    pub fn new(ctx: ProjectContext, args: OptionsArgs) -> Self {
        Self { ctx, args }
    }
}

fn read_body(arg: &str) -> Result<String> {
    match arg.strip_prefix('@') {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(arg.to_string()),
    }
}

impl Command for OptionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut engine = self.ctx.open_engine(ui)?;

        match &self.args.command {
            OptionsSubcommand::Get { scope, json } => {
                let stored = engine.store().get_options(*scope)?;
                if *json {
                    let out =
                        serde_json::to_string_pretty(&stored).map_err(anyhow::Error::from)?;
                    ui.data(&out);
                    return Ok(CommandResult::success());
                }

                ui.show_header(scope.as_str());
                if stored.is_empty() {
                    ui.message("No options stored");
                }
                for (key, value) in &stored {
                    let shown = as_text(value).unwrap_or_else(|| value.to_string());
                    ui.data(&format!("{:<28} {}", key, shown));
                }
            }
            OptionsSubcommand::Save { body, token } => {
                let form = FormSubmission::parse(&read_body(body)?)?;
                let token = token_or_mint(
                    &engine,
                    form.token.clone().or_else(|| token.clone()),
                    &form.scope.save_action(),
                    ui,
                );
                let count = form.options.len();
                engine.save_options(form.scope, form.options, Some(&token))?;
                ui.success(&format!("Saved {} {} options", count, form.scope));
            }
            OptionsSubcommand::Reset {
                scope,
                section,
                token,
                force,
            } => {
                let target = match section {
                    Some(section) => format!("the {} section of {}", section, scope),
                    None => format!("all {} options", scope),
                };
                if !force && ui.is_interactive() && !ui.confirm(&format!("Reset {}?", target), false)?
                {
                    ui.message("Cancelled");
                    return Ok(CommandResult::success());
                }

                let token = token_or_mint(&engine, token.clone(), &scope.reset_action(), ui);
                let request = match section {
                    Some(section) => ResetRequest::section(*scope, section.clone(), Some(token)),
                    None => ResetRequest::scope(*scope, Some(token)),
                };
                let removed = engine.reset(&request)?;
                ui.success(&format!("Reset {} ({} fields removed)", target, removed.len()));
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RossError;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn run(temp: &TempDir, command: OptionsSubcommand, ui: &mut MockUI) -> Result<CommandResult> {
        OptionsCommand::new(
            ProjectContext::new(temp.path(), None),
            OptionsArgs { command },
        )
        .execute(ui)
    }

    fn save(temp: &TempDir, body: &str) {
        let mut ui = MockUI::new();
        run(
            temp,
            OptionsSubcommand::Save {
                body: body.into(),
                token: None,
            },
            &mut ui,
        )
        .unwrap();
    }

    fn get_json(temp: &TempDir, scope: Scope) -> serde_json::Value {
        let mut ui = MockUI::new();
        run(temp, OptionsSubcommand::Get { scope, json: true }, &mut ui).unwrap();
        serde_json::from_str(&ui.data_output()[0]).unwrap()
    }

    #[test]
    fn save_then_get() {
        let temp = TempDir::new().unwrap();
        save(&temp, "footer[footer_columns]=3&footer[footer_bg_color]=%23222222");

        let footer = get_json(&temp, Scope::Footer);
        assert_eq!(footer["footer_bg_color"], "#222222");
        assert_eq!(footer["footer_columns"], 3);
    }

    #[test]
    fn save_from_file() {
        let temp = TempDir::new().unwrap();
        let body = temp.path().join("body.txt");
        fs::write(&body, "general[primary_color]=%23336699\n").unwrap();
        save(&temp, &format!("@{}", body.display()));

        assert_eq!(get_json(&temp, Scope::General)["primary_color"], "#336699");
    }

    #[test]
    fn bad_token_in_body_is_rejected() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let err = run(
            &temp,
            OptionsSubcommand::Save {
                body: "header[header_height]=90&_wpnonce=forged".into(),
                token: None,
            },
            &mut ui,
        )
        .unwrap_err();

        assert!(matches!(err, RossError::InvalidToken { .. }));
        assert!(get_json(&temp, Scope::Header).as_object().unwrap().is_empty());
    }

    #[test]
    fn reset_section_with_force() {
        let temp = TempDir::new().unwrap();
        save(
            &temp,
            "header[sticky_header]=1&header[header_bg_color]=%23000000",
        );

        let mut ui = MockUI::new();
        ui.set_interactive(true);
        run(
            &temp,
            OptionsSubcommand::Reset {
                scope: Scope::Header,
                section: Some("sticky".into()),
                token: None,
                force: true,
            },
            &mut ui,
        )
        .unwrap();

        let header = get_json(&temp, Scope::Header);
        assert!(header.get("sticky_header").is_none());
        assert_eq!(header["header_bg_color"], "#000000");
    }

    #[test]
    fn reset_declined_keeps_options() {
        let temp = TempDir::new().unwrap();
        save(&temp, "footer[footer_columns]=2");

        let mut ui = MockUI::new();
        ui.set_confirm_response(false);
        run(
            &temp,
            OptionsSubcommand::Reset {
                scope: Scope::Footer,
                section: None,
                token: None,
                force: false,
            },
            &mut ui,
        )
        .unwrap();

        assert!(ui.has_message("Cancelled"));
        assert_eq!(get_json(&temp, Scope::Footer)["footer_columns"], 2);
    }

    #[test]
    fn verbose_save_reports_minted_token() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        run(
            &temp,
            OptionsSubcommand::Save {
                body: "footer[footer_columns]=2".into(),
                token: None,
            },
            &mut ui,
        )
        .unwrap();
        assert!(ui.has_message("minted one for ross_save_footer"));
    }

    #[test]
    fn supplied_token_is_not_reported_as_minted() {
        let temp = TempDir::new().unwrap();
        let token = ProjectContext::new(temp.path(), None)
            .open_engine(&mut MockUI::new())
            .unwrap()
            .token("ross_save_footer");

        let mut ui = MockUI::with_mode(OutputMode::Verbose);
        run(
            &temp,
            OptionsSubcommand::Save {
                body: format!("footer[footer_columns]=2&_wpnonce={}", token),
                token: None,
            },
            &mut ui,
        )
        .unwrap();
        assert!(!ui.has_message("minted"));
    }

    #[test]
    fn reset_unknown_section() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let err = run(
            &temp,
            OptionsSubcommand::Reset {
                scope: Scope::Footer,
                section: Some("sparkles".into()),
                token: None,
                force: true,
            },
            &mut ui,
        )
        .unwrap_err();
        assert!(matches!(err, RossError::UnknownSection { .. }));
    }
}
