//! Cache command implementation.
//!
//! Provides `ross cache clear` and `ross cache stats`.

use clap::{Args, Subcommand};

use crate::cache::{format_bytes, format_duration};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, ProjectContext};

/// Arguments for the cache command.
#[derive(Debug, Clone, Args)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

/// Cache subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CacheSubcommand {
    /// Drop every compiled stylesheet.
    Clear {
        /// Don't prompt for confirmation.
        #[arg(short, long)]
        force: bool,
    },
    /// Show cache statistics.
    Stats,
}

/// The cache command implementation.
pub struct CacheCommand {
    ctx: ProjectContext,
    args: CacheArgs,
}

impl CacheCommand {
    pub fn new(ctx: ProjectContext, args: CacheArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for CacheCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.load_config(ui)?;
        if !config.cache.enabled {
            ui.message("Caching is disabled (cache.enabled: false)");
            return Ok(CommandResult::success());
        }
        if !config.cache.disk {
            ui.message("The memory cache lives per process; nothing is persisted");
            return Ok(CommandResult::success());
        }

        let engine = crate::engine::StyleEngine::open(self.ctx.root(), &config)?;
        let Some(cache) = engine.cache() else {
            return Ok(CommandResult::success());
        };

        match &self.args.command {
            CacheSubcommand::Clear { force } => {
                let count = cache.stats().entries;
                if count == 0 {
                    ui.message("Cache is already empty");
                    return Ok(CommandResult::success());
                }

                if !force
                    && ui.is_interactive()
                    && !ui.confirm(&format!("Clear {} cached stylesheets?", count), false)?
                {
                    ui.message("Cancelled");
                    return Ok(CommandResult::success());
                }

                let cleared = engine.invalidate();
                ui.success(&format!("Cleared {} entries", cleared));
            }
            CacheSubcommand::Stats => {
                let stats = cache.stats();
                ui.show_header("Cache Statistics");
                ui.data(&format!("  Entries:    {}", stats.entries));
                ui.data(&format!("  Total size: {}", format_bytes(stats.total_bytes)));
                if let Some(remaining) = stats.newest_remaining_ttl {
                    let ttl = if remaining > 0 {
                        format_duration(chrono::Duration::seconds(remaining))
                    } else {
                        "expired".to_string()
                    };
                    ui.data(&format!("  Newest TTL: {}", ttl));
                }
                ui.data(&format!(
                    "  Location:   {}",
                    config.cache_dir(self.ctx.root()).display()
                ));
            }
        }

        Ok(CommandResult::success())
    }
}
