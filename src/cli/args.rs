//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::options::Scope;

use super::commands::cache::CacheArgs;
use super::commands::options::OptionsArgs;
use super::commands::templates::TemplatesArgs;

/// Ross theme styles - resolve header, footer and general options into CSS.
#[derive(Debug, Parser)]
#[command(name = "ross")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .ross/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the site's generated CSS
    Css(CssArgs),

    /// Show options merged with template defaults
    Resolve(ResolveArgs),

    /// List, inspect and apply header templates
    Templates(TemplatesArgs),

    /// Read, save and reset stored options
    Options(OptionsArgs),

    /// Print the security token for an action
    Token(TokenArgs),

    /// Manage the compiled CSS cache
    Cache(CacheArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `css` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CssArgs {
    /// Compose fresh CSS without reading or writing the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Wrap the CSS in a <style> element
    #[arg(long)]
    pub tag: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Scope to resolve (header, footer, general)
    pub scope: Scope,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `token` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TokenArgs {
    /// Action name (e.g. ross_save_header, ross_apply_template)
    pub action: String,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::options::OptionsSubcommand;
    use crate::cli::commands::templates::TemplatesSubcommand;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_css_flags() {
        let cli = Cli::try_parse_from(["ross", "css", "--no-cache", "--tag"]).unwrap();
        match cli.command {
            Commands::Css(args) => {
                assert!(args.no_cache);
                assert!(args.tag);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_scope_argument() {
        let cli = Cli::try_parse_from(["ross", "resolve", "footer", "--json"]).unwrap();
        match cli.command {
            Commands::Resolve(args) => {
                assert_eq!(args.scope, Scope::Footer);
                assert!(args.json);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_scope() {
        assert!(Cli::try_parse_from(["ross", "resolve", "sidebar"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["ross", "templates", "list", "--project", "/site", "-q"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/site")));
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Templates(TemplatesArgs {
                command: TemplatesSubcommand::List { json: false }
            })
        ));
    }

    #[test]
    fn parses_reset_section() {
        let cli = Cli::try_parse_from([
            "ross", "options", "reset", "header", "--section", "sticky", "--force",
        ])
        .unwrap();
        match cli.command {
            Commands::Options(OptionsArgs {
                command:
                    OptionsSubcommand::Reset {
                        scope,
                        section,
                        force,
                        ..
                    },
            }) => {
                assert_eq!(scope, Scope::Header);
                assert_eq!(section.as_deref(), Some("sticky"));
                assert!(force);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["ross"]).is_err());
    }
}
