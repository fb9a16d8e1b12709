//! CLI for zipname.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use zipname_core::config::{self, ZipnameConfig};
use zipname_core::policy::{DigitsInput, RawPolicy};

use commands::{run_completions, run_man, run_pack, run_plan};

/// Top-level CLI for zipname.
#[derive(Debug, Parser)]
#[command(name = "zipname")]
#[command(about = "zipname: rename a batch of files by policy and bundle them into a zip", long_about = None)]
pub struct Cli {
    /// Use this config file instead of ~/.config/zipname/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Naming policy flags; anything omitted comes from the config `[defaults]`.
#[derive(Debug, Clone, Default, Args)]
pub struct PolicyArgs {
    /// Base name for every output file.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Numbering style: none, paren, dash, underscore or pad.
    #[arg(long, value_name = "STYLE")]
    pub style: Option<String>,

    /// Counter width for the pad style (clamped to 1..=10).
    #[arg(long, value_name = "N")]
    pub digits: Option<String>,

    /// Comma-separated prefix cleanup: spaces, symbols, lowercase.
    #[arg(long, value_name = "LIST")]
    pub cleanup: Option<String>,
}

impl PolicyArgs {
    pub fn to_raw(&self) -> RawPolicy {
        RawPolicy {
            prefix: self.prefix.clone(),
            numbering_style: self.style.clone(),
            digits: self.digits.clone().map(DigitsInput::Text),
            cleanup: self.cleanup.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Rename files and write them into a zip archive.
    Pack {
        /// Files to rename, in output order.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Archive path (default: configured archive name in the current directory).
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Show the names files would get, without reading or writing anything.
    Plan {
        /// Files to rename, in output order.
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print the mapping as JSON.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

fn load_config(path: Option<&Path>) -> Result<ZipnameConfig> {
    let cfg = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Pack {
                files,
                output,
                policy,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_pack(&cfg, &files, output.as_deref(), &policy)?;
            }
            CliCommand::Plan {
                files,
                json,
                policy,
            } => {
                let cfg = load_config(cli.config.as_deref())?;
                run_plan(&cfg, &files, &policy, json)?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
