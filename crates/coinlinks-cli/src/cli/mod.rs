//! CLI for the coinlinks link pipeline.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use coinlinks_core::config;

use commands::{run_completions, run_host, run_links, run_man, run_normalize};

/// Top-level CLI for coinlinks.
#[derive(Debug, Parser)]
#[command(name = "coinlinks")]
#[command(about = "coinlinks: categorize a coin's external links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Categorize the links of a coin detail JSON document.
    Links {
        /// Path to the JSON document, or `-` to read stdin.
        path: String,

        /// Print the categorized links as JSON instead of sections.
        #[arg(long)]
        json: bool,

        /// Input is a bare `links` object rather than a full coin detail.
        #[arg(long)]
        links_only: bool,
    },

    /// Show how raw candidates are normalized.
    Normalize {
        /// Raw candidate strings.
        #[arg(required = true, value_name = "RAW")]
        raw: Vec<String>,
    },

    /// Show the hostname label derived for each URL.
    Host {
        /// URLs (missing schemes are filled in first).
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Links {
                path,
                json,
                links_only,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_links(&cfg, &path, json, links_only)?;
            }
            CliCommand::Normalize { raw } => run_normalize(&raw),
            CliCommand::Host { urls } => run_host(&urls),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
