//! `coinlinks man` – print the roff man page.

use anyhow::{Context, Result};
use clap::CommandFactory;

use crate::cli::Cli;

pub fn run_man() -> Result<()> {
    clap_mangen::Man::new(Cli::command())
        .render(&mut std::io::stdout())
        .context("render man page")
}
