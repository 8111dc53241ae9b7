//! `coinlinks links <path>` – categorize a coin's links.

use anyhow::{Context, Result};
use coinlinks_core::coin_detail::{self, CoinDetail};
use coinlinks_core::config::LinksConfig;
use coinlinks_core::{categorize_with, CategorizedLinks};
use std::io::Read;
use std::path::Path;

use crate::cli::render::render_sections;

pub fn run_links(cfg: &LinksConfig, path: &str, json: bool, links_only: bool) -> Result<()> {
    let options = cfg.pipeline_options();
    let (heading, links) = if links_only {
        let set = if path == "-" {
            coin_detail::parse_link_set(&read_stdin()?)?
        } else {
            coin_detail::load_link_set(Path::new(path))?
        };
        (None, categorize_with(&set, &options))
    } else {
        let coin = if path == "-" {
            coin_detail::parse_coin_detail(&read_stdin()?)?
        } else {
            coin_detail::load_coin_detail(Path::new(path))?
        };
        (heading_for(&coin), coin.categorized_links(&options))
    };

    if json {
        print_json(&links)?;
    } else {
        if let Some(h) = heading {
            println!("{h}\n");
        }
        print!("{}", render_sections(&links, cfg.repo_display_limit));
    }
    Ok(())
}

fn heading_for(coin: &CoinDetail) -> Option<String> {
    match (coin.name.trim(), coin.symbol.trim()) {
        ("", "") => None,
        (name, "") => Some(name.to_string()),
        ("", symbol) => Some(symbol.to_uppercase()),
        (name, symbol) => Some(format!("{name} ({})", symbol.to_uppercase())),
    }
}

fn print_json(links: &CategorizedLinks) -> Result<()> {
    let out = serde_json::to_string_pretty(links).context("serialize links")?;
    println!("{out}");
    Ok(())
}

fn read_stdin() -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin()
        .read_to_end(&mut buf)
        .context("read stdin")?;
    Ok(buf)
}
