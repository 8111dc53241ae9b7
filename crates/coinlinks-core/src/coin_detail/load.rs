//! Decode coin detail documents from bytes or files.

use std::path::Path;

use super::error::LoadError;
use super::parse::CoinDetail;
use crate::link_set::LinkSet;

pub fn parse_coin_detail(bytes: &[u8]) -> Result<CoinDetail, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Decodes a bare `links` object, without the surrounding coin detail.
pub fn parse_link_set(bytes: &[u8]) -> Result<LinkSet, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

pub fn load_coin_detail(path: &Path) -> Result<CoinDetail, LoadError> {
    let coin = parse_coin_detail(&read(path)?)?;
    tracing::debug!(path = %path.display(), id = %coin.id, "loaded coin detail");
    Ok(coin)
}

pub fn load_link_set(path: &Path) -> Result<LinkSet, LoadError> {
    parse_link_set(&read(path)?)
}

fn read(path: &Path) -> Result<Vec<u8>, LoadError> {
    std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
