//! Coin detail documents: the input side of the link pipeline.
//!
//! Only `id`, `symbol`, `name` and `links` are decoded; the rest of the
//! upstream payload is ignored. Fetching the document is someone else's job.

mod error;
mod load;
mod parse;

pub use error::LoadError;
pub use load::{load_coin_detail, load_link_set, parse_coin_detail, parse_link_set};
pub use parse::CoinDetail;

use crate::links::{categorize_with, CategorizedLinks, PipelineOptions};

impl CoinDetail {
    /// Runs the link pipeline over this coin's links.
    pub fn categorized_links(&self, options: &PipelineOptions) -> CategorizedLinks {
        categorize_with(&self.links, options)
    }
}
