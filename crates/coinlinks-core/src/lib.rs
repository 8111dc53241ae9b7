//! Link aggregation and classification for coin detail records.

pub mod config;
pub mod logging;

pub mod coin_detail;
pub mod display;
pub mod link_set;
pub mod links;

pub use link_set::{LinkSet, ReposUrl};
pub use links::{
    categorize, categorize_with, CategorizedLink, CategorizedLinks, Category, PipelineOptions,
    RepoHost,
};
