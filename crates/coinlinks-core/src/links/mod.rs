//! Link aggregation and classification.
//!
//! Turns a coin's [`LinkSet`] into deduplicated, labeled links grouped by
//! category. The work happens in four pure stages run in order:
//! collect → normalize → dedupe (per category) → classify/label.
//!
//! The pipeline is total: blank candidates are dropped, malformed URLs are
//! kept as best-effort links, and nothing returns an error.

mod classify;
mod collect;
mod dedupe;
pub mod heuristics;
mod model;
mod normalize;

pub use classify::{docs_overlay, hostname, is_docs_host, label_for, social_label};
pub use collect::{collect, non_blank, Candidate, Collected};
pub use dedupe::dedupe;
pub use model::{CategorizedLink, CategorizedLinks, Category, NormalizedLink, RepoHost};
pub use normalize::{canonical_key, has_scheme, normalize, DEFAULT_SCHEME_PREFIX};

use crate::link_set::LinkSet;

/// Default cap on the Docs overlay.
pub const DEFAULT_DOCS_LIMIT: usize = 3;

/// Knobs for [`categorize_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Maximum number of links kept in the Docs overlay.
    pub docs_limit: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            docs_limit: DEFAULT_DOCS_LIMIT,
        }
    }
}

/// Runs the pipeline with default options.
pub fn categorize(links: &LinkSet) -> CategorizedLinks {
    categorize_with(links, &PipelineOptions::default())
}

/// Runs the pipeline over `links`.
pub fn categorize_with(links: &LinkSet, options: &PipelineOptions) -> CategorizedLinks {
    let mut out = CategorizedLinks::default();
    let mut dropped = 0usize;

    for (category, candidates) in collect(links).into_sources() {
        let total = candidates.len();
        let normalized: Vec<NormalizedLink> = candidates
            .iter()
            .filter_map(|c| normalize(&c.raw))
            .collect();
        dropped += total - normalized.len();

        *out.slot_mut(category) = dedupe(normalized)
            .into_iter()
            .map(|link| CategorizedLink {
                label: label_for(category, link.as_str()),
                url: link.into_string(),
                category,
            })
            .collect();
    }

    out.docs = docs_overlay(out.website.iter().chain(&out.explorer), options.docs_limit);

    tracing::debug!(
        links = out.len(),
        docs = out.docs.len(),
        dropped,
        "categorized coin links"
    );
    out
}
