//! Hostname extraction, labels, and the Docs overlay.

use super::dedupe::dedupe;
use super::heuristics::{DOCS_MARKERS, SOCIAL_LABELS};
use super::model::{CategorizedLink, Category};

/// Host of `url` without a leading `www.`.
///
/// Unparseable URLs, and URLs without a host such as `mailto:`, fall back to
/// the raw string so a label is always available.
pub fn hostname(url: &str) -> String {
    let host = url::Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .filter(|h| !h.is_empty());

    match host {
        Some(h) => h
            .strip_prefix("www.")
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
            .unwrap_or(h),
        None => {
            tracing::trace!(url, "no parseable host; using raw string");
            url.to_string()
        }
    }
}

/// Social network label for `host`, if one of the table entries matches.
pub fn social_label(host: &str) -> Option<&'static str> {
    let host = host.to_ascii_lowercase();
    SOCIAL_LABELS
        .iter()
        .find(|rule| rule.host_markers.iter().any(|m| host.contains(m)))
        .map(|rule| rule.label)
}

pub fn is_docs_host(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    DOCS_MARKERS.iter().any(|m| m.matches(&host))
}

/// Display label for a link in `category`.
///
/// Social links use the social table and fall back to the hostname.
/// Everything else is labeled by hostname.
pub fn label_for(category: Category, url: &str) -> String {
    let host = hostname(url);
    if !category.is_social() {
        return host;
    }
    social_label(&host).map(str::to_string).unwrap_or(host)
}

/// Documentation-looking links among `sources`, deduplicated and capped at
/// `limit`. Source links are left where they are.
pub fn docs_overlay<'a, I>(sources: I, limit: usize) -> Vec<CategorizedLink>
where
    I: IntoIterator<Item = &'a CategorizedLink>,
{
    let matches = sources
        .into_iter()
        .filter(|link| is_docs_host(&hostname(&link.url)));
    dedupe(matches)
        .into_iter()
        .take(limit)
        .map(|link| CategorizedLink {
            url: link.url.clone(),
            label: hostname(&link.url),
            category: Category::Docs,
        })
        .collect()
}
