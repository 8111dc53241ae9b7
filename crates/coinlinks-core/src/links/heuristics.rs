//! Heuristic tables used by the collector and classifier.
//!
//! Host matching is substring based and therefore approximate (`x.com` also
//! matches `dex.com`). Adding a provider is a one-line edit to one of the
//! tables below.

use crate::link_set::LinkSet;

/// A handle-style field that is turned into a URL by appending the handle.
pub struct HandleProvider {
    pub label: &'static str,
    pub base_url: &'static str,
    pub handle: fn(&LinkSet) -> Option<&str>,
}

/// Synthesized social links, in output order.
pub const HANDLE_PROVIDERS: &[HandleProvider] = &[
    HandleProvider {
        label: "X (Twitter)",
        base_url: "https://x.com/",
        handle: twitter_handle,
    },
    HandleProvider {
        label: "Telegram",
        base_url: "https://t.me/",
        handle: telegram_handle,
    },
    HandleProvider {
        label: "Facebook",
        base_url: "https://facebook.com/",
        handle: facebook_handle,
    },
];

/// Label carried by the subreddit URL, which goes through the normalizer
/// instead of being synthesized.
pub const SUBREDDIT_LABEL: &str = "Reddit";

/// Social label keyed by hostname substrings.
pub struct SocialRule {
    pub host_markers: &'static [&'static str],
    pub label: &'static str,
}

/// Checked in order; first match wins.
pub const SOCIAL_LABELS: &[SocialRule] = &[
    SocialRule {
        host_markers: &["x.com", "twitter.com"],
        label: "X (Twitter)",
    },
    SocialRule {
        host_markers: &["t.me"],
        label: "Telegram",
    },
    SocialRule {
        host_markers: &["reddit.com"],
        label: "Reddit",
    },
    SocialRule {
        host_markers: &["facebook.com"],
        label: "Facebook",
    },
];

/// A pattern tested against a lower-cased hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostMarker {
    /// Matches at the start of the host or right after a `.`.
    LabelPrefix(&'static str),
    /// Matches anywhere in the host.
    Contains(&'static str),
}

impl HostMarker {
    pub fn matches(self, host: &str) -> bool {
        match self {
            HostMarker::LabelPrefix(m) => host
                .match_indices(m)
                .any(|(i, _)| i == 0 || host.as_bytes()[i - 1] == b'.'),
            HostMarker::Contains(m) => host.contains(m),
        }
    }
}

/// Hosts that look like documentation.
pub const DOCS_MARKERS: &[HostMarker] = &[
    HostMarker::LabelPrefix("docs."),
    HostMarker::Contains("readthedocs"),
    HostMarker::Contains("gitbook"),
    HostMarker::Contains("notion"),
    HostMarker::Contains("medium."),
];

fn twitter_handle(links: &LinkSet) -> Option<&str> {
    links.twitter_screen_name.as_deref()
}

fn telegram_handle(links: &LinkSet) -> Option<&str> {
    links.telegram_channel_identifier.as_deref()
}

fn facebook_handle(links: &LinkSet) -> Option<&str> {
    links.facebook_username.as_deref()
}
