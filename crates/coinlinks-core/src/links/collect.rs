//! Raw candidate extraction from a [`LinkSet`].

use std::borrow::Cow;

use super::heuristics::{HANDLE_PROVIDERS, SUBREDDIT_LABEL};
use super::model::{Category, RepoHost};
use super::normalize::trim;
use crate::link_set::LinkSet;

/// A raw string that may become a link, plus the label its source implies.
///
/// The label describes the source field only; output labels are derived from
/// the normalized URL's hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub raw: Cow<'a, str>,
    pub label: Option<&'static str>,
}

impl<'a> Candidate<'a> {
    fn plain(raw: &'a str) -> Self {
        Self {
            raw: Cow::Borrowed(raw),
            label: None,
        }
    }
}

/// Candidates per source category, before normalization.
#[derive(Debug, Clone, Default)]
pub struct Collected<'a> {
    pub websites: Vec<Candidate<'a>>,
    pub explorers: Vec<Candidate<'a>>,
    pub social: Vec<Candidate<'a>>,
    pub forums: Vec<Candidate<'a>>,
    pub chats: Vec<Candidate<'a>>,
    pub announcements: Vec<Candidate<'a>>,
    pub github: Vec<Candidate<'a>>,
    pub bitbucket: Vec<Candidate<'a>>,
}

impl<'a> Collected<'a> {
    /// Pairs each candidate list with the category it feeds.
    pub fn into_sources(self) -> [(Category, Vec<Candidate<'a>>); 8] {
        [
            (Category::Website, self.websites),
            (Category::Explorer, self.explorers),
            (Category::Social, self.social),
            (Category::DeveloperRepo(RepoHost::GitHub), self.github),
            (Category::DeveloperRepo(RepoHost::Bitbucket), self.bitbucket),
            (Category::Forum, self.forums),
            (Category::Chat, self.chats),
            (Category::Announcement, self.announcements),
        ]
    }
}

/// Gathers every candidate from `links`. URL lists pass through untouched;
/// handle fields become synthesized URLs.
pub fn collect(links: &LinkSet) -> Collected<'_> {
    Collected {
        websites: passthrough(&links.homepage),
        explorers: passthrough(&links.blockchain_site),
        social: social_candidates(links),
        forums: passthrough(&links.official_forum_url),
        chats: passthrough(&links.chat_url),
        announcements: passthrough(&links.announcement_url),
        github: passthrough(&links.repos_url.github),
        bitbucket: passthrough(&links.repos_url.bitbucket),
    }
}

/// `Some(trimmed)` when `s` is present and not whitespace-only.
pub fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(trim).filter(|s| !s.is_empty())
}

fn passthrough(list: &[String]) -> Vec<Candidate<'_>> {
    list.iter().map(|s| Candidate::plain(s)).collect()
}

fn social_candidates(links: &LinkSet) -> Vec<Candidate<'_>> {
    let mut out: Vec<Candidate<'_>> = HANDLE_PROVIDERS
        .iter()
        .filter_map(|provider| {
            let handle = non_blank((provider.handle)(links))?;
            Some(Candidate {
                raw: Cow::Owned(format!("{}{}", provider.base_url, handle)),
                label: Some(provider.label),
            })
        })
        .collect();

    if let Some(subreddit) = non_blank(links.subreddit_url.as_deref()) {
        out.push(Candidate {
            raw: Cow::Borrowed(subreddit),
            label: Some(SUBREDDIT_LABEL),
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raws(list: &[Candidate<'_>]) -> Vec<String> {
        list.iter().map(|c| c.raw.to_string()).collect()
    }

    #[test]
    fn url_lists_pass_through_unchanged() {
        let links = LinkSet {
            homepage: vec!["  a.org ".into(), "".into()],
            chat_url: vec!["https://discord.gg/x".into()],
            ..LinkSet::default()
        };
        let collected = collect(&links);
        assert_eq!(raws(&collected.websites), vec!["  a.org ", ""]);
        assert_eq!(raws(&collected.chats), vec!["https://discord.gg/x"]);
        assert!(collected.websites.iter().all(|c| c.label.is_none()));
    }

    #[test]
    fn handles_are_synthesized_in_order() {
        let links = LinkSet {
            twitter_screen_name: Some("coin".into()),
            facebook_username: Some("coinfb".into()),
            telegram_channel_identifier: Some("coin_tg".into()),
            subreddit_url: Some("reddit.com/r/coin".into()),
            ..LinkSet::default()
        };
        let social = collect(&links).social;
        assert_eq!(
            raws(&social),
            vec![
                "https://x.com/coin",
                "https://t.me/coin_tg",
                "https://facebook.com/coinfb",
                "reddit.com/r/coin",
            ]
        );
        let labels: Vec<_> = social.iter().map(|c| c.label).collect();
        assert_eq!(
            labels,
            vec![
                Some("X (Twitter)"),
                Some("Telegram"),
                Some("Facebook"),
                Some("Reddit")
            ]
        );
    }

    #[test]
    fn blank_handles_are_skipped() {
        let links = LinkSet {
            twitter_screen_name: Some("   ".into()),
            telegram_channel_identifier: Some(String::new()),
            facebook_username: None,
            subreddit_url: Some("\t".into()),
            ..LinkSet::default()
        };
        assert!(collect(&links).social.is_empty());
    }

    #[test]
    fn handles_are_trimmed_before_synthesis() {
        let links = LinkSet {
            twitter_screen_name: Some(" vitalik ".into()),
            ..LinkSet::default()
        };
        assert_eq!(raws(&collect(&links).social), vec!["https://x.com/vitalik"]);
    }

    #[test]
    fn non_blank_rules() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("  \n")), None);
        assert_eq!(non_blank(Some("\u{feff}")), None);
        assert_eq!(non_blank(Some(" x ")), Some("x"));
    }
}
