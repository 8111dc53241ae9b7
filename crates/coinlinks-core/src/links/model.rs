//! Link types flowing through and out of the pipeline.

use serde::Serialize;
use std::fmt;

/// Hosting provider of a developer repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoHost {
    GitHub,
    Bitbucket,
}

/// Display bucket a link is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Website,
    Explorer,
    /// Overlay over websites and explorers; members stay in their source category too.
    Docs,
    Social,
    DeveloperRepo(RepoHost),
    Forum,
    Chat,
    Announcement,
}

impl Category {
    /// Every category, in output order.
    pub const ALL: [Category; 9] = [
        Category::Website,
        Category::Explorer,
        Category::Docs,
        Category::Social,
        Category::DeveloperRepo(RepoHost::GitHub),
        Category::DeveloperRepo(RepoHost::Bitbucket),
        Category::Forum,
        Category::Chat,
        Category::Announcement,
    ];

    pub fn is_social(self) -> bool {
        matches!(self, Category::Social)
    }
}

/// A trimmed, non-empty, protocol-qualified URL.
///
/// Only produced by [`super::normalize`] and the handle synthesizer, so holding
/// one means the normalization rules have already been applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedLink {
    url: String,
}

impl NormalizedLink {
    pub(super) fn from_qualified(url: String) -> Self {
        debug_assert!(!url.is_empty());
        Self { url }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

impl AsRef<str> for NormalizedLink {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for NormalizedLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A link ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedLink {
    pub url: String,
    pub label: String,
    pub category: Category,
}

impl AsRef<str> for CategorizedLink {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// Pipeline output: one ordered, deduplicated list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategorizedLinks {
    pub(super) website: Vec<CategorizedLink>,
    pub(super) explorer: Vec<CategorizedLink>,
    pub(super) docs: Vec<CategorizedLink>,
    pub(super) social: Vec<CategorizedLink>,
    pub(super) github: Vec<CategorizedLink>,
    pub(super) bitbucket: Vec<CategorizedLink>,
    pub(super) forum: Vec<CategorizedLink>,
    pub(super) chat: Vec<CategorizedLink>,
    pub(super) announcement: Vec<CategorizedLink>,
}

impl CategorizedLinks {
    /// Links of one category, in first-seen order.
    pub fn get(&self, category: Category) -> &[CategorizedLink] {
        match category {
            Category::Website => &self.website,
            Category::Explorer => &self.explorer,
            Category::Docs => &self.docs,
            Category::Social => &self.social,
            Category::DeveloperRepo(RepoHost::GitHub) => &self.github,
            Category::DeveloperRepo(RepoHost::Bitbucket) => &self.bitbucket,
            Category::Forum => &self.forum,
            Category::Chat => &self.chat,
            Category::Announcement => &self.announcement,
        }
    }

    pub(super) fn slot_mut(&mut self, category: Category) -> &mut Vec<CategorizedLink> {
        match category {
            Category::Website => &mut self.website,
            Category::Explorer => &mut self.explorer,
            Category::Docs => &mut self.docs,
            Category::Social => &mut self.social,
            Category::DeveloperRepo(RepoHost::GitHub) => &mut self.github,
            Category::DeveloperRepo(RepoHost::Bitbucket) => &mut self.bitbucket,
            Category::Forum => &mut self.forum,
            Category::Chat => &mut self.chat,
            Category::Announcement => &mut self.announcement,
        }
    }

    /// Full (untruncated) count for a category.
    pub fn count(&self, category: Category) -> usize {
        self.get(category).len()
    }

    /// Total entries across all categories, Docs overlay included.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All links, category by category in [`Category::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &CategorizedLink> + '_ {
        Category::ALL.iter().flat_map(move |c| self.get(*c).iter())
    }

    pub fn into_vec(self) -> Vec<CategorizedLink> {
        let Self {
            website,
            explorer,
            docs,
            social,
            github,
            bitbucket,
            forum,
            chat,
            announcement,
        } = self;
        [
            website,
            explorer,
            docs,
            social,
            github,
            bitbucket,
            forum,
            chat,
            announcement,
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
