//! Presentation helpers for consumers of [`CategorizedLinks`].
//!
//! The pipeline always returns full lists; anything about how many entries to
//! show is decided here, from the counts, by the caller.

use crate::links::{CategorizedLink, CategorizedLinks, Category, RepoHost};

/// Top-level grouping used when rendering links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Primary,
    Social,
    Developer,
    Other,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Primary,
        Section::Social,
        Section::Developer,
        Section::Other,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Primary => "Primary",
            Section::Social => "Social",
            Section::Developer => "Developer",
            Section::Other => "Other",
        }
    }

    /// Categories shown in this section, in display order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Section::Primary => &[Category::Website, Category::Explorer, Category::Docs],
            Section::Social => &[Category::Social],
            Section::Developer => &[
                Category::DeveloperRepo(RepoHost::GitHub),
                Category::DeveloperRepo(RepoHost::Bitbucket),
            ],
            Section::Other => &[Category::Forum, Category::Chat, Category::Announcement],
        }
    }

    /// True when no category of this section has links.
    pub fn is_empty_in(self, links: &CategorizedLinks) -> bool {
        self.categories().iter().all(|c| links.count(*c) == 0)
    }
}

pub fn section_of(category: Category) -> Section {
    match category {
        Category::Website | Category::Explorer | Category::Docs => Section::Primary,
        Category::Social => Section::Social,
        Category::DeveloperRepo(_) => Section::Developer,
        Category::Forum | Category::Chat | Category::Announcement => Section::Other,
    }
}

pub fn category_title(category: Category) -> &'static str {
    match category {
        Category::Website => "Website",
        Category::Explorer => "Explorers",
        Category::Docs => "Docs",
        Category::Social => "Networks",
        Category::DeveloperRepo(RepoHost::GitHub) => "GitHub",
        Category::DeveloperRepo(RepoHost::Bitbucket) => "Bitbucket",
        Category::Forum => "Forum",
        Category::Chat => "Chat",
        Category::Announcement => "Announcements",
    }
}

/// Label to show for a link, falling back to its URL when the label is blank.
pub fn visible_label(link: &CategorizedLink) -> &str {
    if link.label.trim().is_empty() {
        &link.url
    } else {
        &link.label
    }
}

/// How much of a list of `total` entries to show under a display `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    pub total: usize,
    pub limit: Option<usize>,
}

impl DisplayWindow {
    pub fn new(total: usize, limit: usize) -> Self {
        Self {
            total,
            limit: Some(limit),
        }
    }

    pub fn unbounded(total: usize) -> Self {
        Self { total, limit: None }
    }

    pub fn shown(&self) -> usize {
        self.limit.map_or(self.total, |l| self.total.min(l))
    }

    pub fn overflow(&self) -> usize {
        self.total - self.shown()
    }

    pub fn is_truncated(&self) -> bool {
        self.overflow() > 0
    }

    /// `"(top N)"` when entries are hidden.
    pub fn title_suffix(&self) -> Option<String> {
        self.is_truncated().then(|| format!("(top {})", self.shown()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_over_five_repos_with_limit_three() {
        let w = DisplayWindow::new(5, 3);
        assert_eq!(w.total, 5);
        assert_eq!(w.shown(), 3);
        assert_eq!(w.overflow(), 2);
        assert!(w.is_truncated());
        assert_eq!(w.title_suffix().as_deref(), Some("(top 3)"));
    }

    #[test]
    fn window_at_or_under_limit() {
        let w = DisplayWindow::new(3, 3);
        assert_eq!(w.shown(), 3);
        assert!(!w.is_truncated());
        assert_eq!(w.title_suffix(), None);
        assert_eq!(DisplayWindow::new(0, 3).shown(), 0);
    }

    #[test]
    fn unbounded_window_shows_everything() {
        let w = DisplayWindow::unbounded(42);
        assert_eq!(w.shown(), 42);
        assert_eq!(w.overflow(), 0);
    }

    #[test]
    fn every_category_belongs_to_its_section() {
        for category in Category::ALL {
            let section = section_of(category);
            assert!(section.categories().contains(&category));
        }
        let listed: usize = Section::ALL.iter().map(|s| s.categories().len()).sum();
        assert_eq!(listed, Category::ALL.len());
    }

    #[test]
    fn visible_label_falls_back_to_url() {
        let mut link = CategorizedLink {
            url: "https://a.org".into(),
            label: "  ".into(),
            category: Category::Forum,
        };
        assert_eq!(visible_label(&link), "https://a.org");
        link.label = "a.org".into();
        assert_eq!(visible_label(&link), "a.org");
    }

    #[test]
    fn section_emptiness() {
        let links = crate::links::categorize(&crate::LinkSet {
            chat_url: vec!["discord.gg/x".into()],
            ..Default::default()
        });
        assert!(Section::Primary.is_empty_in(&links));
        assert!(!Section::Other.is_empty_in(&links));
    }
}
