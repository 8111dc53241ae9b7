//! Plain-text rendering of categorized links, grouped into sections.

use coinlinks_core::display::{category_title, visible_label, DisplayWindow, Section};
use coinlinks_core::{CategorizedLinks, Category};
use std::fmt::Write;

/// Renders every non-empty section. Developer repositories are capped at
/// `repo_limit` entries with an overflow line; other categories are shown in full.
pub fn render_sections(links: &CategorizedLinks, repo_limit: usize) -> String {
    if links.is_empty() {
        return "No links.\n".to_string();
    }

    let mut out = String::new();
    for section in Section::ALL {
        if section.is_empty_in(links) {
            continue;
        }
        let _ = writeln!(out, "{}", section.title());
        for &category in section.categories() {
            let entries = links.get(category);
            if entries.is_empty() {
                continue;
            }
            let window = match category {
                Category::DeveloperRepo(_) => DisplayWindow::new(entries.len(), repo_limit),
                _ => DisplayWindow::unbounded(entries.len()),
            };
            match window.title_suffix() {
                Some(suffix) => {
                    let _ = writeln!(out, "  {} {}", category_title(category), suffix);
                }
                None => {
                    let _ = writeln!(out, "  {}", category_title(category));
                }
            }
            for link in &entries[..window.shown()] {
                let _ = writeln!(out, "    {}  <{}>", visible_label(link), link.url);
            }
            if window.is_truncated() {
                let _ = writeln!(out, "    ... and {} more", window.overflow());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinlinks_core::{categorize, LinkSet, ReposUrl};

    #[test]
    fn empty_links() {
        let links = categorize(&LinkSet::default());
        assert_eq!(render_sections(&links, 3), "No links.\n");
    }

    #[test]
    fn sections_in_order_and_empty_ones_skipped() {
        let links = categorize(&LinkSet {
            homepage: vec!["www.coin.org".into()],
            chat_url: vec!["discord.gg/coin".into()],
            ..LinkSet::default()
        });
        let text = render_sections(&links, 3);
        assert_eq!(
            text,
            "Primary\n  Website\n    coin.org  <https://www.coin.org>\n\
             Other\n  Chat\n    discord.gg  <https://discord.gg/coin>\n"
        );
    }

    #[test]
    fn repos_over_limit_show_top_n_and_overflow() {
        let github = (1..=5)
            .map(|i| format!("https://github.com/coin/r{i}"))
            .collect();
        let links = categorize(&LinkSet {
            repos_url: ReposUrl {
                github,
                bitbucket: vec![],
            },
            ..LinkSet::default()
        });
        let text = render_sections(&links, 3);
        assert!(text.contains("  GitHub (top 3)\n"));
        assert!(text.contains("<https://github.com/coin/r3>"));
        assert!(!text.contains("<https://github.com/coin/r4>"));
        assert!(text.contains("    ... and 2 more\n"));
    }

    #[test]
    fn social_uses_network_labels() {
        let links = categorize(&LinkSet {
            twitter_screen_name: Some("coin".into()),
            ..LinkSet::default()
        });
        let text = render_sections(&links, 3);
        assert!(text.contains("Social\n  Networks\n    X (Twitter)  <https://x.com/coin>\n"));
    }
}
