//! Candidate normalization and the canonical-equality key.

use super::model::NormalizedLink;

/// Prefix applied to candidates that carry no scheme.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Trims `raw` and protocol-qualifies it.
///
/// Returns `None` for blank input. Strings that already start with a scheme
/// (`https:`, `mailto:`, ...) or with `//` are kept as they are; anything else
/// gets `https://` prepended. No other validation happens here.
pub fn normalize(raw: &str) -> Option<NormalizedLink> {
    let trimmed = trim(raw);
    if trimmed.is_empty() {
        return None;
    }
    let url = if has_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };
    Some(NormalizedLink::from_qualified(url))
}

/// Strips surrounding whitespace and byte order marks.
pub(super) fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// True for a leading `//` or a run of ASCII letters followed by `:`.
pub fn has_scheme(s: &str) -> bool {
    if s.starts_with("//") {
        return true;
    }
    let letters = s.bytes().take_while(u8::is_ascii_alphabetic).count();
    letters > 0 && s.as_bytes().get(letters) == Some(&b':')
}

/// Key under which two URLs count as the same link: trailing slashes
/// stripped, whole string lower-cased. Query strings are folded too.
pub fn canonical_key(url: &str) -> String {
    url.trim_end_matches('/').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> Option<String> {
        normalize(raw).map(NormalizedLink::into_string)
    }

    #[test]
    fn blank_is_dropped() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("   "), None);
        assert_eq!(norm("\t\n"), None);
        assert_eq!(norm("\u{feff}"), None);
        assert_eq!(norm(" \u{feff}\u{a0}"), None);
    }

    #[test]
    fn byte_order_mark_is_trimmed() {
        assert_eq!(norm("\u{feff}a.org").as_deref(), Some("https://a.org"));
    }

    #[test]
    fn missing_scheme_gets_https() {
        assert_eq!(norm("example.org").as_deref(), Some("https://example.org"));
        assert_eq!(
            norm("  docs.example.org/guide  ").as_deref(),
            Some("https://docs.example.org/guide")
        );
    }

    #[test]
    fn existing_scheme_is_kept() {
        assert_eq!(norm("http://a.org").as_deref(), Some("http://a.org"));
        assert_eq!(norm("HTTPS://A.org").as_deref(), Some("HTTPS://A.org"));
        assert_eq!(norm("mailto:dev@a.org").as_deref(), Some("mailto:dev@a.org"));
        assert_eq!(norm("ftp:files.a.org").as_deref(), Some("ftp:files.a.org"));
        assert_eq!(norm("//cdn.a.org/x").as_deref(), Some("//cdn.a.org/x"));
    }

    #[test]
    fn scheme_needs_letters_before_colon() {
        assert!(!has_scheme(":foo"));
        assert!(!has_scheme("1http://a.org"));
        assert!(!has_scheme("/relative"));
        assert!(has_scheme("git:x"));
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["example.org", " https://a.org/ ", "//x.io", "not a url"] {
            let once = norm(raw).unwrap();
            assert_eq!(norm(&once).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn garbage_passes_through_best_effort() {
        assert_eq!(norm("not a url").as_deref(), Some("https://not a url"));
    }

    #[test]
    fn canonical_key_folds_case_and_trailing_slashes() {
        assert_eq!(canonical_key("https://A.com///"), "https://a.com");
        assert_eq!(canonical_key("https://a.com/?Q=1"), "https://a.com/?q=1");
        assert_ne!(canonical_key("https://a.com/x"), canonical_key("https://a.com"));
    }
}
