//! URL extraction from assistant reply text.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("URL regex pattern is valid"));

/// Scan `text` for URLs, in order of appearance.
///
/// Matches `http`/`https` followed by non-whitespace. No deduplication
/// beyond what the pattern itself produces; the caller owns one preview
/// per returned URL.
pub fn extract_links(text: &str) -> Vec<String> {
    URL_RE.find_iter(text).map(|m| m.as_str().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_ordered() {
        let links = extract_links("see http://a.com and http://b.com");
        assert_eq!(links, vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_extract_none() {
        assert!(extract_links("no links here").is_empty());
        assert!(extract_links("").is_empty());
    }

    #[test]
    fn test_extract_https_and_path() {
        let links = extract_links("listing: https://example.com/listing?id=42");
        assert_eq!(links, vec!["https://example.com/listing?id=42"]);
    }

    #[test]
    fn test_extract_stops_at_whitespace() {
        let links = extract_links("https://a.com/x\nhttps://b.com/y end");
        assert_eq!(links, vec!["https://a.com/x", "https://b.com/y"]);
    }

    #[test]
    fn test_extract_duplicates_kept() {
        let links = extract_links("http://a.com twice http://a.com");
        assert_eq!(links, vec!["http://a.com", "http://a.com"]);
    }
}
