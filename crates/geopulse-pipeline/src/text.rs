//! Text cleaning and normalization.
//!
//! The two stages are contractual and ordered: [`clean_text`] strips noisy
//! substrings and case, [`normalize_text`] reduces the cleaned text to
//! stop-word-free tokens. Punctuation is removed before tokenization, so
//! contractions collapse ("don't" becomes "dont") — same behavior as the
//! upstream dataset the dashboard was built on.

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::is_stop_word;

/// URL-like substrings, @-mentions, HTML entity fragments, and markup tags.
static STRIP_RE: OnceLock<Regex> = OnceLock::new();

fn strip_re() -> &'static Regex {
    STRIP_RE.get_or_init(|| {
        Regex::new(r"(?i)https?\S+|www\.\S+|@\S+|&#?\w+;?|<[^>]*>").expect("valid strip regex")
    })
}

/// Strip URLs, mentions, entity fragments, and tags; lowercase and trim.
#[must_use]
pub fn clean_text(text: &str) -> String {
    strip_re().replace_all(text, "").trim().to_lowercase()
}

/// Reduce cleaned text to space-joined content tokens.
///
/// Removes all ASCII punctuation, tokenizes on Unicode word boundaries, and
/// drops English stop words. Idempotent: running it on its own output
/// returns the same string.
#[must_use]
pub fn normalize_text(cleaned: &str) -> String {
    let without_punctuation: String = cleaned
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();
    without_punctuation
        .unicode_words()
        .filter(|word| !is_stop_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_urls_and_mentions() {
        let cleaned = clean_text("Check this out https://x.co @bob #cool!!");
        assert!(!cleaned.contains("https"), "cleaned: {cleaned}");
        assert!(!cleaned.contains("x.co"), "cleaned: {cleaned}");
        assert!(!cleaned.contains("@bob"), "cleaned: {cleaned}");
        assert!(cleaned.starts_with("check this out"));
    }

    #[test]
    fn clean_strips_http_and_www_variants() {
        let cleaned = clean_text("see http://a.example and www.b.example now");
        assert_eq!(cleaned, "see  and  now");
    }

    #[test]
    fn clean_strips_entities_and_tags() {
        let cleaned = clean_text("a &amp; b <b>bold</b> &#39;quoted");
        assert!(!cleaned.contains("&amp;"));
        assert!(!cleaned.contains('<'));
        assert!(!cleaned.contains("&#39;"));
    }

    #[test]
    fn clean_lowercases_and_trims() {
        assert_eq!(clean_text("  LOUD Noises  "), "loud noises");
    }

    #[test]
    fn clean_empty_text_stays_empty() {
        assert_eq!(clean_text(""), "");
    }

    #[test]
    fn normalize_drops_punctuation_and_stop_words() {
        let cleaned = clean_text("Check this out https://x.co @bob #cool!!");
        let normalized = normalize_text(&cleaned);
        assert!(normalized.contains("check"), "normalized: {normalized}");
        assert!(normalized.contains("cool"), "normalized: {normalized}");
        assert!(
            !normalized.split(' ').any(|w| w == "this"),
            "normalized: {normalized}"
        );
        assert!(!normalized.contains('#'));
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_text("the rocket launch was very cool today");
        let twice = normalize_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_joins_with_single_spaces() {
        let normalized = normalize_text("rocket   launch \t success");
        assert_eq!(normalized, "rocket launch success");
    }

    #[test]
    fn normalize_empty_text_stays_empty() {
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn normalize_collapses_contractions() {
        // Punctuation strip runs before tokenization: "don't" -> "dont",
        // which is not in the stop list and survives.
        assert_eq!(normalize_text("don't panic"), "dont panic");
    }
}
