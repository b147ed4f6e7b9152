//! Hashtag and word frequencies.

use std::collections::HashMap;
use std::sync::OnceLock;

use geopulse_core::records::NormalizedPost;
use regex::Regex;

use crate::types::LabelCount;

static HASHTAG_RE: OnceLock<Regex> = OnceLock::new();

fn hashtag_re() -> &'static Regex {
    HASHTAG_RE.get_or_init(|| Regex::new(r"#\w+").expect("valid hashtag regex"))
}

fn sorted_counts(counts: HashMap<String, usize>) -> Vec<LabelCount> {
    let mut out: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

/// Hashtag frequencies over the raw post text.
///
/// Hashtags are matched case-sensitively on the original text (the way the
/// dashboard displayed them); tags occurring fewer than `min_count` times
/// are dropped, and at most `limit` entries are returned, count descending
/// then tag ascending.
#[must_use]
pub fn hashtag_counts(
    posts: &[NormalizedPost],
    min_count: usize,
    limit: usize,
) -> Vec<LabelCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for tag in hashtag_re().find_iter(&post.text) {
            *counts.entry(tag.as_str().to_string()).or_default() += 1;
        }
    }
    counts.retain(|_, count| *count >= min_count);
    sorted_counts(counts).into_iter().take(limit).collect()
}

/// Word frequencies over the normalized text, for the word cloud.
///
/// Normalized text is already lowercased, punctuation-free, and stop-word
/// filtered, so a whitespace split is exact here. At most `limit` entries,
/// count descending then word ascending.
#[must_use]
pub fn word_frequencies(posts: &[NormalizedPost], limit: usize) -> Vec<LabelCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        for word in post.normalized_text.split_whitespace() {
            *counts.entry(word.to_string()).or_default() += 1;
        }
    }
    sorted_counts(counts).into_iter().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use geopulse_core::records::NormalizedPost;

    use super::*;

    fn post(text: &str, normalized_text: &str) -> NormalizedPost {
        NormalizedPost {
            text: text.to_string(),
            longitude: None,
            latitude: None,
            sentiment: "neutral".to_string(),
            source: "Web".to_string(),
            cleaned_text: String::new(),
            normalized_text: normalized_text.to_string(),
            sentiment_code: 0,
            country: "unknown".to_string(),
            created_at: Utc.with_ymd_and_hms(2022, 4, 29, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn hashtags_are_counted_across_posts() {
        let posts = vec![
            post("launch day #rocket #space", ""),
            post("#rocket again", ""),
        ];
        let tags = hashtag_counts(&posts, 1, 10);
        assert_eq!(tags[0].label, "#rocket");
        assert_eq!(tags[0].count, 2);
        assert_eq!(tags[1].label, "#space");
    }

    #[test]
    fn min_count_floor_drops_rare_tags() {
        let posts = vec![post("#common #rare", ""), post("#common", "")];
        let tags = hashtag_counts(&posts, 2, 10);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].label, "#common");
    }

    #[test]
    fn hashtag_limit_is_applied_after_sorting() {
        let posts = vec![
            post("#a #a #a", ""),
            post("#b #b", ""),
            post("#c", ""),
        ];
        let tags = hashtag_counts(&posts, 1, 2);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].label, "#a");
        assert_eq!(tags[1].label, "#b");
    }

    #[test]
    fn word_frequencies_use_normalized_text() {
        let posts = vec![
            post("", "rocket launch rocket"),
            post("", "launch window"),
        ];
        let words = word_frequencies(&posts, 10);
        assert_eq!(words[0].count, 2);
        // "launch" and "rocket" tie at 2; alphabetical tie-break.
        assert_eq!(words[0].label, "launch");
        assert_eq!(words[1].label, "rocket");
        assert_eq!(words[2].label, "window");
    }

    #[test]
    fn empty_batch_yields_no_terms() {
        assert!(hashtag_counts(&[], 1, 10).is_empty());
        assert!(word_frequencies(&[], 10).is_empty());
    }
}
