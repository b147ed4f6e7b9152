//! Fixed English stop-word set.

use std::collections::HashSet;
use std::sync::OnceLock;

/// The NLTK English stop-word list. Contraction fragments ("don", "ve") are
/// kept even though punctuation stripping usually merges them back into one
/// token; they still match bare fragments in noisy text.
pub(crate) const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// Whether `word` (already lowercased) is an English stop word.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET
        .get_or_init(|| STOP_WORDS.iter().copied().collect())
        .contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_words_are_stop_words() {
        for word in ["the", "is", "this", "out", "very"] {
            assert!(is_stop_word(word), "expected \"{word}\" to be a stop word");
        }
    }

    #[test]
    fn content_words_are_not_stop_words() {
        for word in ["rocket", "check", "cool", "launch"] {
            assert!(!is_stop_word(word), "\"{word}\" should not be a stop word");
        }
    }

    #[test]
    fn list_has_no_duplicates() {
        let set: HashSet<&str> = STOP_WORDS.iter().copied().collect();
        assert_eq!(set.len(), STOP_WORDS.len());
    }
}
