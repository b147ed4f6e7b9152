//! Batch-relative sentiment label encoding.

use std::collections::HashMap;

/// Maps sentiment labels to integer codes by first-occurrence order.
///
/// Built with a first pass over the batch ([`SentimentEncoder::fit`]) and
/// applied in a second pass. The first label seen gets code 0, the next new
/// label 1, and so on. Codes are consistent within one batch and NOT stable
/// across batches — a different input order yields different codes.
#[derive(Debug, Clone, Default)]
pub struct SentimentEncoder {
    codes: HashMap<String, i32>,
    labels: Vec<String>,
    next_code: i32,
}

impl SentimentEncoder {
    /// Build an encoder from the labels of one batch, in batch order.
    pub fn fit<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut encoder = Self::default();
        for label in labels {
            encoder.observe(label);
        }
        encoder
    }

    fn observe(&mut self, label: &str) {
        if !self.codes.contains_key(label) {
            self.codes.insert(label.to_string(), self.next_code);
            self.labels.push(label.to_string());
            self.next_code += 1;
        }
    }

    /// The code for `label`, or `None` if the label was never fitted.
    #[must_use]
    pub fn code(&self, label: &str) -> Option<i32> {
        self.codes.get(label).copied()
    }

    /// Fitted labels in code order: `labels()[code]` is the label for `code`.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
