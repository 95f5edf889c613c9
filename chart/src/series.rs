//! Line series built from stored history entries.

use crate::confidence::extract_confidence;
use crate::consts::{LABEL_PREFIX, SERIES_NAME};

#[cfg(test)]
#[path = "series_test.rs"]
mod series_test;

/// A single named line: one label and one sample per history entry.
///
/// `labels` and `samples` always have the same length and follow entry order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: &'static str,
    pub labels: Vec<String>,
    pub samples: Vec<f64>,
}

impl Default for LineSeries {
    fn default() -> Self {
        Self { name: SERIES_NAME, labels: Vec::new(), samples: Vec::new() }
    }
}

impl LineSeries {
    /// Derive labels and confidence samples from history entries, in order.
    pub fn from_entries<S: AsRef<str>>(entries: &[S]) -> Self {
        let samples = entries.iter().map(|e| extract_confidence(e.as_ref())).collect::<Vec<_>>();
        Self { name: SERIES_NAME, labels: labels_for(samples.len()), samples }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(label, sample)` pairs in plot order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels.iter().map(String::as_str).zip(self.samples.iter().copied())
    }
}

/// `"Prediction 1"`, `"Prediction 2"`, ... for `count` entries.
pub fn labels_for(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{LABEL_PREFIX} {i}")).collect()
}
