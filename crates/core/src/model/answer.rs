use serde::{Deserialize, Serialize};

/// Ordered sequence of yes/no answers, one per question index.
///
/// Built incrementally: index `i` corresponds to question `i`, and only
/// indices up to the current session position are populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSet {
    values: Vec<bool>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for the next unanswered question.
    pub fn record(&mut self, value: bool) {
        self.values.push(value);
    }

    /// Returns the answer at `index`, or `None` when nothing has been
    /// recorded there yet.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.values.get(index).copied()
    }

    /// Number of answers recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of "yes" answers recorded so far.
    #[must_use]
    pub fn yes_count(&self) -> usize {
        self.values.iter().filter(|value| **value).count()
    }

    /// Discards all recorded answers.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.values
    }
}
