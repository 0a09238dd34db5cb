use serde::{Deserialize, Serialize};

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// Fraction of the questionnaire answered so far, in `[0.0, 1.0]`.
    ///
    /// 0 before the first answer, 1 once the session completes.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.is_complete {
            return 1.0;
        }
        if self.total == 0 {
            return 0.0;
        }
        self.answered as f64 / self.total as f64
    }

    /// `fraction` expressed as a percentage, for progress bars.
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }
}
