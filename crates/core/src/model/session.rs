use serde::{Deserialize, Serialize};

use crate::model::ScaleResult;

/// Lifecycle of a single pass through the questionnaire.
///
/// Modeled as a tagged union so impossible combinations (started and
/// completed at once) cannot be represented; the rendering layer matches on
/// it exhaustively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    NotStarted,
    InProgress {
        /// Lowest question index with no recorded answer.
        current: usize,
    },
    Completed {
        results: Vec<ScaleResult>,
    },
}

impl SessionState {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, SessionState::Completed { .. })
    }

    /// Current question index, while the session is in progress.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self {
            SessionState::InProgress { current } => Some(*current),
            SessionState::NotStarted | SessionState::Completed { .. } => None,
        }
    }

    /// Results of a completed session.
    #[must_use]
    pub fn results(&self) -> Option<&[ScaleResult]> {
        match self {
            SessionState::Completed { results } => Some(results),
            SessionState::NotStarted | SessionState::InProgress { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Scale;

    #[test]
    fn default_state_is_not_started() {
        let state = SessionState::default();
        assert_eq!(state, SessionState::NotStarted);
        assert!(!state.is_complete());
        assert_eq!(state.current_index(), None);
        assert_eq!(state.results(), None);
    }

    #[test]
    fn accessors_match_their_variant() {
        let in_progress = SessionState::InProgress { current: 3 };
        assert_eq!(in_progress.current_index(), Some(3));
        assert!(!in_progress.is_complete());

        let results = vec![ScaleResult::clamped(Scale::Depression, 40)];
        let completed = SessionState::Completed {
            results: results.clone(),
        };
        assert!(completed.is_complete());
        assert_eq!(completed.results(), Some(results.as_slice()));
        assert_eq!(completed.current_index(), None);
    }
}
