use chrono::{DateTime, Utc};
use std::fmt;

use mindscale_core::model::{AnswerSet, Question, Questionnaire, ScaleResult, SessionState};

use super::evaluator::Evaluator;
use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory state for one pass through the questionnaire.
///
/// Steps through the fixed question list sequentially, recording one boolean
/// answer per question, and holds the scale results once the list is
/// exhausted. All transitions happen through the methods below; rejected
/// calls leave the session untouched.
pub struct QuizSession {
    questionnaire: Questionnaire,
    answers: AnswerSet,
    state: SessionState,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Creates a session in the `NotStarted` state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the questionnaire has no questions.
    pub fn new(questionnaire: Questionnaire) -> Result<Self, SessionError> {
        if questionnaire.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            questionnaire,
            answers: AnswerSet::new(),
            state: SessionState::NotStarted,
            started_at: None,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questionnaire.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// The question awaiting an answer, while the session is in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let current = self.state.current_index()?;
        self.questionnaire.get(current)
    }

    /// Results of a completed session.
    #[must_use]
    pub fn results(&self) -> Option<&[ScaleResult]> {
        self.state.results()
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.total_questions().saturating_sub(self.answered_count()),
            is_complete: self.is_complete(),
        }
    }

    /// Transitions `NotStarted` into `InProgress` at the first question.
    ///
    /// `started_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` if the session is in progress
    /// or completed.
    pub fn start(&mut self, started_at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.state != SessionState::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        self.state = SessionState::InProgress { current: 0 };
        self.started_at = Some(started_at);
        Ok(())
    }

    /// Records `value` for the current question and advances the session.
    ///
    /// On the final question the session transitions to `Completed` with the
    /// evaluator's results. `answered_at` should come from the services layer
    /// clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before `start`, and
    /// `SessionError::Completed` once finished; the rejected call changes
    /// neither state nor results.
    pub fn submit_answer(
        &mut self,
        evaluator: &Evaluator,
        value: bool,
        answered_at: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        let current = match self.state {
            SessionState::NotStarted => return Err(SessionError::NotStarted),
            SessionState::Completed { .. } => return Err(SessionError::Completed),
            SessionState::InProgress { current } => current,
        };

        self.answers.record(value);

        if current + 1 < self.questionnaire.len() {
            self.state = SessionState::InProgress { current: current + 1 };
        } else {
            let results = evaluator.evaluate(&self.answers);
            self.state = SessionState::Completed { results };
            self.completed_at = Some(answered_at);
        }
        Ok(())
    }

    /// Unconditionally returns to `NotStarted`, discarding answers, results,
    /// and timestamps.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.state = SessionState::NotStarted;
        self.started_at = None;
        self.completed_at = None;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions", &self.questionnaire.len())
            .field("answered", &self.answers.len())
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
