use serde::{Deserialize, Serialize};

use mindscale_core::Clock;
use mindscale_core::model::{QuestionId, Questionnaire};

use super::evaluator::Evaluator;
use super::service::QuizSession;
use crate::error::SessionError;

/// Result of answering a single question in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionAnswerResult {
    pub question_id: QuestionId,
    pub answer: bool,
    pub is_complete: bool,
}

/// Orchestrates session start, answering, and restart.
///
/// Owns the clock, the evaluator, and the questionnaire the sessions run
/// against; the session objects themselves are handed to the rendering layer.
#[derive(Debug, Clone)]
pub struct SessionController {
    clock: Clock,
    evaluator: Evaluator,
    questionnaire: Questionnaire,
}

impl SessionController {
    #[must_use]
    pub fn new(clock: Clock, evaluator: Evaluator, questionnaire: Questionnaire) -> Self {
        Self {
            clock,
            evaluator,
            questionnaire,
        }
    }

    /// Controller over the built-in ten-item standard form.
    #[must_use]
    pub fn standard(clock: Clock, evaluator: Evaluator) -> Self {
        Self::new(clock, evaluator, Questionnaire::standard())
    }

    #[must_use]
    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Creates a fresh session in the `NotStarted` state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the questionnaire has no questions.
    pub fn new_session(&self) -> Result<QuizSession, SessionError> {
        QuizSession::new(self.questionnaire.clone())
    }

    /// Creates a session and immediately starts it at the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the questionnaire has no questions.
    pub fn start_session(&self) -> Result<QuizSession, SessionError> {
        let mut session = self.new_session()?;
        session.start(self.clock.now())?;
        Ok(session)
    }

    /// Starts a previously created (or reset) session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` unless the session is
    /// `NotStarted`.
    pub fn start(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        session.start(self.clock.now())
    }

    /// Answers the current question and advances the session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` or `SessionError::Completed` for
    /// out-of-state calls; the session is left unchanged.
    pub fn submit_answer(
        &self,
        session: &mut QuizSession,
        value: bool,
    ) -> Result<SessionAnswerResult, SessionError> {
        let question_id = match session.current_question() {
            Some(question) => question.id(),
            None => {
                return Err(if session.is_complete() {
                    SessionError::Completed
                } else {
                    SessionError::NotStarted
                });
            }
        };

        session.submit_answer(&self.evaluator, value, self.clock.now())?;

        Ok(SessionAnswerResult {
            question_id,
            answer: value,
            is_complete: session.is_complete(),
        })
    }

    /// Unconditionally returns the session to `NotStarted`.
    pub fn reset(&self, session: &mut QuizSession) {
        session.reset();
    }

    /// Resets the session and starts it again at the first question.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the restart; cannot fail for a session
    /// produced by this controller.
    pub fn restart(&self, session: &mut QuizSession) -> Result<(), SessionError> {
        session.reset();
        session.start(self.clock.now())
    }
}
