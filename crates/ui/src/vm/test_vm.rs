use std::sync::Arc;

use chrono::{DateTime, Utc};
use mindscale_core::model::{ScaleResult, SessionState};
use services::{QuizSession, SessionController};

use crate::views::ViewError;

/// User intents the test view can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestIntent {
    Begin,
    Answer(bool),
    Restart,
}

/// View-model over one quiz session.
///
/// Owns the session object and funnels every state transition through the
/// controller; the view only reads accessors and dispatches intents.
pub struct TestVm {
    controller: Arc<SessionController>,
    session: QuizSession,
}

impl TestVm {
    /// Creates a view-model with a session in the `NotStarted` state.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the controller cannot produce a
    /// session.
    pub fn new(controller: Arc<SessionController>) -> Result<Self, ViewError> {
        let session = controller.new_session().map_err(|_| ViewError::Unknown)?;
        Ok(Self {
            controller,
            session,
        })
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    /// Text of the question awaiting an answer.
    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.session.current_question().map(|question| question.text())
    }

    /// "Question N of T" label for the progress footer.
    #[must_use]
    pub fn question_label(&self) -> String {
        let current = self.session.state().current_index().unwrap_or(0);
        format!(
            "Question {} of {}",
            current + 1,
            self.session.total_questions()
        )
    }

    /// Progress percentage for the bar width.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.session.progress().percent()
    }

    #[must_use]
    pub fn results(&self) -> Option<&[ScaleResult]> {
        self.session.results()
    }

    #[must_use]
    pub fn yes_count(&self) -> usize {
        self.session.answers().yes_count()
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.session.completed_at()
    }

    /// Applies a user intent to the session.
    ///
    /// Out-of-state intents (answering before start or after completion) are
    /// a deliberate no-op at this layer: the controller rejects them and the
    /// session is left as it was.
    pub fn dispatch(&mut self, intent: TestIntent) {
        match intent {
            TestIntent::Begin => {
                let _ = self.controller.start(&mut self.session);
            }
            TestIntent::Answer(value) => {
                let _ = self.controller.submit_answer(&mut self.session, value);
            }
            TestIntent::Restart => {
                let _ = self.controller.restart(&mut self.session);
            }
        }
    }
}
