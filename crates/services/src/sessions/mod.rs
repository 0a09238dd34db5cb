mod controller;
mod evaluator;
mod progress;
mod service;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::{SessionAnswerResult, SessionController};
pub use evaluator::Evaluator;
pub use progress::SessionProgress;
pub use service::QuizSession;
