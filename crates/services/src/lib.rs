#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use mindscale_core::Clock;

pub use error::SessionError;
pub use sessions::{
    Evaluator, QuizSession, SessionAnswerResult, SessionController, SessionProgress,
};
