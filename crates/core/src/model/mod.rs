mod answer;
mod ids;
mod question;
mod scale;
mod session;

pub use answer::AnswerSet;
pub use ids::QuestionId;
pub use question::{Question, Questionnaire, QuestionnaireError};
pub use scale::{Scale, ScaleError, ScaleResult, ScoreBand};
pub use session::SessionState;
