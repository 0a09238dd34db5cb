use thiserror::Error;

use crate::model::{QuestionnaireError, ScaleError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),
    #[error(transparent)]
    Scale(#[from] ScaleError),
}
