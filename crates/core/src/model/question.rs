use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while building a questionnaire.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionnaireError {
    #[error("questionnaire must contain at least one question")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("question {id} has empty text")]
    EmptyText { id: QuestionId },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single yes/no item in the inventory.
///
/// Questions are immutable once created; the questionnaire defines their
/// presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
}

impl Question {
    /// Creates a question with the given id and text.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::EmptyText` if `text` is blank.
    pub fn new(id: QuestionId, text: impl Into<String>) -> Result<Self, QuestionnaireError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionnaireError::EmptyText { id });
        }
        Ok(Self { id, text })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ─── QUESTIONNAIRE ────────────────────────────────────────────────────────────
//

/// Fixed, ordered list of questions known at startup.
///
/// The list is never mutated after construction; sessions index into it by
/// position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Builds a questionnaire from an ordered list of questions.
    ///
    /// # Errors
    ///
    /// Returns `QuestionnaireError::Empty` if `questions` is empty.
    /// Returns `QuestionnaireError::DuplicateId` if two questions share an id.
    pub fn new(questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        if questions.is_empty() {
            return Err(QuestionnaireError::Empty);
        }
        for (i, question) in questions.iter().enumerate() {
            if questions[..i].iter().any(|other| other.id() == question.id()) {
                return Err(QuestionnaireError::DuplicateId(question.id()));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in ten-item short form shown by the demo.
    #[must_use]
    pub fn standard() -> Self {
        let items: [(u32, &str); 10] = [
            (1, "I wake easily from noise."),
            (2, "I like to read mechanics magazines."),
            (3, "I have a good appetite."),
            (4, "I wake up fresh and rested most mornings."),
            (5, "I fall asleep easily."),
            (6, "I like to read newspaper crime reports."),
            (7, "My hands and feet are usually warm enough."),
            (8, "My daily life is full of interesting events."),
            (9, "I work under a great deal of tension."),
            (10, "I am troubled by attacks of nausea and vomiting."),
        ];

        // Literal items: ids are unique and texts non-empty by inspection.
        let questions = items
            .into_iter()
            .map(|(id, text)| Question {
                id: QuestionId::new(id),
                text: text.to_string(),
            })
            .collect();
        Self { questions }
    }

    /// Total number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question at `index`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
