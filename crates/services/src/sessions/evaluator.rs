use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mindscale_core::model::{AnswerSet, Scale, ScaleResult};

/// Produces the four reported scale scores for a completed session.
///
/// Scores are drawn independently at random from each scale's declared
/// range and do not depend on the recorded answers. The reference system
/// behaves the same way; the randomness is intentional placeholder behavior
/// and is kept rather than silently replaced with real scoring.
#[derive(Debug, Clone, Copy, Default)]
pub enum Evaluator {
    /// Fresh entropy on every evaluation.
    #[default]
    ThreadLocal,
    /// Deterministic draws, for tests and reproducible demos.
    Seeded(u64),
}

impl Evaluator {
    /// Returns an evaluator seeded for reproducible score draws.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::Seeded(seed)
    }

    /// Generates one result per scale, each score inside the scale's range.
    ///
    /// `answers` is accepted for interface stability but does not influence
    /// the draws.
    #[must_use]
    pub fn evaluate(&self, answers: &AnswerSet) -> Vec<ScaleResult> {
        let _ = answers;
        match self {
            Evaluator::ThreadLocal => draw_all(&mut rand::rng()),
            Evaluator::Seeded(seed) => draw_all(&mut StdRng::seed_from_u64(*seed)),
        }
    }
}

fn draw_all(rng: &mut impl Rng) -> Vec<ScaleResult> {
    Scale::ALL
        .into_iter()
        .map(|scale| {
            let score = rng.random_range(scale.score_range());
            ScaleResult::clamped(scale, score)
        })
        .collect()
}
