use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when building scale results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("score {score} is outside the {scale} range")]
    ScoreOutOfRange { scale: Scale, score: u8 },
}

//
// ─── SCALE ────────────────────────────────────────────────────────────────────
//

/// The four personality dimensions reported in the result set.
///
/// Each scale declares its own bounded T-score range; reported scores always
/// fall inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scale {
    Hypochondriasis,
    Depression,
    Hysteria,
    PsychopathicDeviate,
}

impl Scale {
    /// All reported scales, in presentation order.
    pub const ALL: [Scale; 4] = [
        Scale::Hypochondriasis,
        Scale::Depression,
        Scale::Hysteria,
        Scale::PsychopathicDeviate,
    ];

    /// Human-readable scale name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Scale::Hypochondriasis => "Hypochondriasis",
            Scale::Depression => "Depression",
            Scale::Hysteria => "Hysteria",
            Scale::PsychopathicDeviate => "Psychopathic Deviate",
        }
    }

    /// Inclusive range reported scores are drawn from.
    #[must_use]
    pub fn score_range(self) -> RangeInclusive<u8> {
        match self {
            Scale::Hypochondriasis => 40..=69,
            Scale::Depression => 35..=59,
            Scale::Hysteria => 45..=64,
            Scale::PsychopathicDeviate => 50..=64,
        }
    }

    /// Canned interpretation line shown with the score.
    #[must_use]
    pub fn interpretation(self) -> &'static str {
        match self {
            Scale::Hypochondriasis => "Normal level of concern about health",
            Scale::Depression => "Mild lowering of mood within the normal range",
            Scale::Hysteria => "Average level of emotional reactivity",
            Scale::PsychopathicDeviate => "Normal level of social adjustment",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//
// ─── SCORE BAND ───────────────────────────────────────────────────────────────
//

/// Display band for a reported score, used to pick the badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Normal,
    Moderate,
    Elevated,
}

//
// ─── SCALE RESULT ─────────────────────────────────────────────────────────────
//

/// A single reported scale with its T-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleResult {
    scale: Scale,
    score: u8,
}

impl ScaleResult {
    /// Creates a result, validating the score against the scale's range.
    ///
    /// # Errors
    ///
    /// Returns `ScaleError::ScoreOutOfRange` if `score` falls outside
    /// `scale.score_range()`.
    pub fn new(scale: Scale, score: u8) -> Result<Self, ScaleError> {
        if !scale.score_range().contains(&score) {
            return Err(ScaleError::ScoreOutOfRange { scale, score });
        }
        Ok(Self { scale, score })
    }

    /// Creates a result, clamping the score into the scale's range.
    ///
    /// Intended for producers that already draw from the declared range; the
    /// clamp keeps the invariant total.
    #[must_use]
    pub fn clamped(scale: Scale, score: u8) -> Self {
        let range = scale.score_range();
        Self {
            scale,
            score: score.clamp(*range.start(), *range.end()),
        }
    }

    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    #[must_use]
    pub fn interpretation(&self) -> &'static str {
        self.scale.interpretation()
    }

    /// Band thresholds follow the reference badge styling: above 65 is
    /// elevated, above 55 moderate, everything else normal.
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        if self.score > 65 {
            ScoreBand::Elevated
        } else if self.score > 55 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Normal
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
