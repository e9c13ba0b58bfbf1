use serde::{Deserialize, Serialize};

/// What cosine similarity returns when either vector has a zero norm.
///
/// A zero norm happens when a document shares no term with the corpus
/// vocabulary (or has no terms at all), so its projection is all zeros.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroNormPolicy {
    /// similarity is 0.0
    #[default]
    Zero,
    /// similarity is the raw `0 / 0` quotient, i.e. NaN
    #[serde(rename = "nan")]
    NaN,
    /// fail with `Error::DegenerateVector`
    Error,
}

/// Scoring settings
///
/// Every field has a default, so a partial table deserializes fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub zero_norm: ZeroNormPolicy,
}

impl ScoringConfig {
    pub fn new(zero_norm: ZeroNormPolicy) -> Self {
        Self { zero_norm }
    }
}
