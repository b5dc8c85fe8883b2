use thiserror::Error;

use super::pii::PiiCategory;

/// Why the guard refused a text. Detail is for logs only, never for callers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PolicyViolation {
    #[error("Text is empty")]
    EmptyText,

    #[error("Text is not a mathematics question")]
    OutOfDomain,

    #[error("Toxic language detected (score {score:.2})")]
    Toxic { score: f32 },

    #[error("Personal data detected: {0}")]
    PiiDetected(PiiCategory),

    #[error("Toxicity scorer failed: {0}")]
    Scorer(String),

    #[error("Nothing left after redaction")]
    FullyRedacted,
}
