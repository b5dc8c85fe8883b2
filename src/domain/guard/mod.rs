//! Content guard: domain intent, toxicity and personal data checks

mod content_guard;
mod error;
mod intent;
mod pii;
mod policy;
mod toxicity;

pub use content_guard::ContentGuard;
pub use error::PolicyViolation;
pub use intent::is_math_question;
pub use pii::{is_fully_redacted, PiiCategory};
pub use policy::{GuardAction, GuardPolicy};
pub use toxicity::{LexiconToxicityScorer, ToxicityScan, ToxicityScorer, TOXIC_SENTINEL};

#[cfg(test)]
pub use toxicity::mock::FailingScorer;
