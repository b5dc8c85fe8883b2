//! Input and output validation around the generator

use std::sync::Arc;

use super::error::PolicyViolation;
use super::intent::is_math_question;
use super::pii::{self, PiiCategory};
use super::policy::{GuardAction, GuardPolicy};
use super::toxicity::{self, LexiconToxicityScorer, ToxicityScorer};

/// Categories checked on questions; digit-dash runs are left alone since
/// they are usually arithmetic
const INPUT_PII: [PiiCategory; 2] = [PiiCategory::Email, PiiCategory::Phone];

/// Pure checks over an immutable policy
#[derive(Debug, Clone)]
pub struct ContentGuard {
    policy: GuardPolicy,
    scorer: Arc<dyn ToxicityScorer>,
}

impl Default for ContentGuard {
    fn default() -> Self {
        Self::new(GuardPolicy::default())
    }
}

impl ContentGuard {
    pub fn new(policy: GuardPolicy) -> Self {
        Self {
            policy,
            scorer: Arc::new(LexiconToxicityScorer::default()),
        }
    }

    pub fn with_scorer(mut self, scorer: Arc<dyn ToxicityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    /// Validate a question. Returns the (possibly redacted) text to route.
    pub fn validate_input(&self, text: &str) -> Result<String, PolicyViolation> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PolicyViolation::EmptyText);
        }

        if !is_math_question(text) {
            return Err(PolicyViolation::OutOfDomain);
        }

        let scan = toxicity::scan(self.scorer.as_ref(), text, self.policy.toxicity_threshold)?;
        let text = if scan.redacted > 0 {
            match self.policy.input_toxicity {
                GuardAction::Reject => {
                    return Err(PolicyViolation::Toxic {
                        score: scan.max_score,
                    });
                }
                GuardAction::Filter => scan.filtered,
            }
        } else {
            text.to_string()
        };

        let text = match self.policy.input_pii {
            GuardAction::Reject => {
                if let Some(category) = pii::detect(&text, &INPUT_PII) {
                    return Err(PolicyViolation::PiiDetected(category));
                }
                text
            }
            GuardAction::Filter => pii::redact(&text, &INPUT_PII),
        };

        if pii::is_fully_redacted(&text) {
            return Err(PolicyViolation::FullyRedacted);
        }

        Ok(text)
    }

    /// Validate generated text. Never runs the intent check, and redaction
    /// alone never fails it.
    pub fn validate_output(&self, text: &str) -> Result<String, PolicyViolation> {
        if text.trim().is_empty() {
            return Err(PolicyViolation::EmptyText);
        }

        let scan = toxicity::scan(self.scorer.as_ref(), text, self.policy.toxicity_threshold)?;
        let text = if scan.redacted > 0 {
            match self.policy.output_toxicity {
                GuardAction::Reject => {
                    return Err(PolicyViolation::Toxic {
                        score: scan.max_score,
                    });
                }
                GuardAction::Filter => scan.filtered,
            }
        } else {
            text.to_string()
        };

        let text = match self.policy.output_pii {
            GuardAction::Reject => {
                if let Some(category) = pii::detect(&text, &PiiCategory::ALL) {
                    return Err(PolicyViolation::PiiDetected(category));
                }
                text
            }
            GuardAction::Filter => pii::redact(&text, &PiiCategory::ALL),
        };

        Ok(text)
    }
}
