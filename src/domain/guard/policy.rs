//! Guard policy

use serde::{Deserialize, Serialize};

/// What to do when a check fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardAction {
    /// Fail the whole text
    Reject,
    /// Redact the offending span and continue
    Filter,
}

/// Immutable guard settings shared by all requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardPolicy {
    /// Sentence toxicity score (inclusive) that triggers the toxicity action
    #[serde(default = "default_toxicity_threshold")]
    pub toxicity_threshold: f32,
    #[serde(default = "default_reject")]
    pub input_toxicity: GuardAction,
    #[serde(default = "default_filter")]
    pub input_pii: GuardAction,
    #[serde(default = "default_filter")]
    pub output_toxicity: GuardAction,
    #[serde(default = "default_filter")]
    pub output_pii: GuardAction,
}

fn default_toxicity_threshold() -> f32 {
    0.7
}

fn default_reject() -> GuardAction {
    GuardAction::Reject
}

fn default_filter() -> GuardAction {
    GuardAction::Filter
}

impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            toxicity_threshold: default_toxicity_threshold(),
            input_toxicity: default_reject(),
            input_pii: default_filter(),
            output_toxicity: default_filter(),
            output_pii: default_filter(),
        }
    }
}

impl GuardPolicy {
    pub fn with_toxicity_threshold(mut self, threshold: f32) -> Self {
        self.toxicity_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    pub fn with_input_pii(mut self, action: GuardAction) -> Self {
        self.input_pii = action;
        self
    }

    pub fn with_input_toxicity(mut self, action: GuardAction) -> Self {
        self.input_toxicity = action;
        self
    }

    pub fn is_toxic(&self, score: f32) -> bool {
        score >= self.toxicity_threshold
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.toxicity_threshold) {
            return Err(format!(
                "guard.toxicity_threshold must be between 0 and 1, got {}",
                self.toxicity_threshold
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = GuardPolicy::default();

        assert_eq!(policy.toxicity_threshold, 0.7);
        assert_eq!(policy.input_toxicity, GuardAction::Reject);
        assert_eq!(policy.input_pii, GuardAction::Filter);
        assert_eq!(policy.output_toxicity, GuardAction::Filter);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_toxicity_threshold_inclusive() {
        let policy = GuardPolicy::default();
        assert!(policy.is_toxic(0.7));
        assert!(!policy.is_toxic(0.69));
    }

    #[test]
    fn test_deserialize_actions() {
        let policy: GuardPolicy =
            serde_json::from_str(r#"{"input_pii":"reject","toxicity_threshold":0.5}"#).unwrap();

        assert_eq!(policy.input_pii, GuardAction::Reject);
        assert_eq!(policy.toxicity_threshold, 0.5);
        assert_eq!(policy.output_pii, GuardAction::Filter);
    }
}
