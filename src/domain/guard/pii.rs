//! Pattern-based personal data detection and redaction

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("valid email regex")
});

static SSN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{3}-\d{2}-\d{4}\b").expect("valid ssn regex"));

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{10}\b").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PiiCategory {
    Email,
    Ssn,
    Phone,
}

impl PiiCategory {
    /// Redaction order; emails first so digits inside an address are not
    /// taken for a phone number
    pub const ALL: [PiiCategory; 3] = [Self::Email, Self::Ssn, Self::Phone];

    pub fn sentinel(&self) -> &'static str {
        match self {
            Self::Email => "[REDACTED-EMAIL]",
            Self::Ssn => "[REDACTED-SSN]",
            Self::Phone => "[REDACTED-PHONE]",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Email => &EMAIL,
            Self::Ssn => &SSN,
            Self::Phone => &PHONE,
        }
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Email => "email",
            Self::Ssn => "ssn",
            Self::Phone => "phone",
        };
        f.write_str(name)
    }
}

/// First category (in redaction order) present in the text
pub fn detect(text: &str, categories: &[PiiCategory]) -> Option<PiiCategory> {
    categories.iter().copied().find(|c| c.pattern().is_match(text))
}

/// Replace every match of the given categories with its sentinel
pub fn redact(text: &str, categories: &[PiiCategory]) -> String {
    let mut out = text.to_string();
    for category in categories {
        out = category
            .pattern()
            .replace_all(&out, category.sentinel())
            .into_owned();
    }
    out
}

/// Whether the text has no content left besides redaction sentinels
pub fn is_fully_redacted(text: &str) -> bool {
    let mut rest = text.to_string();
    for sentinel in PiiCategory::ALL
        .iter()
        .map(PiiCategory::sentinel)
        .chain(std::iter::once(super::toxicity::TOXIC_SENTINEL))
    {
        rest = rest.replace(sentinel, "");
    }
    !rest.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_email_keeps_surrounding_text() {
        let out = redact("Contact me at jane.doe@example.com today.", &PiiCategory::ALL);
        assert_eq!(out, "Contact me at [REDACTED-EMAIL] today.");
    }

    #[test]
    fn test_redact_ssn_and_phone() {
        let out = redact("SSN 123-45-6789, phone 5551234567.", &PiiCategory::ALL);
        assert_eq!(out, "SSN [REDACTED-SSN], phone [REDACTED-PHONE].");
    }

    #[test]
    fn test_digits_inside_email_are_not_a_phone() {
        let out = redact("mail 5551234567@example.org", &PiiCategory::ALL);
        assert_eq!(out, "mail [REDACTED-EMAIL]");
    }

    #[test]
    fn test_longer_digit_runs_untouched() {
        let out = redact("12345678901 is eleven digits", &PiiCategory::ALL);
        assert_eq!(out, "12345678901 is eleven digits");
    }

    #[test]
    fn test_detect_respects_categories() {
        let text = "call 5551234567";
        assert_eq!(detect(text, &PiiCategory::ALL), Some(PiiCategory::Phone));
        assert_eq!(detect(text, &[PiiCategory::Email]), None);
    }

    #[test]
    fn test_fully_redacted() {
        assert!(is_fully_redacted("[REDACTED-EMAIL] [REDACTED-PHONE]."));
        assert!(!is_fully_redacted("x = [REDACTED-PHONE]"));
    }
}
