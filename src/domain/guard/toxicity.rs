//! Sentence-level toxicity scoring

use std::fmt::Debug;

use unicode_segmentation::UnicodeSegmentation;

use super::error::PolicyViolation;

pub const TOXIC_SENTINEL: &str = "[REDACTED-TOXIC]";

/// Scores a single sentence for toxicity in [0, 1]
pub trait ToxicityScorer: Send + Sync + Debug {
    fn score(&self, sentence: &str) -> Result<f32, PolicyViolation>;
}

/// Weighted word list scorer; the sentence score is the capped sum of weights
#[derive(Debug, Clone)]
pub struct LexiconToxicityScorer {
    weights: Vec<(String, f32)>,
}

const DEFAULT_LEXICON: &[(&str, f32)] = &[
    ("idiot", 0.8),
    ("idiots", 0.8),
    ("moron", 0.8),
    ("imbecile", 0.8),
    ("stupid", 0.7),
    ("dumb", 0.6),
    ("loser", 0.6),
    ("worthless", 0.6),
    ("pathetic", 0.5),
    ("hate", 0.4),
    ("kill", 0.5),
    ("shut", 0.2),
    ("ugly", 0.4),
    ("crap", 0.4),
    ("shit", 0.7),
    ("bastard", 0.8),
    ("bitch", 0.9),
    ("fuck", 0.9),
    ("fucking", 0.9),
];

impl Default for LexiconToxicityScorer {
    fn default() -> Self {
        Self::new(
            DEFAULT_LEXICON
                .iter()
                .map(|(w, s)| (w.to_string(), *s)),
        )
    }
}

impl LexiconToxicityScorer {
    pub fn new(weights: impl IntoIterator<Item = (String, f32)>) -> Self {
        Self {
            weights: weights
                .into_iter()
                .map(|(w, s)| (w.to_lowercase(), s.clamp(0.0, 1.0)))
                .collect(),
        }
    }
}

impl ToxicityScorer for LexiconToxicityScorer {
    fn score(&self, sentence: &str) -> Result<f32, PolicyViolation> {
        let total: f32 = sentence
            .unicode_words()
            .map(|word| {
                let word = word.to_lowercase();
                self.weights
                    .iter()
                    .find(|(w, _)| *w == word)
                    .map(|(_, s)| *s)
                    .unwrap_or(0.0)
            })
            .sum();
        Ok(total.min(1.0))
    }
}

/// Outcome of scanning a text sentence by sentence
#[derive(Debug, Clone, PartialEq)]
pub struct ToxicityScan {
    /// Text with every toxic sentence replaced by the sentinel
    pub filtered: String,
    /// Highest sentence score seen
    pub max_score: f32,
    /// Number of sentences replaced
    pub redacted: usize,
}

/// Score every sentence and redact the ones at or above the threshold.
///
/// Whitespace around a redacted sentence is kept.
pub fn scan(
    scorer: &dyn ToxicityScorer,
    text: &str,
    threshold: f32,
) -> Result<ToxicityScan, PolicyViolation> {
    let mut filtered = String::with_capacity(text.len());
    let mut max_score = 0.0f32;
    let mut redacted = 0;

    for sentence in text.split_sentence_bounds() {
        let content = sentence.trim();
        if content.is_empty() {
            filtered.push_str(sentence);
            continue;
        }

        let score = scorer.score(content)?;
        max_score = max_score.max(score);

        if score >= threshold {
            redacted += 1;
            let start = sentence.len() - sentence.trim_start().len();
            let end = start + content.len();
            filtered.push_str(&sentence[..start]);
            filtered.push_str(TOXIC_SENTINEL);
            filtered.push_str(&sentence[end..]);
        } else {
            filtered.push_str(sentence);
        }
    }

    Ok(ToxicityScan {
        filtered,
        max_score,
        redacted,
    })
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Scorer that fails on every call
    #[derive(Debug)]
    pub struct FailingScorer;

    impl ToxicityScorer for FailingScorer {
        fn score(&self, _sentence: &str) -> Result<f32, PolicyViolation> {
            Err(PolicyViolation::Scorer("model unavailable".into()))
        }
    }
}
