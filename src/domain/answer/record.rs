//! Answer record and route tags

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which branch of the pipeline produced an answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDecision {
    /// Grounded in the private knowledge base
    Kb,
    /// Grounded in secondary (web) search results
    Search,
    /// Ungrounded generation from general knowledge
    Fallback,
    /// A collaborator failed; the answer is a user-safe error message
    Error,
    /// The input guard rejected the question before any collaborator call
    Refused,
}

impl RouteDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kb => "kb",
            Self::Search => "search",
            Self::Fallback => "fallback",
            Self::Error => "error",
            Self::Refused => "refused",
        }
    }

    /// Routes whose answers carry source identifiers
    pub fn is_grounded(&self) -> bool {
        matches!(self, Self::Kb | Self::Search)
    }

    pub fn all() -> [RouteDecision; 5] {
        [
            Self::Kb,
            Self::Search,
            Self::Fallback,
            Self::Error,
            Self::Refused,
        ]
    }
}

impl fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kb" => Ok(Self::Kb),
            "search" => Ok(Self::Search),
            "fallback" => Ok(Self::Fallback),
            "error" => Ok(Self::Error),
            "refused" => Ok(Self::Refused),
            other => Err(format!("Unknown route '{}'", other)),
        }
    }
}

/// The externally visible result of answering a question.
///
/// Immutable once constructed. Sources are only kept for grounded routes,
/// so an ungrounded or failed answer can never advertise citations.
/// Serialize-only: every record goes through [`AnswerRecord::new`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRecord {
    answer: String,
    route: RouteDecision,
    sources: Vec<String>,
}

impl AnswerRecord {
    pub fn new(answer: impl Into<String>, route: RouteDecision, sources: Vec<String>) -> Self {
        let sources = if route.is_grounded() {
            sources
        } else {
            Vec::new()
        };

        Self {
            answer: answer.into(),
            route,
            sources,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, RouteDecision::Error, Vec::new())
    }

    pub fn refused(message: impl Into<String>) -> Self {
        Self::new(message, RouteDecision::Refused, Vec::new())
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn route(&self) -> RouteDecision {
        self.route
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_serialization() {
        assert_eq!(serde_json::to_string(&RouteDecision::Kb).unwrap(), "\"kb\"");
        assert_eq!(
            serde_json::to_string(&RouteDecision::Fallback).unwrap(),
            "\"fallback\""
        );
        assert_eq!(
            serde_json::to_string(&RouteDecision::Refused).unwrap(),
            "\"refused\""
        );
    }

    #[test]
    fn test_route_from_str() {
        for route in RouteDecision::all() {
            assert_eq!(route.as_str().parse::<RouteDecision>().unwrap(), route);
        }
        assert_eq!("  KB ".parse::<RouteDecision>().unwrap(), RouteDecision::Kb);
        assert!("mcp".parse::<RouteDecision>().is_err());
    }

    #[test]
    fn test_sources_dropped_for_ungrounded_routes() {
        let sources = vec!["algebra.txt".to_string()];

        let kb = AnswerRecord::new("a", RouteDecision::Kb, sources.clone());
        assert_eq!(kb.sources(), sources.as_slice());

        let search = AnswerRecord::new("a", RouteDecision::Search, sources.clone());
        assert_eq!(search.sources().len(), 1);

        for route in [
            RouteDecision::Fallback,
            RouteDecision::Error,
            RouteDecision::Refused,
        ] {
            let record = AnswerRecord::new("a", route, sources.clone());
            assert!(record.sources().is_empty(), "{route} kept sources");
        }
    }

    #[test]
    fn test_record_serializes_three_fields() {
        let record = AnswerRecord::new("Steps:\nx = 2", RouteDecision::Search, vec!["https://a.example".into()]);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "answer": "Steps:\nx = 2",
                "route": "search",
                "sources": ["https://a.example"]
            })
        );
    }
}
