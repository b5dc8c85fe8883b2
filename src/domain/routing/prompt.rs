//! Prompt templates for the three answering paths

use crate::domain::knowledge_store::RetrievalHit;
use crate::domain::search::SearchResult;

const PERSONA: &str = "You are a patient mathematics tutor. Provide a step-by-step solution and a final answer, explaining your reasoning.";

const SCAFFOLD: &str = "Approach every problem step-by-step:
1. Understand: identify what kind of problem this is and what is being asked.
2. Plan: state your approach before calculating.
3. Solve: work through each step, naming the formula or concept you apply and why the step follows.
4. Verify: check that the result makes sense.";

/// Which grounding the prompt is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    KnowledgeBase,
    Search,
    Fallback,
}

impl PromptKind {
    fn instruction(&self) -> &'static str {
        match self {
            Self::KnowledgeBase => {
                "Use the context provided from the knowledge base. Cite it inline as [source N], where N is the position of the passage."
            }
            Self::Search => {
                "Use the web search results and include citations as a list of URLs. If the context is empty, say that you cannot find reliable sources."
            }
            Self::Fallback => {
                "You may answer from general knowledge, but avoid hallucinations and say so when you are unsure."
            }
        }
    }

    /// Render the full prompt for a question and its context
    pub fn render(&self, context: &str, question: &str) -> String {
        format!(
            "{PERSONA} {}\n\n{SCAFFOLD}\n\nContext:\n{context}\n\nQuestion:\n{question}\n\nAnswer step-by-step:",
            self.instruction()
        )
    }
}

/// Hit texts in retrieval order, separated by blank lines
pub fn knowledge_context(hits: &[RetrievalHit]) -> String {
    hits.iter()
        .map(|h| h.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `title: snippet` pairs separated by blank lines
pub fn search_context(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}: {}", r.title.trim(), r.snippet.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_context_and_question() {
        let prompt = PromptKind::KnowledgeBase.render("Pythagoras: a^2 + b^2 = c^2", "Find c");

        assert!(prompt.contains("[source N]"));
        assert!(prompt.contains("Context:\nPythagoras: a^2 + b^2 = c^2\n\nQuestion:\nFind c"));
        assert!(prompt.ends_with("Answer step-by-step:"));
    }

    #[test]
    fn test_variants_share_scaffold() {
        for kind in [
            PromptKind::KnowledgeBase,
            PromptKind::Search,
            PromptKind::Fallback,
        ] {
            let prompt = kind.render("", "q");
            assert!(prompt.contains("Understand:"));
            assert!(prompt.contains("Verify:"));
        }
        assert!(PromptKind::Search.render("", "q").contains("cannot find reliable sources"));
        assert!(PromptKind::Fallback.render("", "q").contains("avoid hallucinations"));
    }

    #[test]
    fn test_knowledge_context_keeps_order() {
        let hits = vec![
            RetrievalHit::new(0.9, "first"),
            RetrievalHit::new(0.8, "  "),
            RetrievalHit::new(0.7, "second"),
        ];
        assert_eq!(knowledge_context(&hits), "first\n\nsecond");
    }

    #[test]
    fn test_search_context_format() {
        let results = vec![
            SearchResult::new("Chain rule", "d/dx f(g(x))", "https://a"),
            SearchResult::new("Product rule", "(fg)' = f'g + fg'", "https://b"),
        ];
        assert_eq!(
            search_context(&results),
            "Chain rule: d/dx f(g(x))\n\nProduct rule: (fg)' = f'g + fg'"
        );
    }
}
