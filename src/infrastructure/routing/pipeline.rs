//! Routing pipeline
//!
//! Runs a question through the input guard, picks the knowledge base,
//! web search or ungrounded path depending on retrieval confidence, then
//! post-processes and re-checks the generated answer.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::knowledge_store::distinct_sources;
use crate::domain::routing::{knowledge_context, search_context};
use crate::domain::search::result_urls;
use crate::domain::{
    extract_steps, AnswerRecord, ContentGuard, DomainError, Embedder, Generator, KnowledgeStore,
    PromptKind, RetrievalConfidence, RouteDecision, RoutingConfig, SearchTool,
};
use crate::infrastructure::observability::{
    record_collaborator_error, record_guard_violation, record_route_decision,
};

/// Answer returned when the input guard rejects a question
pub const REFUSAL_MESSAGE: &str =
    "This assistant only handles mathematics questions. Please provide a math-related query.";

/// Answer returned when the generated text fails the output guard
pub const SAFETY_FALLBACK_MESSAGE: &str =
    "The generated answer did not meet safety requirements. Please rephrase the question.";

const DEFAULT_MAX_TOKENS: u32 = 400;

/// Collaborator call that failed
#[derive(Debug, Clone, Copy)]
enum Stage {
    Embedding,
    Retrieval,
    Generation,
}

impl Stage {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Embedding => "embedding",
            Self::Retrieval => "retrieval",
            Self::Generation => "generation",
        }
    }

    fn service(&self) -> &'static str {
        match self {
            Self::Embedding => "embedding service",
            Self::Retrieval => "knowledge base",
            Self::Generation => "answer generator",
        }
    }
}

/// Grounded answer before extraction and the output guard
struct Draft {
    raw: String,
    route: RouteDecision,
    sources: Vec<String>,
}

/// Process-scoped routing context, shared behind `Arc` by all requests
#[derive(Debug, Clone)]
pub struct RoutingPipeline {
    embedder: Arc<dyn Embedder>,
    knowledge_store: Arc<dyn KnowledgeStore>,
    search_tool: Arc<dyn SearchTool>,
    generator: Arc<dyn Generator>,
    guard: ContentGuard,
    config: RoutingConfig,
    search_top_k: usize,
    max_tokens: u32,
}

impl RoutingPipeline {
    pub fn new(
        embedder: Arc<dyn Embedder>,
        knowledge_store: Arc<dyn KnowledgeStore>,
        search_tool: Arc<dyn SearchTool>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        let config = RoutingConfig::default();
        Self {
            embedder,
            knowledge_store,
            search_tool,
            generator,
            guard: ContentGuard::default(),
            search_top_k: config.top_k,
            config,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_guard(mut self, guard: ContentGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_config(mut self, config: RoutingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_search_top_k(mut self, top_k: usize) -> Self {
        self.search_top_k = top_k.max(1);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens.max(1);
        self
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    pub fn knowledge_store(&self) -> &Arc<dyn KnowledgeStore> {
        &self.knowledge_store
    }

    /// Answer a question with the configured `top_k`
    pub async fn ask(&self, question: &str) -> AnswerRecord {
        self.ask_with_top_k(question, self.config.top_k).await
    }

    /// Answer a question: input guard, then routing.
    ///
    /// Always yields a well-formed record; failures become the `refused`
    /// or `error` routes.
    pub async fn ask_with_top_k(&self, question: &str, top_k: usize) -> AnswerRecord {
        let question = match self.guard.validate_input(question) {
            Ok(question) => question,
            Err(violation) => {
                info!(
                    route = RouteDecision::Refused.as_str(),
                    violation = %violation,
                    "Question rejected by input guard"
                );
                record_guard_violation("input");
                record_route_decision(RouteDecision::Refused, std::time::Duration::ZERO);
                return AnswerRecord::refused(REFUSAL_MESSAGE);
            }
        };

        self.route(&question, top_k).await
    }

    /// Route an already validated question
    pub async fn route(&self, question: &str, top_k: usize) -> AnswerRecord {
        let started = Instant::now();
        let top_k = top_k.max(1);

        let record = match self.draft(question, top_k).await {
            Ok(draft) => self.finish(draft),
            Err((stage, error)) => Self::failure(stage, &error),
        };

        let elapsed = started.elapsed();
        info!(
            route = record.route().as_str(),
            sources = record.sources().len(),
            elapsed_ms = elapsed.as_millis() as u64,
            "Question answered"
        );
        record_route_decision(record.route(), elapsed);

        record
    }

    async fn draft(&self, question: &str, top_k: usize) -> Result<Draft, (Stage, DomainError)> {
        let vector = self
            .embedder
            .encode(question)
            .await
            .map_err(|e| (Stage::Embedding, e))?;

        let hits = self
            .knowledge_store
            .query(&vector, top_k)
            .await
            .map_err(|e| (Stage::Retrieval, e))?;

        let confidence = self.config.assess(&hits);
        debug!(
            hits = hits.len(),
            top_score = ?confidence.top_score(),
            threshold = self.config.kb_threshold,
            "Knowledge store queried"
        );

        let (kind, context, route, sources) = match confidence {
            RetrievalConfidence::Confident { top_score } => {
                info!(
                    route = RouteDecision::Kb.as_str(),
                    top_score,
                    threshold = self.config.kb_threshold,
                    "Retrieval confident"
                );
                (
                    PromptKind::KnowledgeBase,
                    knowledge_context(&hits),
                    RouteDecision::Kb,
                    distinct_sources(&hits),
                )
            }
            RetrievalConfidence::Weak { top_score } => {
                let results = self.search_tool.search(question, self.search_top_k).await;
                if results.is_empty() {
                    info!(
                        route = RouteDecision::Fallback.as_str(),
                        top_score = ?top_score,
                        threshold = self.config.kb_threshold,
                        "No confident retrieval and no search results"
                    );
                    (
                        PromptKind::Fallback,
                        String::new(),
                        RouteDecision::Fallback,
                        Vec::new(),
                    )
                } else {
                    info!(
                        route = RouteDecision::Search.as_str(),
                        top_score = ?top_score,
                        threshold = self.config.kb_threshold,
                        results = results.len(),
                        tool = self.search_tool.tool_name(),
                        "Falling back to web search"
                    );
                    (
                        PromptKind::Search,
                        search_context(&results),
                        RouteDecision::Search,
                        result_urls(&results),
                    )
                }
            }
        };

        let prompt = kind.render(&context, question);
        let raw = self
            .generator
            .generate(&prompt, self.max_tokens)
            .await
            .map_err(|e| (Stage::Generation, e))?;

        Ok(Draft {
            raw,
            route,
            sources,
        })
    }

    fn finish(&self, draft: Draft) -> AnswerRecord {
        let answer = extract_steps(&draft.raw);

        match self.guard.validate_output(&answer) {
            Ok(answer) => AnswerRecord::new(answer, draft.route, draft.sources),
            Err(violation) => {
                warn!(
                    route = draft.route.as_str(),
                    violation = %violation,
                    "Generated answer rejected by output guard"
                );
                record_guard_violation("output");
                AnswerRecord::new(SAFETY_FALLBACK_MESSAGE, draft.route, draft.sources)
            }
        }
    }

    fn failure(stage: Stage, error: &DomainError) -> AnswerRecord {
        let timed_out = error.is_timeout();
        warn!(
            route = RouteDecision::Error.as_str(),
            stage = stage.as_str(),
            timed_out,
            error = %error,
            "Collaborator call failed"
        );
        record_collaborator_error(stage.as_str(), timed_out);

        AnswerRecord::error(format!(
            "Sorry, I could not answer your question ({}: {}). Please try again later.",
            stage.service(),
            error.short_description()
        ))
    }
}
