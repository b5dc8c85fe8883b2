//! Tutor Gateway
//!
//! Answers mathematics questions by routing between a curated knowledge
//! base, web search and ungrounded generation, depending on how confident
//! retrieval is. Every question and answer passes through a content guard.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::ContentGuard;
use infrastructure::{
    embedding::create_embedder,
    feedback::{create_feedback_repository, FeedbackService},
    knowledge_store::KnowledgeStoreFactory,
    llm::GeneratorFactory,
    routing::RoutingPipeline,
    search::create_search_tool,
};

/// Wire the collaborators named in the configuration into a pipeline
pub fn build_pipeline(config: &AppConfig) -> anyhow::Result<RoutingPipeline> {
    config.validate()?;

    let embedder = create_embedder(&config.embedding)?;
    let knowledge_store = KnowledgeStoreFactory::create(&config.knowledge_store)?;
    let search_tool = create_search_tool(&config.search)?;
    let generator = GeneratorFactory::create(&config.generator)?;
    let guard = ContentGuard::new(config.guard.to_policy());

    tracing::info!(
        kb_threshold = config.routing.kb_threshold,
        top_k = config.routing.top_k,
        knowledge_store = knowledge_store.store_name(),
        search_tool = search_tool.tool_name(),
        generator = generator.provider_name(),
        "Routing pipeline ready"
    );

    Ok(
        RoutingPipeline::new(embedder, knowledge_store, search_tool, generator)
            .with_guard(guard)
            .with_config(config.routing.clone())
            .with_search_top_k(config.search.top_k)
            .with_max_tokens(config.generator.max_tokens),
    )
}

/// Create the state shared by all HTTP handlers
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pipeline = build_pipeline(config)?;
    let repository = create_feedback_repository(&config.storage).await?;

    Ok(AppState::new(
        Arc::new(pipeline),
        Arc::new(FeedbackService::new(repository)),
    ))
}
