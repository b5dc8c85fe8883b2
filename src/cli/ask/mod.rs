//! Ask command - answers one question through the full pipeline

use clap::Args;

use crate::config::AppConfig;
use crate::infrastructure::logging;

#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to answer
    pub question: String,

    /// Number of knowledge base hits to retrieve
    #[arg(long)]
    pub top_k: Option<usize>,
}

/// Answer the question and print the record to stdout
pub async fn run(args: AskArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let pipeline = crate::build_pipeline(&config)?;
    let top_k = args.top_k.unwrap_or(config.routing.top_k);
    let record = pipeline.ask_with_top_k(&args.question, top_k).await;

    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}
