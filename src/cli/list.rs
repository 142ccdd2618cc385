use clap::Args;
use tracing::info;

use crate::cli::render;
use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct ListArgs {
    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    format: String,
}

pub async fn execute(args: ListArgs, config: &Config) -> Result<()> {
    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    let questions = service.get_questions().await?;

    if questions.is_empty() {
        info!("The question bank is empty");
        return Ok(());
    }

    match args.format.as_str() {
        "json" => render::output_json(&questions)?,
        _ => render::output_table(&questions),
    }

    Ok(())
}
