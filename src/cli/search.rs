use clap::Args;
use tracing::info;

use crate::cli::render;
use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct SearchArgs {
    /// Substring to search for (case-insensitive)
    #[arg(value_name = "QUERY")]
    query: String,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    format: String,

    /// Limit number of results
    #[arg(long)]
    limit: Option<usize>,
}

pub async fn execute(args: SearchArgs, config: &Config) -> Result<()> {
    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    let mut results = service.search_questions(&args.query).await?;

    if let Some(limit) = args.limit {
        results.truncate(limit);
    }

    if results.is_empty() {
        info!("No questions match {:?}", args.query);
        return Ok(());
    }

    info!("Found {} result(s)", results.len());

    match args.format.as_str() {
        "json" => render::output_json(&results)?,
        _ => render::output_table(&results),
    }

    Ok(())
}
