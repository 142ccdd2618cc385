use clap::Args;

use crate::cli::render;
use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct GetArgs {
    /// Question id
    #[arg(value_name = "ID")]
    id: i64,

    /// Output format (detailed, json)
    #[arg(long, default_value = "detailed")]
    format: String,
}

pub async fn execute(args: GetArgs, config: &Config) -> Result<()> {
    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    let question = service.get_question(args.id).await?;

    match args.format.as_str() {
        "json" => render::output_json(std::slice::from_ref(&question))?,
        _ => render::output_detailed(&question),
    }

    Ok(())
}
