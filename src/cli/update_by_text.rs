use clap::Args;
use tracing::info;

use crate::cli::{render, QuestionArgs};
use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct UpdateByTextArgs {
    /// Substring identifying the question to overwrite (first match wins)
    #[arg(value_name = "QUERY")]
    query: String,

    #[command(flatten)]
    question: QuestionArgs,
}

pub async fn execute(args: UpdateByTextArgs, config: &Config) -> Result<()> {
    let question = args.question.into_question()?;

    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    info!("Updating first question matching {:?}", args.query);
    match service.update_question_by_text(&args.query, question).await? {
        Some(updated) => {
            println!("✅ Question {} updated", updated.id);
            render::output_detailed(&updated);
        }
        None => {
            println!("No question matches {:?}; nothing updated", args.query);
        }
    }

    Ok(())
}
