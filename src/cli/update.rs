use clap::Args;
use tracing::info;

use crate::cli::{render, QuestionArgs};
use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct UpdateArgs {
    /// Id of the question to overwrite
    #[arg(value_name = "ID")]
    id: i64,

    #[command(flatten)]
    question: QuestionArgs,
}

pub async fn execute(args: UpdateArgs, config: &Config) -> Result<()> {
    let question = args.question.into_question()?;

    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    info!("Updating question {}", args.id);
    let updated = service.update_question(args.id, question).await?;

    println!("✅ Question {} updated", updated.id);
    render::output_detailed(&updated);

    Ok(())
}
