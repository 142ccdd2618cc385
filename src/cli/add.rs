use clap::Args;
use tracing::info;

use crate::cli::{render, QuestionArgs};
use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    question: QuestionArgs,
}

pub async fn execute(args: AddArgs, config: &Config) -> Result<()> {
    let question = args.question.into_question()?;

    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    info!("Adding question: {:?}", question.question_text);
    let stored = service.add_question(question).await?;

    println!("✅ Question added with id {}", stored.id);
    render::output_detailed(&stored);

    Ok(())
}
