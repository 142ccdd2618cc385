use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct ImportArgs {
    /// Seed file path (defaults to the configured seed file)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

pub async fn execute(args: ImportArgs, config: &Config) -> Result<()> {
    let seed_path = args.file.unwrap_or_else(|| config.seed_path.clone());

    info!("📋 Importing questions from: {}", seed_path.display());

    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid spinner template"),
    );
    spinner.set_message(format!("Importing from {}", seed_path.display()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let imported = service.add_all_questions(&seed_path).await;
    spinner.finish_and_clear();
    let imported = imported?;

    let total = service.get_quantity().await?;

    println!("📥 Imported {} question(s)", imported);
    println!("🗄️  Total questions in bank: {}", total);

    Ok(())
}
