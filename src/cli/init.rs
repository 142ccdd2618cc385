use clap::Args;
use tracing::info;

use crate::config::Config;
use crate::core::Database;
use crate::error::Result;

#[derive(Args)]
pub struct InitArgs {}

pub async fn execute(_args: InitArgs, config: &Config) -> Result<()> {
    info!("Initializing question bank at: {}", config.database_path.display());

    // Opening the database creates the file and runs schema setup
    let _db = Database::new(&config.database_path).await?;

    println!("🗄️  Question bank initialized!");
    println!("📂 Database: {}", config.database_path.display());
    println!("\n📋 Next steps:");
    println!("  1. Run 'quizbank import' to bulk-import the seed file");
    println!("  2. Run 'quizbank add <TEXT> -a <ANSWER> -c <ANSWER>' to add questions");

    Ok(())
}
