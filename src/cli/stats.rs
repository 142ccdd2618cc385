use clap::Args;

use crate::config::Config;
use crate::core::{Database, QuestionService};
use crate::error::Result;

#[derive(Args)]
pub struct StatsArgs {}

pub async fn execute(_args: StatsArgs, config: &Config) -> Result<()> {
    let db = Database::new(&config.database_path).await?;
    let service = QuestionService::new(&db);

    let total = service.get_quantity().await?;
    let duplicates = service.get_duplicates().await?;

    println!("🗄️  Questions in bank: {}", total);
    println!("👯 Duplicate records: {}", duplicates);

    Ok(())
}
