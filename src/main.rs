use clap::{Parser, Subcommand};

use quizbank::cli;
use quizbank::config::Config;
use quizbank::error::{QuizbankError, Result};
use quizbank::utils;

#[derive(Parser)]
#[command(name = "quizbank")]
#[command(about = "Command-line question bank with duplicate detection, search and JSON seed import")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file path (optional)
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the question database
    Init(cli::init::InitArgs),

    /// Add a single question (rejects duplicate text)
    Add(cli::add::AddArgs),

    /// Bulk-import questions from the JSON seed file (no duplicate checks)
    Import(cli::import::ImportArgs),

    /// Show one question by id
    Get(cli::get::GetArgs),

    /// List all questions
    List(cli::list::ListArgs),

    /// Search questions by substring
    Search(cli::search::SearchArgs),

    /// Overwrite a question by id
    Update(cli::update::UpdateArgs),

    /// Overwrite the first question matching a substring
    UpdateByText(cli::update_by_text::UpdateByTextArgs),

    /// Show bank statistics (total and duplicate counts)
    Stats(cli::stats::StatsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    utils::logging::init_logging(cli.verbose).map_err(QuizbankError::Internal)?;

    // Load configuration
    let config = Config::load(cli.config.as_deref()).map_err(QuizbankError::Internal)?;

    match cli.command {
        Commands::Init(args) => cli::init::execute(args, &config).await,
        Commands::Add(args) => cli::add::execute(args, &config).await,
        Commands::Import(args) => cli::import::execute(args, &config).await,
        Commands::Get(args) => cli::get::execute(args, &config).await,
        Commands::List(args) => cli::list::execute(args, &config).await,
        Commands::Search(args) => cli::search::execute(args, &config).await,
        Commands::Update(args) => cli::update::execute(args, &config).await,
        Commands::UpdateByText(args) => cli::update_by_text::execute(args, &config).await,
        Commands::Stats(args) => cli::stats::execute(args, &config).await,
    }
}
