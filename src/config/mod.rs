use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use tracing::warn;

fn default_seed_path() -> PathBuf {
    PathBuf::from("data/questions.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database file path
    pub database_path: PathBuf,

    /// Seed file used by the import command
    #[serde(default = "default_seed_path")]
    pub seed_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let default_data_path = match ProjectDirs::from("net", "quizbank", "quizbank") {
            Some(project_dirs) => project_dirs.data_dir().to_path_buf(),
            None => {
                // Graceful fallback to current directory if project dirs unavailable
                warn!("ProjectDirs unavailable; falling back to current directory for data path");
                PathBuf::from(".")
            }
        };

        Self {
            database_path: default_data_path.join("quizbank.db"),
            seed_path: default_seed_path(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Try to load .env file if it exists (for Docker and development)
        dotenvy::dotenv().ok();

        // Start with default configuration
        let mut config = Self::default();

        // Override with file configuration if available
        let config_file = if let Some(path) = config_path {
            PathBuf::from(path)
        } else {
            Self::default_config_path()?
        };

        if config_file.exists() {
            let content = fs::read_to_string(&config_file)?;
            let file_config: Config = toml::from_str(&content)?;
            config = file_config;
        }

        // Override with environment variables (highest priority)
        config.load_from_env();

        // Ensure data directory exists
        if let Some(parent) = config.database_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Save config file if it doesn't exist
        if !config_file.exists() {
            if let Some(parent) = config_file.parent() {
                fs::create_dir_all(parent)?;
            }
            config.save(&config_file)?;
        }

        Ok(config)
    }

    /// Load configuration from environment variables
    fn load_from_env(&mut self) {
        if let Ok(db_path) = env::var("QUIZBANK_DATABASE_PATH") {
            self.database_path = PathBuf::from(db_path);
        }

        if let Ok(seed_path) = env::var("QUIZBANK_SEED_PATH") {
            self.seed_path = PathBuf::from(seed_path);
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn default_config_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("net", "quizbank", "quizbank")
            .ok_or_else(|| anyhow::anyhow!("Failed to determine project directories"))?;

        Ok(project_dirs.config_dir().join("config.toml"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Self::default_config_path()
    }
}
