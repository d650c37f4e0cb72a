use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};

/// Terminal reader for the Kofu blog.
#[derive(Debug, Parser)]
#[command(name = "kofu", version)]
pub struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Write logs to this file (same as KOFU_LOG)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
            config.validate()?;
        }
        Ok(config)
    }
}
