pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "quote-engine")]
#[command(about = "Console tool for age-bracket insurance premium quotes")]
pub struct CliConfig {
    /// TOML file with bracket presets to seed the registry
    #[arg(long)]
    pub config: Option<String>,

    /// Currency label used when printing rates and quotes
    #[arg(long)]
    pub currency: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(currency) = &self.currency {
            validation::validate_non_empty_string("currency", currency)?;
        }
        Ok(())
    }
}
