pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::{MenuChoice, MenuSession};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use crate::core::{BracketRegistry, PricingTier, QuoteEngine, DEFAULT_CURRENCY};
pub use domain::{Applicant, Bracket, Quote};
pub use utils::error::{QuoteError, Result};
