use anyhow::Context;
use clap::Parser;
use quote_engine::utils::{logger, validation::Validate};
use quote_engine::{Bracket, CliConfig, MenuSession, QuoteEngine, TomlConfig, DEFAULT_CURRENCY};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting quote-engine CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 載入預設檔案（如果有）
    let mut preset_currency: Option<String> = None;
    let mut brackets: Vec<Bracket> = Vec::new();
    if let Some(path) = &config.config {
        match load_presets(path) {
            Ok((currency, preset_brackets)) => {
                preset_currency = currency;
                brackets = preset_brackets;
                tracing::info!("Loaded {} bracket presets from {}", brackets.len(), path);
            }
            Err(e) => {
                tracing::error!("❌ Failed to load preset file {}: {}", path, e);
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }

    // --currency 優先於預設檔案
    let currency = config
        .currency
        .clone()
        .or(preset_currency)
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

    let engine = QuoteEngine::with_brackets(currency, brackets);
    let mut session = MenuSession::new(engine);
    session.run().context("menu session failed")?;

    tracing::info!("✅ Session ended");
    Ok(())
}

fn load_presets(path: &str) -> quote_engine::Result<(Option<String>, Vec<Bracket>)> {
    let preset = TomlConfig::from_file(path)?;
    preset.validate()?;
    Ok((preset.currency().map(|c| c.to_string()), preset.brackets()))
}
