use crate::domain::Bracket;
use crate::utils::error::{QuoteError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Preset file seeding the registry at startup. Edits made during the
/// session are never written back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub engine: Option<EngineConfig>,
    #[serde(default, rename = "bracket")]
    pub brackets: Vec<Bracket>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub currency: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QuoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QuoteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CURRENCY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(engine) = &self.engine {
            if let Some(currency) = &engine.currency {
                validation::validate_non_empty_string("engine.currency", currency)?;
            }
        }

        for (i, bracket) in self.brackets.iter().enumerate() {
            let field = format!("bracket[{}]", i);
            validation::validate_age_range(&field, bracket.min_age, bracket.max_age)?;
            validation::validate_positive_rate(&field, bracket.rate)?;
        }

        Ok(())
    }

    pub fn currency(&self) -> Option<&str> {
        self.engine.as_ref().and_then(|e| e.currency.as_deref())
    }

    pub fn brackets(&self) -> Vec<Bracket> {
        self.brackets.clone()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
