use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Bracket index {index} is out of range (registry holds {len} brackets)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Readline error: {0}")]
    ReadlineError(#[from] rustyline::error::ReadlineError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, QuoteError>;
