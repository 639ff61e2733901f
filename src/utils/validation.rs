use crate::utils::error::{QuoteError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_age_range(field_name: &str, min_age: u32, max_age: u32) -> Result<()> {
    if min_age > max_age {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("[{}-{}]", min_age, max_age),
            reason: "Minimum age must not exceed maximum age".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_rate(field_name: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(QuoteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: rate.to_string(),
            reason: "Rate must be a positive amount".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_age_range() {
        assert!(validate_age_range("bracket", 18, 25).is_ok());
        assert!(validate_age_range("bracket", 30, 30).is_ok());
        assert!(validate_age_range("bracket", 26, 18).is_err());
    }

    #[test]
    fn test_validate_positive_rate() {
        assert!(validate_positive_rate("rate", 100.0).is_ok());
        assert!(validate_positive_rate("rate", 0.0).is_err());
        assert!(validate_positive_rate("rate", -5.0).is_err());
        assert!(validate_positive_rate("rate", f64::NAN).is_err());
        assert!(validate_positive_rate("rate", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("currency", "frw").is_ok());
        assert!(validate_non_empty_string("currency", "").is_err());
        assert!(validate_non_empty_string("currency", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("config", "./brackets.toml").is_ok());
        assert!(validate_path("config", "").is_err());
    }
}
