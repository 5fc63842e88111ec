use crate::{ConfigError, ConfigResult};

/// 每个配置段在启动时校验一次
pub trait ConfigValidator {
    fn validate(&self) -> ConfigResult<()>;
}

pub struct ValidationUtils;

impl ValidationUtils {
    pub fn validate_not_empty(value: &str, field: &str) -> ConfigResult<()> {
        if value.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "{field} must not be empty"
            )));
        }
        Ok(())
    }

    pub fn validate_count(value: usize, field: &str) -> ConfigResult<()> {
        if value == 0 {
            return Err(ConfigError::Validation(format!(
                "{field} must be greater than 0"
            )));
        }
        Ok(())
    }

    pub fn validate_timeout_seconds(value: u64, field: &str) -> ConfigResult<()> {
        if value == 0 || value > 3600 {
            return Err(ConfigError::Validation(format!(
                "{field} must be between 1 and 3600 seconds"
            )));
        }
        Ok(())
    }

    pub fn validate_probability(value: f64, field: &str) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::Validation(format!(
                "{field} must be between 0.0 and 1.0"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(ValidationUtils::validate_not_empty("value", "field").is_ok());
        assert!(ValidationUtils::validate_not_empty("", "field").is_err());
        assert!(ValidationUtils::validate_not_empty("   ", "field").is_err());
    }

    #[test]
    fn test_validate_count() {
        assert!(ValidationUtils::validate_count(1, "field").is_ok());
        assert!(ValidationUtils::validate_count(0, "field").is_err());
    }

    #[test]
    fn test_validate_timeout_seconds() {
        assert!(ValidationUtils::validate_timeout_seconds(30, "field").is_ok());
        assert!(ValidationUtils::validate_timeout_seconds(0, "field").is_err());
        assert!(ValidationUtils::validate_timeout_seconds(3601, "field").is_err());
    }

    #[test]
    fn test_validate_probability() {
        assert!(ValidationUtils::validate_probability(0.05, "field").is_ok());
        assert!(ValidationUtils::validate_probability(0.0, "field").is_ok());
        assert!(ValidationUtils::validate_probability(1.0, "field").is_ok());
        assert!(ValidationUtils::validate_probability(-0.1, "field").is_err());
        assert!(ValidationUtils::validate_probability(1.1, "field").is_err());
    }
}
