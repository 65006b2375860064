use thiserror::Error;
use tracing::Level;

use crate::config::{LoggingSettings, Settings};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct SettingsValidator;

impl SettingsValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<SettingsError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_logging(&settings.logging) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_logging(logging: &LoggingSettings) -> Result<(), Vec<SettingsError>> {
        let mut errors = Vec::new();

        if logging.level.trim().is_empty() {
            errors.push(SettingsError::MissingField("logging.level".to_string()));
        } else if logging.level.parse::<Level>().is_err() {
            errors.push(SettingsError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!(
                    "'{}' is not one of trace, debug, info, warn, error",
                    logging.level
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShellSettings;
    use crate::navigation::Destination;

    fn settings_with_level(level: &str) -> Settings {
        Settings {
            shell: ShellSettings {
                initial_route: Destination::Form,
            },
            logging: LoggingSettings {
                level: level.to_string(),
            },
        }
    }

    #[test]
    fn test_valid_settings() {
        assert!(SettingsValidator::validate(&settings_with_level("warn")).is_ok());
        assert!(SettingsValidator::validate(&settings_with_level("TRACE")).is_ok());
    }

    #[test]
    fn test_invalid_level() {
        let errors = SettingsValidator::validate(&settings_with_level("chatty")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn test_empty_level() {
        let errors = SettingsValidator::validate(&settings_with_level(" ")).unwrap_err();
        assert!(matches!(errors[0], SettingsError::MissingField(_)));
    }
}
