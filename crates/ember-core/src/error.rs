//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Frame failed: {0}")]
    Frame(String),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

impl EmberError {
    /// True for failures that happened before the loop was entered
    pub fn is_initialization(&self) -> bool {
        matches!(self, EmberError::Initialization(_))
    }
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EmberError::Frame("device lost".into());
        assert_eq!(err.to_string(), "Frame failed: device lost");

        let err = EmberError::Initialization("no window".into());
        assert_eq!(err.to_string(), "Initialization failed: no window");
        assert!(err.is_initialization());
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("not = = toml");
        let err: EmberError = parsed.unwrap_err().into();
        assert!(matches!(err, EmberError::TomlParseError(_)));
        assert!(!err.is_initialization());
    }
}
