pub use anyhow::bail;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppguardError {
    Config(String),
    State(String),
    Platform(String),
    Io(#[from] std::io::Error),
    Serialization(String),
    Internal(String),
    Other(#[from] anyhow::Error),
}

impl Display for AppguardError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AppguardError::Config(s) => write!(f, "Configuration error: {}", s),
            AppguardError::State(s) => write!(f, "Setup state error: {}", s),
            AppguardError::Platform(s) => write!(f, "Platform error: {}", s),
            AppguardError::Io(e) => write!(f, "I/O error: {}", e),
            AppguardError::Serialization(s) => write!(f, "Serialization error: {}", s),
            AppguardError::Internal(s) => write!(f, "Internal error: {}", s),
            AppguardError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl From<serde_yaml_ng::Error> for AppguardError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        AppguardError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for AppguardError {
    fn from(err: serde_json::Error) -> Self {
        AppguardError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppguardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AppguardError::Config("missing display_order".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing display_order");

        let err = AppguardError::State("unwritable state file".to_string());
        assert_eq!(err.to_string(), "Setup state error: unwritable state file");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AppguardError = io_err.into();
        assert!(matches!(err, AppguardError::Io(_)));
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: AppguardError = json_err.into();
        assert!(matches!(err, AppguardError::Serialization(_)));
    }
}
