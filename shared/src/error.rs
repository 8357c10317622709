use thiserror::Error;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum SharedError {
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl {
        url: String,
        reason: String,
    },

    #[error("Invalid endpoint rule: {0}")]
    InvalidRule(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl SharedError {
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_url_display() {
        let err = SharedError::invalid_url("not a url", "relative URL without a base");
        assert_eq!(
            err.to_string(),
            "Invalid URL 'not a url': relative URL without a base"
        );
    }

    #[test]
    fn test_json_error_converts_to_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: SharedError = json_err.into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[test]
    fn test_error_serializes() {
        let err = SharedError::MissingField("en".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"MissingField":"en"}"#);
    }
}
