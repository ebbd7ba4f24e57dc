use thiserror::Error;

use crate::validation::FieldError;

#[derive(Debug, Error)]
pub enum FraudScopeError {
    #[error("Please fix the errors in the form")]
    Validation(Vec<FieldError>),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Network error: {0}")]
    Transport(String),

    /// Message reported by the scoring API in its `{error}` body.
    #[error("{0}")]
    Api(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl FraudScopeError {
    /// Text shown to the user in a notification.
    ///
    /// API-reported messages are surfaced verbatim; everything else is
    /// prefixed so the user knows the analysis did not go through.
    pub fn user_message(&self) -> String {
        match self {
            FraudScopeError::Api(msg) => msg.clone(),
            FraudScopeError::Validation(_) => self.to_string(),
            other => format!("Analysis failed: {}", other),
        }
    }
}

impl From<reqwest::Error> for FraudScopeError {
    fn from(err: reqwest::Error) -> Self {
        FraudScopeError::Transport(err.to_string())
    }
}

impl From<FraudScopeError> for String {
    fn from(err: FraudScopeError) -> Self {
        err.to_string()
    }
}
