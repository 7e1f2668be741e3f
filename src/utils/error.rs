use crate::domain::model::FieldErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InquiryError {
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Submission failed: {message}")]
    Submission { message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown form field: {name}")]
    UnknownField { name: String },
}

impl InquiryError {
    /// Whether the user can recover by editing the form or submitting again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            InquiryError::Validation(_) | InquiryError::Submission { .. } | InquiryError::Http(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InquiryError::Validation(errors) => {
                format!("Please fix the highlighted fields: {}", errors)
            }
            InquiryError::Submission { .. } | InquiryError::Http(_) => {
                "Failed to send message. Please try again.".to_string()
            }
            InquiryError::Io(e) => format!("Could not read a required file: {}", e),
            InquiryError::Serialization(e) => format!("Could not encode the inquiry: {}", e),
            InquiryError::ConfigError { message } => format!("Invalid configuration: {}", message),
            InquiryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid configuration value for {}: {}", field, reason)
            }
            InquiryError::UnknownField { name } => format!("'{}' is not a form field", name),
        }
    }
}

pub type Result<T> = std::result::Result<T, InquiryError>;
