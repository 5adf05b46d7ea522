use thiserror::Error;

/// Failure to read an upload as delimited text.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: u64 },

    #[error("Row on line {line} has {found} fields, header has {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    DecodeError(#[from] DecodeError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Upload not found: {path}")]
    MissingUpload { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
}

impl IntakeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            IntakeError::IoError(_) | IntakeError::SerializationError(_) => ErrorCategory::Io,
            IntakeError::DecodeError(_) | IntakeError::MissingUpload { .. } => {
                ErrorCategory::Input
            }
            IntakeError::ConfigError { .. }
            | IntakeError::ConfigValidationError { .. }
            | IntakeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IntakeError::IoError(e) => format!("Could not read or write a file: {}", e),
            IntakeError::DecodeError(e) => format!("The uploaded file is not valid CSV: {}", e),
            IntakeError::SerializationError(e) => format!("Could not encode the result: {}", e),
            IntakeError::ConfigError { message } => format!("Configuration problem: {}", message),
            IntakeError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            IntakeError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}': {}", value, field, reason)
            }
            IntakeError::MissingUpload { path } => format!("No upload found at '{}'", path),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check file permissions and available disk space",
            ErrorCategory::Input => "Check the upload path and that the file is comma-separated text",
            ErrorCategory::Configuration => "Fix the configuration file or command line flags",
        }
    }
}

pub type Result<T> = std::result::Result<T, IntakeError>;
