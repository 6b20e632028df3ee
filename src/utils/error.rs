use thiserror::Error;

#[derive(Error, Debug)]
pub enum DailyKitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid date '{value}', expected format {format}")]
    InvalidDateError { value: String, format: &'static str },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    ValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported file format: {path}")]
    UnsupportedFormatError { path: String },
}

pub type Result<T> = std::result::Result<T, DailyKitError>;
