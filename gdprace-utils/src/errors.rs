// Error types for dataset loading and animator configuration

use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Errors raised while building or loading a [`crate::Dataset`].
///
/// All of these are fatal: a dataset that fails validation never reaches the
/// animator.
#[derive(Debug, Error, Diagnostic)]
pub enum DatasetError {
    #[error("timeline has no years")]
    #[diagnostic(code(gdprace::dataset::empty_timeline))]
    EmptyTimeline,

    #[error("timeline is not strictly increasing: {previous} is followed by {next}")]
    #[diagnostic(code(gdprace::dataset::timeline_order))]
    TimelineNotIncreasing { previous: i32, next: i32 },

    #[error("series '{code}' has no value for {year}")]
    #[diagnostic(
        code(gdprace::dataset::missing_year),
        help("every series needs a value for every year of the timeline")
    )]
    MissingYear { code: String, year: i32 },

    #[error("series '{code}' has an invalid value for {year}: {value}")]
    #[diagnostic(
        code(gdprace::dataset::invalid_value),
        help("values must be finite and non-negative")
    )]
    InvalidValue { code: String, year: i32, value: f64 },

    #[error("series code '{0}' is declared more than once")]
    #[diagnostic(code(gdprace::dataset::duplicate_code))]
    DuplicateCode(String),

    #[error("series '{code}' has an invalid colour '{color}'")]
    #[diagnostic(
        code(gdprace::dataset::invalid_color),
        help("colours are written as #rrggbb")
    )]
    InvalidColor { code: String, color: String },

    #[error("failed to parse dataset: {0}")]
    #[diagnostic(code(gdprace::dataset::parse))]
    Parse(#[from] serde_json::Error),

    #[error("failed to read dataset: {0}")]
    #[diagnostic(code(gdprace::dataset::io))]
    Io(#[from] io::Error),
}

/// Result type for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors raised while loading an [`crate::AnimatorConfig`].
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] kdl::KdlError),

    #[error("invalid value for '{key}': {reason}")]
    #[diagnostic(code(gdprace::config::invalid_value))]
    InvalidValue { key: String, reason: String },

    #[error("unknown config key '{0}'")]
    #[diagnostic(
        code(gdprace::config::unknown_key),
        help("known keys: year_duration, pause, top_n, fps, bar_width")
    )]
    UnknownKey(String),

    #[error("failed to read config: {0}")]
    #[diagnostic(code(gdprace::config::io))]
    Io(#[from] io::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DatasetError::MissingYear {
            code: "USA".to_string(),
            year: 2004,
        };
        assert!(err.to_string().contains("USA"));
        assert!(err.to_string().contains("2004"));

        let err = ConfigError::InvalidValue {
            key: "top_n".to_string(),
            reason: "must be at least 1".to_string(),
        };
        assert_eq!(err.to_string(), "invalid value for 'top_n': must be at least 1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: DatasetError = io_err.into();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
