//! Error types for PheroMQ operations.
//!
//! The core has no fallible runtime paths — everything that can go wrong
//! is caught at construction or seeding time as a configuration error.

use std::error::Error;
use std::fmt;

/// Result type for PheroMQ operations.
pub type Result<T> = std::result::Result<T, PheromqError>;

/// Errors that can occur during PheroMQ operations.
#[derive(Debug, Clone)]
pub enum PheromqError {
    /// Configuration errors (rejected at construction).
    Config(ConfigError),
    /// Field seeding errors.
    Field(FieldError),
    /// I/O errors (wrapped).
    Io(String),
    /// Serialization errors.
    Serialization(String),
}

impl fmt::Display for PheromqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PheromqError::Config(e) => write!(f, "Config error: {}", e),
            PheromqError::Field(e) => write!(f, "Field error: {}", e),
            PheromqError::Io(msg) => write!(f, "I/O error: {}", msg),
            PheromqError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl Error for PheromqError {}

impl From<std::io::Error> for PheromqError {
    fn from(e: std::io::Error) -> Self {
        PheromqError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for PheromqError {
    fn from(e: serde_json::Error) -> Self {
        PheromqError::Serialization(e.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Value outside its documented range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
    /// Invalid value with a free-form reason.
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
        }
    }
}

/// Field seeding errors.
#[derive(Debug, Clone)]
pub enum FieldError {
    /// Negative intensity supplied to `set`.
    NegativeIntensity(f64),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NegativeIntensity(v) => {
                write!(f, "Negative intensity: {} (must be >= 0)", v)
            }
        }
    }
}

// Convenience constructors
impl PheromqError {
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        PheromqError::Config(ConfigError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PheromqError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }

    pub fn negative_intensity(value: f64) -> Self {
        PheromqError::Field(FieldError::NegativeIntensity(value))
    }
}
