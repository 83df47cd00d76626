use std::path::PathBuf;

use thiserror::Error;

use crate::models::OptionKind;

/// Bikelog error types
#[derive(Error, Debug)]
pub enum BikelogError {
    #[error("Invalid date format: {0}. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("{0}")]
    MissingArgument(String),

    #[error("Invalid distance: {0}. Use a positive number of miles")]
    InvalidDistance(String),

    #[error("'{value}' is not in the {kind} list")]
    UnknownOption { kind: OptionKind, value: String },

    #[error("Cannot {action} '{}': {source}", .path.display())]
    FileSystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl BikelogError {
    /// Attach the failing path and action to an I/O error
    pub fn fs(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result type for Bikelog operations
pub type Result<T> = std::result::Result<T, BikelogError>;
