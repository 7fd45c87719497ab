//! Error types for Planboard

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // Configuration Errors
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Page size {size} is not one of the allowed options {options:?}")]
    InvalidPageSize { size: usize, options: Vec<usize> },

    #[error("Invalid page size options: {0}")]
    InvalidPageSizeOptions(String),

    #[error("Invalid colour token: {0}")]
    InvalidColor(String),

    #[error("Unknown theme preset: {0}")]
    UnknownTheme(String),

    // Data Errors
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    #[error("Failed to decode fixture {name}: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::ConfigRead { .. } => "ConfigRead",
            Error::ConfigParse(_) => "ConfigParse",
            Error::ConfigSerialize(_) => "ConfigSerialize",
            Error::InvalidPageSize { .. } => "InvalidPageSize",
            Error::InvalidPageSizeOptions(_) => "InvalidPageSizeOptions",
            Error::InvalidColor(_) => "InvalidColor",
            Error::UnknownTheme(_) => "UnknownTheme",
            Error::UnknownDataset(_) => "UnknownDataset",
            Error::Fixture { .. } => "Fixture",
            Error::InvalidDate(_) => "InvalidDate",
            Error::Io(_) => "Io",
            Error::Other(_) => "Internal",
        }
    }

    /// Whether the error came from user-supplied configuration
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Error::ConfigRead { .. }
                | Error::ConfigParse(_)
                | Error::InvalidPageSize { .. }
                | Error::InvalidPageSizeOptions(_)
                | Error::InvalidColor(_)
                | Error::UnknownTheme(_)
        )
    }
}
