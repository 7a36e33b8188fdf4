use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillingError {
    #[error("Config directory not found at {0}. Run 'mpbill init' to create it.")]
    ConfigNotFound(PathBuf),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config directory already exists at {0}")]
    AlreadyInitialized(PathBuf),

    #[error("Product '{0}' not found in catalog.toml")]
    ProductNotFound(String),

    #[error("Invalid competencia '{0}'. Expected 'YYYY-MM' (e.g., '2024-05')")]
    InvalidCompetencia(String),

    /// `row` is 1-based, in file order.
    #[error("Invalid competencia '{value}' in row {row} of {path}. Expected 'YYYY-MM'")]
    InvalidRowCompetencia {
        path: PathBuf,
        row: usize,
        value: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BillingError>;
