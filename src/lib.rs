//! Corpus-Mill: a book-library corpus harvester
//!
//! This crate implements a batch crawler that walks a public book-library
//! site, downloads zipped HTML book archives, extracts readable prose
//! paragraphs, and accumulates them into a flat text corpus up to a
//! configured word budget.

pub mod config;
pub mod corpus;
pub mod crawler;
pub mod extract;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Corpus-Mill operations
#[derive(Debug, Error)]
pub enum MillError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Malformed Windows-1251 text in {path}")]
    Decode { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Corpus-Mill operations
pub type Result<T> = std::result::Result<T, MillError>;

// Re-export commonly used types
pub use config::Config;
pub use corpus::Corpus;
pub use extract::{extract_blocks, TextBlock};
