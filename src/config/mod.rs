//! Configuration module for Corpus-Mill
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use corpus_mill::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling {} with a budget of {} words",
//!     config.site.base_url, config.corpus.max_words);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CorpusConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
