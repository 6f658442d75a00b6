//! Configuration module for urlhash
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; a missing file section falls back to the defaults the
//! CLI documents.
//!
//! # Example
//!
//! ```no_run
//! use urlhash::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("urlhash.toml")).unwrap();
//! println!("Fetching with {} workers", config.fetcher.parallel);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetcherConfig, PipelineConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};

pub use validation::validate;
