//! Pathreset - CLI tool for resetting machine-specific data paths in SQL
//! load scripts to a portable template token.
//!
//! This library provides the core functionality for pathreset, including:
//! - Project-root discovery and search-prefix derivation
//! - Configuration file parsing with built-in defaults
//! - Filename-stem categorization and literal path rewriting
//! - The sequential per-category reset pass
//!
//! # Example
//!
//! ```no_run
//! use pathreset_cli::config::load_config;
//! use pathreset_cli::project::{discover_project_root, search_prefix};
//! use pathreset_cli::reset::{ResetOptions, run_reset};
//!
//! let root = discover_project_root().unwrap();
//! let loaded = load_config(&root).unwrap();
//! let search = search_prefix(&root).unwrap();
//!
//! let report = run_reset(
//!     &loaded.config,
//!     &ResetOptions {
//!         project_root: &root,
//!         search: &search,
//!         dry_run: true,
//!     },
//! )
//! .unwrap();
//! println!("{} replacements", report.total_replacements());
//! ```

pub mod config;
pub mod error;
pub mod project;
pub mod reset;
pub mod rules;

pub use error::{PathresetError, Result};
