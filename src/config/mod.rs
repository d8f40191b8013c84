//! Configuration loading and parsing for pathreset.
//!
//! This module handles:
//! - TOML config file parsing
//! - Project-root config lookup with built-in defaults
//! - The `--init` config template

pub mod parser;
pub mod template;
pub mod types;

pub use parser::{load_config, parse_config_file, parse_config_str};
pub use template::generate_init_template;
pub use types::{Category, Config, LoadedConfig};
