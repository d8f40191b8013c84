use crate::config::types::{Config, LoadedConfig};
use crate::error::{PathresetError, Result};
use std::path::Path;

/// Parse a config file from the given path.
pub fn parse_config_file(path: &Path) -> Result<Config> {
	let content =
		std::fs::read_to_string(path).map_err(|source| PathresetError::ConfigReadError {
			path: path.to_path_buf(),
			source,
		})?;

	parse_config_str(&content, path)
}

/// Parse a config from a string (useful for testing).
pub fn parse_config_str(content: &str, path: &Path) -> Result<Config> {
	let config: Config =
		toml::from_str(content).map_err(|source| PathresetError::ConfigParseError {
			path: path.to_path_buf(),
			source,
		})?;

	// Validate the parsed config
	config.validate()?;

	Ok(config)
}

/// Load the project config, falling back to built-in defaults when no
/// `.pathreset.toml` exists at the root.
pub fn load_config(project_root: &Path) -> Result<LoadedConfig> {
	let path = project_root.join(crate::project::CONFIG_FILE);

	if path.is_file() {
		let config = parse_config_file(&path)?;
		Ok(LoadedConfig {
			config,
			path: Some(path),
		})
	} else {
		Ok(LoadedConfig {
			config: Config::default(),
			path: None,
		})
	}
}
