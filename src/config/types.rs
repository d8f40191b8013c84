use serde::Deserialize;
use std::path::PathBuf;

/// Top-level configuration from a `.pathreset.toml` file.
///
/// Every field is optional; the defaults reproduce the built-in behavior
/// (three categories, `{data_path}` token, `load_scripts/SQL` directory).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// Token written in place of the machine-specific path prefix.
	#[serde(default = "default_replacement")]
	pub replacement: String,

	/// Directory holding the SQL scripts, relative to the project root.
	#[serde(default = "default_sql_dir")]
	pub sql_dir: String,

	/// File categories, processed in declaration order.
	/// The first matching category claims a file.
	#[serde(default = "default_categories")]
	pub categories: Vec<Category>,
}

/// A category of SQL files, selected by a predicate on the filename stem.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Category {
	/// Display name, used in the per-pass progress line.
	pub name: String,

	/// Marker token: matches stems ending in the token as an
	/// underscore-delimited segment, optionally followed by one numeric
	/// segment (mutually exclusive with pattern).
	pub marker: Option<String>,

	/// Raw regex applied to the whole stem (mutually exclusive with marker).
	pub pattern: Option<String>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from; None for built-in defaults.
	pub path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Config {
			replacement: default_replacement(),
			sql_dir: default_sql_dir(),
			categories: default_categories(),
		}
	}
}

fn default_replacement() -> String {
	"{data_path}".to_string()
}

fn default_sql_dir() -> String {
	crate::project::SQL_DIR.to_string()
}

fn default_categories() -> Vec<Category> {
	[("TS", "ts"), ("LAR", "lar"), ("Panel", "panel")]
		.into_iter()
		.map(|(name, marker)| Category {
			name: name.to_string(),
			marker: Some(marker.to_string()),
			pattern: None,
		})
		.collect()
}

impl Category {
	/// Validate that exactly one of the matcher fields is set.
	pub fn validate(&self) -> Result<(), crate::error::PathresetError> {
		match (&self.marker, &self.pattern) {
			(Some(_), Some(_)) => Err(crate::error::PathresetError::MutuallyExclusive {
				name: self.name.clone(),
				option1: "marker".to_string(),
				option2: "pattern".to_string(),
			}),
			(None, None) => Err(crate::error::PathresetError::MissingMatcher {
				name: self.name.clone(),
			}),
			_ => Ok(()),
		}
	}
}

impl Config {
	/// Validate all categories in this config.
	pub fn validate(&self) -> Result<(), crate::error::PathresetError> {
		for category in &self.categories {
			category.validate()?;
		}
		Ok(())
	}
}
