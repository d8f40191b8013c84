use std::path::PathBuf;

/// Library-level structured errors for pathreset.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum PathresetError {
	#[error("Project root not found at or above: {start}")]
	ProjectRootNotFound { start: PathBuf },

	#[error("Project root has no parent directory: {root}")]
	RootlessPath { root: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid stem pattern in category {name}: {pattern}")]
	InvalidPattern {
		name: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Mutually exclusive options in category {name}: {option1} and {option2}")]
	MutuallyExclusive {
		name: String,
		option1: String,
		option2: String,
	},

	#[error("Category {name} needs either a marker or a pattern")]
	MissingMatcher { name: String },

	#[error("Failed to read SQL directory: {path}")]
	SqlDirRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using PathresetError.
pub type Result<T> = std::result::Result<T, PathresetError>;
