//! Project-root discovery and search-prefix derivation.
//!
//! The SQL load scripts reference absolute data paths that begin with the
//! directory *containing* the project checkout. Rather than slicing a fixed
//! number of characters off an install path, the root is found by walking
//! upward from a starting directory until a recognizable project marker
//! appears.

use crate::error::{PathresetError, Result};
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Project name token as it appears in checkout paths.
pub const PROJECT_TOKEN: &str = "HMDA";

/// Lowercase form of the token used inside the scripts' data paths.
pub const DATA_TOKEN: &str = "hmda";

/// Subdirectory (relative to the project root) holding the SQL scripts.
pub const SQL_DIR: &str = "load_scripts/SQL";

/// Name of the per-project config file.
pub const CONFIG_FILE: &str = ".pathreset.toml";

/// Check whether `dir` looks like the project root.
///
/// A directory qualifies if it contains the SQL scripts subdirectory or a
/// `.pathreset.toml`.
pub fn is_project_root(dir: &Path) -> bool {
	dir.join(SQL_DIR).is_dir() || dir.join(CONFIG_FILE).is_file()
}

/// Find the project root at or above `start`.
pub fn find_root_above(start: &Path) -> Result<PathBuf> {
	let mut current = start.to_path_buf();

	loop {
		if is_project_root(&current) {
			return Ok(current);
		}

		if let Some(parent) = current.parent() {
			current = parent.to_path_buf();
		} else {
			return Err(PathresetError::ProjectRootNotFound {
				start: start.to_path_buf(),
			});
		}
	}
}

/// Discover the project root without an explicit override.
///
/// Tries the current working directory first, then the resolved location of
/// the executable itself (the binary may live inside the project tree while
/// being run from elsewhere).
pub fn discover_project_root() -> Result<PathBuf> {
	let cwd = std::env::current_dir().ok();

	if let Some(ref dir) = cwd
		&& let Ok(root) = find_root_above(dir)
	{
		return Ok(root);
	}

	if let Ok(exe) = std::env::current_exe()
		&& let Ok(resolved) = exe.canonicalize()
		&& let Some(dir) = resolved.parent()
		&& let Ok(root) = find_root_above(dir)
	{
		return Ok(root);
	}

	Err(PathresetError::ProjectRootNotFound {
		start: cwd.unwrap_or_else(|| PathBuf::from(".")),
	})
}

/// Derive the search prefix for `project_root`.
///
/// The prefix is the root's parent directory rendered with a trailing
/// separator, with the project token folded to its on-disk lowercase form.
/// A root with no parent is an error rather than a silently wrong prefix.
pub fn search_prefix(project_root: &Path) -> Result<String> {
	let parent = project_root
		.parent()
		.ok_or_else(|| PathresetError::RootlessPath {
			root: project_root.to_path_buf(),
		})?;

	let mut prefix = parent.to_string_lossy().into_owned();
	if !prefix.ends_with(MAIN_SEPARATOR) {
		prefix.push(MAIN_SEPARATOR);
	}

	Ok(prefix.replace(PROJECT_TOKEN, DATA_TOKEN))
}
