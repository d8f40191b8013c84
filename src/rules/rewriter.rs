use crate::error::{PathresetError, Result};
use std::path::Path;

/// Outcome of rewriting a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileOutcome {
	/// Number of occurrences replaced.
	pub replacements: usize,

	/// Whether the file content changed.
	pub changed: bool,
}

/// Replace every literal occurrence of `search` in `content`.
///
/// Returns the rewritten content and the occurrence count. An empty search
/// string is a no-op: `str::replace` would otherwise splice the replacement
/// between every character.
pub fn replace_literal(content: &str, search: &str, replacement: &str) -> (String, usize) {
	if search.is_empty() {
		return (content.to_string(), 0);
	}

	let count = content.matches(search).count();
	if count == 0 {
		return (content.to_string(), 0);
	}

	(content.replace(search, replacement), count)
}

/// Rewrite one file in place, replacing `search` with `replacement`.
///
/// A file whose content does not change is left untouched on disk; with
/// `dry_run` nothing is written at all.
pub fn rewrite_file(
	path: &Path,
	search: &str,
	replacement: &str,
	dry_run: bool,
) -> Result<FileOutcome> {
	let content = std::fs::read_to_string(path).map_err(|source| PathresetError::FileRead {
		path: path.to_path_buf(),
		source,
	})?;

	let (rewritten, replacements) = replace_literal(&content, search, replacement);
	let changed = rewritten != content;

	if changed && !dry_run {
		std::fs::write(path, rewritten).map_err(|source| PathresetError::FileWrite {
			path: path.to_path_buf(),
			source,
		})?;
	}

	Ok(FileOutcome {
		replacements,
		changed,
	})
}
