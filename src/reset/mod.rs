//! The reset pass: enumerate SQL files and rewrite each category in turn.

use crate::config::Config;
use crate::error::{PathresetError, Result};
use crate::rules::{compile_categories, partition_files, rewrite_file};
use std::path::{Path, PathBuf};

/// Options for a reset run.
#[derive(Debug)]
pub struct ResetOptions<'a> {
	/// The project root containing the SQL directory.
	pub project_root: &'a Path,

	/// The machine-specific prefix to replace.
	pub search: &'a str,

	/// Report replacements without writing anything.
	pub dry_run: bool,
}

/// Per-category result of a reset run.
#[derive(Debug)]
pub struct CategoryReport {
	/// Category display name.
	pub name: String,

	/// Files assigned to the category.
	pub files: usize,

	/// Files whose content changed.
	pub changed: usize,

	/// Total occurrences replaced across the category.
	pub replacements: usize,
}

/// Aggregate result of a reset run.
#[derive(Debug, Default)]
pub struct ResetReport {
	/// One entry per configured category, in pass order.
	pub categories: Vec<CategoryReport>,
}

impl ResetReport {
	/// Total occurrences replaced across all categories.
	pub fn total_replacements(&self) -> usize {
		self.categories.iter().map(|c| c.replacements).sum()
	}

	/// Total files whose content changed.
	pub fn total_changed(&self) -> usize {
		self.categories.iter().map(|c| c.changed).sum()
	}
}

/// List the regular files in the SQL directory, sorted by name.
///
/// Subdirectories are excluded. Sorting keeps the pass order stable across
/// platforms and filesystems.
pub fn scan_sql_files(sql_dir: &Path) -> Result<Vec<PathBuf>> {
	let entries = std::fs::read_dir(sql_dir).map_err(|source| PathresetError::SqlDirRead {
		path: sql_dir.to_path_buf(),
		source,
	})?;

	let mut files = Vec::new();
	for entry in entries {
		let entry = entry.map_err(|source| PathresetError::SqlDirRead {
			path: sql_dir.to_path_buf(),
			source,
		})?;
		let path = entry.path();
		if path.is_file() {
			files.push(path);
		}
	}

	files.sort();
	Ok(files)
}

/// Run the reset: one sequential pass per category, a progress line before
/// each pass (printed even when the category is empty).
pub fn run_reset(config: &Config, opts: &ResetOptions) -> Result<ResetReport> {
	let categories = compile_categories(config)?;
	let sql_dir = opts.project_root.join(&config.sql_dir);
	let files = scan_sql_files(&sql_dir)?;
	let buckets = partition_files(&categories, &files);

	let mut report = ResetReport::default();
	for (category, bucket) in categories.iter().zip(&buckets) {
		println!("resetting {} file paths", category.category.name);

		let mut changed = 0;
		let mut replacements = 0;
		for file in bucket {
			let outcome = rewrite_file(file, opts.search, &config.replacement, opts.dry_run)?;
			if outcome.changed {
				changed += 1;
				if opts.dry_run {
					println!(
						"  would update {} ({} replacements)",
						file.file_name().unwrap_or_default().to_string_lossy(),
						outcome.replacements
					);
				}
			}
			replacements += outcome.replacements;
		}

		report.categories.push(CategoryReport {
			name: category.category.name.clone(),
			files: bucket.len(),
			changed,
			replacements,
		});
	}

	Ok(report)
}
