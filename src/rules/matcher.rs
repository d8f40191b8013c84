use crate::config::types::{Category, Config};
use crate::error::{PathresetError, Result};
use regex::Regex;
use std::path::PathBuf;

/// A category compiled to a stem predicate, ready for matching.
#[derive(Debug)]
pub struct CompiledCategory {
	/// The original category.
	pub category: Category,

	/// Compiled stem regex.
	pub stem_regex: Regex,
}

impl CompiledCategory {
	/// Compile a category's marker or raw pattern into a stem regex.
	pub fn from_category(category: &Category) -> Result<Self> {
		let pattern = match (&category.marker, &category.pattern) {
			(Some(_), Some(_)) => {
				return Err(PathresetError::MutuallyExclusive {
					name: category.name.clone(),
					option1: "marker".to_string(),
					option2: "pattern".to_string(),
				});
			}
			(Some(marker), None) => marker_pattern(marker),
			(None, Some(pattern)) => pattern.clone(),
			(None, None) => {
				return Err(PathresetError::MissingMatcher {
					name: category.name.clone(),
				});
			}
		};

		let stem_regex = Regex::new(&pattern).map_err(|source| PathresetError::InvalidPattern {
			name: category.name.clone(),
			pattern: pattern.clone(),
			source,
		})?;

		Ok(CompiledCategory {
			category: category.clone(),
			stem_regex,
		})
	}

	/// Check if this category claims the given file name.
	pub fn matches(&self, file_name: &str) -> bool {
		self.stem_regex.is_match(stem(file_name))
	}
}

/// Stem of a file name: everything before the final `.` extension.
fn stem(file_name: &str) -> &str {
	file_name
		.rsplit_once('.')
		.map_or(file_name, |(stem, _)| stem)
}

/// Build the stem regex for a marker token.
///
/// The token must sit at the end of the stem as an underscore-delimited
/// segment, optionally followed by a single numeric segment, so both
/// `loan_ts_2020` and `a_ts` match marker `ts` while `ts_loan` does not.
fn marker_pattern(marker: &str) -> String {
	format!(r"(?:^|_){}(?:_[0-9]+)?$", regex::escape(marker))
}

/// Compile all categories declared in a config, in order.
pub fn compile_categories(config: &Config) -> Result<Vec<CompiledCategory>> {
	config
		.categories
		.iter()
		.map(CompiledCategory::from_category)
		.collect()
}

/// Find the first category claiming the given file name.
pub fn find_matching_category<'a>(
	categories: &'a [CompiledCategory],
	file_name: &str,
) -> Option<&'a CompiledCategory> {
	categories.iter().find(|c| c.matches(file_name))
}

/// Partition file paths into per-category buckets, in category order.
///
/// The first matching category claims a file; files matching no category
/// are left out entirely.
pub fn partition_files(categories: &[CompiledCategory], files: &[PathBuf]) -> Vec<Vec<PathBuf>> {
	let mut buckets: Vec<Vec<PathBuf>> = vec![Vec::new(); categories.len()];

	for file in files {
		let Some(name) = file.file_name().and_then(|n| n.to_str()) else {
			continue;
		};
		if let Some(index) = categories.iter().position(|c| c.matches(name)) {
			buckets[index].push(file.clone());
		}
	}

	buckets
}
