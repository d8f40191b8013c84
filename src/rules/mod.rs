//! File categorization and path rewriting for pathreset.
//!
//! This module handles:
//! - Stem predicates that assign SQL files to categories
//! - Literal search/replace over file contents, in place

pub mod matcher;
pub mod rewriter;

pub use matcher::{CompiledCategory, compile_categories, find_matching_category, partition_files};
pub use rewriter::{FileOutcome, replace_literal, rewrite_file};
