use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pathreset_cli::config::{generate_init_template, load_config};
use pathreset_cli::project::{CONFIG_FILE, discover_project_root, search_prefix};
use pathreset_cli::reset::{ResetOptions, run_reset};

#[derive(Parser)]
#[command(name = "pathreset")]
#[command(
	author,
	version,
	about = "Resets machine-specific data paths in SQL load scripts to a portable token"
)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Project root to operate on (skips discovery)
	#[arg(long, value_name = "DIR")]
	root: Option<PathBuf>,

	/// Report replacements without writing any file
	#[arg(long)]
	dry_run: bool,

	/// Create a template .pathreset.toml in the project root
	#[arg(long)]
	init: bool,

	/// Overwrite existing .pathreset.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Configuration management commands
	Config {
		#[command(subcommand)]
		action: ConfigAction,
	},
}

#[derive(Subcommand)]
enum ConfigAction {
	/// Display the effective configuration and its source
	Show,
	/// Check the config file for errors without rewriting anything
	Validate,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	// --init runs before discovery; the file it creates may be the root
	// marker itself.
	if cli.init {
		let root = match cli.root {
			Some(dir) => dir,
			None => std::env::current_dir().context("Failed to get current directory")?,
		};
		return handle_init(&root, cli.force);
	}

	let root = resolve_root(cli.root.as_deref())?;

	// Handle subcommands
	if let Some(command) = cli.command {
		return match command {
			Commands::Config { action } => match action {
				ConfigAction::Show => handle_config_show(&root),
				ConfigAction::Validate => handle_config_validate(&root),
			},
		};
	}

	// Bare invocation runs the reset
	handle_reset(&root, cli.dry_run)
}

/// Resolve the project root from the --root override or by discovery.
fn resolve_root(override_root: Option<&Path>) -> Result<PathBuf> {
	let root = match override_root {
		Some(dir) => dir.to_path_buf(),
		None => discover_project_root().context("Failed to locate the project root")?,
	};

	root.canonicalize()
		.with_context(|| format!("Failed to resolve project root: {}", root.display()))
}

fn handle_init(root: &Path, force: bool) -> Result<ExitCode> {
	let config_path = root.join(CONFIG_FILE);

	if config_path.exists() && !force {
		anyhow::bail!(
			"{} already exists. Use --force to overwrite.",
			config_path.display()
		);
	}

	let template = generate_init_template();
	std::fs::write(&config_path, template)
		.with_context(|| format!("Failed to write {}", config_path.display()))?;

	println!("Created {}", config_path.display());
	Ok(ExitCode::SUCCESS)
}

fn handle_config_show(root: &Path) -> Result<ExitCode> {
	let loaded = load_config(root).context("Failed to load configuration")?;

	match loaded.path {
		Some(ref path) => println!("# Source: {}", path.display()),
		None => println!("# Source: built-in defaults"),
	}
	println!("# replacement: {}", loaded.config.replacement);
	println!("# sql-dir: {}", loaded.config.sql_dir);
	println!("# categories: {}", loaded.config.categories.len());
	println!();

	for (i, category) in loaded.config.categories.iter().enumerate() {
		println!("  Category {}: {}", i + 1, category.name);
		if let Some(ref marker) = category.marker {
			println!("    marker: {}", marker);
		}
		if let Some(ref pattern) = category.pattern {
			println!("    pattern: {}", pattern);
		}
		println!();
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_config_validate(root: &Path) -> Result<ExitCode> {
	match load_config(root) {
		Ok(loaded) => {
			match loaded.path {
				Some(path) => println!(
					"{} is valid ({} categories)",
					path.display(),
					loaded.config.categories.len()
				),
				None => println!("No configuration file found; built-in defaults apply."),
			}
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Configuration error: {}", e);
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_reset(root: &Path, dry_run: bool) -> Result<ExitCode> {
	let loaded = load_config(root).context("Failed to load configuration")?;
	let search = search_prefix(root).context("Failed to derive the search prefix")?;

	let report = run_reset(
		&loaded.config,
		&ResetOptions {
			project_root: root,
			search: &search,
			dry_run,
		},
	)?;

	if dry_run {
		println!(
			"dry run: {} replacements across {} files",
			report.total_replacements(),
			report.total_changed()
		);
	}

	Ok(ExitCode::SUCCESS)
}
