/// Generate the template `.pathreset.toml` written by `--init`.
///
/// The template spells out the built-in defaults so a project can start
/// from a working config and edit it down.
pub fn generate_init_template() -> String {
	r#"# pathreset configuration.
# All fields are optional; the values below are the built-in defaults.

# Token written in place of the machine-specific path prefix.
replacement = "{data_path}"

# Directory holding the SQL scripts, relative to the project root.
sql-dir = "load_scripts/SQL"

# Categories are processed in order; the first matching category claims a
# file. Each category needs a marker (underscore-delimited token at the end
# of the stem, optionally followed by a numeric segment) or a raw stem
# regex pattern.
[[categories]]
name = "TS"
marker = "ts"

[[categories]]
name = "LAR"
marker = "lar"

[[categories]]
name = "Panel"
marker = "panel"
"#
	.to_string()
}
