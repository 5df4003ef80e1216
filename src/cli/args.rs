use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum};
use savesearch::{SaveGating, app_dirs};

use super::annotations::mute_cli_annotations;

/// Version banner listing the directories the binary reads and writes.
fn long_version() -> &'static str {
	let describe = |dir: anyhow::Result<PathBuf>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("savesearch {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {}", describe(app_dirs::get_config_dir()));
	let _ = writeln!(details, "data directory: {}", describe(app_dirs::get_data_dir()));
	let _ = writeln!(details, "cache directory: {}", describe(app_dirs::get_cache_dir()));

	Box::leak(details.into_boxed_str())
}

fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into [`CliArgs`].
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = tinted_cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn tinted_cli_command() -> Command {
	CliArgs::command().mut_args(mute_cli_annotations)
}

#[derive(Parser, Debug)]
#[command(
	name = "savesearch",
	version,
	long_version = long_version(),
	about = "Select a favorite search and overwrite it, or save the current criteria as a new favorite",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SAVESEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 's',
		long,
		value_name = "FILE",
		help = "Favorites file to read and write (default: favorites.json in the data directory)"
	)]
	pub(crate) store: Option<PathBuf>,
	#[arg(long, value_name = "THEME", help = "Select a theme by name (default: slate)")]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Title shown above the favorites (default: Favorites)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'g',
		long,
		value_enum,
		help = "How the save action follows the selection (default: latch)"
	)]
	pub(crate) gating: Option<GatingArg>,
	#[arg(long = "type", value_name = "TYPE", help = "Entity type filter of the current search")]
	pub(crate) type_name: Option<String>,
	#[arg(long, value_name = "TAG", help = "Tag filter of the current search")]
	pub(crate) tag: Option<String>,
	#[arg(short = 'q', long, value_name = "QUERY", help = "Query text of the current search")]
	pub(crate) query: Option<String>,
	#[arg(
		short = 'a',
		long,
		help = "Treat the current search as built in the advanced form (default: basic)"
	)]
	pub(crate) advanced: bool,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format used to report saved changes on exit"
	)]
	pub(crate) output: OutputFormat,
	#[arg(long = "print-config", help = "Print the effective configuration and exit")]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List available themes and exit")]
	pub(crate) list_themes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum GatingArg {
	Latch,
	Live,
}

impl From<GatingArg> for SaveGating {
	fn from(value: GatingArg) -> Self {
		match value {
			GatingArg::Latch => SaveGating::Latch,
			GatingArg::Live => SaveGating::Live,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn command_supports_custom_styles() {
		let command = tinted_cli_command();
		assert!(command.get_about().is_some());
		command.debug_assert();
	}

	#[test]
	fn defaults_to_plain_output_and_no_criteria() {
		let parsed = CliArgs::try_parse_from(["savesearch"]).expect("parses");
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(parsed.type_name.is_none());
		assert!(!parsed.advanced);
		assert!(parsed.gating.is_none());
	}

	#[test]
	fn criteria_and_gating_flags_parse() {
		let parsed = CliArgs::try_parse_from([
			"savesearch",
			"--type",
			"hive_table",
			"--tag",
			"PII",
			"-q",
			"orders",
			"--advanced",
			"--gating",
			"live",
			"--output",
			"json",
		])
		.expect("parses");
		assert_eq!(parsed.type_name.as_deref(), Some("hive_table"));
		assert_eq!(parsed.tag.as_deref(), Some("PII"));
		assert_eq!(parsed.query.as_deref(), Some("orders"));
		assert!(parsed.advanced);
		assert_eq!(parsed.gating.map(SaveGating::from), Some(SaveGating::Live));
		assert_eq!(parsed.output, OutputFormat::Json);
	}
}
