mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::FavoritesWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in savesearch::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
		return Ok(());
	}

	savesearch::logging::initialize(&resolved.log)?;
	run_session(cli.output, resolved)
}

/// Run the favorites session and report what was saved.
fn run_session(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let outcome = FavoritesWorkflow::from_config(settings).run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
