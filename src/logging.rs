//! File-backed `tracing` setup. The terminal belongs to the UI, so log output
//! goes to a file instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured filter directive.
pub const LOG_ENV: &str = "SAVESEARCH_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	/// `EnvFilter` directive, e.g. `info` or `savesearch=debug`.
	pub filter: String,
	pub file: PathBuf,
}

/// Install the global subscriber. Calling it twice is an error.
pub fn initialize(settings: &LogSettings) -> Result<()> {
	if let Some(parent) = settings.file.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("creating log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&settings.file)
		.with_context(|| format!("opening log file {}", settings.file.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(filter_for(settings)?)
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.with_target(true)
		.try_init()
		.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}

fn filter_for(settings: &LogSettings) -> Result<EnvFilter> {
	match std::env::var(LOG_ENV) {
		Ok(directive) if !directive.trim().is_empty() => EnvFilter::try_new(directive.trim())
			.with_context(|| format!("invalid {LOG_ENV} directive")),
		_ => EnvFilter::try_new(&settings.filter)
			.with_context(|| format!("invalid log filter '{}'", settings.filter)),
	}
}
