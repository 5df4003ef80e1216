use std::fmt;
use std::path::PathBuf;

use savesearch::logging::LogSettings;
use savesearch::{SaveGating, SearchCriteria, SearchMode, Theme};
use thiserror::Error;

/// Configuration ready for the favorites session.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub store_path: PathBuf,
	pub theme: Theme,
	pub theme_name: String,
	pub title: String,
	pub gating: SaveGating,
	pub log: LogSettings,
	/// The current, unsaved search assembled from CLI flags.
	pub criteria: SearchCriteria,
	pub mode: SearchMode,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Favorites file: {}", self.store_path.display());
		println!("  UI theme: {}", self.theme_name);
		println!("  Title: {}", self.title);
		println!("  Save gating: {}", self.gating.as_str());
		println!("  Log filter: {}", self.log.filter);
		println!("  Log file: {}", self.log.file.display());
		let summary = self.criteria.summary();
		if summary.is_empty() {
			println!("  Current search: (no filters)");
		} else {
			println!("  Current search: {summary}");
		}
		println!("  Search mode: {}", self.mode);
	}
}

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {reason} (value: {value})")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: String,
}

impl ConfigError {
	pub(crate) fn invalid(
		key: &'static str,
		value: impl Into<String>,
		origin: SettingSource,
		reason: impl Into<String>,
	) -> Self {
		Self {
			key,
			value: value.into(),
			origin,
			reason: reason.into(),
		}
	}
}
