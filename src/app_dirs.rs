//! Where `savesearch` keeps its configuration, favorites and log file.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const FAVORITES_FILE: &str = "favorites.json";
const LOG_FILE: &str = "savesearch.log";

/// One of the three directories the binary touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
	/// Holds `config.toml`.
	Config,
	/// Holds the favorites file.
	Data,
	/// Holds the log file.
	Cache,
}

impl Location {
	/// Variable that replaces the platform directory when set to a non-empty value.
	#[must_use]
	pub fn env_var(self) -> &'static str {
		match self {
			Self::Config => "SAVESEARCH_CONFIG_DIR",
			Self::Data => "SAVESEARCH_DATA_DIR",
			Self::Cache => "SAVESEARCH_CACHE_DIR",
		}
	}

	pub fn resolve(self) -> Result<PathBuf> {
		self.resolve_with(|name| env::var_os(name))
	}

	fn resolve_with(self, lookup: impl Fn(&str) -> Option<OsString>) -> Result<PathBuf> {
		if let Some(dir) = lookup(self.env_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}
		let dirs = ProjectDirs::from("io", "albo", "savesearch").ok_or_else(|| {
			anyhow!(
				"no home directory to place the {self:?} directory in; set {}",
				self.env_var()
			)
		})?;
		Ok(match self {
			Self::Config => dirs.config_local_dir(),
			Self::Data => dirs.data_local_dir(),
			Self::Cache => dirs.cache_dir(),
		}
		.to_path_buf())
	}
}

pub fn get_config_dir() -> Result<PathBuf> {
	Location::Config.resolve()
}

pub fn get_data_dir() -> Result<PathBuf> {
	Location::Data.resolve()
}

pub fn get_cache_dir() -> Result<PathBuf> {
	Location::Cache.resolve()
}

/// `favorites.json` in the data directory.
pub fn default_store_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(FAVORITES_FILE))
}

/// `savesearch.log` in the cache directory.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(get_cache_dir()?.join(LOG_FILE))
}
