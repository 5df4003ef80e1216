use std::env;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;
use savesearch::logging::LogSettings;
use savesearch::{SaveGating, SearchCriteria, SearchMode, app_dirs, theme};

use super::resolved::{ConfigError, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "slate";
const DEFAULT_TITLE: &str = "Favorites";
const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration file representation before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	store: StoreSection,
	ui: UiSection,
	log: LogSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct StoreSection {
	path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
	gating: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	filter: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = &cli.store {
			self.store.path = Some(path.clone());
		}
		if let Some(theme) = &cli.theme {
			self.ui.theme = Some(theme.clone());
		}
		if let Some(title) = &cli.title {
			self.ui.title = Some(title.clone());
		}
		if let Some(gating) = cli.gating {
			self.ui.gating = Some(SaveGating::from(gating).as_str().to_string());
		}
	}

	/// Fill defaults and validate, producing the configuration used at runtime.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let theme_name = self
			.ui
			.theme
			.clone()
			.unwrap_or_else(|| DEFAULT_THEME.to_string());
		let theme = theme::by_name(&theme_name).ok_or_else(|| {
			ConfigError::invalid(
				"ui.theme",
				theme_name.clone(),
				detect_source(cli.theme.is_some(), "SAVESEARCH__UI__THEME", "--theme", "ui.theme"),
				"unknown theme; see --list-themes",
			)
		})?;

		let gating = match self.ui.gating.as_deref() {
			Some(value) => SaveGating::parse(value).ok_or_else(|| {
				ConfigError::invalid(
					"ui.gating",
					value,
					detect_source(
						cli.gating.is_some(),
						"SAVESEARCH__UI__GATING",
						"--gating",
						"ui.gating",
					),
					"expected `latch` or `live`",
				)
			})?,
			None => SaveGating::default(),
		};

		let store_path = match self.store.path {
			Some(path) => path,
			None => app_dirs::default_store_path()?,
		};
		let log = LogSettings {
			filter: self
				.log
				.filter
				.filter(|filter| !filter.trim().is_empty())
				.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
			file: match self.log.file {
				Some(file) => file,
				None => app_dirs::default_log_path()?,
			},
		};

		Ok(ResolvedConfig {
			store_path,
			theme,
			theme_name,
			title: self
				.ui
				.title
				.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
			gating,
			log,
			criteria: criteria_from(cli),
			mode: if cli.advanced {
				SearchMode::Advanced
			} else {
				SearchMode::Basic
			},
		})
	}
}

fn criteria_from(cli: &CliArgs) -> SearchCriteria {
	let mut criteria = SearchCriteria::new();
	if let Some(type_name) = &cli.type_name {
		criteria = criteria.with_type(type_name.clone());
	}
	if let Some(tag) = &cli.tag {
		criteria = criteria.with_tag(tag.clone());
	}
	if let Some(query) = &cli.query {
		criteria = criteria.with_query(query.clone());
	}
	criteria
}

fn detect_source(
	cli_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> SettingSource {
	if cli_present {
		return SettingSource::CliFlag(cli_flag);
	}
	if env::var_os(env_var).is_some() {
		return SettingSource::Environment(env_var);
	}
	SettingSource::ConfigKey(key)
}
