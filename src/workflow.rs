use anyhow::Result;
use savesearch::ui::{App, SaveEditor, StatusNotifier};
use savesearch::{BackgroundFetch, FavoritesFile, Registry, SaveSearchController, SessionOutcome};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Builds the favorites session from resolved configuration and runs it.
pub(crate) struct FavoritesWorkflow {
	app: App,
}

impl FavoritesWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let ResolvedConfig {
			store_path,
			theme,
			theme_name,
			title,
			gating,
			criteria,
			mode,
			..
		} = config;

		info!(
			store = %store_path.display(),
			theme = %theme_name,
			gating = gating.as_str(),
			%mode,
			"starting favorites session"
		);

		let store = FavoritesFile::new(store_path);
		let (fetch, updates) = BackgroundFetch::new(store.clone());
		let controller = SaveSearchController::new(
			Registry::new(),
			move || Some(criteria.clone()),
			StatusNotifier::new(),
			SaveEditor::new(store),
		)
		.with_mode(mode)
		.with_gating(gating);

		let app = App::new(controller, fetch, updates)
			.with_title(title)
			.with_theme(theme);
		Self { app }
	}

	pub(crate) fn run(self) -> Result<SessionOutcome> {
		savesearch::run(self.app)
	}
}
