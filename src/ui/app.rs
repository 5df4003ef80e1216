use std::sync::mpsc::Receiver;

use ratatui::widgets::TableState;
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;
use tracing::debug;

use super::editor::{CommitRecord, SaveEditor};
use super::notifier::StatusNotifier;
use crate::collaborators::FetchCollection;
use crate::controller::SaveSearchController;
use crate::presenter::PresenterList;
use crate::store::FetchResult;
use crate::theme::Theme;

pub type FavoritesController = SaveSearchController<StatusNotifier, SaveEditor>;

/// What the session changed, reported after the terminal is restored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionOutcome {
	pub commits: Vec<CommitRecord>,
}

/// Terminal front end state: the controller, its presenters and the fetch
/// pipeline feeding the registry.
pub struct App {
	pub(crate) controller: FavoritesController,
	pub(crate) presenters: PresenterList,
	pub(crate) table_state: TableState,
	fetcher: Box<dyn FetchCollection>,
	updates: Receiver<FetchResult>,
	/// Generation of the newest fetch result applied so far.
	applied_generation: u64,
	pub(crate) title: String,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) status: Option<String>,
}

impl App {
	pub fn new(
		controller: FavoritesController,
		fetcher: impl FetchCollection + 'static,
		updates: Receiver<FetchResult>,
	) -> Self {
		let presenters = PresenterList::from_registry(controller.registry());
		let mut table_state = TableState::default();
		table_state.select(presenters.cursor());
		Self {
			controller,
			presenters,
			table_state,
			fetcher: Box::new(fetcher),
			updates,
			applied_generation: 0,
			title: "Favorites".to_string(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			status: None,
		}
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = theme;
		self
	}

	#[must_use]
	pub fn controller(&self) -> &FavoritesController {
		&self.controller
	}

	#[must_use]
	pub fn presenters(&self) -> &PresenterList {
		&self.presenters
	}

	/// Mark the registry loading and ask the fetcher for a fresh copy.
	pub fn refresh(&mut self) {
		debug!("refreshing favorites");
		self.controller.registry_mut().begin_loading();
		self.fetcher.fetch();
		self.sync_registry();
	}

	/// Apply every fetch result that has arrived since the last call. A result
	/// older than one already applied is dropped.
	pub fn pump_fetch_updates(&mut self) {
		let mut applied = false;
		while let Ok(FetchResult { generation, update }) = self.updates.try_recv() {
			if generation < self.applied_generation {
				debug!(generation, newest = self.applied_generation, "dropping outdated fetch result");
				continue;
			}
			self.applied_generation = generation;
			update.apply(self.controller.registry_mut());
			applied = true;
		}
		if applied {
			self.sync_registry();
		}
	}

	pub(crate) fn sync_registry(&mut self) {
		if self.controller.observe_registry() {
			self.presenters.sync(self.controller.registry());
			self.table_state.select(self.presenters.cursor());
		}
	}

	/// Collect status messages from the executor and refetch after a commit.
	pub(crate) fn pump_executor(&mut self) {
		let executor = self.controller.executor_mut();
		let status = executor.take_status();
		let changed = executor.take_refresh();
		if status.is_some() {
			self.status = status;
		}
		if changed {
			self.refresh();
		}
	}

	#[must_use]
	pub fn outcome(&self) -> SessionOutcome {
		SessionOutcome {
			commits: self.controller.executor().commits().to_vec(),
		}
	}
}
