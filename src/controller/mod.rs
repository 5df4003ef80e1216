//! Selection and commit orchestration for saved searches.
//!
//! [`SaveSearchController`] owns the registry and the selection derived from
//! presenter clicks. It exposes the two commit intents:
//!
//! * [`save_as`](SaveSearchController::save_as) hands the current criteria to
//!   the executor to create a new entry, provided at least one filter is set.
//! * [`save`](SaveSearchController::save) overwrites the selected entry, but
//!   only after the notifier's confirmation has been accepted.
//!
//! No failure leaves the controller as an error: unmet preconditions become
//! notices and are reported through the returned outcome.

mod confirm;
#[cfg(test)]
mod tests;

use std::sync::mpsc::Receiver;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use confirm::{
	ConfirmPrompt, ConfirmResolution, ConfirmTicket, Confirmation, MessageSegment, PendingCommit,
};

use crate::affordances::Affordances;
use crate::collaborators::{CommitExecutor, CommitRequest, CriteriaSource, Notice, Notifier};
use crate::model::{EntryId, SearchMode};
use crate::presenter::ItemClicked;
use crate::registry::{Registry, RegistryEvent};

/// How the "save" action's enablement follows the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveGating {
	/// Enabled by the first click and never disabled again.
	#[default]
	Latch,
	/// Enabled exactly while a selection exists.
	Live,
}

impl SaveGating {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Latch => "latch",
			Self::Live => "live",
		}
	}

	#[must_use]
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"latch" => Some(Self::Latch),
			"live" => Some(Self::Live),
			_ => None,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAsOutcome {
	Launched,
	MissingFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
	AwaitingConfirmation,
	NothingSelected,
	/// A confirmation from an earlier `save` is still open.
	Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
	Committed,
	Declined,
	/// The resolution does not belong to the open confirmation.
	Stale,
}

pub struct SaveSearchController<N, E> {
	registry: Registry,
	events: Receiver<RegistryEvent>,
	criteria: Box<dyn CriteriaSource>,
	mode: SearchMode,
	gating: SaveGating,
	notifier: N,
	executor: E,
	selected: Option<EntryId>,
	save_enabled: bool,
	affordances: Affordances,
	in_flight: Option<ConfirmTicket>,
	next_ticket: u64,
}

impl<N, E> SaveSearchController<N, E>
where
	N: Notifier,
	E: CommitExecutor,
{
	pub fn new(
		mut registry: Registry,
		criteria: impl CriteriaSource + 'static,
		notifier: N,
		executor: E,
	) -> Self {
		let events = registry.subscribe();
		let affordances = Affordances::for_registry(&registry);
		Self {
			registry,
			events,
			criteria: Box::new(criteria),
			mode: SearchMode::default(),
			gating: SaveGating::default(),
			notifier,
			executor,
			selected: None,
			save_enabled: false,
			affordances,
			in_flight: None,
			next_ticket: 0,
		}
	}

	#[must_use]
	pub fn with_mode(mut self, mode: SearchMode) -> Self {
		self.mode = mode;
		self
	}

	#[must_use]
	pub fn with_gating(mut self, gating: SaveGating) -> Self {
		self.gating = gating;
		self.refresh_enablement();
		self
	}

	/// Record a presenter click as the current selection.
	pub fn item_clicked(&mut self, event: ItemClicked) {
		debug!(id = %event.id, "favorite selected");
		self.selected = Some(event.id);
		self.refresh_enablement();
	}

	/// Launch the executor to create a new entry from the current criteria.
	pub fn save_as(&mut self) -> SaveAsOutcome {
		let has_filter = self
			.criteria
			.current()
			.is_some_and(|criteria| criteria.has_filter());
		if !has_filter {
			debug!("save as rejected: no search filter");
			self.notifier.notify_info(Notice::NoSearchFilter);
			return SaveAsOutcome::MissingFilter;
		}

		info!(mode = %self.mode, "launching save as");
		self.executor.launch(CommitRequest {
			registry: &self.registry,
			criteria: self.criteria.as_ref(),
			mode: self.mode,
			pending: None,
		});
		SaveAsOutcome::Launched
	}

	/// Ask for confirmation to overwrite the selected entry.
	pub fn save(&mut self) -> SaveOutcome {
		if let Some(ticket) = self.in_flight {
			debug!(?ticket, "save ignored while a confirmation is open");
			return SaveOutcome::Busy;
		}

		let Some(entry) = self.selected.as_ref().and_then(|id| self.registry.get(id)) else {
			debug!(selected = ?self.selected, "save rejected: no favorite selected");
			self.notifier.notify_info(Notice::NoFavoriteSelected);
			return SaveOutcome::NothingSelected;
		};
		let payload = PendingCommit {
			name: entry.name.clone(),
			guid: entry.id.clone(),
		};

		let ticket = self.issue_ticket();
		debug!(?ticket, guid = %payload.guid, "requesting overwrite confirmation");
		self.in_flight = Some(ticket);
		self.notifier
			.notify_confirm(ConfirmPrompt::overwrite(Confirmation::new(ticket, payload)));
		SaveOutcome::AwaitingConfirmation
	}

	/// Complete an open confirmation. On acceptance the executor runs before
	/// this returns.
	pub fn resolve(&mut self, resolution: ConfirmResolution) -> ResolveOutcome {
		if self.in_flight != Some(resolution.ticket()) {
			warn!(
				ticket = ?resolution.ticket(),
				open = ?self.in_flight,
				"ignoring stale confirmation"
			);
			return ResolveOutcome::Stale;
		}
		self.in_flight = None;

		match resolution.into_payload() {
			Some(payload) => {
				info!(guid = %payload.guid, name = %payload.name, "overwriting favorite search");
				self.executor.launch(CommitRequest {
					registry: &self.registry,
					criteria: self.criteria.as_ref(),
					mode: self.mode,
					pending: Some(payload),
				});
				ResolveOutcome::Committed
			}
			None => {
				debug!("overwrite declined");
				ResolveOutcome::Declined
			}
		}
	}

	/// Drain registry events, updating affordances and dropping a selection
	/// whose entry disappeared. Returns whether any event was observed.
	pub fn observe_registry(&mut self) -> bool {
		let mut observed = false;
		while let Ok(event) = self.events.try_recv() {
			observed = true;
			self.affordances.observe(&event, &self.registry);
		}
		if !observed {
			return false;
		}

		if let Some(id) = &self.selected
			&& !self.registry.contains(id)
		{
			debug!(%id, "selected favorite left the registry");
			self.selected = None;
		}
		self.refresh_enablement();
		true
	}

	#[must_use]
	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Mutable access for the fetch pipeline. Call
	/// [`observe_registry`](Self::observe_registry) afterwards.
	pub fn registry_mut(&mut self) -> &mut Registry {
		&mut self.registry
	}

	#[must_use]
	pub fn selected(&self) -> Option<&EntryId> {
		self.selected.as_ref()
	}

	#[must_use]
	pub fn save_enabled(&self) -> bool {
		self.save_enabled
	}

	#[must_use]
	pub fn confirmation_open(&self) -> bool {
		self.in_flight.is_some()
	}

	#[must_use]
	pub fn affordances(&self) -> &Affordances {
		&self.affordances
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.mode
	}

	#[must_use]
	pub fn gating(&self) -> SaveGating {
		self.gating
	}

	#[must_use]
	pub fn notifier(&self) -> &N {
		&self.notifier
	}

	pub fn notifier_mut(&mut self) -> &mut N {
		&mut self.notifier
	}

	#[must_use]
	pub fn executor(&self) -> &E {
		&self.executor
	}

	pub fn executor_mut(&mut self) -> &mut E {
		&mut self.executor
	}

	fn refresh_enablement(&mut self) {
		self.save_enabled = match self.gating {
			SaveGating::Latch => self.save_enabled || self.selected.is_some(),
			SaveGating::Live => self.selected.is_some(),
		};
	}

	fn issue_ticket(&mut self) -> ConfirmTicket {
		self.next_ticket += 1;
		ConfirmTicket(self.next_ticket)
	}
}
