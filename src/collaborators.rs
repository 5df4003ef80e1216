//! Contracts between the commit controller and the components around it.

use std::fmt;

use crate::controller::{ConfirmPrompt, PendingCommit};
use crate::messages;
use crate::model::{SearchCriteria, SearchMode};
use crate::registry::Registry;

/// Supplies the user's current, unsaved search definition.
pub trait CriteriaSource {
	fn current(&self) -> Option<SearchCriteria>;
}

impl<F> CriteriaSource for F
where
	F: Fn() -> Option<SearchCriteria>,
{
	fn current(&self) -> Option<SearchCriteria> {
		self()
	}
}

/// Triggers an asynchronous refresh of the registry. Completion is only
/// observable through registry events.
pub trait FetchCollection {
	fn fetch(&mut self);
}

/// Informational notices raised when a precondition is not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
	NoSearchFilter,
	NoFavoriteSelected,
}

impl Notice {
	#[must_use]
	pub fn message(self) -> &'static str {
		match self {
			Self::NoSearchFilter => messages::NOT_SELECTED_SEARCH_FILTER,
			Self::NoFavoriteSelected => messages::NOT_SELECTED_FAVORITE_ELEMENT,
		}
	}
}

impl fmt::Display for Notice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.message())
	}
}

/// User notification capability: non-blocking notices and modal yes/no
/// confirmations. The prompt's confirmation handle must eventually be
/// resolved through [`SaveSearchController::resolve`](crate::SaveSearchController::resolve).
pub trait Notifier {
	fn notify_info(&mut self, notice: Notice);
	fn notify_confirm(&mut self, prompt: ConfirmPrompt);
}

/// Everything the executor needs to create or overwrite a saved search.
pub struct CommitRequest<'a> {
	pub registry: &'a Registry,
	pub criteria: &'a dyn CriteriaSource,
	pub mode: SearchMode,
	/// Present when an existing entry is overwritten, absent for a new entry.
	pub pending: Option<PendingCommit>,
}

impl CommitRequest<'_> {
	#[must_use]
	pub fn is_overwrite(&self) -> bool {
		self.pending.is_some()
	}
}

impl fmt::Debug for CommitRequest<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CommitRequest")
			.field("registry_len", &self.registry.len())
			.field("mode", &self.mode)
			.field("pending", &self.pending)
			.finish_non_exhaustive()
	}
}

/// Performs the actual persistence for a resolved intent.
pub trait CommitExecutor {
	fn launch(&mut self, request: CommitRequest<'_>);
}
