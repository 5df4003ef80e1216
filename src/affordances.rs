//! Loading, empty and failure indicators driven by registry events.

use tracing::debug;

use crate::registry::{Registry, RegistryEvent, RegistryState};

/// Visibility of the indicators surrounding the favorites list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordances {
	pub loading: bool,
	pub empty: bool,
	/// Reason shown while the last fetch failed.
	pub failure: Option<String>,
}

impl Default for Affordances {
	fn default() -> Self {
		Self {
			loading: true,
			empty: false,
			failure: None,
		}
	}
}

impl Affordances {
	/// Indicators matching a registry that was populated before any observer
	/// was attached.
	#[must_use]
	pub fn for_registry(registry: &Registry) -> Self {
		let mut affordances = Self::default();
		if registry.state() != &RegistryState::Loading {
			affordances.settle(registry);
		}
		affordances
	}

	/// Update the indicators for one observed event. The registry is read in
	/// its current state, not the state at the time the event was emitted.
	pub fn observe(&mut self, event: &RegistryEvent, registry: &Registry) {
		match event {
			RegistryEvent::Loading => self.loading = true,
			RegistryEvent::Added(_)
			| RegistryEvent::Removed(_)
			| RegistryEvent::Reset
			| RegistryEvent::Failed(_) => self.settle(registry),
		}
		debug!(?event, loading = self.loading, empty = self.empty, "affordances updated");
	}

	fn settle(&mut self, registry: &Registry) {
		self.loading = false;
		self.empty = registry.is_empty();
		self.failure = match registry.state() {
			RegistryState::Failed(reason) => Some(reason.clone()),
			_ => None,
		};
	}
}
