//! Ordered, observable collection of saved searches.
//!
//! The registry is mutated only by whoever owns the fetch pipeline. Every
//! mutation is broadcast to subscribers as a [`RegistryEvent`] so views can
//! re-synchronize on their next pump.

use std::sync::mpsc::{self, Receiver, Sender};

use indexmap::IndexMap;
use tracing::debug;

use crate::model::{Entry, EntryId};

/// Lifecycle of the registry contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegistryState {
	#[default]
	Loading,
	Empty,
	Populated,
	Failed(String),
}

/// Notification broadcast after each registry mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
	Loading,
	Added(EntryId),
	Removed(EntryId),
	Reset,
	Failed(String),
}

#[derive(Debug, Default)]
pub struct Registry {
	entries: IndexMap<EntryId, Entry>,
	state: RegistryState,
	observers: Vec<Sender<RegistryEvent>>,
}

impl Registry {
	/// An empty registry still waiting for its first fetch.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A registry populated ahead of time, without emitting events.
	pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
		let mut registry = Self::new();
		registry.fill(entries);
		registry.settle();
		registry
	}

	/// Register an observer. Dropped receivers are pruned on the next broadcast.
	pub fn subscribe(&mut self) -> Receiver<RegistryEvent> {
		let (tx, rx) = mpsc::channel();
		self.observers.push(tx);
		rx
	}

	pub fn begin_loading(&mut self) {
		self.state = RegistryState::Loading;
		self.broadcast(RegistryEvent::Loading);
	}

	/// Replace every entry at once. Duplicate ids keep the first position and
	/// the last value.
	pub fn reset(&mut self, entries: impl IntoIterator<Item = Entry>) {
		self.entries.clear();
		self.fill(entries);
		self.settle();
		debug!(len = self.entries.len(), "registry reset");
		self.broadcast(RegistryEvent::Reset);
	}

	/// Insert an entry, replacing any entry with the same id in place.
	pub fn add(&mut self, entry: Entry) {
		let id = entry.id.clone();
		self.entries.insert(id.clone(), entry);
		self.settle();
		self.broadcast(RegistryEvent::Added(id));
	}

	pub fn remove(&mut self, id: &EntryId) -> Option<Entry> {
		let removed = self.entries.shift_remove(id)?;
		self.settle();
		self.broadcast(RegistryEvent::Removed(id.clone()));
		Some(removed)
	}

	/// Record a failed fetch. Previously known entries are kept; the next
	/// successful mutation clears the failure.
	pub fn fail(&mut self, reason: impl Into<String>) {
		let reason = reason.into();
		self.state = RegistryState::Failed(reason.clone());
		self.broadcast(RegistryEvent::Failed(reason));
	}

	#[must_use]
	pub fn state(&self) -> &RegistryState {
		&self.state
	}

	#[must_use]
	pub fn get(&self, id: &EntryId) -> Option<&Entry> {
		self.entries.get(id)
	}

	#[must_use]
	pub fn contains(&self, id: &EntryId) -> bool {
		self.entries.contains_key(id)
	}

	#[must_use]
	pub fn position(&self, id: &EntryId) -> Option<usize> {
		self.entries.get_index_of(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Entry> {
		self.entries.values()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn fill(&mut self, entries: impl IntoIterator<Item = Entry>) {
		for entry in entries {
			self.entries.insert(entry.id.clone(), entry);
		}
	}

	fn settle(&mut self) {
		self.state = if self.entries.is_empty() {
			RegistryState::Empty
		} else {
			RegistryState::Populated
		};
	}

	fn broadcast(&mut self, event: RegistryEvent) {
		self.observers.retain(|tx| tx.send(event.clone()).is_ok());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(id: &str, name: &str) -> Entry {
		Entry::new(id, name)
	}

	fn drain(rx: &Receiver<RegistryEvent>) -> Vec<RegistryEvent> {
		rx.try_iter().collect()
	}

	#[test]
	fn new_registry_is_loading() {
		assert_eq!(Registry::new().state(), &RegistryState::Loading);
	}

	#[test]
	fn reset_replaces_contents_and_notifies() {
		let mut registry = Registry::from_entries([entry("old", "Old")]);
		let rx = registry.subscribe();

		registry.reset([entry("g1", "Alpha"), entry("g2", "Beta")]);

		assert_eq!(registry.len(), 2);
		assert!(!registry.contains(&EntryId::from("old")));
		assert_eq!(registry.state(), &RegistryState::Populated);
		assert_eq!(drain(&rx), vec![RegistryEvent::Reset]);
	}

	#[test]
	fn adding_an_existing_id_replaces_in_place() {
		let mut registry = Registry::from_entries([entry("g1", "Alpha"), entry("g2", "Beta")]);

		registry.add(entry("g1", "Alpha v2"));

		let names: Vec<_> = registry.iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, vec!["Alpha v2", "Beta"]);
	}

	#[test]
	fn removing_last_entry_settles_to_empty() {
		let mut registry = Registry::from_entries([entry("g1", "Alpha")]);
		let rx = registry.subscribe();

		let removed = registry.remove(&EntryId::from("g1"));

		assert_eq!(removed.map(|e| e.name), Some("Alpha".to_string()));
		assert_eq!(registry.state(), &RegistryState::Empty);
		assert_eq!(drain(&rx), vec![RegistryEvent::Removed(EntryId::from("g1"))]);
		assert!(registry.remove(&EntryId::from("g1")).is_none());
		assert!(drain(&rx).is_empty());
	}

	#[test]
	fn failure_keeps_entries_until_next_mutation() {
		let mut registry = Registry::from_entries([entry("g1", "Alpha")]);
		let rx = registry.subscribe();

		registry.fail("connection refused");
		assert_eq!(
			registry.state(),
			&RegistryState::Failed("connection refused".into())
		);
		assert_eq!(registry.len(), 1);

		registry.begin_loading();
		assert_eq!(registry.state(), &RegistryState::Loading);
		registry.reset([entry("g2", "Beta")]);
		assert_eq!(registry.state(), &RegistryState::Populated);
		assert_eq!(
			drain(&rx),
			vec![
				RegistryEvent::Failed("connection refused".into()),
				RegistryEvent::Loading,
				RegistryEvent::Reset,
			]
		);
	}

	#[test]
	fn dropped_observers_are_pruned() {
		let mut registry = Registry::new();
		let rx = registry.subscribe();
		drop(rx);
		registry.add(entry("g1", "Alpha"));
		assert!(registry.observers.is_empty());
	}
}
