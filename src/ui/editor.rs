//! Commit executor backing the terminal front end.
//!
//! Overwrites go straight to the favorites file since the user has already
//! confirmed them. Creating a new favorite opens a name editor first.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use ratatui::widgets::Block;
use serde::Serialize;
use tracing::{info, warn};
use tui_textarea::TextArea;

use crate::collaborators::{CommitExecutor, CommitRequest};
use crate::model::{EntryId, SearchCriteria, SearchMode};
use crate::store::{FavoritesFile, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitKind {
	Created,
	Overwritten,
}

/// One persisted change, reported when the session ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitRecord {
	pub kind: CommitKind,
	pub id: EntryId,
	pub name: String,
	pub criteria: SearchCriteria,
	pub mode: SearchMode,
}

/// Name entry for a favorite about to be created.
pub struct EditorSession {
	name: TextArea<'static>,
	criteria: SearchCriteria,
	mode: SearchMode,
	existing: Vec<String>,
	error: Option<String>,
}

impl EditorSession {
	fn new(criteria: SearchCriteria, mode: SearchMode, existing: Vec<String>) -> Self {
		let mut name = TextArea::default();
		name.set_cursor_line_style(Style::default());
		name.set_placeholder_text("Favorite name");
		name.set_block(Block::bordered().title(" Name "));
		Self {
			name,
			criteria,
			mode,
			existing,
			error: None,
		}
	}

	#[must_use]
	pub fn name_input(&self) -> &TextArea<'static> {
		&self.name
	}

	#[must_use]
	pub fn name(&self) -> String {
		self.name.lines().concat().trim().to_string()
	}

	#[must_use]
	pub fn criteria(&self) -> &SearchCriteria {
		&self.criteria
	}

	#[must_use]
	pub fn mode(&self) -> SearchMode {
		self.mode
	}

	#[must_use]
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	fn validate(&self, name: &str) -> Result<(), StoreError> {
		if name.is_empty() {
			return Err(StoreError::EmptyName);
		}
		if self
			.existing
			.iter()
			.any(|existing| existing.eq_ignore_ascii_case(name))
		{
			return Err(StoreError::DuplicateName(name.to_string()));
		}
		Ok(())
	}
}

pub struct SaveEditor {
	store: FavoritesFile,
	session: Option<EditorSession>,
	commits: Vec<CommitRecord>,
	status: Option<String>,
	refresh: bool,
}

impl SaveEditor {
	#[must_use]
	pub fn new(store: FavoritesFile) -> Self {
		Self {
			store,
			session: None,
			commits: Vec::new(),
			status: None,
			refresh: false,
		}
	}

	#[must_use]
	pub fn session(&self) -> Option<&EditorSession> {
		self.session.as_ref()
	}

	#[must_use]
	pub fn is_editing(&self) -> bool {
		self.session.is_some()
	}

	#[must_use]
	pub fn commits(&self) -> &[CommitRecord] {
		&self.commits
	}

	/// Message describing the last commit attempt, if not yet shown.
	pub fn take_status(&mut self) -> Option<String> {
		self.status.take()
	}

	/// Whether the favorites changed on disk since the last call.
	pub fn take_refresh(&mut self) -> bool {
		std::mem::take(&mut self.refresh)
	}

	/// Route a key press to the open name editor.
	pub fn handle_key(&mut self, key: KeyEvent) {
		let Some(session) = self.session.as_mut() else {
			return;
		};
		match key.code {
			KeyCode::Esc => {
				self.session = None;
				self.status = Some("Save cancelled".to_string());
			}
			KeyCode::Enter => self.submit(),
			_ => {
				if session.name.input(key) {
					session.error = None;
				}
			}
		}
	}

	fn submit(&mut self) {
		let Some(session) = self.session.as_mut() else {
			return;
		};
		let name = session.name();
		if let Err(err) = session.validate(&name) {
			session.error = Some(err.to_string());
			return;
		}

		match self
			.store
			.create(&name, session.criteria.clone(), session.mode)
		{
			Ok(entry) => {
				info!(id = %entry.id, name = %entry.name, "favorite created");
				self.status = Some(format!("Saved favorite '{}'", entry.name));
				self.record(CommitKind::Created, entry.id, entry.name, entry.criteria, entry.mode);
				self.session = None;
			}
			Err(err) => {
				warn!(error = %err, "failed to create favorite");
				session.error = Some(err.to_string());
			}
		}
	}

	fn overwrite(&mut self, guid: &EntryId, criteria: SearchCriteria, mode: SearchMode) {
		match self.store.overwrite(guid, criteria, mode) {
			Ok(entry) => {
				self.status = Some(format!("Updated favorite '{}'", entry.name));
				self.record(
					CommitKind::Overwritten,
					entry.id,
					entry.name,
					entry.criteria,
					entry.mode,
				);
			}
			Err(err) => {
				warn!(error = %err, %guid, "failed to overwrite favorite");
				self.status = Some(err.to_string());
			}
		}
	}

	fn record(
		&mut self,
		kind: CommitKind,
		id: EntryId,
		name: String,
		criteria: SearchCriteria,
		mode: SearchMode,
	) {
		self.commits.push(CommitRecord {
			kind,
			id,
			name,
			criteria,
			mode,
		});
		self.refresh = true;
	}
}

impl CommitExecutor for SaveEditor {
	fn launch(&mut self, request: CommitRequest<'_>) {
		let criteria = request.criteria.current().unwrap_or_default();
		match request.pending {
			Some(pending) => self.overwrite(&pending.guid, criteria, request.mode),
			None => {
				let existing = request
					.registry
					.iter()
					.map(|entry| entry.name.clone())
					.collect();
				self.session = Some(EditorSession::new(criteria, request.mode, existing));
			}
		}
	}
}
