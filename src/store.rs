//! JSON favorites file and the background fetch that feeds the registry.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use thiserror::Error;
use tracing::{debug, warn};

use crate::collaborators::FetchCollection;
use crate::model::{Entry, EntryId, SearchCriteria, SearchMode};
use crate::registry::Registry;

const ID_PREFIX: &str = "fav-";

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to read favorites from {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("failed to write favorites to {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("favorites file {path} is not valid JSON: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("failed to encode favorites: {0}")]
	Encode(#[source] serde_json::Error),
	#[error("no favorite search with id '{0}'")]
	UnknownEntry(EntryId),
	#[error("favorite name must not be empty")]
	EmptyName,
	#[error("a favorite named '{0}' already exists")]
	DuplicateName(String),
}

/// Favorites persisted as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct FavoritesFile {
	path: PathBuf,
}

impl FavoritesFile {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read every entry. A missing file is an empty list.
	pub fn load(&self) -> Result<Vec<Entry>, StoreError> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
			Err(source) => {
				return Err(StoreError::Read {
					path: self.path.clone(),
					source,
				});
			}
		};
		if contents.trim().is_empty() {
			return Ok(Vec::new());
		}
		serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
			path: self.path.clone(),
			source,
		})
	}

	/// Append a new entry with a fresh id.
	pub fn create(
		&self,
		name: &str,
		criteria: SearchCriteria,
		mode: SearchMode,
	) -> Result<Entry, StoreError> {
		let name = name.trim();
		if name.is_empty() {
			return Err(StoreError::EmptyName);
		}
		let mut entries = self.load()?;
		if entries
			.iter()
			.any(|entry| entry.name.eq_ignore_ascii_case(name))
		{
			return Err(StoreError::DuplicateName(name.to_string()));
		}

		let entry = Entry::new(next_id(&entries), name)
			.with_criteria(criteria)
			.with_mode(mode);
		entries.push(entry.clone());
		self.write(&entries)?;
		debug!(id = %entry.id, path = %self.path.display(), "favorite created");
		Ok(entry)
	}

	/// Replace the criteria of an existing entry, keeping its name and id.
	pub fn overwrite(
		&self,
		guid: &EntryId,
		criteria: SearchCriteria,
		mode: SearchMode,
	) -> Result<Entry, StoreError> {
		let mut entries = self.load()?;
		let entry = entries
			.iter_mut()
			.find(|entry| &entry.id == guid)
			.ok_or_else(|| StoreError::UnknownEntry(guid.clone()))?;
		entry.criteria = criteria;
		entry.mode = mode;
		let updated = entry.clone();
		self.write(&entries)?;
		debug!(id = %guid, path = %self.path.display(), "favorite overwritten");
		Ok(updated)
	}

	fn write(&self, entries: &[Entry]) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|source| StoreError::Write {
				path: self.path.clone(),
				source,
			})?;
		}
		let json = serde_json::to_string_pretty(entries).map_err(StoreError::Encode)?;
		fs::write(&self.path, json).map_err(|source| StoreError::Write {
			path: self.path.clone(),
			source,
		})
	}
}

fn next_id(entries: &[Entry]) -> EntryId {
	let highest = entries
		.iter()
		.filter_map(|entry| entry.id.as_str().strip_prefix(ID_PREFIX))
		.filter_map(|suffix| suffix.parse::<u64>().ok())
		.max()
		.unwrap_or(0);
	EntryId::new(format!("{ID_PREFIX}{}", highest + 1))
}

/// Result of one fetch, applied to the registry by the UI pump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchUpdate {
	Loaded(Vec<Entry>),
	Failed(String),
}

/// A fetch outcome stamped with the order its fetch was requested in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
	pub generation: u64,
	pub update: FetchUpdate,
}

impl FetchUpdate {
	pub fn apply(self, registry: &mut Registry) {
		match self {
			Self::Loaded(entries) => registry.reset(entries),
			Self::Failed(reason) => registry.fail(reason),
		}
	}
}

/// Reads the favorites file on a worker thread for every fetch.
/// Workers may finish out of order; each result carries its generation.
pub struct BackgroundFetch {
	store: FavoritesFile,
	tx: Sender<FetchResult>,
	generation: u64,
}

impl BackgroundFetch {
	pub fn new(store: FavoritesFile) -> (Self, Receiver<FetchResult>) {
		let (tx, rx) = mpsc::channel();
		(
			Self {
				store,
				tx,
				generation: 0,
			},
			rx,
		)
	}
}

impl FetchCollection for BackgroundFetch {
	fn fetch(&mut self) {
		self.generation += 1;
		let generation = self.generation;
		let store = self.store.clone();
		let tx = self.tx.clone();
		thread::spawn(move || {
			let update = match store.load() {
				Ok(entries) => FetchUpdate::Loaded(entries),
				Err(err) => {
					warn!(error = %err, generation, "failed to load favorites");
					FetchUpdate::Failed(err.to_string())
				}
			};
			let _ = tx.send(FetchResult { generation, update });
		});
	}
}
