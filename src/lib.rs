//! Selection and commit workflow for saved searches.
//!
//! The library holds the [`SaveSearchController`] with its collaborators, the
//! observable [`Registry`] of favorites, the JSON-backed store and a ratatui
//! front end. The `savesearch` binary wires them to configuration and a CLI.

pub mod affordances;
pub mod app_dirs;
pub mod collaborators;
pub mod controller;
pub mod logging;
pub mod messages;
pub mod model;
pub mod presenter;
pub mod registry;
pub mod store;
pub mod theme;
pub mod ui;

pub use affordances::Affordances;
pub use collaborators::{
	CommitExecutor, CommitRequest, CriteriaSource, FetchCollection, Notice, Notifier,
};
pub use controller::{
	ConfirmPrompt, ConfirmResolution, Confirmation, PendingCommit, ResolveOutcome, SaveAsOutcome,
	SaveGating, SaveOutcome, SaveSearchController,
};
pub use model::{Entry, EntryId, SearchCriteria, SearchMode};
pub use presenter::{ItemClicked, ItemPresenter, PresenterList};
pub use registry::{Registry, RegistryEvent, RegistryState};
pub use store::{BackgroundFetch, FavoritesFile, FetchResult, FetchUpdate, StoreError};
pub use theme::Theme;
pub use ui::{App, SessionOutcome, run};
