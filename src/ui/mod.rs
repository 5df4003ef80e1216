//! Terminal front end for browsing and committing favorite searches.

mod actions;
mod app;
pub mod components;
pub mod editor;
pub mod notifier;
mod render;
mod runtime;

pub use app::{App, FavoritesController, SessionOutcome};
pub use editor::{CommitKind, CommitRecord, EditorSession, SaveEditor};
pub use notifier::StatusNotifier;
pub use runtime::run;
