//! Configuration loading and resolution.
//!
//! `load` merges config files and `SAVESEARCH__*` environment variables,
//! applies CLI overrides and returns a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
