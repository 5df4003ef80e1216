//! User-facing strings for the favorites workflow.

pub const NOT_SELECTED_SEARCH_FILTER: &str = "Please select at least one search filter";
pub const NOT_SELECTED_FAVORITE_ELEMENT: &str = "Please select a favorite search to overwrite";
pub const OVERWRITE_PROMPT: &str = "Do you want to overwrite";
pub const NO_FAVORITES: &str = "No favorite searches";
pub const LOADING_FAVORITES: &str = "Loading favorites";
pub const LOAD_FAILED: &str = "Could not load favorites";
