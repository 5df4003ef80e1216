//! Saved-search records and the criteria they carry.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a saved search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for EntryId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for EntryId {
	fn from(value: &str) -> Self {
		Self::new(value)
	}
}

impl From<String> for EntryId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// Whether criteria were composed in the basic or the advanced search form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
	#[default]
	Basic,
	Advanced,
}

impl SearchMode {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Basic => "basic",
			Self::Advanced => "advanced",
		}
	}

	#[must_use]
	pub fn is_basic(self) -> bool {
		matches!(self, Self::Basic)
	}
}

impl fmt::Display for SearchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A search definition. Only `type`, `tag` and `query` are inspected; the
/// remaining attributes travel along untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCriteria {
	#[serde(rename = "type", skip_serializing_if = "Option::is_none")]
	pub type_name: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tag: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub query: Option<String>,
	#[serde(skip_serializing_if = "BTreeMap::is_empty")]
	pub attributes: BTreeMap<String, String>,
}

impl SearchCriteria {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
		self.type_name = Some(type_name.into());
		self
	}

	#[must_use]
	pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
		self.tag = Some(tag.into());
		self
	}

	#[must_use]
	pub fn with_query(mut self, query: impl Into<String>) -> Self {
		self.query = Some(query.into());
		self
	}

	#[must_use]
	pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(key.into(), value.into());
		self
	}

	/// True when at least one of type, tag or query holds a non-empty value.
	/// Whitespace counts as a value.
	#[must_use]
	pub fn has_filter(&self) -> bool {
		[&self.type_name, &self.tag, &self.query]
			.into_iter()
			.any(|value| value.as_deref().is_some_and(|value| !value.is_empty()))
	}

	/// Compact `key=value` rendering of the filters, blanks skipped.
	#[must_use]
	pub fn summary(&self) -> String {
		self.filters()
			.map(|(key, value)| format!("{key}={value}"))
			.collect::<Vec<_>>()
			.join(" ")
	}

	fn filters(&self) -> impl Iterator<Item = (&'static str, &str)> {
		[
			("type", self.type_name.as_deref()),
			("tag", self.tag.as_deref()),
			("query", self.query.as_deref()),
		]
		.into_iter()
		.filter_map(|(key, value)| {
			let value = value?.trim();
			(!value.is_empty()).then_some((key, value))
		})
	}
}

/// One saved search as known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
	pub id: EntryId,
	pub name: String,
	#[serde(default)]
	pub criteria: SearchCriteria,
	#[serde(default)]
	pub mode: SearchMode,
}

impl Entry {
	pub fn new(id: impl Into<EntryId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			criteria: SearchCriteria::default(),
			mode: SearchMode::default(),
		}
	}

	#[must_use]
	pub fn with_criteria(mut self, criteria: SearchCriteria) -> Self {
		self.criteria = criteria;
		self
	}

	#[must_use]
	pub fn with_mode(mut self, mode: SearchMode) -> Self {
		self.mode = mode;
		self
	}
}
