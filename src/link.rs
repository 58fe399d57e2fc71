//! HAL links.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// A typed navigational link.
///
/// Immutable value type: relation name, href, an optional `templated`
/// flag and arbitrary extra attributes (`type`, `title`, ...).
///
/// # Examples
///
/// ```
/// use halogen::Link;
///
/// let link = Link::new("self", "/api/books/42");
/// assert_eq!(link.relation(), "self");
/// assert_eq!(link.href(), "/api/books/42");
/// assert!(!link.is_templated());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
	relation: String,
	href: String,
	templated: bool,
	attributes: IndexMap<String, Value>,
}

impl Link {
	/// Creates a link for the given relation.
	///
	/// The relation name must be non-empty.
	pub fn new(relation: impl Into<String>, href: impl Into<String>) -> Self {
		let relation = relation.into();
		debug_assert!(!relation.is_empty(), "link relation must be non-empty");
		Self {
			relation,
			href: href.into(),
			templated: false,
			attributes: IndexMap::new(),
		}
	}

	/// Marks the href as an RFC 6570 URI template.
	pub fn templated(mut self) -> Self {
		self.templated = true;
		self
	}

	/// Attaches an extra serialized attribute, e.g. `type` or `title`.
	///
	/// # Examples
	///
	/// ```
	/// use halogen::Link;
	///
	/// let link = Link::new("search", "/api/books{?q}")
	///     .templated()
	///     .with_attribute("title", "Search books");
	/// assert!(link.is_templated());
	/// assert_eq!(link.attributes()["title"], "Search books");
	/// ```
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	/// Relation under which the link is exposed.
	pub fn relation(&self) -> &str {
		&self.relation
	}

	/// Target URL (or URI template when [`is_templated`](Self::is_templated)).
	pub fn href(&self) -> &str {
		&self.href
	}

	/// Whether the href is a URI template.
	pub fn is_templated(&self) -> bool {
		self.templated
	}

	/// Extra serialized attributes.
	pub fn attributes(&self) -> &IndexMap<String, Value> {
		&self.attributes
	}
}

// Serializes the HAL link object: the relation is the key in the parent
// `_links` map and is not repeated here.
impl Serialize for Link {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(None)?;
		map.serialize_entry("href", &self.href)?;
		if self.templated {
			map.serialize_entry("templated", &true)?;
		}
		for (name, value) in &self.attributes {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}
