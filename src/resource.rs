//! Generated HAL resources.

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::link::Link;

/// A resource embedded under a relation: one resource or a sequence.
#[derive(Debug, Clone)]
pub enum Element {
	/// A single embedded resource.
	Single(Resource),
	/// An ordered sequence of embedded resources.
	Collection(Vec<Resource>),
}

/// An assembled hypermedia resource node.
///
/// Holds an ordered attribute mapping (`data`), an ordered sequence of
/// [`Link`]s and an ordered mapping of relation name to embedded
/// [`Element`]s. Immutable once constructed by a strategy; embedded
/// elements are always fully formed resources, never raw domain objects.
///
/// Serializing a `Resource` produces the HAL shape: data keys at the top
/// level, `_links` keyed by relation, `_embedded` keyed by relation.
#[derive(Debug, Clone, Default)]
pub struct Resource {
	data: IndexMap<String, Value>,
	links: Vec<Link>,
	elements: IndexMap<String, Element>,
}

impl Resource {
	/// Assembles a resource from its parts.
	pub fn new(
		data: IndexMap<String, Value>,
		links: Vec<Link>,
		elements: IndexMap<String, Element>,
	) -> Self {
		Self {
			data,
			links,
			elements,
		}
	}

	/// The resource's own attributes, in extraction order.
	pub fn data(&self) -> &IndexMap<String, Value> {
		&self.data
	}

	/// All links, in generation order.
	pub fn links(&self) -> &[Link] {
		&self.links
	}

	/// First link carrying the given relation, if any.
	pub fn link(&self, relation: &str) -> Option<&Link> {
		self.links.iter().find(|link| link.relation() == relation)
	}

	/// Embedded elements keyed by relation.
	pub fn elements(&self) -> &IndexMap<String, Element> {
		&self.elements
	}

	/// Embedded element under the given relation, if any.
	pub fn element(&self, relation: &str) -> Option<&Element> {
		self.elements.get(relation)
	}
}

impl Serialize for Resource {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(None)?;
		for (name, value) in &self.data {
			map.serialize_entry(name, value)?;
		}
		if !self.links.is_empty() {
			// Group by relation, preserving first-seen relation order.
			let mut grouped: IndexMap<&str, Vec<&Link>> = IndexMap::new();
			for link in &self.links {
				grouped.entry(link.relation()).or_default().push(link);
			}
			map.serialize_entry("_links", &LinksByRelation(&grouped))?;
		}
		if !self.elements.is_empty() {
			map.serialize_entry("_embedded", &self.elements)?;
		}
		map.end()
	}
}

impl Serialize for Element {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Element::Single(resource) => resource.serialize(serializer),
			Element::Collection(resources) => serializer.collect_seq(resources),
		}
	}
}

struct LinksByRelation<'a>(&'a IndexMap<&'a str, Vec<&'a Link>>);

impl Serialize for LinksByRelation<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (relation, links) in self.0 {
			map.serialize_entry(relation, &LinkGroup(links))?;
		}
		map.end()
	}
}

// A single link serializes as an object; several links sharing one
// relation serialize as an array, per the HAL convention.
struct LinkGroup<'a>(&'a [&'a Link]);

impl Serialize for LinkGroup<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self.0 {
			[single] => single.serialize(serializer),
			many => serializer.collect_seq(many.iter()),
		}
	}
}
