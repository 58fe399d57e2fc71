//! Attribute values produced by hydrators.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::object::Object;

/// Ordered attribute name to value mapping extracted from one object.
pub type AttributeMap = IndexMap<String, AttributeValue>;

/// A single extracted attribute.
///
/// Plain data stays as JSON; nested domain objects are carried as erased
/// handles so the generator can embed them as resources.
#[derive(Clone)]
pub enum AttributeValue {
	/// Scalar, array or object data that is already plain JSON.
	Json(Value),
	/// A nested domain object to embed as a single resource.
	Nested(Object),
	/// A sequence of nested domain objects to embed as a collection.
	NestedList(Vec<Object>),
}

impl AttributeValue {
	/// Wraps plain data.
	pub fn json(value: impl Into<Value>) -> Self {
		AttributeValue::Json(value.into())
	}

	/// Wraps a nested domain object.
	pub fn nested(object: Object) -> Self {
		AttributeValue::Nested(object)
	}

	/// Wraps a sequence of nested domain objects.
	pub fn nested_list(objects: impl IntoIterator<Item = Object>) -> Self {
		AttributeValue::NestedList(objects.into_iter().collect())
	}
}

impl fmt::Debug for AttributeValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttributeValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
			AttributeValue::Nested(object) => write!(f, "Nested({})", object.type_name()),
			AttributeValue::NestedList(objects) => {
				write!(f, "NestedList(len = {})", objects.len())
			}
		}
	}
}
