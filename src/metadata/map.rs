//! Type-indexed metadata lookup.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use crate::exception::{Error, Result};

use super::Metadata;

/// Maps concrete domain types to their rendering metadata.
///
/// # Examples
///
/// ```
/// use halogen::{MetadataMap, RouteBasedResourceMetadata};
///
/// struct Book {
///     id: u64,
/// }
/// halogen::domain_object!(Book);
///
/// let mut map = MetadataMap::new();
/// map.register::<Book>(RouteBasedResourceMetadata::new("book", "book-hydrator"));
/// assert!(map.has::<Book>());
/// ```
#[derive(Clone, Default)]
pub struct MetadataMap {
	entries: HashMap<TypeId, Arc<Metadata>>,
}

impl MetadataMap {
	/// Creates an empty map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers metadata for a domain type, replacing any previous
	/// entry.
	pub fn register<T: 'static>(&mut self, metadata: impl Into<Metadata>) {
		self.entries.insert(TypeId::of::<T>(), Arc::new(metadata.into()));
	}

	/// Whether metadata is registered for the type.
	pub fn has<T: 'static>(&self) -> bool {
		self.entries.contains_key(&TypeId::of::<T>())
	}

	/// Looks up metadata for an erased object.
	///
	/// The type name only feeds the error message.
	pub(crate) fn get(&self, type_id: TypeId, type_name: &str) -> Result<Arc<Metadata>> {
		self.entries
			.get(&type_id)
			.cloned()
			.ok_or_else(|| Error::UnmappedClass(type_name.to_string()))
	}
}
