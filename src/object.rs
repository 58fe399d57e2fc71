//! Type-erased domain object handles.
//!
//! The generator works on objects whose concrete type is only known at
//! registration time, so domain objects travel through it behind the
//! [`DomainObject`] erasure trait. Metadata lookup keys on the concrete
//! [`TypeId`](std::any::TypeId); cycle detection keys on the allocation
//! address of the shared handle.

use std::any::Any;
use std::sync::Arc;

use crate::collection::{IterableCollection, PaginatedCollection};

/// Erased view over a domain object handed to the generator.
///
/// Implement this for every type that appears in the metadata map. For
/// plain data-holding structs the [`domain_object!`](crate::domain_object)
/// macro writes the implementation; collection types override
/// [`as_paginated`](DomainObject::as_paginated) or
/// [`as_iterable`](DomainObject::as_iterable) to expose their iteration
/// capability to the collection strategies.
pub trait DomainObject: Any + Send + Sync {
	/// Upcast to [`Any`] for metadata lookup and hydrator downcasting.
	fn as_any(&self) -> &dyn Any;

	/// Name of the concrete type, used in diagnostics.
	fn type_name(&self) -> &'static str;

	/// Page-aware collection view, when this object is one.
	fn as_paginated(&self) -> Option<&dyn PaginatedCollection> {
		None
	}

	/// Plain-sequence view, when this object is one.
	fn as_iterable(&self) -> Option<&dyn IterableCollection> {
		None
	}
}

/// Shared handle to a type-erased domain object.
pub type Object = Arc<dyn DomainObject>;

/// Stable identity of an object for cycle detection.
///
/// Two handles cloned from the same `Arc` share an identity; two distinct
/// allocations never do, even when the objects compare equal.
pub(crate) fn identity(object: &Object) -> usize {
	Arc::as_ptr(object) as *const () as usize
}

/// Implements [`DomainObject`] for plain domain structs.
///
/// # Examples
///
/// ```
/// struct Author {
///     name: String,
/// }
///
/// halogen::domain_object!(Author);
///
/// use halogen::{DomainObject, Object};
/// use std::sync::Arc;
///
/// let author: Object = Arc::new(Author { name: "Nin".into() });
/// assert!(author.type_name().ends_with("Author"));
/// ```
#[macro_export]
macro_rules! domain_object {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::object::DomainObject for $ty {
				fn as_any(&self) -> &dyn ::std::any::Any {
					self
				}

				fn type_name(&self) -> &'static str {
					::std::any::type_name::<$ty>()
				}
			}
		)+
	};
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Sample {
		#[allow(dead_code)]
		id: u64,
	}

	domain_object!(Sample);

	#[test]
	fn test_identity_is_per_allocation() {
		let a: Object = Arc::new(Sample { id: 1 });
		let b: Object = Arc::new(Sample { id: 1 });
		let a2 = Arc::clone(&a);

		assert_eq!(identity(&a), identity(&a2));
		assert_ne!(identity(&a), identity(&b));
	}

	#[test]
	fn test_type_name_reports_concrete_type() {
		let a: Object = Arc::new(Sample { id: 1 });
		assert!(a.type_name().ends_with("Sample"));
	}

	#[test]
	fn test_plain_objects_expose_no_collection_view() {
		let a: Object = Arc::new(Sample { id: 1 });
		assert!(a.as_paginated().is_none());
		assert!(a.as_iterable().is_none());
	}
}
