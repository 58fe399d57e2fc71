//! Collection views and the built-in collection types.
//!
//! Collection strategies never downcast to concrete collection types;
//! they consume the [`PaginatedCollection`] and [`IterableCollection`]
//! views exposed through
//! [`DomainObject::as_paginated`](crate::DomainObject::as_paginated) and
//! [`DomainObject::as_iterable`](crate::DomainObject::as_iterable).
//! Hosts with their own collection types implement the matching view.

use std::any::Any;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::object::{DomainObject, Object};

/// Page-aware view over a collection.
pub trait PaginatedCollection: Send + Sync {
	/// Number of items across all pages.
	fn total_items(&self) -> usize;

	/// Number of pages, at least 1.
	fn page_count(&self) -> usize;

	/// The currently selected page, 1-based.
	fn current_page(&self) -> usize;

	/// Selects a page; out-of-range values clamp to the valid range.
	fn set_current_page(&self, page: usize);

	/// Items of the currently selected page.
	fn page_items(&self) -> Vec<Object>;
}

/// Plain-sequence view over a collection.
pub trait IterableCollection: Send + Sync {
	/// Number of items, when known without iterating.
	fn count(&self) -> Option<usize> {
		None
	}

	/// Iterates the items.
	fn iter_items(&self) -> Box<dyn Iterator<Item = Object> + '_>;
}

/// In-memory paginator over a fixed item list.
///
/// # Examples
///
/// ```
/// use halogen::{Object, Paginator};
/// use std::sync::Arc;
///
/// struct Book {
///     id: u64,
/// }
/// halogen::domain_object!(Book);
///
/// let books: Vec<Object> = (1..=5).map(|id| Arc::new(Book { id }) as Object).collect();
/// let paginator = Paginator::new(books, 2);
/// use halogen::PaginatedCollection;
/// assert_eq!(paginator.page_count(), 3);
/// paginator.set_current_page(3);
/// assert_eq!(paginator.page_items().len(), 1);
/// ```
pub struct Paginator {
	items: Vec<Object>,
	page_size: usize,
	current_page: AtomicUsize,
}

impl Paginator {
	/// Creates a paginator positioned on page 1.
	///
	/// A zero page size is treated as 1.
	pub fn new(items: Vec<Object>, page_size: usize) -> Self {
		Self {
			items,
			page_size: page_size.max(1),
			current_page: AtomicUsize::new(1),
		}
	}
}

impl PaginatedCollection for Paginator {
	fn total_items(&self) -> usize {
		self.items.len()
	}

	fn page_count(&self) -> usize {
		self.items.len().div_ceil(self.page_size).max(1)
	}

	fn current_page(&self) -> usize {
		self.current_page.load(Ordering::Relaxed)
	}

	fn set_current_page(&self, page: usize) {
		let clamped = page.clamp(1, self.page_count());
		self.current_page.store(clamped, Ordering::Relaxed);
	}

	fn page_items(&self) -> Vec<Object> {
		let start = (self.current_page() - 1) * self.page_size;
		self.items
			.iter()
			.skip(start)
			.take(self.page_size)
			.cloned()
			.collect()
	}
}

impl DomainObject for Paginator {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn as_paginated(&self) -> Option<&dyn PaginatedCollection> {
		Some(self)
	}
}

/// Unpaginated collection over a fixed item list.
pub struct ObjectList {
	items: Vec<Object>,
}

impl ObjectList {
	pub fn new(items: Vec<Object>) -> Self {
		Self { items }
	}
}

impl IterableCollection for ObjectList {
	fn count(&self) -> Option<usize> {
		Some(self.items.len())
	}

	fn iter_items(&self) -> Box<dyn Iterator<Item = Object> + '_> {
		Box::new(self.items.iter().cloned())
	}
}

impl DomainObject for ObjectList {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn as_iterable(&self) -> Option<&dyn IterableCollection> {
		Some(self)
	}
}

/// Single-use collection over an arbitrary iterator.
///
/// The item count is unknown up front; rendering counts during its one
/// pass. A second iteration yields nothing.
pub struct ObjectIter {
	inner: Mutex<Option<Box<dyn Iterator<Item = Object> + Send>>>,
}

impl ObjectIter {
	pub fn new(iter: impl Iterator<Item = Object> + Send + 'static) -> Self {
		Self {
			inner: Mutex::new(Some(Box::new(iter))),
		}
	}
}

impl IterableCollection for ObjectIter {
	fn iter_items(&self) -> Box<dyn Iterator<Item = Object> + '_> {
		let taken = match self.inner.lock() {
			Ok(mut guard) => guard.take(),
			Err(_) => None,
		};
		match taken {
			Some(iter) => iter,
			None => Box::new(std::iter::empty()),
		}
	}
}

impl DomainObject for ObjectIter {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	fn as_iterable(&self) -> Option<&dyn IterableCollection> {
		Some(self)
	}
}
