//! Hydration capabilities: domain object to flat attribute mapping.
//!
//! Hydrators are registered under a name at configuration time; resource
//! metadata refers to them by that name. This keeps the extraction
//! mechanism pluggable per class without coupling metadata to concrete
//! Rust types.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::exception::{Error, Result};
use crate::object::Object;
use crate::value::AttributeMap;

/// Converts a domain object into a flat attribute mapping.
pub trait Hydrator: Send + Sync {
	/// Extracts the object's accessible state.
	fn extract(&self, object: &Object) -> Result<AttributeMap>;
}

/// Adapts a plain closure over a concrete type into a [`Hydrator`].
///
/// The closure receives the downcast object; a type mismatch between the
/// registered metadata and the hydrator surfaces as [`Error::Extraction`].
pub struct FnHydrator<T, F> {
	extract: F,
	_marker: PhantomData<fn(&T)>,
}

impl<T, F> FnHydrator<T, F>
where
	T: Send + Sync + 'static,
	F: Fn(&T) -> AttributeMap + Send + Sync,
{
	/// Wraps the extraction closure.
	pub fn new(extract: F) -> Self {
		Self {
			extract,
			_marker: PhantomData,
		}
	}
}

impl<T, F> Hydrator for FnHydrator<T, F>
where
	T: Send + Sync + 'static,
	F: Fn(&T) -> AttributeMap + Send + Sync,
{
	fn extract(&self, object: &Object) -> Result<AttributeMap> {
		let concrete = object.as_any().downcast_ref::<T>().ok_or_else(|| {
			Error::Extraction(format!(
				"hydrator for `{}` received an instance of `{}`",
				std::any::type_name::<T>(),
				object.type_name()
			))
		})?;
		Ok((self.extract)(concrete))
	}
}

/// Name-keyed registry of hydration capabilities.
///
/// # Examples
///
/// ```
/// use halogen::{AttributeValue, HydratorRegistry};
/// use indexmap::indexmap;
/// use std::sync::Arc;
///
/// struct Author {
///     name: String,
/// }
/// halogen::domain_object!(Author);
///
/// let mut hydrators = HydratorRegistry::new();
/// hydrators.register_fn("author-hydrator", |author: &Author| {
///     indexmap! {
///         "name".to_string() => AttributeValue::json(author.name.clone()),
///     }
/// });
///
/// let author: halogen::Object = Arc::new(Author { name: "Nin".into() });
/// let data = hydrators.get("author-hydrator").unwrap().extract(&author).unwrap();
/// assert!(data.contains_key("name"));
/// ```
#[derive(Clone, Default)]
pub struct HydratorRegistry {
	hydrators: HashMap<String, Arc<dyn Hydrator>>,
}

impl HydratorRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a hydrator under a name, replacing any previous entry.
	pub fn register(&mut self, name: impl Into<String>, hydrator: Arc<dyn Hydrator>) {
		self.hydrators.insert(name.into(), hydrator);
	}

	/// Registers a closure-based hydrator for a concrete type.
	pub fn register_fn<T, F>(&mut self, name: impl Into<String>, extract: F)
	where
		T: Send + Sync + 'static,
		F: Fn(&T) -> AttributeMap + Send + Sync + 'static,
	{
		self.register(name, Arc::new(FnHydrator::new(extract)));
	}

	/// Looks up a hydrator by name.
	pub fn get(&self, name: &str) -> Result<Arc<dyn Hydrator>> {
		self.hydrators
			.get(name)
			.cloned()
			.ok_or_else(|| Error::HydratorNotFound(name.to_string()))
	}

	/// Whether a hydrator is registered under the name.
	pub fn contains(&self, name: &str) -> bool {
		self.hydrators.contains_key(name)
	}
}
