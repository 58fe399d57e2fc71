//! The resource generation engine.
//!
//! [`ResourceGenerator`] ties the configuration surfaces together: the
//! metadata map selects how a class renders, the hydrator registry
//! extracts its state, the link generator resolves its links, and a
//! strategy registered per metadata kind drives the actual rendering.
//! Recursion into nested objects flows back through
//! [`ResourceGenerator::generate`], which tracks the active rendering
//! path for cycle detection.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::trace;

use crate::exception::{Error, Result};
use crate::hydrator::HydratorRegistry;
use crate::link::Link;
use crate::link_generator::LinkGenerator;
use crate::metadata::{MetadataKind, MetadataMap};
use crate::object::{self, Object};
use crate::request::RequestContext;
use crate::resource::{Element, Resource};

mod extract;
mod route_based;
mod strategy;
mod url_based;

pub use route_based::{RouteBasedCollectionStrategy, RouteBasedResourceStrategy};
pub use strategy::ResourceStrategy;
pub use url_based::{UrlBasedCollectionStrategy, UrlBasedResourceStrategy};

/// Tracks the chain of objects currently being rendered.
///
/// One state lives for the duration of a single top-level generation
/// call. An object is a member of the state while it or its descendants
/// render; it leaves again afterwards, so the same object appearing in
/// two sibling positions renders fully both times.
#[derive(Debug, Default)]
pub struct GenerationState {
	visited: HashSet<usize>,
}

impl GenerationState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Marks an object as on the active path; false when it already is.
	pub(crate) fn visit(&mut self, identity: usize) -> bool {
		self.visited.insert(identity)
	}

	/// Removes an object from the active path.
	pub(crate) fn leave(&mut self, identity: usize) {
		self.visited.remove(&identity);
	}
}

/// Metadata-driven converter from domain objects to resources.
///
/// # Examples
///
/// ```
/// use halogen::{
///     AttributeValue, HydratorRegistry, LinkGenerator, MetadataMap, ResourceGenerator,
///     RouteBasedResourceMetadata, RouteMap, SimpleRequest,
/// };
/// use indexmap::indexmap;
/// use std::sync::Arc;
///
/// struct Book {
///     id: u64,
///     title: String,
/// }
/// halogen::domain_object!(Book);
///
/// let mut metadata_map = MetadataMap::new();
/// metadata_map.register::<Book>(RouteBasedResourceMetadata::new("book", "book-hydrator"));
///
/// let mut hydrators = HydratorRegistry::new();
/// hydrators.register_fn("book-hydrator", |book: &Book| {
///     indexmap! {
///         "id".to_string() => AttributeValue::json(book.id),
///         "title".to_string() => AttributeValue::json(book.title.clone()),
///     }
/// });
///
/// let mut routes = RouteMap::new();
/// routes.register("book", "/api/books/{id}");
///
/// let generator =
///     ResourceGenerator::new(metadata_map, hydrators, LinkGenerator::new(Arc::new(routes)))
///         .with_default_strategies();
///
/// let book: halogen::Object = Arc::new(Book { id: 217, title: "Nexus".into() });
/// let resource = generator.from_object(&book, &SimpleRequest::new()).unwrap();
/// assert_eq!(resource.link("self").unwrap().href(), "/api/books/217");
/// ```
pub struct ResourceGenerator {
	metadata_map: MetadataMap,
	hydrators: HydratorRegistry,
	link_generator: LinkGenerator,
	strategies: HashMap<MetadataKind, Arc<dyn ResourceStrategy>>,
}

impl ResourceGenerator {
	/// Creates a generator with no strategies registered.
	///
	/// Rendering any object fails with
	/// [`Error::UnmappedMetadataType`] until a strategy covers its
	/// metadata kind; most callers want
	/// [`with_default_strategies`](Self::with_default_strategies).
	pub fn new(
		metadata_map: MetadataMap,
		hydrators: HydratorRegistry,
		link_generator: LinkGenerator,
	) -> Self {
		Self {
			metadata_map,
			hydrators,
			link_generator,
			strategies: HashMap::new(),
		}
	}

	/// Registers the built-in strategy for every metadata kind.
	pub fn with_default_strategies(mut self) -> Self {
		self.register_strategy(MetadataKind::RouteBasedResource, Arc::new(RouteBasedResourceStrategy));
		self.register_strategy(MetadataKind::UrlBasedResource, Arc::new(UrlBasedResourceStrategy));
		self.register_strategy(
			MetadataKind::RouteBasedCollection,
			Arc::new(RouteBasedCollectionStrategy),
		);
		self.register_strategy(MetadataKind::UrlBasedCollection, Arc::new(UrlBasedCollectionStrategy));
		self
	}

	/// Registers a strategy for a metadata kind, replacing any previous
	/// one.
	pub fn register_strategy(&mut self, kind: MetadataKind, strategy: Arc<dyn ResourceStrategy>) {
		self.strategies.insert(kind, strategy);
	}

	pub fn metadata_map(&self) -> &MetadataMap {
		&self.metadata_map
	}

	pub fn hydrators(&self) -> &HydratorRegistry {
		&self.hydrators
	}

	pub fn link_generator(&self) -> &LinkGenerator {
		&self.link_generator
	}

	/// Renders a domain object into a resource tree.
	pub fn from_object(&self, object: &Object, request: &dyn RequestContext) -> Result<Resource> {
		let mut state = GenerationState::new();
		self.generate(object, request, 0, &mut state)
	}

	/// Renders a list of objects as one resource embedding them under
	/// the given relation.
	///
	/// When a href is supplied the enclosing resource carries it as its
	/// self link.
	pub fn from_array(
		&self,
		objects: &[Object],
		relation: &str,
		request: &dyn RequestContext,
		self_href: Option<&str>,
	) -> Result<Resource> {
		let mut members = Vec::with_capacity(objects.len());
		for object in objects {
			members.push(self.from_object(object, request)?);
		}
		let links = match self_href {
			Some(href) => vec![Link::new("self", href)],
			None => Vec::new(),
		};
		let mut elements = indexmap::IndexMap::new();
		elements.insert(relation.to_string(), Element::Collection(members));
		Ok(Resource::new(indexmap::IndexMap::new(), links, elements))
	}

	/// Renders one object within an ongoing generation.
	///
	/// Strategies call back into this for nested objects and collection
	/// members. An object already on the active path renders through its
	/// strategy at a depth past its ceiling, producing a truncated
	/// resource instead of recursing forever.
	pub fn generate(
		&self,
		object: &Object,
		request: &dyn RequestContext,
		depth: usize,
		state: &mut GenerationState,
	) -> Result<Resource> {
		let metadata = self
			.metadata_map
			.get(object.as_any().type_id(), object.type_name())?;
		let strategy = self
			.strategies
			.get(&metadata.kind())
			.cloned()
			.ok_or(Error::UnmappedMetadataType(metadata.kind()))?;

		let identity = object::identity(object);
		if !state.visit(identity) {
			trace!(
				class = object.type_name(),
				depth,
				"object already on the rendering path, truncating"
			);
			return strategy.create_resource(
				object,
				&metadata,
				self,
				request,
				metadata.max_depth().saturating_add(1),
				state,
			);
		}

		trace!(class = object.type_name(), kind = %metadata.kind(), depth, "rendering object");
		let resource = strategy.create_resource(object, &metadata, self, request, depth, state);
		state.leave(identity);
		resource
	}
}
