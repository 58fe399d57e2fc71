//! Metadata-driven generation of HAL resource trees.
//!
//! `halogen` turns plain domain objects into `application/hal+json`
//! resource representations. Rendering is configured, not coded per
//! endpoint: each domain class registers [`Metadata`] describing how it
//! becomes a resource (which hydrator extracts it, where its self link
//! points, how deep nesting may go, how collections paginate), and the
//! [`ResourceGenerator`] applies those instructions recursively.
//!
//! Nested objects render as `_embedded` resources. Recursion is bounded
//! twice over: each class carries a maximum depth past which nested
//! attributes are dropped, and objects already on the active rendering
//! path are truncated on revisit, so self-referential object graphs
//! terminate.
//!
//! # Examples
//!
//! ```
//! use halogen::{
//!     AttributeValue, HydratorRegistry, LinkGenerator, MetadataMap, ResourceGenerator,
//!     RouteBasedResourceMetadata, RouteMap, SimpleRequest,
//! };
//! use indexmap::indexmap;
//! use std::sync::Arc;
//!
//! struct Author {
//!     id: u64,
//!     name: String,
//! }
//!
//! struct Book {
//!     id: u64,
//!     title: String,
//!     author: halogen::Object,
//! }
//!
//! halogen::domain_object!(Author, Book);
//!
//! let mut metadata_map = MetadataMap::new();
//! metadata_map.register::<Author>(RouteBasedResourceMetadata::new("author", "author-hydrator"));
//! metadata_map.register::<Book>(RouteBasedResourceMetadata::new("book", "book-hydrator"));
//!
//! let mut hydrators = HydratorRegistry::new();
//! hydrators.register_fn("author-hydrator", |author: &Author| {
//!     indexmap! {
//!         "id".to_string() => AttributeValue::json(author.id),
//!         "name".to_string() => AttributeValue::json(author.name.clone()),
//!     }
//! });
//! hydrators.register_fn("book-hydrator", |book: &Book| {
//!     indexmap! {
//!         "id".to_string() => AttributeValue::json(book.id),
//!         "title".to_string() => AttributeValue::json(book.title.clone()),
//!         "author".to_string() => AttributeValue::nested(book.author.clone()),
//!     }
//! });
//!
//! let mut routes = RouteMap::new();
//! routes.register("author", "/api/authors/{id}");
//! routes.register("book", "/api/books/{id}");
//!
//! let generator =
//!     ResourceGenerator::new(metadata_map, hydrators, LinkGenerator::new(Arc::new(routes)))
//!         .with_default_strategies();
//!
//! let author: halogen::Object = Arc::new(Author { id: 3, name: "Nin".into() });
//! let book: halogen::Object = Arc::new(Book {
//!     id: 217,
//!     title: "Nexus".into(),
//!     author,
//! });
//!
//! let resource = generator.from_object(&book, &SimpleRequest::new()).unwrap();
//! let rendered = serde_json::to_value(&resource).unwrap();
//! assert_eq!(rendered["_links"]["self"]["href"], "/api/books/217");
//! assert_eq!(rendered["_embedded"]["author"]["name"], "Nin");
//! ```

pub mod collection;
pub mod exception;
pub mod generator;
pub mod hydrator;
pub mod link;
pub mod link_generator;
pub mod metadata;
pub mod object;
pub mod request;
pub mod resource;
pub mod route;
pub mod value;

pub use collection::{
	IterableCollection, ObjectIter, ObjectList, PaginatedCollection, Paginator,
};
pub use exception::{Error, Result};
pub use generator::{
	GenerationState, ResourceGenerator, ResourceStrategy, RouteBasedCollectionStrategy,
	RouteBasedResourceStrategy, UrlBasedCollectionStrategy, UrlBasedResourceStrategy,
};
pub use hydrator::{FnHydrator, Hydrator, HydratorRegistry};
pub use link::Link;
pub use link_generator::LinkGenerator;
pub use metadata::{
	DEFAULT_MAX_DEPTH, Metadata, MetadataKind, MetadataMap, PaginationParamType,
	RouteBasedCollectionMetadata, RouteBasedResourceMetadata, UrlBasedCollectionMetadata,
	UrlBasedResourceMetadata,
};
pub use object::{DomainObject, Object};
pub use request::{RequestContext, SimpleRequest};
pub use resource::{Element, Resource};
pub use route::{RouteMap, UrlGenerator};
pub use value::{AttributeMap, AttributeValue};
