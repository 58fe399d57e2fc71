//! Shared domain fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use indexmap::indexmap;

use halogen::{
	AttributeValue, HydratorRegistry, LinkGenerator, MetadataMap, Object, ResourceGenerator,
	RouteBasedResourceMetadata, RouteMap,
};

pub struct Author {
	pub id: u64,
	pub name: String,
}

pub struct Book {
	pub id: u64,
	pub title: String,
	pub author: Object,
}

halogen::domain_object!(Author, Book);

pub fn author(id: u64, name: &str) -> Object {
	Arc::new(Author {
		id,
		name: name.to_string(),
	})
}

pub fn book(id: u64, title: &str, by: Object) -> Object {
	Arc::new(Book {
		id,
		title: title.to_string(),
		author: by,
	})
}

pub fn hydrators() -> HydratorRegistry {
	let mut hydrators = HydratorRegistry::new();
	hydrators.register_fn("author-hydrator", |author: &Author| {
		indexmap! {
			"id".to_string() => AttributeValue::json(author.id),
			"name".to_string() => AttributeValue::json(author.name.clone()),
		}
	});
	hydrators.register_fn("book-hydrator", |book: &Book| {
		indexmap! {
			"id".to_string() => AttributeValue::json(book.id),
			"title".to_string() => AttributeValue::json(book.title.clone()),
			"author".to_string() => AttributeValue::nested(book.author.clone()),
		}
	});
	hydrators
}

pub fn routes() -> RouteMap {
	let mut routes = RouteMap::new();
	routes.register("author", "/api/authors/{id}");
	routes.register("book", "/api/books/{id}");
	routes.register("books", "/api/books");
	routes
}

pub fn metadata_map() -> MetadataMap {
	let mut map = MetadataMap::new();
	map.register::<Author>(RouteBasedResourceMetadata::new("author", "author-hydrator"));
	map.register::<Book>(RouteBasedResourceMetadata::new("book", "book-hydrator"));
	map
}

pub fn link_generator() -> LinkGenerator {
	LinkGenerator::new(Arc::new(routes()))
}

/// Generator over the library fixtures with the built-in strategies.
pub fn generator() -> ResourceGenerator {
	ResourceGenerator::new(metadata_map(), hydrators(), link_generator()).with_default_strategies()
}

/// Same configuration, customized before the strategies go in.
pub fn generator_with(
	configure: impl FnOnce(&mut MetadataMap, &mut HydratorRegistry, &mut RouteMap),
) -> ResourceGenerator {
	let mut metadata_map = metadata_map();
	let mut hydrators = hydrators();
	let mut routes = routes();
	configure(&mut metadata_map, &mut hydrators, &mut routes);
	ResourceGenerator::new(metadata_map, hydrators, LinkGenerator::new(Arc::new(routes)))
		.with_default_strategies()
}
