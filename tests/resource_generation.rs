//! End-to-end rendering of single resources.

mod support;

use std::sync::Arc;

use assert_json_diff::assert_json_eq;
use indexmap::indexmap;
use serde_json::json;

use halogen::{
	AttributeValue, Error, Object, ResourceGenerator, RouteBasedResourceMetadata, SimpleRequest,
	UrlBasedResourceMetadata,
};

use support::Author;

#[test]
fn renders_attributes_self_link_and_embedded_author() {
	let generator = support::generator();
	let book = support::book(217, "Nexus", support::author(3, "Nin"));

	let resource = generator.from_object(&book, &SimpleRequest::new()).unwrap();

	assert_json_eq!(
		serde_json::to_value(&resource).unwrap(),
		json!({
			"id": 217,
			"title": "Nexus",
			"_links": { "self": { "href": "/api/books/217" } },
			"_embedded": {
				"author": {
					"id": 3,
					"name": "Nin",
					"_links": { "self": { "href": "/api/authors/3" } },
				},
			},
		})
	);
}

#[test]
fn renders_nested_lists_as_embedded_arrays() {
	struct Anthology {
		id: u64,
		authors: Vec<Object>,
	}
	halogen::domain_object!(Anthology);

	let generator = support::generator_with(|metadata_map, hydrators, routes| {
		routes.register("anthology", "/api/anthologies/{id}");
		metadata_map.register::<Anthology>(RouteBasedResourceMetadata::new(
			"anthology",
			"anthology-hydrator",
		));
		hydrators.register_fn("anthology-hydrator", |anthology: &Anthology| {
			indexmap! {
				"id".to_string() => AttributeValue::json(anthology.id),
				"authors".to_string() => AttributeValue::nested_list(anthology.authors.clone()),
			}
		});
	});

	let anthology: Object = Arc::new(Anthology {
		id: 9,
		authors: vec![support::author(1, "Ada"), support::author(2, "Grace")],
	});
	let resource = generator.from_object(&anthology, &SimpleRequest::new()).unwrap();

	let rendered = serde_json::to_value(&resource).unwrap();
	assert_eq!(rendered["_embedded"]["authors"][0]["name"], "Ada");
	assert_eq!(rendered["_embedded"]["authors"][1]["name"], "Grace");
	assert_eq!(rendered["_links"]["self"]["href"], "/api/anthologies/9");
}

#[test]
fn truncates_past_the_recursion_ceiling() {
	let generator = support::generator_with(|metadata_map, _, _| {
		metadata_map.register::<Author>(
			RouteBasedResourceMetadata::new("author", "author-hydrator").with_max_depth(0),
		);
	});

	let book = support::book(217, "Nexus", support::author(3, "Nin"));
	let resource = generator.from_object(&book, &SimpleRequest::new()).unwrap();

	// The ceiling is the embedded class's own: the author renders at
	// depth 1, past its ceiling of 0, so it keeps only its self link.
	let rendered = serde_json::to_value(&resource).unwrap();
	assert_eq!(rendered["title"], "Nexus");
	let author = &rendered["_embedded"]["author"];
	assert_eq!(author["_links"]["self"]["href"], "/api/authors/3");
	assert!(author.get("name").is_none());
}

#[test]
fn truncated_resources_keep_their_self_link() {
	struct Category {
		id: u64,
		parent: Option<Object>,
	}
	halogen::domain_object!(Category);

	let generator = support::generator_with(|metadata_map, hydrators, routes| {
		routes.register("category", "/api/categories/{id}");
		metadata_map.register::<Category>(
			RouteBasedResourceMetadata::new("category", "category-hydrator").with_max_depth(1),
		);
		hydrators.register_fn("category-hydrator", |category: &Category| {
			let mut data = indexmap! {
				"id".to_string() => AttributeValue::json(category.id),
			};
			if let Some(parent) = category.parent.clone() {
				data.insert("parent".to_string(), AttributeValue::nested(parent));
			}
			data
		});
	});

	let root: Object = Arc::new(Category { id: 1, parent: None });
	let mid: Object = Arc::new(Category { id: 2, parent: Some(root) });
	let leaf: Object = Arc::new(Category { id: 3, parent: Some(mid) });

	let resource = generator.from_object(&leaf, &SimpleRequest::new()).unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();

	// Depth 2 exceeds the ceiling of 1: the grandparent renders with its
	// self link only. The identifier still binds the route placeholder
	// even though its data is discarded.
	let grandparent = &rendered["_embedded"]["parent"]["_embedded"]["parent"];
	assert_eq!(grandparent["_links"]["self"]["href"], "/api/categories/1");
	assert!(grandparent.get("id").is_none());
	assert!(grandparent.get("_embedded").is_none());
}

#[test]
fn applies_include_and_exclude_filters() {
	let generator = support::generator_with(|metadata_map, _, _| {
		metadata_map.register::<Author>(
			RouteBasedResourceMetadata::new("author", "author-hydrator")
				.with_exclude(["name"]),
		);
	});

	let author = support::author(3, "Nin");
	let resource = generator.from_object(&author, &SimpleRequest::new()).unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();
	assert_eq!(rendered["id"], 3);
	assert!(rendered.get("name").is_none());
}

#[test]
fn resolves_url_templates_with_the_resource_identifier() {
	let generator = support::generator_with(|metadata_map, _, _| {
		metadata_map.register::<Author>(UrlBasedResourceMetadata::new(
			"https://example.com/authors/{id}",
			"author-hydrator",
		));
	});

	let author = support::author(3, "Nin");
	let resource = generator.from_object(&author, &SimpleRequest::new()).unwrap();
	assert_eq!(resource.link("self").unwrap().href(), "https://example.com/authors/3");
}

#[test]
fn from_array_embeds_each_object_under_the_relation() {
	let generator = support::generator();
	let authors = [support::author(1, "Ada"), support::author(2, "Grace")];

	let resource = generator
		.from_array(&authors, "authors", &SimpleRequest::new(), Some("/api/authors"))
		.unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();
	assert_eq!(rendered["_links"]["self"]["href"], "/api/authors");
	assert_eq!(rendered["_embedded"]["authors"][1]["id"], 2);
}

#[test]
fn unmapped_class_is_an_error() {
	struct Stranger;
	halogen::domain_object!(Stranger);

	let generator = support::generator();
	let stranger: Object = Arc::new(Stranger);
	let err = generator.from_object(&stranger, &SimpleRequest::new()).unwrap_err();
	assert!(matches!(err, Error::UnmappedClass(_)));
}

#[test]
fn missing_hydrator_is_an_error() {
	let generator = support::generator_with(|metadata_map, _, _| {
		metadata_map
			.register::<Author>(RouteBasedResourceMetadata::new("author", "no-such-hydrator"));
	});

	let author = support::author(3, "Nin");
	let err = generator.from_object(&author, &SimpleRequest::new()).unwrap_err();
	assert!(matches!(err, Error::HydratorNotFound(name) if name == "no-such-hydrator"));
}

#[test]
fn generator_without_strategies_rejects_every_kind() {
	let generator = ResourceGenerator::new(
		support::metadata_map(),
		support::hydrators(),
		support::link_generator(),
	);

	let author = support::author(3, "Nin");
	let err = generator.from_object(&author, &SimpleRequest::new()).unwrap_err();
	assert!(matches!(err, Error::UnmappedMetadataType(_)));
}

#[test]
fn missing_route_parameter_surfaces_from_link_generation() {
	let generator = support::generator_with(|metadata_map, _, _| {
		// The hydrator emits `id` but the metadata looks for `uuid`, so
		// the route placeholder never binds.
		metadata_map.register::<Author>(
			RouteBasedResourceMetadata::new("author", "author-hydrator")
				.with_resource_identifier("uuid"),
		);
	});

	let author = support::author(3, "Nin");
	let err = generator.from_object(&author, &SimpleRequest::new()).unwrap_err();
	assert!(matches!(
		err,
		Error::MissingRouteParameter { route, name } if route == "author" && name == "id"
	));
}
