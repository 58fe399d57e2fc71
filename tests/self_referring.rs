//! Termination on self-referential object graphs.

mod support;

use std::any::Any;
use std::sync::{Arc, RwLock};

use indexmap::indexmap;

use halogen::{
	AttributeValue, DomainObject, IterableCollection, Object, ResourceGenerator,
	RouteBasedCollectionMetadata, RouteBasedResourceMetadata, SimpleRequest,
};

struct Node {
	id: u64,
	next: RwLock<Option<Object>>,
}

halogen::domain_object!(Node);

fn node(id: u64) -> Arc<Node> {
	Arc::new(Node {
		id,
		next: RwLock::new(None),
	})
}

fn link_to(from: &Arc<Node>, to: &Arc<Node>) {
	*from.next.write().unwrap() = Some(Arc::clone(to) as Object);
}

fn node_generator(max_depth: usize) -> ResourceGenerator {
	support::generator_with(|metadata_map, hydrators, routes| {
		routes.register("node", "/api/nodes/{id}");
		metadata_map.register::<Node>(
			RouteBasedResourceMetadata::new("node", "node-hydrator").with_max_depth(max_depth),
		);
		hydrators.register_fn("node-hydrator", |node: &Node| {
			let mut data = indexmap! {
				"id".to_string() => AttributeValue::json(node.id),
			};
			if let Some(next) = node.next.read().unwrap().clone() {
				data.insert("next".to_string(), AttributeValue::nested(next));
			}
			data
		});
	})
}

#[test]
fn self_cycle_terminates_with_a_truncated_resource() {
	let a = node(1);
	link_to(&a, &a);

	let generator = node_generator(10);
	let object: Object = a as Object;
	let resource = generator.from_object(&object, &SimpleRequest::new()).unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();

	assert_eq!(rendered["id"], 1);
	let revisit = &rendered["_embedded"]["next"];
	assert_eq!(revisit["_links"]["self"]["href"], "/api/nodes/1");
	assert!(revisit.get("id").is_none());
	assert!(revisit.get("_embedded").is_none());
}

#[test]
fn self_cycle_at_max_depth_zero_keeps_the_child_self_link() {
	let a = node(1);
	link_to(&a, &a);

	let generator = node_generator(0);
	let object: Object = a as Object;
	let resource = generator.from_object(&object, &SimpleRequest::new()).unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();

	// The root still renders fully; the embedded revisit is a bare self
	// link with no data and no nesting of its own.
	assert_eq!(rendered["id"], 1);
	assert_eq!(rendered["_links"]["self"]["href"], "/api/nodes/1");
	let revisit = &rendered["_embedded"]["next"];
	assert_eq!(revisit["_links"]["self"]["href"], "/api/nodes/1");
	assert!(revisit.get("id").is_none());
	assert!(revisit.get("_embedded").is_none());
}

#[test]
fn mutual_cycle_truncates_on_the_revisit() {
	let a = node(1);
	let b = node(2);
	link_to(&a, &b);
	link_to(&b, &a);

	let generator = node_generator(10);
	let object: Object = a as Object;
	let resource = generator.from_object(&object, &SimpleRequest::new()).unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();

	let b_rendered = &rendered["_embedded"]["next"];
	assert_eq!(b_rendered["id"], 2);

	// The second visit of `a` renders as a bare self link.
	let a_revisit = &b_rendered["_embedded"]["next"];
	assert_eq!(a_revisit["_links"]["self"]["href"], "/api/nodes/1");
	assert!(a_revisit.get("id").is_none());
	assert!(a_revisit.get("_embedded").is_none());
}

#[test]
fn self_containing_collection_terminates() {
	struct Feed {
		entries: RwLock<Vec<Object>>,
	}

	impl DomainObject for Feed {
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

	impl IterableCollection for Feed {
		fn iter_items(&self) -> Box<dyn Iterator<Item = Object> + '_> {
			Box::new(self.entries.read().unwrap().clone().into_iter())
		}
	}

	let feed = Arc::new(Feed {
		entries: RwLock::new(vec![support::author(3, "Nin")]),
	});
	feed.entries.write().unwrap().push(Arc::clone(&feed) as Object);

	let generator = support::generator_with(|metadata_map, _, _| {
		metadata_map.register::<Feed>(RouteBasedCollectionMetadata::new("books", "entries"));
	});

	let object: Object = feed;
	let resource = generator.from_object(&object, &SimpleRequest::new()).unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();

	assert_eq!(rendered["_total_items"], 2);
	let entries = rendered["_embedded"]["entries"].as_array().unwrap();
	assert_eq!(entries.len(), 2);
	assert_eq!(entries[0]["name"], "Nin");

	// The collection's second entry is the collection itself: it renders
	// as a bare self link, extracting no members of its own.
	assert_eq!(entries[1]["_links"]["self"]["href"], "/api/books");
	assert!(entries[1].get("_total_items").is_none());
	assert!(entries[1].get("_embedded").is_none());
}

#[test]
fn sibling_duplicates_render_fully() {
	struct Pair {
		id: u64,
		left: Object,
		right: Object,
	}
	halogen::domain_object!(Pair);

	let shared = support::author(3, "Nin");
	let pair: Object = Arc::new(Pair {
		id: 1,
		left: shared.clone(),
		right: shared,
	});

	let generator = support::generator_with(|metadata_map, hydrators, routes| {
		routes.register("pair", "/api/pairs/{id}");
		metadata_map.register::<Pair>(RouteBasedResourceMetadata::new("pair", "pair-hydrator"));
		hydrators.register_fn("pair-hydrator", |pair: &Pair| {
			indexmap! {
				"id".to_string() => AttributeValue::json(pair.id),
				"left".to_string() => AttributeValue::nested(pair.left.clone()),
				"right".to_string() => AttributeValue::nested(pair.right.clone()),
			}
		});
	});

	let resource = generator.from_object(&pair, &SimpleRequest::new()).unwrap();
	let rendered = serde_json::to_value(&resource).unwrap();

	// The same object in two sibling positions is not a cycle; both
	// occurrences carry their data.
	assert_eq!(rendered["_embedded"]["left"]["name"], "Nin");
	assert_eq!(rendered["_embedded"]["right"]["name"], "Nin");
}
