//! Built-in strategies for route-resolved metadata.

use indexmap::IndexMap;
use serde_json::json;

use crate::exception::{Error, Result};
use crate::link::Link;
use crate::metadata::{Metadata, MetadataKind, PaginationParamType};
use crate::object::Object;
use crate::request::RequestContext;
use crate::resource::Resource;

use super::strategy::ResourceStrategy;
use super::{GenerationState, ResourceGenerator, extract};

/// Renders resources whose self link resolves through a named route.
///
/// The identifier attribute, when extracted, binds to the metadata's
/// route placeholder. Past the recursion ceiling the resource keeps its
/// self link but carries no data and no embedded resources.
pub struct RouteBasedResourceStrategy;

impl ResourceStrategy for RouteBasedResourceStrategy {
	fn create_resource(
		&self,
		object: &Object,
		metadata: &Metadata,
		generator: &ResourceGenerator,
		request: &dyn RequestContext,
		depth: usize,
		state: &mut GenerationState,
	) -> Result<Resource> {
		let Metadata::RouteBasedResource(meta) = metadata else {
			return Err(Error::UnexpectedMetadataType {
				strategy: "RouteBasedResourceStrategy",
				expected: MetadataKind::RouteBasedResource,
				actual: metadata.kind(),
			});
		};

		let (mut data, elements) =
			extract::extract_instance(generator, object, metadata, meta.extractor(), request, depth, state)?;

		let mut route_params = meta.route_params().clone();
		if let Some(id) = data.get(meta.resource_identifier()) {
			route_params.insert(meta.route_identifier_placeholder().to_string(), id.clone());
		}
		if metadata.has_reached_max_depth(depth) {
			data = IndexMap::new();
		}

		let self_link = generator.link_generator().from_route(
			"self",
			request,
			meta.route(),
			&route_params,
			meta.query_string_arguments(),
		)?;
		Ok(Resource::new(data, vec![self_link], elements))
	}
}

/// Renders collections paginated against a named route.
pub struct RouteBasedCollectionStrategy;

impl ResourceStrategy for RouteBasedCollectionStrategy {
	fn create_resource(
		&self,
		object: &Object,
		metadata: &Metadata,
		generator: &ResourceGenerator,
		request: &dyn RequestContext,
		depth: usize,
		state: &mut GenerationState,
	) -> Result<Resource> {
		let Metadata::RouteBasedCollection(meta) = metadata else {
			return Err(Error::UnexpectedMetadataType {
				strategy: "RouteBasedCollectionStrategy",
				expected: MetadataKind::RouteBasedCollection,
				actual: metadata.kind(),
			});
		};

		let page_link = |relation: &str, page: usize| -> Result<Link> {
			let mut route_params = meta.route_params().clone();
			let mut query = meta.query_string_arguments().clone();
			match meta.pagination_param_type() {
				PaginationParamType::Placeholder => {
					route_params.insert(meta.pagination_param().to_string(), json!(page));
				}
				PaginationParamType::Query => {
					query.insert(meta.pagination_param().to_string(), json!(page));
				}
				PaginationParamType::None => {}
			}
			generator
				.link_generator()
				.from_route(relation, request, meta.route(), &route_params, &query)
		};
		let self_link = || -> Result<Link> {
			generator.link_generator().from_route(
				"self",
				request,
				meta.route(),
				meta.route_params(),
				meta.query_string_arguments(),
			)
		};

		extract::extract_collection(
			generator,
			object,
			request,
			meta.collection_relation(),
			meta.pagination_param(),
			meta.pagination_param_type(),
			metadata.has_reached_max_depth(depth),
			state,
			&page_link,
			&self_link,
		)
	}
}
