//! Built-in strategies for URL-template metadata.

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

/// Renders resources whose self link comes from a URL template.
///
/// When the template carries a placeholder named after the resource
/// identifier, the extracted identifier fills it; other placeholders
/// stay in the href as template text.
pub struct UrlBasedResourceStrategy;

impl ResourceStrategy for UrlBasedResourceStrategy {
	fn create_resource(
		&self,
		object: &Object,
		metadata: &Metadata,
		generator: &ResourceGenerator,
		request: &dyn RequestContext,
		depth: usize,
		state: &mut GenerationState,
	) -> Result<Resource> {
		let Metadata::UrlBasedResource(meta) = metadata else {
			return Err(Error::UnexpectedMetadataType {
				strategy: "UrlBasedResourceStrategy",
				expected: MetadataKind::UrlBasedResource,
				actual: metadata.kind(),
			});
		};

		let (mut data, elements) =
			extract::extract_instance(generator, object, metadata, meta.extractor(), request, depth, state)?;

		let mut params = IndexMap::new();
		if let Some(id) = data.get(meta.resource_identifier()) {
			params.insert(meta.resource_identifier().to_string(), id.clone());
		}
		if metadata.has_reached_max_depth(depth) {
			data = IndexMap::new();
		}

		let self_link = generator.link_generator().from_url("self", meta.url(), &params);
		Ok(Resource::new(data, vec![self_link], elements))
	}
}

/// Renders collections paginated against a URL template.
pub struct UrlBasedCollectionStrategy;

impl ResourceStrategy for UrlBasedCollectionStrategy {
	fn create_resource(
		&self,
		object: &Object,
		metadata: &Metadata,
		generator: &ResourceGenerator,
		request: &dyn RequestContext,
		depth: usize,
		state: &mut GenerationState,
	) -> Result<Resource> {
		let Metadata::UrlBasedCollection(meta) = metadata else {
			return Err(Error::UnexpectedMetadataType {
				strategy: "UrlBasedCollectionStrategy",
				expected: MetadataKind::UrlBasedCollection,
				actual: metadata.kind(),
			});
		};

		let page_link = |relation: &str, page: usize| -> Result<Link> {
			let href = match meta.pagination_param_type() {
				PaginationParamType::Placeholder => {
					let params = indexmap::indexmap! {
						meta.pagination_param().to_string() => json!(page),
					};
					return Ok(generator.link_generator().from_url(relation, meta.url(), &params));
				}
				PaginationParamType::Query => {
					let mut href = meta.url().to_string();
					href.push(if href.contains('?') { '&' } else { '?' });
					href.push_str(meta.pagination_param());
					href.push('=');
					href.push_str(&page.to_string());
					href
				}
				PaginationParamType::None => meta.url().to_string(),
			};
			Ok(Link::new(relation, href))
		};
		let self_link = || -> Result<Link> { Ok(Link::new("self", meta.url())) };

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
