//! Shared extraction routines for the built-in strategies.

use indexmap::IndexMap;
use serde_json::{Value, json};

use crate::exception::{Error, Result};
use crate::link::Link;
use crate::metadata::{Metadata, PaginationParamType};
use crate::object::Object;
use crate::request::RequestContext;
use crate::resource::{Element, Resource};
use crate::value::AttributeValue;

use super::{GenerationState, ResourceGenerator};

/// Hydrates an object and splits its attributes into plain data and
/// nested resources.
///
/// Past the metadata's recursion ceiling, nested attributes are dropped
/// instead of rendered; plain attributes still come back so the caller
/// can bind route parameters before discarding them.
pub(super) fn extract_instance(
	generator: &ResourceGenerator,
	object: &Object,
	metadata: &Metadata,
	extractor: &str,
	request: &dyn RequestContext,
	depth: usize,
	state: &mut GenerationState,
) -> Result<(IndexMap<String, Value>, IndexMap<String, Element>)> {
	let hydrator = generator.hydrators().get(extractor)?;
	let attributes = metadata.apply_filters(hydrator.extract(object)?);
	let truncated = metadata.has_reached_max_depth(depth);

	let mut data = IndexMap::new();
	let mut elements = IndexMap::new();
	for (name, value) in attributes {
		match value {
			AttributeValue::Json(json) => {
				data.insert(name, json);
			}
			AttributeValue::Nested(child) => {
				if truncated {
					continue;
				}
				let resource = generator.generate(&child, request, depth + 1, state)?;
				elements.insert(name, Element::Single(resource));
			}
			AttributeValue::NestedList(children) => {
				if truncated {
					continue;
				}
				let mut rendered = Vec::with_capacity(children.len());
				for child in &children {
					rendered.push(generator.generate(child, request, depth + 1, state)?);
				}
				elements.insert(name, Element::Collection(rendered));
			}
		}
	}
	Ok((data, elements))
}

/// Renders a collection object into a resource embedding its members.
///
/// Paginated collections get `_total_items`, `_page` and `_page_count`
/// data plus relative pagination links built through `page_link`;
/// sequence collections get `_total_items` and a single self link.
/// Members render at depth 0 within the shared generation state.
///
/// Past the metadata's recursion ceiling, including when the collection
/// itself is revisited on the active rendering path, no members are
/// extracted at all: the resource carries only its self link. A
/// collection that contains itself terminates here.
pub(super) fn extract_collection(
	generator: &ResourceGenerator,
	object: &Object,
	request: &dyn RequestContext,
	collection_relation: &str,
	pagination_param: &str,
	pagination_param_type: PaginationParamType,
	truncated: bool,
	state: &mut GenerationState,
	page_link: &dyn Fn(&str, usize) -> Result<Link>,
	self_link: &dyn Fn() -> Result<Link>,
) -> Result<Resource> {
	if truncated {
		return Ok(Resource::new(IndexMap::new(), vec![self_link()?], IndexMap::new()));
	}

	if let Some(paginated) = object.as_paginated() {
		let mut data = IndexMap::new();
		data.insert("_total_items".to_string(), json!(paginated.total_items()));

		let links = match pagination_param_type {
			PaginationParamType::None => vec![self_link()?],
			PaginationParamType::Query | PaginationParamType::Placeholder => {
				let requested = match pagination_param_type {
					PaginationParamType::Query => request.query_param(pagination_param),
					_ => request.attribute(pagination_param),
				};
				let page = requested
					.and_then(|raw| raw.parse::<usize>().ok())
					.map(|page| page.max(1))
					.unwrap_or(1);
				paginated.set_current_page(page);
				let page_count = paginated.page_count();

				// The requested page drives the link math even when the
				// collection clamped it, matching the incoming URL.
				let mut links = vec![page_link("self", page)?];
				if page > 1 {
					links.push(page_link("first", 1)?);
					links.push(page_link("prev", page - 1)?);
				}
				if page < page_count {
					links.push(page_link("next", page + 1)?);
					links.push(page_link("last", page_count)?);
				}
				data.insert("_page".to_string(), json!(page));
				data.insert("_page_count".to_string(), json!(page_count));
				links
			}
		};

		let mut members = Vec::new();
		for item in paginated.page_items() {
			members.push(generator.generate(&item, request, 0, state)?);
		}
		let mut elements = IndexMap::new();
		elements.insert(collection_relation.to_string(), Element::Collection(members));
		return Ok(Resource::new(data, links, elements));
	}

	if let Some(iterable) = object.as_iterable() {
		let mut members = Vec::new();
		for item in iterable.iter_items() {
			members.push(generator.generate(&item, request, 0, state)?);
		}
		let total = iterable.count().unwrap_or(members.len());

		let mut data = IndexMap::new();
		data.insert("_total_items".to_string(), json!(total));
		let mut elements = IndexMap::new();
		elements.insert(collection_relation.to_string(), Element::Collection(members));
		return Ok(Resource::new(data, vec![self_link()?], elements));
	}

	Err(Error::Extraction(format!(
		"`{}` is registered as a collection but exposes no collection view",
		object.type_name()
	)))
}
