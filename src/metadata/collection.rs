//! Metadata for collection classes.

use indexmap::IndexMap;
use serde_json::Value;

use super::DEFAULT_MAX_DEPTH;

/// How the page number travels in pagination links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum PaginationParamType {
	/// As a query string parameter, `?page=3`.
	#[default]
	Query,
	/// As a route or template placeholder, `/books/page/3`.
	Placeholder,
	/// Not at all; the collection renders a single self link.
	None,
}

/// Rendering instructions for a collection paginated against a named
/// route.
#[derive(Debug, Clone)]
pub struct RouteBasedCollectionMetadata {
	route: String,
	collection_relation: String,
	pagination_param: String,
	pagination_param_type: PaginationParamType,
	route_params: IndexMap<String, Value>,
	query_string_arguments: IndexMap<String, Value>,
	max_depth: usize,
}

impl RouteBasedCollectionMetadata {
	/// Creates metadata for the route, embedding members under the
	/// given relation.
	///
	/// Pagination defaults to a `page` query parameter.
	pub fn new(route: impl Into<String>, collection_relation: impl Into<String>) -> Self {
		Self {
			route: route.into(),
			collection_relation: collection_relation.into(),
			pagination_param: "page".to_string(),
			pagination_param_type: PaginationParamType::Query,
			route_params: IndexMap::new(),
			query_string_arguments: IndexMap::new(),
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}

	/// Names the pagination parameter.
	pub fn with_pagination_param(mut self, name: impl Into<String>) -> Self {
		self.pagination_param = name.into();
		self
	}

	/// Sets how the page number travels.
	pub fn with_pagination_param_type(mut self, param_type: PaginationParamType) -> Self {
		self.pagination_param_type = param_type;
		self
	}

	/// Sets static route parameters merged into every pagination link.
	pub fn with_route_params(mut self, params: IndexMap<String, Value>) -> Self {
		self.route_params = params;
		self
	}

	/// Sets static query string arguments appended to every pagination
	/// link.
	pub fn with_query_string_arguments(mut self, args: IndexMap<String, Value>) -> Self {
		self.query_string_arguments = args;
		self
	}

	/// Sets the recursion ceiling for embedded members.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn route(&self) -> &str {
		&self.route
	}

	pub fn collection_relation(&self) -> &str {
		&self.collection_relation
	}

	pub fn pagination_param(&self) -> &str {
		&self.pagination_param
	}

	pub fn pagination_param_type(&self) -> PaginationParamType {
		self.pagination_param_type
	}

	pub fn route_params(&self) -> &IndexMap<String, Value> {
		&self.route_params
	}

	pub fn query_string_arguments(&self) -> &IndexMap<String, Value> {
		&self.query_string_arguments
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}
}

/// Rendering instructions for a collection paginated against a URL
/// template.
#[derive(Debug, Clone)]
pub struct UrlBasedCollectionMetadata {
	url: String,
	collection_relation: String,
	pagination_param: String,
	pagination_param_type: PaginationParamType,
	max_depth: usize,
}

impl UrlBasedCollectionMetadata {
	/// Creates metadata for the URL, embedding members under the given
	/// relation.
	pub fn new(url: impl Into<String>, collection_relation: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			collection_relation: collection_relation.into(),
			pagination_param: "page".to_string(),
			pagination_param_type: PaginationParamType::Query,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}

	/// Names the pagination parameter.
	pub fn with_pagination_param(mut self, name: impl Into<String>) -> Self {
		self.pagination_param = name.into();
		self
	}

	/// Sets how the page number travels.
	pub fn with_pagination_param_type(mut self, param_type: PaginationParamType) -> Self {
		self.pagination_param_type = param_type;
		self
	}

	/// Sets the recursion ceiling for embedded members.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub fn collection_relation(&self) -> &str {
		&self.collection_relation
	}

	pub fn pagination_param(&self) -> &str {
		&self.pagination_param
	}

	pub fn pagination_param_type(&self) -> PaginationParamType {
		self.pagination_param_type
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}
}
