//! Metadata for single-resource classes.

use indexmap::IndexMap;
use serde_json::Value;

use super::DEFAULT_MAX_DEPTH;

/// Rendering instructions for a resource whose self link resolves
/// through a named route.
///
/// # Examples
///
/// ```
/// use halogen::RouteBasedResourceMetadata;
///
/// let metadata = RouteBasedResourceMetadata::new("book", "book-hydrator")
///     .with_resource_identifier("isbn")
///     .with_route_identifier_placeholder("id")
///     .with_max_depth(2);
/// assert_eq!(metadata.route(), "book");
/// assert_eq!(metadata.resource_identifier(), "isbn");
/// ```
#[derive(Debug, Clone)]
pub struct RouteBasedResourceMetadata {
	route: String,
	extractor: String,
	resource_identifier: String,
	route_identifier_placeholder: String,
	route_params: IndexMap<String, Value>,
	query_string_arguments: IndexMap<String, Value>,
	max_depth: usize,
	include: Vec<String>,
	exclude: Vec<String>,
}

impl RouteBasedResourceMetadata {
	/// Creates metadata for the route with the named hydrator.
	///
	/// The identifier attribute and its route placeholder both default
	/// to `id`; the recursion ceiling defaults to
	/// [`DEFAULT_MAX_DEPTH`](super::DEFAULT_MAX_DEPTH).
	pub fn new(route: impl Into<String>, extractor: impl Into<String>) -> Self {
		Self {
			route: route.into(),
			extractor: extractor.into(),
			resource_identifier: "id".to_string(),
			route_identifier_placeholder: "id".to_string(),
			route_params: IndexMap::new(),
			query_string_arguments: IndexMap::new(),
			max_depth: DEFAULT_MAX_DEPTH,
			include: Vec::new(),
			exclude: Vec::new(),
		}
	}

	/// Names the extracted attribute that identifies the resource.
	pub fn with_resource_identifier(mut self, name: impl Into<String>) -> Self {
		self.resource_identifier = name.into();
		self
	}

	/// Names the route placeholder the identifier binds to.
	pub fn with_route_identifier_placeholder(mut self, name: impl Into<String>) -> Self {
		self.route_identifier_placeholder = name.into();
		self
	}

	/// Sets static route parameters merged into every self link.
	pub fn with_route_params(mut self, params: IndexMap<String, Value>) -> Self {
		self.route_params = params;
		self
	}

	/// Sets static query string arguments appended to every self link.
	pub fn with_query_string_arguments(mut self, args: IndexMap<String, Value>) -> Self {
		self.query_string_arguments = args;
		self
	}

	/// Sets the recursion ceiling.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Limits rendered attributes to the listed names.
	pub fn with_include(mut self, attributes: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.include = attributes.into_iter().map(Into::into).collect();
		self
	}

	/// Drops the listed attributes from rendering.
	pub fn with_exclude(mut self, attributes: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.exclude = attributes.into_iter().map(Into::into).collect();
		self
	}

	pub fn route(&self) -> &str {
		&self.route
	}

	pub fn extractor(&self) -> &str {
		&self.extractor
	}

	pub fn resource_identifier(&self) -> &str {
		&self.resource_identifier
	}

	pub fn route_identifier_placeholder(&self) -> &str {
		&self.route_identifier_placeholder
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

	pub fn include(&self) -> &[String] {
		&self.include
	}

	pub fn exclude(&self) -> &[String] {
		&self.exclude
	}
}

/// Rendering instructions for a resource whose self link comes from a
/// URL template.
///
/// The template may carry `{placeholder}` segments; the placeholder
/// named by the resource identifier is filled from the extracted data.
#[derive(Debug, Clone)]
pub struct UrlBasedResourceMetadata {
	url: String,
	extractor: String,
	resource_identifier: String,
	max_depth: usize,
	include: Vec<String>,
	exclude: Vec<String>,
}

impl UrlBasedResourceMetadata {
	/// Creates metadata for the URL template with the named hydrator.
	pub fn new(url: impl Into<String>, extractor: impl Into<String>) -> Self {
		Self {
			url: url.into(),
			extractor: extractor.into(),
			resource_identifier: "id".to_string(),
			max_depth: DEFAULT_MAX_DEPTH,
			include: Vec::new(),
			exclude: Vec::new(),
		}
	}

	/// Names the extracted attribute that identifies the resource.
	pub fn with_resource_identifier(mut self, name: impl Into<String>) -> Self {
		self.resource_identifier = name.into();
		self
	}

	/// Sets the recursion ceiling.
	pub fn with_max_depth(mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		self
	}

	/// Limits rendered attributes to the listed names.
	pub fn with_include(mut self, attributes: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.include = attributes.into_iter().map(Into::into).collect();
		self
	}

	/// Drops the listed attributes from rendering.
	pub fn with_exclude(mut self, attributes: impl IntoIterator<Item = impl Into<String>>) -> Self {
		self.exclude = attributes.into_iter().map(Into::into).collect();
		self
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	pub fn extractor(&self) -> &str {
		&self.extractor
	}

	pub fn resource_identifier(&self) -> &str {
		&self.resource_identifier
	}

	pub fn max_depth(&self) -> usize {
		self.max_depth
	}

	pub fn include(&self) -> &[String] {
		&self.include
	}

	pub fn exclude(&self) -> &[String] {
		&self.exclude
	}
}
