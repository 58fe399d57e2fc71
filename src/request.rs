//! Request context capability.

use indexmap::IndexMap;

/// Read-only view of the ambient HTTP request.
///
/// The generator only reads the pieces link construction and pagination
/// need: query parameters and routing attributes (path parameters bound
/// by the host's router). The host adapts its own request type; for tests
/// and simple hosts [`SimpleRequest`] is provided.
pub trait RequestContext: Send + Sync {
	/// Value of a query-string parameter, if present.
	fn query_param(&self, name: &str) -> Option<&str>;

	/// Value of a routing attribute (matched path parameter), if present.
	fn attribute(&self, name: &str) -> Option<&str>;
}

/// Owned [`RequestContext`] built from explicit parameter maps.
///
/// # Examples
///
/// ```
/// use halogen::{RequestContext, SimpleRequest};
///
/// let request = SimpleRequest::new()
///     .with_query_param("page", "3")
///     .with_attribute("id", "42");
/// assert_eq!(request.query_param("page"), Some("3"));
/// assert_eq!(request.attribute("id"), Some("42"));
/// assert_eq!(request.query_param("missing"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleRequest {
	query: IndexMap<String, String>,
	attributes: IndexMap<String, String>,
}

impl SimpleRequest {
	/// Creates an empty request context.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a query-string parameter.
	pub fn with_query_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.insert(name.into(), value.into());
		self
	}

	/// Adds a routing attribute.
	pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}
}

impl RequestContext for SimpleRequest {
	fn query_param(&self, name: &str) -> Option<&str> {
		self.query.get(name).map(String::as_str)
	}

	fn attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}
}
