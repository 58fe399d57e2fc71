//! Link creation from route names and URL templates.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::exception::Result;
use crate::link::Link;
use crate::request::RequestContext;
use crate::route::{self, UrlGenerator};

/// Renders a JSON parameter value as URL text.
///
/// Strings pass through unquoted; everything else uses its JSON
/// rendering.
fn param_str(value: &Value) -> String {
	match value {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

fn stringify(params: &IndexMap<String, Value>) -> IndexMap<String, String> {
	params
		.iter()
		.map(|(name, value)| (name.clone(), param_str(value)))
		.collect()
}

/// Builds [`Link`]s by resolving route names through a [`UrlGenerator`]
/// or by expanding URL templates directly.
#[derive(Clone)]
pub struct LinkGenerator {
	url_generator: Arc<dyn UrlGenerator>,
}

impl LinkGenerator {
	/// Creates a link generator over the given URL generator.
	pub fn new(url_generator: Arc<dyn UrlGenerator>) -> Self {
		Self { url_generator }
	}

	/// The underlying URL generator.
	pub fn url_generator(&self) -> &Arc<dyn UrlGenerator> {
		&self.url_generator
	}

	/// Creates a link by resolving a route name.
	///
	/// Route parameters fill the route's placeholders; query parameters
	/// are appended to the resolved URL, percent-encoded.
	pub fn from_route(
		&self,
		relation: impl Into<String>,
		request: &dyn RequestContext,
		route: &str,
		route_params: &IndexMap<String, Value>,
		query: &IndexMap<String, Value>,
	) -> Result<Link> {
		let mut href = self
			.url_generator
			.generate(request, route, &stringify(route_params))?;
		if !query.is_empty() {
			let mut encoder = url::form_urlencoded::Serializer::new(String::new());
			for (name, value) in query {
				encoder.append_pair(name, &param_str(value));
			}
			href.push(if href.contains('?') { '&' } else { '?' });
			href.push_str(&encoder.finish());
		}
		Ok(Link::new(relation, href))
	}

	/// Creates a link from a URL template.
	///
	/// Placeholders with parameters are filled; the rest stay in the href
	/// as template text, so callers can mark the link templated.
	pub fn from_url(
		&self,
		relation: impl Into<String>,
		template: &str,
		params: &IndexMap<String, Value>,
	) -> Link {
		Link::new(relation, route::substitute_lenient(template, &stringify(params)))
	}
}
