//! Route name resolution for link generation.
//!
//! Links are declared against route names; a [`UrlGenerator`] turns a
//! name plus parameters into a concrete path. [`RouteMap`] is the
//! built-in implementation over `{placeholder}` patterns; hosts with
//! their own router implement [`UrlGenerator`] directly.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::exception::{Error, Result};
use crate::request::RequestContext;

/// Resolves a route name and parameters into a URL.
///
/// The request is available so an implementation can derive scheme, host
/// or mount prefix from the incoming call; [`RouteMap`] ignores it.
pub trait UrlGenerator: Send + Sync {
	/// Generates the URL for the named route.
	fn generate(
		&self,
		request: &dyn RequestContext,
		route: &str,
		params: &IndexMap<String, String>,
	) -> Result<String>;
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Placeholder values are inserted verbatim and never re-scanned, so a
/// value containing `{` cannot inject further substitutions. A
/// placeholder with no matching parameter is returned as the error value.
fn substitute_once(
	pattern: &str,
	params: &IndexMap<String, String>,
	strict: bool,
) -> std::result::Result<String, String> {
	let mut out = String::with_capacity(pattern.len());
	let mut rest = pattern;

	while let Some(open) = rest.find('{') {
		out.push_str(&rest[..open]);
		let after = &rest[open + 1..];
		let Some(close) = after.find('}') else {
			// Unterminated brace, keep the literal tail.
			out.push_str(&rest[open..]);
			return Ok(out);
		};
		let name = &after[..close];
		match params.get(name) {
			Some(value) => out.push_str(value),
			None if strict => return Err(name.to_string()),
			None => {
				out.push_str(&rest[open..=open + 1 + close]);
			}
		}
		rest = &after[close + 1..];
	}
	out.push_str(rest);
	Ok(out)
}

/// Fills every `{name}` placeholder, failing on the first one without a
/// matching parameter.
pub(crate) fn substitute(
	pattern: &str,
	params: &IndexMap<String, String>,
) -> std::result::Result<String, String> {
	substitute_once(pattern, params, true)
}

/// Fills the placeholders that have parameters and preserves the rest.
///
/// Used for URL templates, where unfilled placeholders stay in the href
/// as literal template text.
pub(crate) fn substitute_lenient(pattern: &str, params: &IndexMap<String, String>) -> String {
	match substitute_once(pattern, params, false) {
		Ok(url) => url,
		Err(_) => unreachable!("lenient substitution never fails"),
	}
}

/// Name-to-pattern route table.
///
/// # Examples
///
/// ```
/// use halogen::{RouteMap, SimpleRequest, UrlGenerator};
/// use indexmap::indexmap;
///
/// let mut routes = RouteMap::new();
/// routes.register("author", "/api/authors/{id}");
///
/// let url = routes
///     .generate(
///         &SimpleRequest::new(),
///         "author",
///         &indexmap! { "id".to_string() => "17".to_string() },
///     )
///     .unwrap();
/// assert_eq!(url, "/api/authors/17");
/// ```
#[derive(Clone, Default)]
pub struct RouteMap {
	routes: HashMap<String, String>,
}

impl RouteMap {
	/// Creates an empty route table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a pattern under a route name, replacing any previous entry.
	pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
		self.routes.insert(name.into(), pattern.into());
	}

	/// Whether a route is registered under the name.
	pub fn has_route(&self, name: &str) -> bool {
		self.routes.contains_key(name)
	}
}

impl UrlGenerator for RouteMap {
	fn generate(
		&self,
		_request: &dyn RequestContext,
		route: &str,
		params: &IndexMap<String, String>,
	) -> Result<String> {
		let pattern = self
			.routes
			.get(route)
			.ok_or_else(|| Error::RouteResolution(route.to_string()))?;
		substitute(pattern, params).map_err(|name| Error::MissingRouteParameter {
			route: route.to_string(),
			name,
		})
	}
}
