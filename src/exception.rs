//! Error types for resource generation.
//!
//! Every error here is a configuration or programming error from the point
//! of view of the generator: nothing is retried and no defaults are
//! substituted. A resource is either fully built or the call fails.

use thiserror::Error;

use crate::metadata::MetadataKind;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Resource generation errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
	/// No metadata registered for the object's class.
	#[error("no metadata registered for class `{0}`")]
	UnmappedClass(String),

	/// No strategy registered for a metadata variant.
	#[error("no strategy registered for {0} metadata")]
	UnmappedMetadataType(MetadataKind),

	/// A strategy was invoked with the wrong metadata variant.
	#[error("{strategy} expects {expected} metadata, received {actual}")]
	UnexpectedMetadataType {
		/// Name of the strategy that rejected the metadata.
		strategy: &'static str,
		/// Variant the strategy handles.
		expected: MetadataKind,
		/// Variant it was handed.
		actual: MetadataKind,
	},

	/// No hydrator registered under the requested name.
	#[error("no hydrator registered under `{0}`")]
	HydratorNotFound(String),

	/// The named route is unknown to the URL generator.
	#[error("unable to resolve route `{0}`")]
	RouteResolution(String),

	/// A route pattern placeholder had no matching parameter.
	#[error("route `{route}` is missing required parameter `{name}`")]
	MissingRouteParameter {
		/// Route name being resolved.
		route: String,
		/// Placeholder without a value.
		name: String,
	},

	/// Attribute extraction failed.
	#[error("extraction failed: {0}")]
	Extraction(String),
}
