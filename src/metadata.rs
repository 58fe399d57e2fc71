//! Per-class rendering instructions.
//!
//! A [`Metadata`] value describes how objects of one domain class become
//! resources: which hydrator extracts them, which route or URL template
//! supplies their self link, how deep nested rendering may recurse, and
//! for collections, how pagination parameters travel. The
//! [`MetadataMap`] indexes these by concrete type.

use std::fmt;

use crate::value::AttributeMap;

mod collection;
mod map;
mod resource;

pub use collection::{
	PaginationParamType, RouteBasedCollectionMetadata, UrlBasedCollectionMetadata,
};
pub use map::MetadataMap;
pub use resource::{RouteBasedResourceMetadata, UrlBasedResourceMetadata};

/// Default recursion ceiling for nested resource rendering.
pub const DEFAULT_MAX_DEPTH: usize = 10;

/// Discriminates the metadata variants; strategy dispatch keys on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum MetadataKind {
	/// A single resource whose self link comes from a named route.
	RouteBasedResource,
	/// A single resource whose self link comes from a URL template.
	UrlBasedResource,
	/// A collection paginated against a named route.
	RouteBasedCollection,
	/// A collection paginated against a URL template.
	UrlBasedCollection,
}

impl fmt::Display for MetadataKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::RouteBasedResource => "route-based resource",
			Self::UrlBasedResource => "url-based resource",
			Self::RouteBasedCollection => "route-based collection",
			Self::UrlBasedCollection => "url-based collection",
		};
		f.write_str(name)
	}
}

/// Rendering instructions for one domain class.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Metadata {
	RouteBasedResource(RouteBasedResourceMetadata),
	UrlBasedResource(UrlBasedResourceMetadata),
	RouteBasedCollection(RouteBasedCollectionMetadata),
	UrlBasedCollection(UrlBasedCollectionMetadata),
}

impl Metadata {
	/// The variant discriminant.
	pub fn kind(&self) -> MetadataKind {
		match self {
			Self::RouteBasedResource(_) => MetadataKind::RouteBasedResource,
			Self::UrlBasedResource(_) => MetadataKind::UrlBasedResource,
			Self::RouteBasedCollection(_) => MetadataKind::RouteBasedCollection,
			Self::UrlBasedCollection(_) => MetadataKind::UrlBasedCollection,
		}
	}

	/// The recursion ceiling for this class.
	pub fn max_depth(&self) -> usize {
		match self {
			Self::RouteBasedResource(m) => m.max_depth(),
			Self::UrlBasedResource(m) => m.max_depth(),
			Self::RouteBasedCollection(m) => m.max_depth(),
			Self::UrlBasedCollection(m) => m.max_depth(),
		}
	}

	/// Whether rendering at `depth` exceeds this class's ceiling.
	///
	/// The root renders at depth 0, so a ceiling of 0 still renders the
	/// root fully and truncates from the first nesting level on.
	pub fn has_reached_max_depth(&self, depth: usize) -> bool {
		depth > self.max_depth()
	}

	/// Applies the variant's include/exclude attribute filters.
	pub(crate) fn apply_filters(&self, data: AttributeMap) -> AttributeMap {
		match self {
			Self::RouteBasedResource(m) => apply_filters(data, m.include(), m.exclude()),
			Self::UrlBasedResource(m) => apply_filters(data, m.include(), m.exclude()),
			Self::RouteBasedCollection(_) | Self::UrlBasedCollection(_) => data,
		}
	}
}

impl From<RouteBasedResourceMetadata> for Metadata {
	fn from(metadata: RouteBasedResourceMetadata) -> Self {
		Self::RouteBasedResource(metadata)
	}
}

impl From<UrlBasedResourceMetadata> for Metadata {
	fn from(metadata: UrlBasedResourceMetadata) -> Self {
		Self::UrlBasedResource(metadata)
	}
}

impl From<RouteBasedCollectionMetadata> for Metadata {
	fn from(metadata: RouteBasedCollectionMetadata) -> Self {
		Self::RouteBasedCollection(metadata)
	}
}

impl From<UrlBasedCollectionMetadata> for Metadata {
	fn from(metadata: UrlBasedCollectionMetadata) -> Self {
		Self::UrlBasedCollection(metadata)
	}
}

/// Keeps the listed attributes, then drops the excluded ones.
///
/// An empty include list keeps everything.
fn apply_filters(data: AttributeMap, include: &[String], exclude: &[String]) -> AttributeMap {
	data.into_iter()
		.filter(|(name, _)| include.is_empty() || include.iter().any(|inc| inc == name))
		.filter(|(name, _)| !exclude.iter().any(|exc| exc == name))
		.collect()
}
