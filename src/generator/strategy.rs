//! The rendering strategy seam.

use crate::exception::Result;
use crate::metadata::Metadata;
use crate::object::Object;
use crate::request::RequestContext;
use crate::resource::Resource;

use super::{GenerationState, ResourceGenerator};

/// Renders objects of one metadata kind into resources.
///
/// A strategy receives the object together with its metadata and the
/// generator, so it can recurse into nested objects through
/// [`ResourceGenerator::generate`]. Implementations verify they were
/// handed their own metadata variant and fail with
/// [`Error::UnexpectedMetadataType`](crate::Error::UnexpectedMetadataType)
/// otherwise.
pub trait ResourceStrategy: Send + Sync {
	fn create_resource(
		&self,
		object: &Object,
		metadata: &Metadata,
		generator: &ResourceGenerator,
		request: &dyn RequestContext,
		depth: usize,
		state: &mut GenerationState,
	) -> Result<Resource>;
}
