//! Error types for build mutations.

use brick_types::GeomError;

use crate::part::PartId;

/// Errors that can occur when inserting a part into a build.
///
/// Both variants indicate a caller bug rather than a physical problem:
/// physical validity (collisions, support) is checked by the validators,
/// never at insertion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum InsertError {
    /// The part's dimensions are not strictly positive.
    #[error(transparent)]
    Geometry(#[from] GeomError),

    /// A part with this id already exists in the build.
    ///
    /// Ids are core-assigned and monotonic, so this can only happen if the
    /// id counter was corrupted.
    #[error("part id {0} already exists in build")]
    DuplicateId(PartId),
}
