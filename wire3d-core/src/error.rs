/// Errors reported by the geometry pipeline
use thiserror::Error;

/// Failure modes of the transform pipeline.
///
/// Malformed index tables are not part of this list: geometry tables are
/// static, so a bad index is a programmer error and panics instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A matrix without an inverse was passed where one was required.
    #[error("matrix is singular and cannot be inverted")]
    DegenerateMatrix,

    /// A vector of zero (or non-finite) length was normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,

    /// The camera eye coincides with its look-at target.
    #[error("camera position must differ from its look-at target")]
    DegenerateCamera,

    /// A textual argument could not be parsed.
    #[error("failed to parse {input:?}: {reason}")]
    Parse { input: String, reason: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
