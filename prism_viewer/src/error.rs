use prism_scene::LoadError;
use thiserror::Error;

/// Failure modes of viewer operations. Mutators that fail leave every
/// registry untouched, so callers are free to ignore individual errors the
/// way the bookmark replay does.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The ID is already taken by a model, object, annotation or clip plane;
    /// all four share one namespace.
    #[error("id already in use: {0}")]
    DuplicateId(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// A required configuration field was absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("model load failed: {0}")]
    Load(#[from] LoadError),
}
