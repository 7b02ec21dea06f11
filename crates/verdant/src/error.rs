use thiserror::Error;

/// Errors from the non-hot-path parts of the crate (construction and loading).
/// Per-frame arithmetic never fails; bad numbers propagate as NaN/Infinity.
#[derive(Error, Debug)]
pub enum AnimationError {
    /// Strict construction between a multiplicative and an absolute state.
    #[error("cannot animate between a multiplicative and an absolute transform state")]
    MixedModes,

    /// Manifest lookup by name failed.
    #[error("unknown animation '{0}'")]
    UnknownAnimation(String),

    /// Manifest JSON could not be parsed.
    #[error("invalid animation manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}
