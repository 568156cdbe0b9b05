//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum CenterlineTypesError {
    /// Projection definition was rejected by the projection engine.
    #[error("invalid projection definition `{definition}`: {reason}")]
    InvalidProjection {
        /// Definition string that was given to the engine.
        definition: String,
        /// Reason reported by the engine.
        reason: String,
    },
    /// The coordinate reference system cannot be converted with the enabled features.
    #[error("unsupported projection: {0}")]
    UnsupportedProjection(String),
}
