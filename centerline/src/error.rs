//! Error types used by the crate.

use centerline_types::error::CenterlineTypesError;
use thiserror::Error;

/// Centerline error type.
#[derive(Debug, Error)]
pub enum CenterlineError {
    /// Error reading/writing output files.
    #[error("failed to access file: {0}")]
    Io(#[from] std::io::Error),
    /// Error reading or writing the summary table.
    #[error("failed to read or write csv: {0}")]
    Csv(#[from] csv::Error),
    /// A vertex could not be converted into geographic coordinates.
    #[error("failed to project vertex {vertex} of path {path} into geographic coordinates")]
    Projection {
        /// Index of the path in the polyline.
        path: usize,
        /// Index of the vertex in the path.
        vertex: usize,
    },
    /// Section intersection collaborator failed.
    #[error("failed to intersect centerline with PLSS sections: {0}")]
    Intersection(String),
    /// Traversal key is not in the `{meridian}-{township range}` form.
    #[error("invalid traversal key `{0}`, expected `{{meridian}}-{{township range}}`")]
    InvalidTraversalKey(String),
    /// Error from the geometry types crate.
    #[error(transparent)]
    Types(#[from] CenterlineTypesError),
}
