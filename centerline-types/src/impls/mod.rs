//! Implementations of geometry traits.

mod contour;
mod multi_contour;

pub use contour::Contour;
pub use multi_contour::MultiContour;
