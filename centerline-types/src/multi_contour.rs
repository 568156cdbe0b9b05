//! A polyline made of one or more paths.

use crate::contour::Contour;

/// Geometry consisting of several contours (paths).
///
/// Paths are independent: there is no segment between the last vertex of one path and the first vertex of the next.
pub trait MultiContour {
    /// Contour type.
    type Contour: Contour;

    /// Iterator over contours, in storage order.
    fn contours(&self) -> impl Iterator<Item = &Self::Contour>;
}
