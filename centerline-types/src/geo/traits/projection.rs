/// Converts points between a geographic and a projected coordinate system.
///
/// `project` goes from `InPoint` (usually geographic) to `OutPoint` (usually projected), `unproject` goes back. Both
/// return `None` if the point cannot be represented in the target system.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Projects a point.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Inverse of [`Projection::project`].
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
