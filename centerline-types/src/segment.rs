use crate::cartesian::{CartesianPoint2d, Vector2};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<'a, P: CartesianPoint2d> Segment<'a, P> {
    /// Start point of the segment.
    pub fn start(&self) -> &'a P {
        self.0
    }

    /// End point of the segment.
    pub fn end(&self) -> &'a P {
        self.1
    }

    /// Vector from the start to the end of the segment.
    pub fn delta(&self) -> Vector2<P::Num> {
        self.1.sub(self.0)
    }
}
