//! Types and functions on geometries in cartesian (projected) coordinates.

mod impls;
mod traits;

pub use impls::{Point2, Point2d, Vector2};
pub use traits::*;
