//! Geometry vocabulary used to describe road centerlines.
//!
//! The types in this crate are split by the coordinate space they live in:
//!
//! * [`cartesian`] - points in a projected coordinate system (for example UTM meters). Bearings and segment lengths
//!   are always computed in this space.
//! * [`geo`] - points on the surface of the Earth (latitude and longitude in degrees), and the [`Projection`](geo::Projection)
//!   trait that converts between the two spaces.
//!
//! A road centerline is a [`MultiContour`]: one or more paths, each of which is an open [`Contour`] of vertices.
//! Consecutive vertices of a path form a [`Segment`](segment::Segment).

pub mod cartesian;
pub mod contour;
pub mod error;
pub mod geo;
pub mod impls;
pub mod multi_contour;
pub mod segment;

pub use contour::Contour;
pub use multi_contour::MultiContour;
