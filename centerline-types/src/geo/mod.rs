//! Geometries in geographic coordinates (latitude and longitude) (see [`GeoPoint`]) and conversion between projected
//! and geographic coordinate systems (see [`Projection`]).

mod crs;
pub mod impls;
mod traits;

pub use crs::{Crs, ProjectionType};
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
