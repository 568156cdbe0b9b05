//! Implementations of the [`Projection`](crate::geo::Projection) trait.
mod identity;

pub use identity::IdentityProjection;

#[cfg(feature = "geodesy")]
mod geodesy;
#[cfg(feature = "geodesy")]
pub use geodesy::GeodesyProjection;
