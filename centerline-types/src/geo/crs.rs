use serde::{Deserialize, Serialize};

use crate::cartesian::NewCartesianPoint2d;
use crate::error::CenterlineTypesError;
use crate::geo::impls::projection::IdentityProjection;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Coordinate reference system a polyline is stored in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crs {
    projection_type: ProjectionType,
}

/// Method of projecting geographic coordinates into the plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ProjectionType {
    /// Coordinates are longitude and latitude in degrees.
    None,
    /// Universal Transverse Mercator on the GRS80 ellipsoid (NAD83).
    Utm {
        /// UTM zone number, 1 to 60.
        zone: u8,
        /// Whether the zone is in the southern hemisphere.
        south: bool,
    },
    /// Any other projection, given as a geodesy operator definition.
    Other(String),
}

impl Crs {
    /// Geographic coordinates in degrees.
    pub const WGS84: Crs = Crs {
        projection_type: ProjectionType::None,
    };

    /// NAD83 / UTM zone 12N, the frame Utah road centerlines are usually stored in.
    pub const NAD83_UTM_12N: Crs = Crs {
        projection_type: ProjectionType::Utm {
            zone: 12,
            south: false,
        },
    };

    /// Creates a new CRS.
    pub fn new(projection_type: ProjectionType) -> Self {
        Self { projection_type }
    }

    /// UTM CRS for the given zone.
    pub fn utm(zone: u8, south: bool) -> Self {
        Self::new(ProjectionType::Utm { zone, south })
    }

    /// Projection type of the CRS.
    pub fn projection_type(&self) -> &ProjectionType {
        &self.projection_type
    }

    /// Geodesy operator definition for the CRS, if it is projected.
    pub fn definition(&self) -> Option<String> {
        match &self.projection_type {
            ProjectionType::None => None,
            ProjectionType::Utm { zone, south: false } => Some(format!("utm zone={zone}")),
            ProjectionType::Utm { zone, south: true } => Some(format!("utm zone={zone} south")),
            ProjectionType::Other(definition) => Some(definition.clone()),
        }
    }

    /// Returns the projection between geographic coordinates and this CRS.
    pub fn get_projection<In, Out>(
        &self,
    ) -> Result<Box<dyn Projection<InPoint = In, OutPoint = Out>>, CenterlineTypesError>
    where
        In: NewGeoPoint + 'static,
        Out: NewCartesianPoint2d + 'static,
    {
        match self.definition() {
            None => Ok(Box::new(IdentityProjection::new())),
            Some(definition) => Self::geodesy_projection(&definition),
        }
    }

    #[cfg(feature = "geodesy")]
    fn geodesy_projection<In, Out>(
        definition: &str,
    ) -> Result<Box<dyn Projection<InPoint = In, OutPoint = Out>>, CenterlineTypesError>
    where
        In: NewGeoPoint + 'static,
        Out: NewCartesianPoint2d + 'static,
    {
        Ok(Box::new(
            crate::geo::impls::projection::GeodesyProjection::new(definition)?,
        ))
    }

    #[cfg(not(feature = "geodesy"))]
    fn geodesy_projection<In, Out>(
        definition: &str,
    ) -> Result<Box<dyn Projection<InPoint = In, OutPoint = Out>>, CenterlineTypesError>
    where
        In: NewGeoPoint + 'static,
        Out: NewCartesianPoint2d + 'static,
    {
        Err(CenterlineTypesError::UnsupportedProjection(
            definition.to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::geo::impls::GeoPoint2d;
    use crate::geo::GeoPoint;

    #[test]
    fn utm_definitions() {
        assert_eq!(
            Crs::NAD83_UTM_12N.definition().as_deref(),
            Some("utm zone=12")
        );
        assert_eq!(
            Crs::utm(55, true).definition().as_deref(),
            Some("utm zone=55 south")
        );
        assert_eq!(Crs::WGS84.definition(), None);
    }

    #[test]
    fn geographic_crs_uses_identity() {
        let projection = Crs::WGS84
            .get_projection::<GeoPoint2d, Point2d>()
            .expect("identity is always available");
        let point = projection
            .unproject(&Point2d::new(-111.5, 40.25))
            .expect("identity never fails");

        assert_eq!(point.lat(), 40.25);
        assert_eq!(point.lon(), -111.5);
    }
}
