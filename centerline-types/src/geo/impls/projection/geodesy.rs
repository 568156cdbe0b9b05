use std::marker::PhantomData;

use geodesy::prelude::*;

use crate::cartesian::NewCartesianPoint2d;
use crate::error::CenterlineTypesError;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;

/// Projection backed by the `geodesy` crate.
///
/// The definition is a geodesy operator pipeline (for example `utm zone=12`). `project` runs the operator forward
/// (degrees to projected meters) and `unproject` runs it inverse.
pub struct GeodesyProjection<In, Out> {
    context: Minimal,
    op: OpHandle,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> GeodesyProjection<In, Out> {
    /// Creates a projection from a geodesy operator definition.
    pub fn new(definition: &str) -> Result<Self, CenterlineTypesError> {
        let mut context = Minimal::new();
        let op = context
            .op(definition)
            .map_err(|err| CenterlineTypesError::InvalidProjection {
                definition: definition.to_string(),
                reason: err.to_string(),
            })?;
        Ok(Self {
            context,
            op,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        })
    }
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection
    for GeodesyProjection<In, Out>
{
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let mut data = [Coor2D::geo(input.lat(), input.lon())];
        self.context.apply(self.op, Fwd, &mut data).ok()?;

        if !data[0].0[0].is_finite() || !data[0].0[1].is_finite() {
            return None;
        }

        Some(Out::new(data[0].0[0], data[0].0[1]))
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let mut data = [Coor2D([input.x(), input.y()])];
        self.context.apply(self.op, Inv, &mut data).ok()?;

        let lat = data[0].0[1].to_degrees();
        let lon = data[0].0[0].to_degrees();
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }

        Some(In::latlon(lat, lon))
    }
}
