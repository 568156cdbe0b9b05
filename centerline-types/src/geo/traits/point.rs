use num_traits::Float;

/// Point on the surface of the Earth, in degrees.
pub trait GeoPoint {
    /// Numeric type of the coordinates.
    type Num: Float;

    /// Latitude in degrees, positive to the north.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees, positive to the east.
    fn lon(&self) -> Self::Num;
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;
}
