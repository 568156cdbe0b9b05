//! Degrees-minutes-seconds formatting of geographic coordinates.

use centerline_types::geo::GeoPoint;
use serde::{Deserialize, Serialize};

/// Latitude and longitude of one vertex, formatted as DMS strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DmsPair {
    /// Latitude, for example `40°45'31.68000"N`.
    pub lat: String,
    /// Longitude, for example `111°52'15.60000"W`.
    pub lon: String,
}

impl DmsPair {
    /// Formats latitude and longitude given in decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let (lat, lon) = to_dms(latitude, longitude);
        Self { lat, lon }
    }

    /// Formats a geographic point.
    pub fn from_geo(point: &impl GeoPoint<Num = f64>) -> Self {
        Self::new(point.lat(), point.lon())
    }

    /// Text used for the endpoints in the summary table.
    pub fn describe(&self) -> String {
        format!("Latitude: {} and Longitude: {}", self.lat, self.lon)
    }
}

/// Converts latitude and longitude in decimal degrees to DMS strings.
///
/// Seconds keep 5 decimal places and at least two integer digits, minutes are padded to two digits. Zero counts as
/// north and east.
pub fn to_dms(latitude: f64, longitude: f64) -> (String, String) {
    let lat_direction = if latitude >= 0.0 { 'N' } else { 'S' };
    let lon_direction = if longitude >= 0.0 { 'E' } else { 'W' };

    (
        format_axis(latitude, lat_direction),
        format_axis(longitude, lon_direction),
    )
}

fn format_axis(value: f64, direction: char) -> String {
    let (minutes, seconds) = divmod(value.abs() * 3600.0, 60.0);
    let (degrees, minutes) = divmod(minutes, 60.0);

    format!(
        "{}°{:02}'{:08.5}\"{direction}",
        degrees as i64, minutes as i64, seconds
    )
}

/// Floored division with remainder for non-negative operands.
///
/// The quotient is derived from the remainder, so that `quotient * divisor + remainder == value` holds as closely as
/// floating point allows.
fn divmod(value: f64, divisor: f64) -> (f64, f64) {
    let remainder = value % divisor;
    let div = (value - remainder) / divisor;
    let mut quotient = div.floor();
    if div - quotient > 0.5 {
        quotient += 1.0;
    }

    (quotient, remainder)
}
