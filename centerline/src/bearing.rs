//! Quadrant bearings between vertices in a projected coordinate system.
//!
//! Bearings are grid bearings: the angle is measured from the grid north (the `y` axis of the projection), not from
//! the true north. The angle is always acute and is read from north or south toward east or west, e.g. `N45°30'15"E`.

use std::fmt::{Display, Formatter};

use centerline_types::cartesian::{CartesianPoint2d, Vector2};
use centerline_types::segment::Segment;
use serde::{Deserialize, Serialize};

use crate::units::meters_to_us_survey_feet;

/// Half of the compass a bearing is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NorthSouth {
    /// Angle is measured from north.
    North,
    /// Angle is measured from south.
    South,
}

/// Side the bearing angle turns toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EastWest {
    /// Angle turns toward east.
    East,
    /// Angle turns toward west.
    West,
}

impl Display for NorthSouth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NorthSouth::North => write!(f, "N"),
            NorthSouth::South => write!(f, "S"),
        }
    }
}

impl Display for EastWest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EastWest::East => write!(f, "E"),
            EastWest::West => write!(f, "W"),
        }
    }
}

/// Acute angle from north or south toward east or west, in whole degrees, minutes and seconds.
///
/// Seconds are rounded independently of minutes and degrees, so a value of `60` is possible and is kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuadrantBearing {
    /// Reference direction of the angle.
    pub north_south: NorthSouth,
    /// Whole degrees, 0 to 90.
    pub degrees: u32,
    /// Whole minutes, 0 to 59.
    pub minutes: u32,
    /// Rounded seconds, 0 to 60.
    pub seconds: u32,
    /// Direction the angle turns toward.
    pub east_west: EastWest,
}

impl QuadrantBearing {
    /// Converts an azimuth (degrees clockwise from north, `[0, 360)`) into a quadrant bearing.
    pub fn from_azimuth(azimuth: f64) -> Self {
        let (angle, north_south, east_west) = if azimuth < 90.0 {
            (azimuth, NorthSouth::North, EastWest::East)
        } else if azimuth < 180.0 {
            (180.0 - azimuth, NorthSouth::South, EastWest::East)
        } else if azimuth < 270.0 {
            (azimuth - 180.0, NorthSouth::South, EastWest::West)
        } else {
            (360.0 - azimuth, NorthSouth::North, EastWest::West)
        };

        let degrees = angle.floor();
        let minutes_float = (angle - degrees) * 60.0;
        let minutes = minutes_float.floor();
        let seconds = ((minutes_float - minutes) * 60.0).round_ties_even();

        Self {
            north_south,
            degrees: degrees as u32,
            minutes: minutes as u32,
            seconds: seconds as u32,
            east_west,
        }
    }

    /// Bearing of the direction from `start` to `end`.
    pub fn between(
        start: &impl CartesianPoint2d<Num = f64>,
        end: &impl CartesianPoint2d<Num = f64>,
    ) -> Self {
        Self::from_azimuth(azimuth(start, end))
    }
}

impl Display for QuadrantBearing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}°{}'{}\"{}",
            self.north_south, self.degrees, self.minutes, self.seconds, self.east_west
        )
    }
}

/// Bearing together with the length of the course in US Survey Feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBearing {
    /// Direction of the course.
    pub bearing: QuadrantBearing,
    /// Length of the course in US Survey Feet, rounded to one decimal place.
    pub distance_ft: f64,
}

impl GridBearing {
    /// Creates a bearing from `start` to `end` with the given length in meters.
    pub fn new(
        start: &impl CartesianPoint2d<Num = f64>,
        end: &impl CartesianPoint2d<Num = f64>,
        distance_meters: f64,
    ) -> Self {
        Self {
            bearing: QuadrantBearing::between(start, end),
            distance_ft: meters_to_us_survey_feet(distance_meters),
        }
    }

    /// Bearing of a segment, using its euclidean length in the projection units (meters).
    pub fn of_segment<P: CartesianPoint2d<Num = f64>>(segment: &Segment<'_, P>) -> Self {
        let delta = segment.delta();
        Self {
            bearing: QuadrantBearing::from_azimuth(delta_azimuth(&delta)),
            distance_ft: meters_to_us_survey_feet(delta.magnitude()),
        }
    }
}

impl Display for GridBearing {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:.1} ft", self.bearing, self.distance_ft)
    }
}

/// Azimuth from `start` to `end` in degrees, clockwise from the `y` axis, normalized into `[0, 360)`.
///
/// Coincident points give azimuth `0`.
pub fn azimuth(
    start: &impl CartesianPoint2d<Num = f64>,
    end: &impl CartesianPoint2d<Num = f64>,
) -> f64 {
    delta_azimuth(&end.sub(start))
}

fn delta_azimuth(delta: &Vector2<f64>) -> f64 {
    (delta.dx().atan2(delta.dy()).to_degrees() + 360.0) % 360.0
}

/// Formats the bearing and distance from `start` to `end`, e.g. `N45°0'0"E 464.0 ft`.
pub fn grid_bearing(
    start: &impl CartesianPoint2d<Num = f64>,
    end: &impl CartesianPoint2d<Num = f64>,
    distance_meters: f64,
) -> String {
    GridBearing::new(start, end, distance_meters).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use centerline_types::cartesian::Point2d;

    fn bearing(start: (f64, f64), end: (f64, f64), distance: f64) -> String {
        grid_bearing(
            &Point2d::new(start.0, start.1),
            &Point2d::new(end.0, end.1),
            distance,
        )
    }

    #[test]
    fn due_north() {
        assert_eq!(
            bearing((100.0, 100.0), (100.0, 200.0), 100.0),
            "N0°0'0\"E 328.1 ft"
        );
    }

    #[test]
    fn due_east() {
        let result = bearing((100.0, 100.0), (200.0, 100.0), 100.0);

        assert_eq!(result, "S90°0'0\"E 328.1 ft");
        assert!(result.contains("90°0'0"));
        assert!(result.contains("E "));
    }

    #[test]
    fn northeast_45() {
        assert_eq!(
            bearing((0.0, 0.0), (100.0, 100.0), 141.42),
            "N45°0'0\"E 464.0 ft"
        );
    }

    #[test]
    fn quadrants() {
        let se = bearing((100.0, 100.0), (150.0, 50.0), 70.71);
        assert!(se.starts_with('S'));
        assert!(se.contains("E "));

        let sw = bearing((100.0, 100.0), (50.0, 50.0), 70.71);
        assert!(sw.starts_with('S'));
        assert!(sw.contains("W "));

        let nw = bearing((100.0, 100.0), (50.0, 150.0), 70.71);
        assert!(nw.starts_with('N'));
        assert!(nw.contains("W "));

        let south = bearing((0.0, 0.0), (0.0, -10.0), 10.0);
        assert_eq!(south, "S0°0'0\"W 32.8 ft");

        let west = bearing((0.0, 0.0), (-10.0, 0.0), 10.0);
        assert_eq!(west, "N90°0'0\"W 32.8 ft");
    }

    #[test]
    fn azimuth_is_clockwise_from_north() {
        let origin = Point2d::new(0.0, 0.0);

        assert_abs_diff_eq!(azimuth(&origin, &Point2d::new(0.0, 1.0)), 0.0);
        assert_abs_diff_eq!(azimuth(&origin, &Point2d::new(1.0, 0.0)), 90.0);
        assert_abs_diff_eq!(azimuth(&origin, &Point2d::new(0.0, -1.0)), 180.0);
        assert_abs_diff_eq!(azimuth(&origin, &Point2d::new(-1.0, 0.0)), 270.0);
        assert_abs_diff_eq!(
            azimuth(&origin, &Point2d::new(-1.0, 1.0)),
            315.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn distance_is_independent_of_direction() {
        let origin = (500.0, 500.0);
        for end in [(500.0, 600.0), (600.0, 500.0), (400.0, 400.0), (430.0, 571.4)] {
            assert!(bearing(origin, end, 100.0).ends_with(" 328.1 ft"));
        }
    }

    #[test]
    fn minutes_and_seconds() {
        // 30°15'45" east of north
        let azimuth = 30.0 + 15.0 / 60.0 + 45.0 / 3600.0;
        let bearing = QuadrantBearing::from_azimuth(azimuth);

        assert_eq!(bearing.to_string(), "N30°15'45\"E");
    }

    #[test]
    fn seconds_rounding_to_sixty_is_not_carried() {
        let bearing = QuadrantBearing::from_azimuth(45.0 + 59.7 / 3600.0);

        assert_eq!(bearing.seconds, 60);
        assert_eq!(bearing.to_string(), "N45°0'60\"E");
    }

    #[test]
    fn coincident_points() {
        let point = Point2d::new(424_500.0, 4_515_000.0);

        assert_eq!(grid_bearing(&point, &point, 0.0), "N0°0'0\"E 0.0 ft");
    }

    #[test]
    fn segment_uses_its_length() {
        let a = Point2d::new(0.0, 0.0);
        let b = Point2d::new(30.0, 40.0);
        let bearing = GridBearing::of_segment(&Segment(&a, &b));

        assert_eq!(bearing.distance_ft, 164.0);
        assert_eq!(bearing.bearing.north_south, NorthSouth::North);
        assert_eq!(bearing.bearing.east_west, EastWest::East);
        assert_eq!(bearing.bearing.degrees, 36);
    }

    #[test]
    fn segment_matches_explicit_points() {
        let a = Point2d::new(424_512.3, 4_515_021.7);
        let b = Point2d::new(424_389.0, 4_515_230.4);
        let segment = Segment(&a, &b);
        let length = ((b.x() - a.x()).powi(2) + (b.y() - a.y()).powi(2)).sqrt();

        assert_eq!(
            GridBearing::of_segment(&segment).to_string(),
            grid_bearing(&a, &b, length)
        );
    }

    #[test]
    fn segment_length_near_a_rounding_tie() {
        let a = Point2d::new(424_500.0, 4_515_000.0);
        let b = Point2d::new(424_500.0, 4_515_180.0);

        assert_eq!(
            GridBearing::of_segment(&Segment(&a, &b)).to_string(),
            "N0°0'0\"E 590.5 ft"
        );
    }
}
