//! Centerline turns a road centerline into a legal "metes and bounds" description.
//!
//! A description consists of
//!
//! * the bearing and distance of every segment of the centerline, e.g. `N45°30'15"E 328.1 ft` (see [`bearing`]),
//! * the coordinates of the starting and ending vertices in degrees, minutes and seconds (see [`dms`]),
//! * the PLSS townships and sections the centerline traverses (see [`traversal`]).
//!
//! # Pipeline
//!
//! [`DescriptionAssembler`] walks one polyline and produces a [`DescriptionRecord`]. The assembler does no spatial
//! analysis by itself: converting the projected vertices into latitude and longitude is done by a
//! [`Projection`](centerline_types::geo::Projection) (usually the one returned by
//! [`Crs::get_projection`](centerline_types::geo::Crs::get_projection)), and finding the crossed sections is done by
//! a [`SectionIntersector`] provided by the caller.
//!
//! [`DescriptionWriter`] then appends the record to a summary CSV table and writes the numbered bearing list and the
//! disclaimer into a detail directory.
//!
//! ```ignore
//! let projection = Crs::NAD83_UTM_12N.get_projection::<GeoPoint2d, Point2d>()?;
//! let assembler = DescriptionAssembler::new(&*projection, &sections);
//! let record = assembler.assemble(&polyline)?;
//!
//! DescriptionWriter::new("survey123.csv", "bearings").persist(&record, "ROAD_001")?;
//! ```
//!
//! Everything runs synchronously on the calling thread.

pub mod bearing;
pub mod description;
pub mod disclaimer;
pub mod dms;
pub mod error;
pub mod persist;
pub mod traversal;
pub mod units;

pub use bearing::{grid_bearing, GridBearing, QuadrantBearing};
pub use description::{DescriptionAssembler, DescriptionRecord, SectionCrossing, SectionIntersector};
pub use dms::{to_dms, DmsPair};
pub use error::CenterlineError;
pub use persist::{DescriptionWriter, PersistTargets, SummaryRow};
pub use traversal::{aggregate_traversal, format_traversal, Meridian, RawTraversal, TraversalKey};
pub use units::meters_to_us_survey_feet;

// Reexport centerline_types
pub use centerline_types;
