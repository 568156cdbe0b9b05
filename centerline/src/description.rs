//! Assembling the description of one centerline.
//!
//! [`DescriptionAssembler`] does no spatial analysis by itself. Conversion of vertices into geographic coordinates is
//! delegated to a [`Projection`] and the search for crossed PLSS sections to a [`SectionIntersector`]. Both are
//! passed in by the caller, which makes it possible to drive the assembler with canned data.

use centerline_types::cartesian::CartesianPoint2d;
use centerline_types::geo::impls::GeoPoint2d;
use centerline_types::geo::Projection;
use centerline_types::{Contour, MultiContour};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::bearing::GridBearing;
use crate::dms::DmsPair;
use crate::error::CenterlineError;
use crate::traversal::{RawTraversal, TraversalKey};

/// One PLSS section crossed by a centerline, as reported by the intersection collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionCrossing {
    /// Base meridian code, e.g. `26`.
    pub meridian_code: String,
    /// Township and range label, e.g. `T01S R01W`.
    pub township_range: String,
    /// Section number.
    pub section: u32,
}

impl SectionCrossing {
    /// Creates a new crossing.
    pub fn new(
        meridian_code: impl Into<String>,
        township_range: impl Into<String>,
        section: u32,
    ) -> Self {
        Self {
            meridian_code: meridian_code.into(),
            township_range: township_range.into(),
            section,
        }
    }

    /// Key of the township the section belongs to.
    pub fn key(&self) -> Result<TraversalKey, CenterlineError> {
        TraversalKey::new(self.meridian_code.as_str(), self.township_range.as_str())
    }
}

/// Finds the PLSS sections a line crosses.
///
/// Implemented by the GIS engine that owns the sections layer. Closures with the matching signature implement it too.
pub trait SectionIntersector<L: ?Sized> {
    /// Returns every section crossed by `line`. Repeated and unordered sections are allowed.
    fn intersect(&self, line: &L) -> Result<Vec<SectionCrossing>, CenterlineError>;
}

impl<L: ?Sized, F> SectionIntersector<L> for F
where
    F: Fn(&L) -> Result<Vec<SectionCrossing>, CenterlineError>,
{
    fn intersect(&self, line: &L) -> Result<Vec<SectionCrossing>, CenterlineError> {
        self(line)
    }
}

/// Groups crossings by township in arrival order. Sections are kept as reported.
pub fn group_crossings(
    crossings: impl IntoIterator<Item = SectionCrossing>,
) -> Result<RawTraversal, CenterlineError> {
    let mut traversal = RawTraversal::new();
    for crossing in crossings {
        traversal
            .entry(crossing.key()?)
            .or_default()
            .push(crossing.section);
    }

    Ok(traversal)
}

/// Description of one centerline, before it is formatted for output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptionRecord {
    /// Crossed sections, not yet deduplicated or sorted.
    pub traversal: RawTraversal,
    /// First vertex of the first path.
    pub starting: Option<DmsPair>,
    /// Last vertex of the last path that has at least two vertices.
    pub ending: Option<DmsPair>,
    /// Bearing and distance of every segment, path by path.
    pub bearings: Vec<String>,
}

/// Builds [`DescriptionRecord`]s from polylines stored in a projected coordinate system.
pub struct DescriptionAssembler<'a, P, L: ?Sized> {
    projection: &'a dyn Projection<InPoint = GeoPoint2d, OutPoint = P>,
    intersector: &'a dyn SectionIntersector<L>,
}

impl<'a, P, L> DescriptionAssembler<'a, P, L>
where
    P: CartesianPoint2d<Num = f64>,
    L: MultiContour + ?Sized,
    L::Contour: Contour<Point = P>,
{
    /// Creates a new assembler.
    ///
    /// `projection` must be the projection of the coordinate system the polylines are stored in. Its `unproject`
    /// method is used to get the geographic coordinates of the vertices.
    pub fn new(
        projection: &'a dyn Projection<InPoint = GeoPoint2d, OutPoint = P>,
        intersector: &'a dyn SectionIntersector<L>,
    ) -> Self {
        Self {
            projection,
            intersector,
        }
    }

    /// Describes the polyline.
    ///
    /// Paths are walked independently and in order. Paths with fewer than two vertices produce no bearings; a polyline
    /// without paths produces an empty record.
    pub fn assemble(&self, polyline: &L) -> Result<DescriptionRecord, CenterlineError> {
        let traversal = self.resolve_traversal(polyline)?;

        let mut starting = None;
        let mut ending = None;
        let mut bearings = vec![];

        for (path_index, path) in polyline.contours().enumerate() {
            let vertices: Vec<&P> = path.iter_points().collect();
            let last_index = vertices.len().saturating_sub(1);

            for (index, vertex) in vertices.iter().enumerate() {
                let geo = self.projection.unproject(vertex).ok_or(
                    CenterlineError::Projection {
                        path: path_index,
                        vertex: index,
                    },
                )?;
                let dms = DmsPair::from_geo(&geo);

                if index == 0 {
                    if starting.is_none() {
                        starting = Some(dms);
                    }
                } else if index == last_index {
                    ending = Some(dms);
                }
            }

            bearings.extend(
                path.iter_segments()
                    .map(|segment| GridBearing::of_segment(&segment).to_string()),
            );
        }

        debug!(
            "Assembled centerline description: {} bearings, {} townships",
            bearings.len(),
            traversal.len()
        );

        Ok(DescriptionRecord {
            traversal,
            starting,
            ending,
            bearings,
        })
    }

    /// Sections crossed by the polyline, grouped by township.
    pub fn resolve_traversal(&self, polyline: &L) -> Result<RawTraversal, CenterlineError> {
        let crossings = self.intersector.intersect(polyline)?;
        debug!("Centerline crosses {} section parts", crossings.len());

        group_crossings(crossings)
    }
}
