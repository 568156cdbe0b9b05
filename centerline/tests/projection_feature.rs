use assert_matches::assert_matches;
use centerline::centerline_types::cartesian::Point2d;
use centerline::centerline_types::error::CenterlineTypesError;
use centerline::centerline_types::geo::impls::GeoPoint2d;
use centerline::centerline_types::geo::Crs;

#[test]
fn geographic_crs_never_needs_geodesy() {
    assert!(Crs::WGS84.get_projection::<GeoPoint2d, Point2d>().is_ok());
}

#[cfg(feature = "geodesy")]
#[test]
fn utm_is_available_with_geodesy() {
    assert!(Crs::NAD83_UTM_12N.get_projection::<GeoPoint2d, Point2d>().is_ok());
}

#[cfg(not(feature = "geodesy"))]
#[test]
fn utm_is_unsupported_without_geodesy() {
    let result = Crs::NAD83_UTM_12N.get_projection::<GeoPoint2d, Point2d>();

    assert_matches!(
        result.err(),
        Some(CenterlineTypesError::UnsupportedProjection(definition)) if definition == "utm zone=12"
    );
}
