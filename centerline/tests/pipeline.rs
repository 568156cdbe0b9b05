use std::fs;
use std::path::Path;

use centerline::centerline_types::cartesian::Point2d;
use centerline::centerline_types::geo::impls::projection::IdentityProjection;
use centerline::centerline_types::geo::impls::GeoPoint2d;
use centerline::centerline_types::geo::Projection;
use centerline::centerline_types::impls::MultiContour;
use centerline::persist::SUMMARY_FIELDS;
use centerline::{
    CenterlineError, DescriptionAssembler, DescriptionRecord, DescriptionWriter, SectionCrossing,
    SectionIntersector,
};

type Polyline = MultiContour<Point2d>;

fn sections(_: &Polyline) -> Result<Vec<SectionCrossing>, CenterlineError> {
    Ok(vec![
        SectionCrossing::new("26", "T01S R01W", 3),
        SectionCrossing::new("26", "T01S R01W", 1),
        SectionCrossing::new("30", "T02N R03E", 15),
        SectionCrossing::new("26", "T01S R01W", 3),
        SectionCrossing::new("30", "T02N R03E", 14),
    ])
}

fn describe(paths: Vec<Vec<Point2d>>) -> DescriptionRecord {
    let projection = IdentityProjection::<GeoPoint2d, Point2d>::new();
    let projection: &dyn Projection<InPoint = GeoPoint2d, OutPoint = Point2d> = &projection;
    let intersector: &dyn SectionIntersector<Polyline> = &sections;

    DescriptionAssembler::new(projection, intersector)
        .assemble(&paths.into())
        .expect("assembled")
}

fn read_rows(path: &Path) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .expect("summary exists")
        .records()
        .map(|row| row.expect("valid row").iter().map(String::from).collect())
        .collect()
}

fn persist_two(summary: &Path, details: &Path) {
    let writer = DescriptionWriter::new(summary, details);
    let first = describe(vec![vec![
        Point2d::new(-111.9, 40.7),
        Point2d::new(-111.9, 40.701),
    ]]);
    let second = describe(vec![vec![
        Point2d::new(-111.8, 40.6),
        Point2d::new(-111.799, 40.6),
    ]]);

    writer.persist(&first, "ROAD_001").expect("persisted");
    writer.persist(&second, "ROAD_002").expect("persisted");
}

fn assert_header_then_rows(rows: &[Vec<String>]) {
    let header_rows = rows.iter().filter(|row| **row == SUMMARY_FIELDS).count();
    assert_eq!(header_rows, 1);
    assert_eq!(rows[0], SUMMARY_FIELDS);

    let ids: Vec<_> = rows[rows.len() - 2..]
        .iter()
        .map(|row| row[0].as_str())
        .collect();
    assert_eq!(ids, ["ROAD_001", "ROAD_002"]);
}

#[test]
fn absent_summary_gets_one_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = dir.path().join("survey123.csv");

    persist_two(&summary, dir.path());

    let rows = read_rows(&summary);
    assert_eq!(rows.len(), 3);
    assert_header_then_rows(&rows);
}

#[test]
fn empty_summary_gets_one_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = dir.path().join("survey123.csv");
    fs::write(&summary, "").expect("written");

    persist_two(&summary, dir.path());

    let rows = read_rows(&summary);
    assert_eq!(rows.len(), 3);
    assert_header_then_rows(&rows);
}

#[test]
fn summary_with_foreign_header_gets_one_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = dir.path().join("survey123.csv");
    fs::write(&summary, "name,value,type\r\n").expect("written");

    persist_two(&summary, dir.path());

    let rows = read_rows(&summary);
    assert_eq!(rows.len(), 4);
    assert_header_then_rows(&rows);
    assert_eq!(rows[1], ["name", "value", "type"]);
}

#[test]
fn full_description() {
    let dir = tempfile::tempdir().expect("temp dir");
    let summary = dir.path().join("survey123.csv");

    persist_two(&summary, dir.path());

    let rows = read_rows(&summary);
    assert_eq!(
        rows[1],
        [
            "ROAD_001",
            "Latitude: 40°42'00.00000\"N and Longitude: 111°54'00.00000\"W",
            "Latitude: 40°42'03.60000\"N and Longitude: 111°54'00.00000\"W",
            "Salt Lake Base and Meridian T01S R01W: Sections 1, 3 | Uintah Special Meridian T02N R03E: Sections 14, 15",
        ]
    );

    let bearings = fs::read_to_string(dir.path().join("ROAD_002_bearings.txt")).expect("readable");
    assert!(bearings.starts_with("1. S90°0'0\"E "));
    assert_eq!(bearings.lines().count(), 1);

    let disclaimer = fs::read_to_string(dir.path().join("disclaimer.txt")).expect("readable");
    assert_eq!(disclaimer, centerline::disclaimer::DISCLAIMER);
}

#[test]
fn record_serializes_with_string_keys() {
    let record = describe(vec![
        vec![Point2d::new(-111.9, 40.7), Point2d::new(-111.9, 40.701)],
        vec![Point2d::new(-111.9, 40.701), Point2d::new(-111.899, 40.701)],
    ]);

    let json = serde_json::to_value(&record).expect("serialized");
    assert_eq!(json["traversal"]["26-T01S R01W"], serde_json::json!([3, 1, 3]));
    assert_eq!(json["bearings"].as_array().map(Vec::len), Some(2));

    let restored: DescriptionRecord = serde_json::from_value(json).expect("deserialized");
    assert_eq!(restored, record);
}
