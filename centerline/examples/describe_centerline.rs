//! This example shows how to describe a road centerline stored in NAD83 / UTM zone 12N.
//!
//! Run this example with one argument - path to an existing directory. Running it will append a row to
//! `survey123.csv` in that directory and write `ROAD_001_bearings.txt` and `disclaimer.txt` next to it.
//!
//! ```shell
//! cargo run --example describe_centerline -- ./output
//! ```

use anyhow::{anyhow, Result};
use centerline::centerline_types::cartesian::Point2d;
use centerline::centerline_types::geo::impls::GeoPoint2d;
use centerline::centerline_types::geo::Crs;
use centerline::centerline_types::impls::{Contour, MultiContour};
use centerline::{
    format_traversal, CenterlineError, DescriptionAssembler, DescriptionWriter, SectionCrossing,
};

type Polyline = MultiContour<Point2d>;

/// Stands in for the GIS engine: a real application would intersect the line with the PLSS sections layer.
fn sections_along_state_street(_: &Polyline) -> Result<Vec<SectionCrossing>, CenterlineError> {
    Ok(vec![
        SectionCrossing::new("26", "T01S R01E", 6),
        SectionCrossing::new("26", "T01S R01E", 7),
        SectionCrossing::new("26", "T01S R01E", 6),
    ])
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let output = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow!("This example must be run with one argument - output directory"))?;

    let polyline: Polyline = Contour::new(vec![
        Point2d::new(424_500.0, 4_515_000.0),
        Point2d::new(424_500.0, 4_515_250.0),
        Point2d::new(424_600.0, 4_515_350.0),
        Point2d::new(424_610.5, 4_515_612.25),
    ])
    .into();

    let projection = Crs::NAD83_UTM_12N.get_projection::<GeoPoint2d, Point2d>()?;
    let assembler: DescriptionAssembler<Point2d, Polyline> =
        DescriptionAssembler::new(&*projection, &sections_along_state_street);
    let record = assembler.assemble(&polyline)?;

    for (index, bearing) in record.bearings.iter().enumerate() {
        println!("{}. {bearing}", index + 1);
    }
    println!("{}", format_traversal(&record.traversal));

    let output = std::path::Path::new(&output);
    DescriptionWriter::new(output.join("survey123.csv"), output).persist(&record, "ROAD_001")?;

    Ok(())
}
