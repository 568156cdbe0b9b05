//! Length unit conversion.

/// Exact number of US Survey Feet in one meter (Mendenhall Order, 1893).
pub const US_SURVEY_FEET_PER_METER: f64 = 3937.0 / 1200.0;

/// Converts meters to US Survey Feet, rounded to one decimal place.
///
/// Rounding is done on the exact decimal value of the product, so `590.549999..` becomes `590.5`. Exact ties are
/// rounded to even. Zero and negative values are converted the same way as positive ones.
pub fn meters_to_us_survey_feet(meters: f64) -> f64 {
    let feet = meters * 3937.0 / 1200.0;
    format!("{feet:.1}").parse().unwrap_or(feet)
}
