//! PLSS traversal: which sections of which townships a centerline crosses.
//!
//! The intersection collaborator reports sections one crossing at a time, so the raw traversal may contain the same
//! section several times and in any order. [`aggregate_traversal`] turns it into the labeled, sorted form used in
//! descriptions.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CenterlineError;

/// Raw traversal as assembled from intersection results, in arrival order.
pub type RawTraversal = IndexMap<TraversalKey, Vec<u32>>;

/// Base meridian of a PLSS grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridian {
    /// Salt Lake Base and Meridian, code `26`.
    SaltLake,
    /// Uintah Special Meridian, code `30`.
    UintahSpecial,
    /// Any other code.
    Unknown,
}

impl Meridian {
    /// Looks up the meridian by its code. Unrecognized codes give [`Meridian::Unknown`].
    pub fn from_code(code: &str) -> Self {
        match code {
            "26" => Meridian::SaltLake,
            "30" => Meridian::UintahSpecial,
            _ => Meridian::Unknown,
        }
    }

    /// Display name of the meridian.
    pub fn name(&self) -> &'static str {
        match self {
            Meridian::SaltLake => "Salt Lake Base and Meridian",
            Meridian::UintahSpecial => "Uintah Special Meridian",
            Meridian::Unknown => "Unknown Meridian",
        }
    }
}

impl Display for Meridian {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a township: meridian code and township/range label, e.g. `26-T01S R01W`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TraversalKey {
    meridian_code: String,
    township_range: String,
}

impl TraversalKey {
    /// Creates a new key.
    ///
    /// The meridian code is separated from the township by `-` in the textual form, so a code containing `-` is
    /// rejected with [`CenterlineError::InvalidTraversalKey`].
    pub fn new(
        meridian_code: impl Into<String>,
        township_range: impl Into<String>,
    ) -> Result<Self, CenterlineError> {
        let meridian_code = meridian_code.into();
        let township_range = township_range.into();
        if meridian_code.contains('-') {
            return Err(CenterlineError::InvalidTraversalKey(format!(
                "{meridian_code}-{township_range}"
            )));
        }

        Ok(Self {
            meridian_code,
            township_range,
        })
    }

    /// Meridian code as reported by the sections layer.
    pub fn meridian_code(&self) -> &str {
        &self.meridian_code
    }

    /// Township and range label, e.g. `T01S R01W`.
    pub fn township_range(&self) -> &str {
        &self.township_range
    }

    /// Meridian the code refers to.
    pub fn meridian(&self) -> Meridian {
        Meridian::from_code(&self.meridian_code)
    }

    /// Human readable label, e.g. `Salt Lake Base and Meridian T01S R01W`.
    pub fn display_label(&self) -> String {
        format!("{} {}", self.meridian(), self.township_range)
    }
}

impl Display for TraversalKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.meridian_code, self.township_range)
    }
}

impl FromStr for TraversalKey {
    type Err = CenterlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (meridian_code, township_range) = s
            .split_once('-')
            .ok_or_else(|| CenterlineError::InvalidTraversalKey(s.to_string()))?;
        Self::new(meridian_code, township_range)
    }
}

impl From<TraversalKey> for String {
    fn from(value: TraversalKey) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TraversalKey {
    type Error = CenterlineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Deduplicates and sorts the sections of every township and replaces the keys with display labels.
///
/// Townships keep the order of the input. If two keys end up with the same label, their sections are merged.
pub fn aggregate_traversal(raw: &RawTraversal) -> IndexMap<String, Vec<u32>> {
    let mut formatted: IndexMap<String, Vec<u32>> = IndexMap::with_capacity(raw.len());
    for (key, sections) in raw {
        formatted
            .entry(key.display_label())
            .or_default()
            .extend_from_slice(sections);
    }

    for sections in formatted.values_mut() {
        sections.sort_unstable();
        sections.dedup();
    }

    formatted
}

/// Renders the traversal as `{label}: Sections {s1}, {s2}` entries joined with ` | `.
///
/// Empty traversal gives an empty string.
pub fn format_traversal(raw: &RawTraversal) -> String {
    aggregate_traversal(raw)
        .iter()
        .map(|(label, sections)| {
            let sections = sections
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("{label}: Sections {sections}")
        })
        .collect::<Vec<_>>()
        .join(" | ")
}
