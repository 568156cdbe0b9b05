//! Writing descriptions to disk.
//!
//! Every call of [`DescriptionWriter::persist`] produces three independent outputs:
//!
//! * a row in the summary CSV table (`id`, `starting`, `ending`, `traversal`),
//! * a `{id}_bearings.txt` file with the numbered list of bearings,
//! * the `disclaimer.txt` file next to it.
//!
//! The writes are not transactional: if one of them fails, the ones before it are not rolled back.
//!
//! The summary table is a shared resource. Its first row is checked on every call, and the header is inserted at the
//! top of the file if it is missing. No locking is done, so calls targeting the same table must not run
//! concurrently.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::description::DescriptionRecord;
use crate::disclaimer::DISCLAIMER;
use crate::dms::DmsPair;
use crate::error::CenterlineError;
use crate::traversal::format_traversal;

/// Columns of the summary table, in order.
pub const SUMMARY_FIELDS: [&str; 4] = ["id", "starting", "ending", "traversal"];

/// Default name of the disclaimer file.
pub const DISCLAIMER_FILE_NAME: &str = "disclaimer.txt";

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Locations the descriptions are written to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistTargets {
    /// Summary CSV file. Created if it does not exist.
    pub summary: PathBuf,
    /// Existing directory for the bearing and disclaimer files.
    pub details_dir: PathBuf,
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Feature id given by the caller.
    pub id: String,
    /// `Latitude: .. and Longitude: ..` of the first vertex.
    pub starting: String,
    /// `Latitude: .. and Longitude: ..` of the last vertex.
    pub ending: String,
    /// Formatted PLSS traversal.
    pub traversal: String,
}

impl SummaryRow {
    /// Formats the record. Endpoints that were not set render as empty fields.
    pub fn new(record: &DescriptionRecord, feature_id: &str) -> Self {
        Self {
            id: feature_id.to_string(),
            starting: record
                .starting
                .as_ref()
                .map(DmsPair::describe)
                .unwrap_or_default(),
            ending: record
                .ending
                .as_ref()
                .map(DmsPair::describe)
                .unwrap_or_default(),
            traversal: format_traversal(&record.traversal),
        }
    }
}

/// Writes description records to the summary table and the detail directory.
#[derive(Debug, Clone)]
pub struct DescriptionWriter {
    targets: PersistTargets,
    disclaimer_name: String,
    line_ending: &'static str,
}

impl DescriptionWriter {
    /// Creates a writer appending to the `summary` table and writing detail files into `details_dir`.
    pub fn new(summary: impl Into<PathBuf>, details_dir: impl Into<PathBuf>) -> Self {
        Self::from_targets(PersistTargets {
            summary: summary.into(),
            details_dir: details_dir.into(),
        })
    }

    /// Creates a writer for the given targets.
    pub fn from_targets(targets: PersistTargets) -> Self {
        Self {
            targets,
            disclaimer_name: DISCLAIMER_FILE_NAME.to_string(),
            line_ending: LINE_ENDING,
        }
    }

    /// Sets the file name of the disclaimer inside the detail directory.
    pub fn with_disclaimer_name(mut self, name: impl Into<String>) -> Self {
        self.disclaimer_name = name.into();
        self
    }

    /// Sets the line terminator of the bearing files. Defaults to the platform terminator.
    pub fn with_line_ending(mut self, line_ending: &'static str) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Targets of the writer.
    pub fn targets(&self) -> &PersistTargets {
        &self.targets
    }

    /// Path of the bearing file of the feature.
    pub fn bearings_path(&self, feature_id: &str) -> PathBuf {
        self.targets
            .details_dir
            .join(format!("{feature_id}_bearings.txt"))
    }

    /// Path of the disclaimer file.
    pub fn disclaimer_path(&self) -> PathBuf {
        self.targets.details_dir.join(&self.disclaimer_name)
    }

    /// Writes the summary row, the bearing file and the disclaimer for the record.
    ///
    /// I/O errors are returned as is; outputs written before the failure are left in place.
    pub fn persist(
        &self,
        record: &DescriptionRecord,
        feature_id: &str,
    ) -> Result<(), CenterlineError> {
        self.append_summary(&SummaryRow::new(record, feature_id))?;
        self.write_bearings(record, feature_id)?;
        self.write_disclaimer()?;

        info!(
            "Saved description of feature {feature_id} ({} bearings) to {:?}",
            record.bearings.len(),
            self.targets.details_dir
        );

        Ok(())
    }

    /// Appends a row to the summary table, inserting the header first if the table does not start with it.
    pub fn append_summary(&self, row: &SummaryRow) -> Result<(), CenterlineError> {
        let path = &self.targets.summary;
        if !csv_has_header(path, &SUMMARY_FIELDS)? {
            debug!("Summary table {path:?} has no header, inserting it");
            prepend_header(path)?;
        }

        let unterminated = last_byte(path)?.is_some_and(|byte| byte != b'\n');
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        if unterminated {
            file.write_all(b"\r\n")?;
        }

        let mut writer = summary_writer().from_writer(file);
        writer.serialize(row)?;
        writer.flush()?;

        Ok(())
    }

    fn write_bearings(
        &self,
        record: &DescriptionRecord,
        feature_id: &str,
    ) -> Result<(), CenterlineError> {
        let mut file = BufWriter::new(File::create(self.bearings_path(feature_id))?);
        for (index, bearing) in record.bearings.iter().enumerate() {
            write!(file, "{}. {bearing}{}", index + 1, self.line_ending)?;
        }
        file.flush()?;

        Ok(())
    }

    fn write_disclaimer(&self) -> Result<(), CenterlineError> {
        fs::write(self.disclaimer_path(), DISCLAIMER)?;
        Ok(())
    }
}

/// Checks whether the first row of the CSV file is exactly `expected_fields`.
///
/// A missing or empty file has no header. Other read errors are returned.
pub fn csv_has_header(path: &Path, expected_fields: &[&str]) -> Result<bool, CenterlineError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err.into()),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut first_row = StringRecord::new();
    if !reader.read_record(&mut first_row)? {
        return Ok(false);
    }

    Ok(first_row.iter().eq(expected_fields.iter().copied()))
}

fn last_byte(path: &Path) -> Result<Option<u8>, CenterlineError> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    if file.metadata()?.len() == 0 {
        return Ok(None);
    }

    file.seek(SeekFrom::End(-1))?;
    let mut byte = [0; 1];
    file.read_exact(&mut byte)?;

    Ok(Some(byte[0]))
}

fn summary_writer() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder.has_headers(false).terminator(Terminator::CRLF);
    builder
}

fn prepend_header(path: &Path) -> Result<(), CenterlineError> {
    let existing = match fs::read(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => vec![],
        Err(err) => return Err(err.into()),
    };

    let mut writer = summary_writer().from_writer(Vec::with_capacity(existing.len() + 32));
    writer.write_record(SUMMARY_FIELDS)?;
    let mut content = writer.into_inner().map_err(|err| err.into_error())?;

    content.extend_from_slice(&existing);
    if !existing.is_empty() && !existing.ends_with(b"\n") {
        content.extend_from_slice(b"\r\n");
    }

    fs::write(path, content)?;
    Ok(())
}
