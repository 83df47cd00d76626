//! Ride logger module
//!
//! Prepends ride entries to per-year CSV files (rides_<year>.csv).
//! Every append rewrites the whole file through a temporary file that is
//! renamed over the target, so a reader sees either the old or the new log.

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{BikelogError, Result};
use crate::models::{OptionKind, OptionList, RideEntry, HEADER};

/// Appends rides to the yearly log files under a rides directory
pub struct RideLogger {
    rides_dir: PathBuf,
    riders: OptionList,
    bikes: OptionList,
}

impl RideLogger {
    pub fn new(config: &Config) -> Self {
        Self {
            rides_dir: config.rides_dir.clone(),
            riders: OptionList::new(OptionKind::Rider, config.riders.clone()),
            bikes: OptionList::new(OptionKind::Bike, config.bikes.clone()),
        }
    }

    /// Path of the log file holding rides for `year`
    pub fn log_path(&self, year: i32) -> PathBuf {
        self.rides_dir.join(format!("rides_{}.csv", year))
    }

    pub fn options(&self, kind: OptionKind) -> &OptionList {
        match kind {
            OptionKind::Rider => &self.riders,
            OptionKind::Bike => &self.bikes,
        }
    }

    /// Known values for `kind`, in their configured order
    pub fn list_options(&self, kind: OptionKind) -> &[String] {
        self.options(kind).values()
    }

    /// Fields of `entry` that are not in their option list, rider first
    pub fn unknown_values<'e>(&self, entry: &'e RideEntry) -> Vec<(OptionKind, &'e str)> {
        [
            (OptionKind::Rider, entry.rider()),
            (OptionKind::Bike, entry.bike()),
        ]
        .into_iter()
        .filter(|(kind, value)| !self.options(*kind).contains(value))
        .collect()
    }

    /// Write `entry` as the first data row of its year's log file
    ///
    /// Unknown riders or bikes are rejected unless `allow_unknown` is set.
    /// Returns the path of the file written.
    pub fn append(&self, entry: &RideEntry, allow_unknown: bool) -> Result<PathBuf> {
        if !allow_unknown {
            if let Some((kind, value)) = self.unknown_values(entry).into_iter().next() {
                return Err(BikelogError::UnknownOption {
                    kind,
                    value: value.to_string(),
                });
            }
        }

        fs::create_dir_all(&self.rides_dir)
            .map_err(|e| BikelogError::fs("create directory", &self.rides_dir, e))?;

        let path = self.log_path(entry.year());
        let existing = read_rows(&path)?;

        if existing.is_empty() && !path.exists() {
            tracing::info!("starting new log file {}", path.display());
        }

        tracing::debug!(
            date = %entry.date(),
            miles = entry.distance().miles(),
            previous_rows = existing.len(),
            "prepending ride to {}",
            path.display()
        );

        let rows = std::iter::once(entry.to_record()).chain(existing);
        write_atomically(&path, rows)?;

        Ok(path)
    }
}

/// Read the data rows of a log file, without its header
///
/// A missing file has no rows. Rows with an unexpected number of columns
/// are kept as they are.
pub fn read_rows(path: &Path) -> Result<Vec<StringRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path).map_err(|e| BikelogError::fs("open", path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }

    Ok(rows)
}

/// Temporary sibling used while rewriting `path`
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}

/// Write header plus `rows` to a temp file, then rename it over `path`
fn write_atomically(path: &Path, rows: impl IntoIterator<Item = StringRecord>) -> Result<()> {
    let temp = temp_path(path);

    let result = write_rows(&temp, rows).and_then(|()| {
        fs::rename(&temp, path).map_err(|e| BikelogError::fs("replace", path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }

    result
}

fn write_rows(temp: &Path, rows: impl IntoIterator<Item = StringRecord>) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp)
        .map_err(|e| BikelogError::fs("create", temp, e))?;

    let mut writer = WriterBuilder::new().flexible(true).from_writer(file);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    let file = writer
        .into_inner()
        .map_err(|e| BikelogError::fs("write", temp, e.into_error()))?;
    file.sync_all()
        .map_err(|e| BikelogError::fs("sync", temp, e))?;

    Ok(())
}
