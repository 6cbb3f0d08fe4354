//! The in-memory result table and its flat-file persistence.
//!
//! A `ResultSet` is created empty at harness start, grown by appending one
//! `Measurement` per (primitive, parameter set, sample) combination, and
//! persisted to CSV at harness end. Downstream aggregation reads the file
//! back as read-only input.

use csv;

use errors::*;

use std::path::Path;

/// One cost observation for a (primitive, parameter set, sample) triple.
///
/// Immutable once appended; field order matches the CSV column order.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Measurement {
    /// Algorithm identifier, e.g. `"bcrypt"`.
    pub algorithm: String,
    /// Human-readable parameter set, e.g. `"cost=12"`.
    pub parameter_description: String,
    /// The plaintext sample that was hashed.
    pub sample: String,
    /// Mean elapsed time over all repetitions, in seconds.
    pub mean_time_seconds: f64,
    /// Population standard deviation of elapsed time, in seconds.
    pub stdev_time_seconds: f64,
    /// Mean resident-memory delta, in bytes. May be negative.
    pub mean_memory_bytes: f64,
}

/// The CSV header produced and expected by `ResultSet` persistence.
pub const COLUMNS: &'static [&'static str] = &[
    "algorithm",
    "parameter_description",
    "sample",
    "mean_time_seconds",
    "stdev_time_seconds",
    "mean_memory_bytes",
];

/// An ordered, append-only sequence of `Measurement`s.
#[derive(Clone, Debug, Default)]
pub struct ResultSet {
    rows: Vec<Measurement>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        ResultSet { rows: Vec::new() }
    }

    /// Append one measurement, preserving insertion order.
    pub fn push(&mut self, row: Measurement) {
        self.rows.push(row);
    }

    /// The measurements, in insertion order.
    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    /// Number of measurements recorded.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no measurements were recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Persist the table as CSV with a header row.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a previously persisted table.
    ///
    /// Fails with `ErrorKind::NotFound` if the file is absent, and with
    /// `ErrorKind::Format` if a row violates the result-set invariant
    /// (empty algorithm name or negative timings).
    pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ErrorKind::NotFound(path.to_path_buf()).into());
        }
        let mut reader = csv::Reader::from_path(path)?;
        let mut rows = Vec::new();
        for record in reader.deserialize() {
            let row: Measurement = record?;
            validate(&row)?;
            rows.push(row);
        }
        Ok(ResultSet { rows: rows })
    }
}

fn validate(row: &Measurement) -> Result<()> {
    if row.algorithm.trim().is_empty() {
        return Err(ErrorKind::Format("row with empty algorithm name".to_string()).into());
    }
    if row.mean_time_seconds < 0.0 || row.stdev_time_seconds < 0.0 {
        return Err(ErrorKind::Format(format!(
            "negative timing for algorithm {}",
            row.algorithm
        )).into());
    }
    Ok(())
}
