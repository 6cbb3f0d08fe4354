//! Loading of plaintext password samples.
//!
//! Samples come either from a newline-delimited wordlist or from a tabular
//! (CSV) source with a designated password column. In both cases values are
//! trimmed, blank entries are skipped, and file order is preserved.

use csv;

use errors::*;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load samples from a newline-delimited UTF-8 wordlist.
///
/// Fails with `ErrorKind::NotFound` if the file is absent.
pub fn load_wordlist<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ErrorKind::NotFound(path.to_path_buf()).into());
    }
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            samples.push(trimmed.to_string());
        }
    }
    Ok(samples)
}

/// Load samples from a tabular (CSV) source with a header row.
///
/// If `column` is given, that named column is used; otherwise a column
/// named `password` (case-insensitive) is preferred, falling back to the
/// first column. Fails with `ErrorKind::Format` when no usable column
/// exists, and `ErrorKind::NotFound` when the file is absent.
pub fn load_table<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ErrorKind::NotFound(path.to_path_buf()).into());
    }
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let index = select_column(&headers, column)?;

    let mut samples = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(index) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                samples.push(trimmed.to_string());
            }
        }
    }
    Ok(samples)
}

fn select_column(headers: &csv::StringRecord, column: Option<&str>) -> Result<usize> {
    if headers.is_empty() {
        return Err(ErrorKind::Format("table has no columns".to_string()).into());
    }
    match column {
        Some(name) => headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| ErrorKind::Format(format!("no column named {:?}", name)).into()),
        None => Ok(headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case("password"))
            .unwrap_or(0)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use csv;

    #[test]
    fn picks_password_column() {
        let headers = csv::StringRecord::from(vec!["id", "Password", "note"]);
        assert_eq!(select_column(&headers, None).unwrap(), 1);
        assert_eq!(select_column(&headers, Some("note")).unwrap(), 2);
        assert!(select_column(&headers, Some("missing")).is_err());
    }

    #[test]
    fn falls_back_to_first_column() {
        let headers = csv::StringRecord::from(vec!["word", "hint"]);
        assert_eq!(select_column(&headers, None).unwrap(), 0);
    }
}
