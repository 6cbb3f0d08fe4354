//! Parsing of free-text output produced by an external password-cracking
//! tool (e.g. `john --show`).
//!
//! Tool output arrives in whatever encoding the tool felt like writing, so
//! decoding is a fallback chain over an ordered list of candidate encodings,
//! accepting the first clean decode. The cracked count is the number of
//! non-empty lines; the caller supplies the expected sample total.
//!
//! Assumption (deliberately not corrected here): lines are taken to map
//! one-to-one onto cracked input samples. The tool's output is not verified
//! against the sample list, so a tool that prints summary lines inflates
//! the count.

use encoding_rs::{Encoding, UTF_16LE_INIT, UTF_8_INIT, WINDOWS_1252_INIT};

use errors::*;

use std::fs;
use std::path::Path;

/// Candidate encodings, tried in order. Windows-1252 is last since a
/// single-byte decode cannot fail.
pub static CANDIDATE_ENCODINGS: &'static [&'static Encoding] =
    &[&UTF_8_INIT, &UTF_16LE_INIT, &WINDOWS_1252_INIT];

/// Decode a text artifact by trying each candidate encoding in order,
/// returning the first clean decode.
///
/// Fails with `ErrorKind::NotFound` if the file is absent, and with
/// `ErrorKind::Decode` if every candidate produced replacement characters.
pub fn decode_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ErrorKind::NotFound(path.to_path_buf()).into());
    }
    let bytes = fs::read(path)?;
    for encoding in CANDIDATE_ENCODINGS {
        let (text, _, had_errors) = encoding.decode(&bytes);
        if !had_errors {
            return Ok(text.into_owned());
        }
        debug!("{} does not decode as {}", path.display(), encoding.name());
    }
    Err(ErrorKind::Decode(path.to_path_buf()).into())
}

/// Number of non-empty lines in the tool's output file.
///
/// A missing or undecodable file counts as zero cracked entries; the
/// condition is logged and the run continues.
pub fn count_cracked<P: AsRef<Path>>(path: P) -> usize {
    let path = path.as_ref();
    match decode_text(path) {
        Ok(text) => text.lines().filter(|line| !line.trim().is_empty()).count(),
        Err(e) => {
            warn!("skipping cracking-tool output {}: {}", path.display(), e);
            0
        }
    }
}

/// Estimated fraction of samples cracked for one algorithm.
#[derive(Clone, Debug, Serialize)]
pub struct CrackEstimate {
    /// Algorithm the cracked hashes belong to.
    pub algorithm: String,
    /// Number of cracked entries found in the tool's output.
    pub cracked: usize,
    /// Expected total number of samples, supplied by the caller.
    pub total: usize,
}

impl CrackEstimate {
    /// Build an estimate for `algorithm` from the tool output at `path`.
    pub fn from_file<P: AsRef<Path>>(algorithm: &str, path: P, total: usize) -> Self {
        CrackEstimate {
            algorithm: algorithm.to_string(),
            cracked: count_cracked(path),
            total: total,
        }
    }

    /// Percentage of samples cracked, `cracked / total * 100`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.cracked as f64 / self.total as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_file_counts_zero() {
        let est = CrackEstimate::from_file("bcrypt", "no/such/file.txt", 9);
        assert_eq!(est.cracked, 0);
        assert_eq!(est.percent(), 0.0);
    }

    #[test]
    fn zero_total_does_not_divide() {
        let est = CrackEstimate {
            algorithm: "sha256".to_string(),
            cracked: 3,
            total: 0,
        };
        assert_eq!(est.percent(), 0.0);
    }
}
