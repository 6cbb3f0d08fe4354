//! # hashcost
//!
//! A small harness for measuring the computational cost of password hashing
//! primitives.
//!
//! The pipeline has three stages, each with a corresponding binary:
//!
//! 1. `generate` — hash a list of password samples under every configured
//!    primitive and write one dump file per parameter set.
//! 2. `benchmark` — repeatedly invoke each primitive on each sample, recording
//!    elapsed wall-clock time and resident-memory delta, and persist the
//!    resulting table as CSV.
//! 3. `report` — aggregate benchmark results (plus optional monitor logs and
//!    cracking-tool output) into summary tables and bar charts.
//!
//! Data flows strictly one way: loader -> measurer -> aggregator -> report.
//!
//! ## Example
//!
//! ```
//! extern crate hashcost;
//!
//! use hashcost::measure::measure;
//! use hashcost::primitives::Sha256;
//!
//! fn main() {
//!     let prim = Sha256::default();
//!     let cost = measure(&prim, "hunter2", 10).unwrap();
//!     println!("mean time: {:.9}s", cost.mean_time);
//! }
//! ```

#![deny(
    missing_docs,
    non_camel_case_types,
    non_snake_case,
    non_upper_case_globals,
    path_statements,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_allocation,
    unused_import_braces,
    unused_must_use,
    unused_mut,
    unused_parens,
)]

extern crate bcrypt;
extern crate csv;
extern crate data_encoding;
extern crate encoding_rs;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate plotters;
extern crate ring;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_yaml;
#[cfg(not(target_os = "linux"))]
extern crate sys_info;

/// `hashcost` errors.
pub mod errors {
    use csv;
    use ring;
    use std::io;
    use std::path::PathBuf;

    error_chain! {
        foreign_links {
            Bcrypt(::bcrypt::BcryptError) #[doc = "Errors from the bcrypt backend."];
            Csv(csv::Error) #[doc = "Errors reading or writing delimited tables."];
            Io(io::Error) #[doc = "I/O errors."];
            Ring(ring::error::Unspecified) #[doc = "Errors originating from `ring`."];
        }
        errors {
            /// An expected input file is absent.
            NotFound(path: PathBuf) {
                description("input file not found")
                display("input file not found: {}", path.display())
            }
            /// A tabular input lacks a usable column, or a row fails validation.
            Format(reason: String) {
                description("malformed tabular input")
                display("malformed tabular input: {}", reason)
            }
            /// None of the candidate encodings decoded a text artifact.
            Decode(path: PathBuf) {
                description("undecodable text file")
                display("could not decode {} with any candidate encoding", path.display())
            }
        }
    }
}

use errors::*;

use ring::rand::{SecureRandom, SystemRandom};

pub mod config;
pub mod cracker;
pub mod dumps;
pub mod measure;
pub mod primitives;
pub mod report;
pub mod results;
pub mod samples;

/// Generates a fresh random salt for the salted primitives.
pub(crate) fn gen_salt() -> Result<Vec<u8>> {
    let mut salt = vec![0_u8; 16];
    let rng = SystemRandom::new();
    rng.fill(&mut salt)?;
    Ok(salt)
}
