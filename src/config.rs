//! # Configuration
//!
//! An explicit `Settings` struct carries every path and parameter the
//! harness uses; components never consult ambient global state. Settings
//! can be built programmatically, or loaded from a YAML file whose shape
//! matches the serialized form of `Settings`.

use primitives::{Argon2, Bcrypt, Primitive, Scrypt, Sha256};

use serde_yaml;

use errors::*;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Parameter set for one Argon2i configuration under test.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Argon2Settings {
    /// Number of passes (time cost).
    pub passes: u32,
    /// Degree of parallelism.
    pub lanes: u32,
    /// Memory cost in KiB.
    pub kib: u32,
}

/// Parameter set for one scrypt configuration under test.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScryptSettings {
    /// log2 of the CPU/memory cost factor N.
    pub log_n: u8,
    /// Block size factor.
    pub r: u32,
    /// Parallelization factor.
    pub p: u32,
}

/// Holds all harness configuration: directory layout, the per-algorithm
/// parameter plans, and repetition counts.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Settings {
    /// Directory holding wordlists and other inputs.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory receiving per-algorithm hash dump files.
    #[serde(default = "default_hashes_dir")]
    pub hashes_dir: PathBuf,
    /// Directory receiving benchmark tables, summaries and charts.
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Expected total number of samples for crack-percentage computation.
    /// When absent, the loaded sample count is used.
    #[serde(default)]
    pub total_samples: Option<usize>,
    /// Repetitions per sample for the fast digest.
    #[serde(default = "default_digest_repetitions")]
    pub digest_repetitions: u32,
    /// Repetitions per sample for bcrypt.
    #[serde(default = "default_bcrypt_repetitions")]
    pub bcrypt_repetitions: u32,
    /// Repetitions per sample for the memory-hard KDFs.
    #[serde(default = "default_kdf_repetitions")]
    pub kdf_repetitions: u32,
    /// bcrypt cost factors under test.
    #[serde(default = "default_bcrypt_rounds")]
    pub bcrypt_rounds: Vec<u32>,
    /// Argon2i parameter sets under test.
    #[serde(default = "default_argon2")]
    pub argon2: Vec<Argon2Settings>,
    /// scrypt parameter sets under test.
    #[serde(default = "default_scrypt")]
    pub scrypt: Vec<ScryptSettings>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_hashes_dir() -> PathBuf {
    PathBuf::from("hashes")
}
fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}
fn default_digest_repetitions() -> u32 {
    10
}
fn default_bcrypt_repetitions() -> u32 {
    5
}
fn default_kdf_repetitions() -> u32 {
    3
}
fn default_bcrypt_rounds() -> Vec<u32> {
    // 4 is the quick-test cost, 12 a realistic production cost
    vec![4, 12]
}
fn default_argon2() -> Vec<Argon2Settings> {
    vec![Argon2Settings { passes: 2, lanes: 1, kib: 16_384 }]
}
fn default_scrypt() -> Vec<ScryptSettings> {
    vec![ScryptSettings { log_n: 14, r: 8, p: 1 }]
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: default_data_dir(),
            hashes_dir: default_hashes_dir(),
            results_dir: default_results_dir(),
            total_samples: None,
            digest_repetitions: default_digest_repetitions(),
            bcrypt_repetitions: default_bcrypt_repetitions(),
            kdf_repetitions: default_kdf_repetitions(),
            bcrypt_rounds: default_bcrypt_rounds(),
            argon2: default_argon2(),
            scrypt: default_scrypt(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref());
        if let Ok(file) = file {
            let reader = BufReader::new(file);
            let settings: Self = serde_yaml::from_reader(reader)
                .map_err(|e| Error::from(format!("invalid config file: {}", e)))?;
            trace!("imported settings as: {:?}", settings);
            Ok(settings)
        } else {
            info!("could not open config file {:?}: {:?}", path.as_ref(), file);
            Err("could not open config file".into())
        }
    }

    /// Serialize the configuration as YAML.
    pub fn to_string(&self) -> String {
        serde_yaml::to_string(&self).expect("failed to serialize settings")
    }

    /// Create the data, hashes and results directories if absent.
    pub fn ensure_dirs(&self) -> Result<()> {
        for dir in &[&self.data_dir, &self.hashes_dir, &self.results_dir] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    /// The measurement plan: every configured primitive paired with its
    /// repetition count, in display order.
    pub fn plan(&self) -> Vec<(Primitive, u32)> {
        let mut plan = vec![(Sha256::default(), self.digest_repetitions)];
        for &cost in &self.bcrypt_rounds {
            plan.push((Bcrypt::new(cost), self.bcrypt_repetitions));
        }
        for a in &self.argon2 {
            plan.push((Argon2::new(a.passes, a.lanes, a.kib), self.kdf_repetitions));
        }
        for s in &self.scrypt {
            plan.push((Scrypt::new(s.log_n, s.r, s.p), self.kdf_repetitions));
        }
        plan
    }

    /// Default wordlist location under the data directory.
    pub fn wordlist_path(&self) -> PathBuf {
        self.data_dir.join("wordlist.txt")
    }

    /// Default benchmark table location under the results directory.
    pub fn benchmarks_path(&self) -> PathBuf {
        self.results_dir.join("server_benchmarks.csv")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use primitives::PrimitiveImpl;

    #[test]
    fn default_plan_covers_all_algorithms() {
        let settings = Settings::default();
        let plan = settings.plan();
        let names: Vec<&str> = plan.iter().map(|&(ref p, _)| p.name()).collect();
        assert_eq!(names, vec!["sha256", "bcrypt", "bcrypt", "argon2", "scrypt"]);
        // the digest gets more repetitions than the hardened schemes
        assert!(plan[0].1 > plan[plan.len() - 1].1);
    }

    #[test]
    fn yaml_round_trip() {
        let settings = Settings::default();
        let text = settings.to_string();
        let back: Settings = ::serde_yaml::from_str(&text).unwrap();
        assert_eq!(back.bcrypt_rounds, settings.bcrypt_rounds);
        assert_eq!(back.data_dir, settings.data_dir);
    }
}
