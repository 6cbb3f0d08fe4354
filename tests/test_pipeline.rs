extern crate hashcost;
extern crate tempfile;

mod common;

use hashcost::config::{Argon2Settings, ScryptSettings, Settings};
use hashcost::dumps;
use hashcost::measure;
use hashcost::report;
use hashcost::samples;

use std::fs;

/// Cheap parameter sets so the whole pipeline runs in test time.
fn test_settings(root: &std::path::Path) -> Settings {
    let mut settings = Settings::default();
    settings.data_dir = root.join("data");
    settings.hashes_dir = root.join("hashes");
    settings.results_dir = root.join("results");
    settings.digest_repetitions = 2;
    settings.bcrypt_repetitions = 1;
    settings.kdf_repetitions = 1;
    settings.bcrypt_rounds = vec![4];
    settings.argon2 = vec![Argon2Settings { passes: 1, lanes: 1, kib: 64 }];
    settings.scrypt = vec![ScryptSettings { log_n: 4, r: 8, p: 1 }];
    settings
}

#[test]
fn loader_to_report_end_to_end() {
    common::init_test();
    let dir = tempfile::tempdir().unwrap();
    let settings = test_settings(dir.path());
    settings.ensure_dirs().unwrap();

    // generate stage
    fs::write(settings.data_dir.join("input.txt"), "senha123\nP@ssw0rd2024\n\n").unwrap();
    let samples = samples::load_wordlist(settings.data_dir.join("input.txt")).unwrap();
    assert_eq!(samples.len(), 2);
    dumps::write_wordlist(settings.wordlist_path(), &samples).unwrap();
    for &(ref prim, _) in &settings.plan() {
        let path = settings.hashes_dir.join(dumps::dump_file_name(prim));
        dumps::write_hash_file(&path, prim, &samples).unwrap();
        let dump = fs::read_to_string(&path).unwrap();
        assert_eq!(dump.lines().count(), samples.len());
    }

    // benchmark stage: one row per (primitive, parameter set, sample)
    let results = measure::run(&settings, &samples).unwrap();
    assert_eq!(results.len(), settings.plan().len() * samples.len());
    results.write_csv(settings.benchmarks_path()).unwrap();

    // report stage
    let summary = report::summarize(&results);
    assert_eq!(summary.len(), 4);
    assert_eq!(summary[0].algorithm, "sha256");
    report::write_summary_csv(settings.results_dir.join("summary_table.csv"), &summary).unwrap();
    let times: Vec<(String, f64)> = summary
        .iter()
        .map(|s| (s.algorithm.clone(), s.mean_time_seconds))
        .collect();
    report::render_bar_chart(
        settings.results_dir.join("plot_time_per_hash.svg"),
        "Mean hashing time",
        "seconds",
        &times,
        true,
    ).unwrap();
    assert!(settings.results_dir.join("summary_table.csv").exists());
    assert!(settings.results_dir.join("plot_time_per_hash.svg").exists());
}
