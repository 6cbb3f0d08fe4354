extern crate hashcost;
extern crate tempfile;

mod common;

use hashcost::errors::ErrorKind;
use hashcost::results::{Measurement, ResultSet, COLUMNS};

use std::fs;

fn sample_row(alg: &str, sample: &str, time: f64, mem: f64) -> Measurement {
    Measurement {
        algorithm: alg.to_string(),
        parameter_description: "cost=4".to_string(),
        sample: sample.to_string(),
        mean_time_seconds: time,
        stdev_time_seconds: time / 10.0,
        mean_memory_bytes: mem,
    }
}

#[test]
fn csv_round_trip_preserves_rows_and_columns() {
    common::init_test();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("server_benchmarks.csv");

    let mut set = ResultSet::new();
    set.push(sample_row("bcrypt", "senha123", 0.2, 1024.0));
    set.push(sample_row("bcrypt", "P@ssw0rd2024", 0.3, -512.0));
    set.push(sample_row("sha256", "senha123", 1e-6, 0.0));
    set.write_csv(&path).unwrap();

    let header = fs::read_to_string(&path).unwrap();
    let header = header.lines().next().unwrap().to_string();
    assert_eq!(header, COLUMNS.join(","));

    let back = ResultSet::read_csv(&path).unwrap();
    assert_eq!(back.len(), set.len());
    assert_eq!(back.rows(), set.rows());
}

#[test]
fn missing_table_is_not_found() {
    common::init_test();
    let err = ResultSet::read_csv("no/such/benchmarks.csv").unwrap_err();
    match *err.kind() {
        ErrorKind::NotFound(_) => {}
        ref other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn invalid_rows_are_rejected_on_read() {
    common::init_test();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    fs::write(
        &path,
        format!("{}\n,none,pw,0.1,0.0,0.0\n", COLUMNS.join(",")),
    ).unwrap();
    let err = ResultSet::read_csv(&path).unwrap_err();
    match *err.kind() {
        ErrorKind::Format(_) => {}
        ref other => panic!("expected Format, got {:?}", other),
    }
}
