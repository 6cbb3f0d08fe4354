extern crate hashcost;
extern crate tempfile;

mod common;

use hashcost::errors::ErrorKind;
use hashcost::samples;

use std::fs;

#[test]
fn blank_lines_dropped_and_order_kept() {
    common::init_test();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordlist.txt");
    fs::write(&path, "a\nb\n\n").unwrap();
    assert_eq!(samples::load_wordlist(&path).unwrap(), vec!["a", "b"]);

    fs::write(&path, "senha123\n  P@ssw0rd2024  \n\n\nTr3ndMUsic!99\n").unwrap();
    assert_eq!(
        samples::load_wordlist(&path).unwrap(),
        vec!["senha123", "P@ssw0rd2024", "Tr3ndMUsic!99"]
    );
}

#[test]
fn rereading_is_idempotent() {
    common::init_test();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wordlist.txt");
    fs::write(&path, "one\ntwo\nthree\n").unwrap();
    let first = samples::load_wordlist(&path).unwrap();
    let second = samples::load_wordlist(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_wordlist_is_not_found() {
    common::init_test();
    let err = samples::load_wordlist("no/such/wordlist.txt").unwrap_err();
    match *err.kind() {
        ErrorKind::NotFound(_) => {}
        ref other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn table_prefers_password_column() {
    common::init_test();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passwords.csv");
    fs::write(&path, "id,Password\n1,hunter2\n2,letmein\n3,\n").unwrap();
    assert_eq!(
        samples::load_table(&path, None).unwrap(),
        vec!["hunter2", "letmein"]
    );
}

#[test]
fn table_without_requested_column_is_format_error() {
    common::init_test();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("passwords.csv");
    fs::write(&path, "word,hint\nhunter2,classic\n").unwrap();
    // falls back to the first column when nothing is requested
    assert_eq!(samples::load_table(&path, None).unwrap(), vec!["hunter2"]);
    let err = samples::load_table(&path, Some("password")).unwrap_err();
    match *err.kind() {
        ErrorKind::Format(_) => {}
        ref other => panic!("expected Format, got {:?}", other),
    }
}
