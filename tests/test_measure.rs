extern crate hashcost;

mod common;

use hashcost::measure::measure;
use hashcost::primitives::{Bcrypt, Sha256};

#[test]
fn digest_measurement_is_well_formed() {
    common::init_test();
    let prim = Sha256::default();
    let cost = measure(&prim, "hunter2", 10).unwrap();
    assert!(cost.mean_time >= 0.0);
    assert!(cost.stdev_time >= 0.0);
    // memory delta may legitimately be negative; just require it is finite
    assert!(cost.mean_memory_delta.is_finite());
}

#[test]
fn one_repetition_means_zero_stdev() {
    common::init_test();
    let prim = Bcrypt::new(4);
    let cost = measure(&prim, "hunter2", 1).unwrap();
    assert_eq!(cost.stdev_time, 0.0);
    assert!(cost.mean_time > 0.0);
}

#[test]
fn hardened_scheme_costs_more_than_digest() {
    common::init_test();
    let digest = measure(&Sha256::default(), "hunter2", 5).unwrap();
    let bcrypt = measure(&Bcrypt::new(4), "hunter2", 5).unwrap();
    assert!(bcrypt.mean_time > digest.mean_time);
}
