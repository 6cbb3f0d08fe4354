#![allow(dead_code)]

extern crate env_logger;

pub fn init_test() {
    let _ = self::env_logger::try_init();
}
