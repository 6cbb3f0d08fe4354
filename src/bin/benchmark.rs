#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate hashcost;
#[macro_use]
extern crate log;
extern crate sys_info;

use clap::ArgMatches;

use hashcost::config::Settings;
use hashcost::errors::*;
use hashcost::measure;
use hashcost::samples;

use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();
    let matches = clap_app!(benchmark =>
        (version: "0.1.0")
        (about: "Measures the time and memory cost of password hashing primitives")
        (@arg config:  -c --config  +takes_value "Settings file (YAML)")
        (@arg input:   -i --input   +takes_value "Wordlist, one password per line (default: data/wordlist.txt)")
        (@arg output:  -o --output  +takes_value "Output CSV (default: results/server_benchmarks.csv)")
    ).get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        for cause in e.iter().skip(1) {
            error!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let settings = match matches.value_of("config") {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.ensure_dirs()?;

    if let (Ok(cpus), Ok(mem)) = (sys_info::cpu_num(), sys_info::mem_info()) {
        info!("host: {} cpus, {} KiB total memory", cpus, mem.total);
    }

    let input = matches
        .value_of("input")
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.wordlist_path());
    let samples = samples::load_wordlist(&input)?;
    info!("loaded {} samples from {}", samples.len(), input.display());

    let results = measure::run(&settings, &samples)?;

    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.benchmarks_path());
    results.write_csv(&output)?;
    println!("Saved: {} ({} measurements)", output.display(), results.len());
    Ok(())
}
