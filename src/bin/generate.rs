#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate hashcost;
#[macro_use]
extern crate log;

use clap::ArgMatches;

use hashcost::config::Settings;
use hashcost::dumps;
use hashcost::errors::*;
use hashcost::samples;

use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::init();
    let matches = clap_app!(generate =>
        (version: "0.1.0")
        (about: "Generates per-algorithm hash dump files from a password sample list")
        (@arg config: -c --config +takes_value "Settings file (YAML)")
        (@arg input:  -i --input  +takes_value "Wordlist, one password per line")
        (@arg table:  -t --table  +takes_value "Tabular (CSV) source of samples")
        (@arg column:     --column +takes_value "Column of the tabular source to use (default: 'password', else first)")
        (@arg bcrypt_rounds: -b --("bcrypt-rounds") +takes_value "Override the bcrypt cost factors, e.g. 12")
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
    let mut settings = match matches.value_of("config") {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    if let Some(rounds) = matches.value_of("bcrypt_rounds") {
        let cost = rounds
            .parse()
            .map_err(|e| Error::from(format!("invalid bcrypt rounds {:?}: {}", rounds, e)))?;
        settings.bcrypt_rounds = vec![cost];
    }
    settings.ensure_dirs()?;

    // The sample source is mandatory for generation: a missing file aborts.
    let samples = match matches.value_of("table") {
        Some(table) => samples::load_table(table, matches.value_of("column"))?,
        None => {
            let input = matches
                .value_of("input")
                .map(PathBuf::from)
                .unwrap_or_else(|| settings.wordlist_path());
            samples::load_wordlist(&input)?
        }
    };
    if samples.is_empty() {
        return Err("sample source contained no usable passwords".into());
    }
    info!("loaded {} samples", samples.len());

    let wordlist = settings.wordlist_path();
    dumps::write_wordlist(&wordlist, &samples)?;
    println!("Generated:");
    println!(" - {}", wordlist.display());
    for &(ref prim, _) in &settings.plan() {
        let path = settings.hashes_dir.join(dumps::dump_file_name(prim));
        dumps::write_hash_file(&path, prim, &samples)?;
        println!(" - {}", path.display());
    }
    Ok(())
}
