#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate hashcost;
#[macro_use]
extern crate log;

use clap::ArgMatches;

use hashcost::config::Settings;
use hashcost::cracker::CrackEstimate;
use hashcost::errors::*;
use hashcost::report;
use hashcost::results::ResultSet;
use hashcost::samples;

use std::process;

fn main() {
    env_logger::init();
    let matches = clap_app!(report =>
        (version: "0.1.0")
        (about: "Aggregates benchmark, monitor and cracking-tool results into tables and charts")
        (@arg config: -c --config +takes_value "Settings file (YAML)")
        (@arg total:  -t --total  +takes_value "Expected total sample count for crack percentages")
    ).get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        for cause in e.iter().skip(1) {
            error!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

// Every input here is optional: a missing benchmark table, monitor log or
// cracking-tool dump is logged and skipped, and the report is produced from
// whatever is present.
fn run(matches: &ArgMatches) -> Result<()> {
    let settings = match matches.value_of("config") {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };
    settings.ensure_dirs()?;
    let results_dir = settings.results_dir.clone();

    // 1) benchmark table -> per-algorithm summary + hashing-time chart
    let mut algorithms: Vec<String> = Vec::new();
    match ResultSet::read_csv(settings.benchmarks_path()) {
        Ok(results) => {
            let summary = report::summarize(&results);
            algorithms = summary.iter().map(|s| s.algorithm.clone()).collect();
            report::write_summary_csv(results_dir.join("summary_table.csv"), &summary)?;
            let times: Vec<(String, f64)> = summary
                .iter()
                .map(|s| (s.algorithm.clone(), s.mean_time_seconds))
                .collect();
            report::render_bar_chart(
                results_dir.join("plot_time_per_hash.svg"),
                "Mean hashing time",
                "seconds (log)",
                &times,
                true,
            )?;
        }
        Err(e) => warn!(
            "no benchmark table ({}); run the benchmark binary first",
            e
        ),
    }
    if algorithms.is_empty() {
        algorithms = report::DISPLAY_ORDER.iter().map(|s| s.to_string()).collect();
    }

    // 2) monitor logs taken while the cracking tool ran
    let mut monitors = Vec::new();
    for algorithm in &algorithms {
        let path = results_dir.join(format!("john_{}_monitor.csv", algorithm));
        match report::summarize_monitor(&path, algorithm) {
            Ok(summary) => monitors.push(summary),
            Err(e) => info!("skipping monitor log for {}: {}", algorithm, e),
        }
    }
    if monitors.is_empty() {
        info!("no monitor logs found under {}", results_dir.display());
    } else {
        report::write_monitor_csv(results_dir.join("monitor_summary.csv"), &monitors)?;
        let mems: Vec<(String, f64)> = monitors
            .iter()
            .map(|m| (m.algorithm.clone(), m.avg_mem_mb))
            .collect();
        report::render_bar_chart(
            results_dir.join("plot_mem_mb.svg"),
            "Memory use during cracking",
            "mean memory (MB)",
            &mems,
            false,
        )?;
    }

    // 3) cracking-tool output; a missing dump contributes zero cracked
    let total = total_samples(matches, &settings)?;
    let estimates: Vec<CrackEstimate> = algorithms
        .iter()
        .map(|algorithm| {
            let path = results_dir.join(format!("john_{}_show.txt", algorithm));
            CrackEstimate::from_file(algorithm, path, total)
        })
        .collect();
    report::write_crack_csv(results_dir.join("john_results.csv"), &estimates)?;
    let percents: Vec<(String, f64)> = estimates
        .iter()
        .map(|est| (est.algorithm.clone(), est.percent()))
        .collect();
    report::render_bar_chart(
        results_dir.join("plot_percent_cracked.svg"),
        "Cracking resistance",
        "percent cracked (%)",
        &percents,
        false,
    )?;

    println!("Report written to {}", results_dir.display());
    Ok(())
}

/// Expected sample total: CLI flag, then settings, then the wordlist length.
fn total_samples(matches: &ArgMatches, settings: &Settings) -> Result<usize> {
    if let Some(total) = matches.value_of("total") {
        return total
            .parse()
            .map_err(|e| Error::from(format!("invalid total {:?}: {}", total, e)));
    }
    if let Some(total) = settings.total_samples {
        return Ok(total);
    }
    match samples::load_wordlist(settings.wordlist_path()) {
        Ok(samples) => Ok(samples.len()),
        Err(e) => {
            warn!("cannot infer sample total ({}); using 0", e);
            Ok(0)
        }
    }
}
