//! Aggregation and reporting: group measurements by algorithm, derive
//! summary statistics, and render categorical bar charts.
//!
//! One parameterized reporting path serves every dimension (mean time, mean
//! memory, percent cracked) instead of per-chart variants. Missing optional
//! inputs are skipped with a diagnostic; the reporter always emits output
//! for the sources that are present.

use cracker::CrackEstimate;
use results::ResultSet;

use csv;
use plotters::prelude::*;
use serde::Serialize;

use errors::*;

use std::fmt::Display;
use std::path::Path;

/// Preferred display order for known algorithm names. Unrecognized names
/// sort after these, in encounter order.
pub static DISPLAY_ORDER: &'static [&'static str] = &["sha256", "bcrypt", "argon2", "scrypt"];

/// Group-level aggregate of the benchmark table, one row per algorithm.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    /// Algorithm identifier.
    pub algorithm: String,
    /// Mean of per-sample mean hashing times, in seconds.
    pub mean_time_seconds: f64,
    /// Largest per-sample mean hashing time, in seconds.
    pub max_time_seconds: f64,
    /// Mean of per-sample memory deltas, in bytes.
    pub mean_memory_bytes: f64,
    /// Largest per-sample memory delta, in bytes.
    pub max_memory_bytes: f64,
}

/// Aggregate of one external monitor log (CPU/memory readings taken while
/// the cracking tool ran).
#[derive(Clone, Debug, Serialize)]
pub struct MonitorSummary {
    /// Algorithm the monitored cracking run targeted.
    pub algorithm: String,
    /// Mean CPU utilisation, percent.
    pub avg_cpu_percent: f64,
    /// Mean resident memory, MB.
    pub avg_mem_mb: f64,
    /// Peak resident memory, MB.
    pub max_mem_mb: f64,
}

#[derive(Serialize)]
struct CrackRow<'a> {
    algorithm: &'a str,
    cracked: usize,
    total: usize,
    percent_cracked: f64,
}

/// Group a result set by algorithm and reduce each numeric column to its
/// mean and max, ordered by `DISPLAY_ORDER`.
pub fn summarize(results: &ResultSet) -> Vec<AlgorithmSummary> {
    let mut groups: Vec<(String, Vec<(f64, f64)>)> = Vec::new();
    for row in results.rows() {
        let values = (row.mean_time_seconds, row.mean_memory_bytes);
        match groups.iter_mut().find(|g| g.0 == row.algorithm) {
            Some(group) => group.1.push(values),
            None => groups.push((row.algorithm.clone(), vec![values])),
        }
    }
    let mut summaries: Vec<AlgorithmSummary> = groups
        .into_iter()
        .map(|(algorithm, values)| {
            let n = values.len() as f64;
            AlgorithmSummary {
                algorithm: algorithm,
                mean_time_seconds: values.iter().map(|v| v.0).sum::<f64>() / n,
                max_time_seconds: values.iter().map(|v| v.0).fold(0.0, f64::max),
                mean_memory_bytes: values.iter().map(|v| v.1).sum::<f64>() / n,
                max_memory_bytes: values.iter().map(|v| v.1).fold(::std::f64::MIN, f64::max),
            }
        })
        .collect();
    // stable sort keeps encounter order for unrecognized names
    summaries.sort_by_key(|s| display_rank(&s.algorithm));
    summaries
}

/// Rank of `name` in the preferred display order; unknown names rank last.
pub fn display_rank(name: &str) -> usize {
    DISPLAY_ORDER
        .iter()
        .position(|&known| known == name)
        .unwrap_or(DISPLAY_ORDER.len())
}

/// Summarize a monitor log CSV with `cpu_percent` and `mem_mb` columns.
///
/// Fails with `ErrorKind::NotFound` when the log is absent (callers treat
/// monitor logs as optional). A column that is missing or unparseable
/// contributes zeros, mirroring how sloppy monitor logs are tolerated.
pub fn summarize_monitor<P: AsRef<Path>>(path: P, algorithm: &str) -> Result<MonitorSummary> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ErrorKind::NotFound(path.to_path_buf()).into());
    }
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let cpu_idx = headers.iter().position(|h| h.trim() == "cpu_percent");
    let mem_idx = headers.iter().position(|h| h.trim() == "mem_mb");
    if cpu_idx.is_none() || mem_idx.is_none() {
        warn!("monitor log {} lacks cpu_percent/mem_mb columns", path.display());
    }

    let mut rows = 0_usize;
    let (mut cpu_sum, mut mem_sum, mut mem_max) = (0.0, 0.0, 0.0_f64);
    for record in reader.records() {
        let record = record?;
        let cpu = field_as_f64(&record, cpu_idx);
        let mem = field_as_f64(&record, mem_idx);
        cpu_sum += cpu;
        mem_sum += mem;
        mem_max = mem_max.max(mem);
        rows += 1;
    }
    let n = if rows == 0 { 1.0 } else { rows as f64 };
    Ok(MonitorSummary {
        algorithm: algorithm.to_string(),
        avg_cpu_percent: cpu_sum / n,
        avg_mem_mb: mem_sum / n,
        max_mem_mb: mem_max,
    })
}

fn field_as_f64(record: &csv::StringRecord, idx: Option<usize>) -> f64 {
    idx.and_then(|i| record.get(i))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0.0)
}

/// Write the per-algorithm benchmark summary table.
pub fn write_summary_csv<P: AsRef<Path>>(path: P, rows: &[AlgorithmSummary]) -> Result<()> {
    write_rows(path, rows)
}

/// Write the monitor summary table.
pub fn write_monitor_csv<P: AsRef<Path>>(path: P, rows: &[MonitorSummary]) -> Result<()> {
    write_rows(path, rows)
}

/// Write the cracking-tool result table, with percentages rounded to two
/// decimal places.
pub fn write_crack_csv<P: AsRef<Path>>(path: P, rows: &[CrackEstimate]) -> Result<()> {
    let rows: Vec<CrackRow> = rows
        .iter()
        .map(|est| CrackRow {
            algorithm: &est.algorithm,
            cracked: est.cracked,
            total: est.total,
            percent_cracked: (est.percent() * 100.0).round() / 100.0,
        })
        .collect();
    write_rows(path, &rows)
}

fn write_rows<P: AsRef<Path>, T: Serialize>(path: P, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Render a categorical bar chart, one bar per labelled value, to an SVG
/// file.
///
/// A log-scaled value axis is only used when `log_scale` is requested *and*
/// every value is strictly positive; otherwise the chart falls back to a
/// linear axis rather than failing on a non-positive value.
pub fn render_bar_chart<P: AsRef<Path>>(
    path: P,
    title: &str,
    y_label: &str,
    data: &[(String, f64)],
    log_scale: bool,
) -> Result<()> {
    let path = path.as_ref();
    if data.is_empty() {
        bail!("no data to chart for {:?}", title);
    }
    let max = data.iter().map(|d| d.1).fold(::std::f64::MIN, f64::max);
    let min = data.iter().map(|d| d.1).fold(::std::f64::MAX, f64::min);
    let use_log = log_scale && min > 0.0;
    if log_scale && !use_log {
        warn!("{:?} has non-positive values; using a linear value axis", title);
    }

    let root = SVGBackend::new(path, (640, 480)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;
    let x_range = 0.0..data.len() as f64;

    if use_log {
        let baseline = min / 10.0;
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, (baseline..max * 10.0).log_scale())
            .map_err(draw_err)?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.len() + 1)
            .x_label_formatter(&|x| bar_label(data, *x))
            .y_desc(y_label)
            .draw()
            .map_err(draw_err)?;
        chart.draw_series(bars(data, baseline)).map_err(draw_err)?;
    } else {
        let top = if max > 0.0 { max * 1.1 } else { 1.0 };
        let floor = if min < 0.0 { min * 1.1 } else { 0.0 };
        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(x_range, floor..top)
            .map_err(draw_err)?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(data.len() + 1)
            .x_label_formatter(&|x| bar_label(data, *x))
            .y_desc(y_label)
            .draw()
            .map_err(draw_err)?;
        chart.draw_series(bars(data, 0.0)).map_err(draw_err)?;
    }
    root.present().map_err(draw_err)?;
    info!("wrote chart {}", path.display());
    Ok(())
}

fn bars(data: &[(String, f64)], baseline: f64) -> Vec<Rectangle<(f64, f64)>> {
    data.iter()
        .enumerate()
        .map(|(i, &(_, value))| {
            Rectangle::new(
                [(i as f64 + 0.2, baseline), (i as f64 + 0.8, value)],
                BLUE.filled(),
            )
        })
        .collect()
}

fn bar_label(data: &[(String, f64)], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 {
        return String::new();
    }
    data.get(idx as usize)
        .map(|&(ref name, _)| name.clone())
        .unwrap_or_default()
}

fn draw_err<E: Display>(e: E) -> Error {
    format!("chart rendering failed: {}", e).into()
}

#[cfg(test)]
mod test {
    use super::*;
    use results::{Measurement, ResultSet};

    fn row(alg: &str, time: f64, mem: f64) -> Measurement {
        Measurement {
            algorithm: alg.to_string(),
            parameter_description: "none".to_string(),
            sample: "hunter2".to_string(),
            mean_time_seconds: time,
            stdev_time_seconds: 0.0,
            mean_memory_bytes: mem,
        }
    }

    #[test]
    fn groups_and_averages() {
        let mut results = ResultSet::new();
        results.push(row("bcrypt", 0.2, 100.0));
        results.push(row("bcrypt", 0.4, 300.0));
        results.push(row("sha256", 1e-6, 0.0));
        let summary = summarize(&results);
        assert_eq!(summary.len(), 2);
        // display order puts sha256 first even though bcrypt came first
        assert_eq!(summary[0].algorithm, "sha256");
        assert_eq!(summary[1].algorithm, "bcrypt");
        assert!((summary[1].mean_time_seconds - 0.3).abs() < 1e-12);
        assert_eq!(summary[1].max_time_seconds, 0.4);
        assert_eq!(summary[1].mean_memory_bytes, 200.0);
        assert_eq!(summary[1].max_memory_bytes, 300.0);
    }

    #[test]
    fn unknown_algorithms_keep_encounter_order() {
        let mut results = ResultSet::new();
        results.push(row("yescrypt", 0.1, 0.0));
        results.push(row("balloon", 0.1, 0.0));
        results.push(row("scrypt", 0.1, 0.0));
        let names: Vec<String> = summarize(&results)
            .into_iter()
            .map(|s| s.algorithm)
            .collect();
        assert_eq!(names, vec!["scrypt", "yescrypt", "balloon"]);
    }

    #[test]
    fn ranks() {
        assert_eq!(display_rank("sha256"), 0);
        assert_eq!(display_rank("scrypt"), 3);
        assert_eq!(display_rank("pbkdf2"), DISPLAY_ORDER.len());
    }
}
