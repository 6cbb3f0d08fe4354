//! The cost measurer: quantifies the time and memory cost of one primitive
//! invocation, absorbing measurement noise by repetition.
//!
//! Each repetition is strictly sequential: the memory reading of repetition
//! N completes before repetition N+1 starts. There are no retries and no
//! outlier discarding; transient noise is absorbed by averaging.

use config::Settings;
use primitives::{Primitive, PrimitiveImpl};
use results::{Measurement, ResultSet};

use errors::*;

use std::time::Instant;

/// Reduced cost statistics for one (primitive, sample) pair.
///
/// The tuple shape is fixed regardless of the repetition count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostEstimate {
    /// Arithmetic mean of per-repetition elapsed time, in seconds.
    pub mean_time: f64,
    /// Population standard deviation of elapsed time, in seconds.
    pub stdev_time: f64,
    /// Arithmetic mean of per-repetition resident-memory delta, in bytes.
    /// May be negative: deltas are `after - before` and are not clamped.
    pub mean_memory_delta: f64,
}

/// Measure the cost of hashing `sample` with `prim`, `repetitions` times.
///
/// The hash output is discarded; the act of hashing is what is measured.
/// Requires `repetitions >= 1`.
pub fn measure(prim: &Primitive, sample: &str, repetitions: u32) -> Result<CostEstimate> {
    if repetitions == 0 {
        bail!("repetitions must be at least 1");
    }
    let mut times = Vec::with_capacity(repetitions as usize);
    let mut deltas = Vec::with_capacity(repetitions as usize);
    for _ in 0..repetitions {
        let mem_before = resident_memory()?;
        let start = Instant::now();
        let _ = prim.hash(sample)?;
        let elapsed = start.elapsed();
        let mem_after = resident_memory()?;
        times.push(elapsed.as_secs_f64());
        deltas.push(mem_after as f64 - mem_before as f64);
    }
    let mean_time = mean(&times);
    let variance = times
        .iter()
        .map(|t| (t - mean_time) * (t - mean_time))
        .sum::<f64>() / times.len() as f64;
    Ok(CostEstimate {
        mean_time: mean_time,
        stdev_time: variance.sqrt(),
        mean_memory_delta: mean(&deltas),
    })
}

/// Run the full measurement plan from `settings` over `samples`, producing
/// one `Measurement` per (primitive, parameter set, sample) combination.
pub fn run(settings: &Settings, samples: &[String]) -> Result<ResultSet> {
    let mut results = ResultSet::new();
    for &(ref prim, repetitions) in &settings.plan() {
        info!(
            "measuring {} ({}) over {} samples, {} repetitions each",
            prim.name(),
            prim.param_description(),
            samples.len(),
            repetitions
        );
        for sample in samples {
            let cost = measure(prim, sample, repetitions)?;
            results.push(Measurement {
                algorithm: prim.name().to_string(),
                parameter_description: prim.param_description(),
                sample: sample.clone(),
                mean_time_seconds: cost.mean_time,
                stdev_time_seconds: cost.stdev_time,
                mean_memory_bytes: cost.mean_memory_delta,
            });
        }
    }
    Ok(results)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Resident set size of the current process, in bytes.
#[cfg(target_os = "linux")]
pub fn resident_memory() -> Result<u64> {
    use std::fs;

    let status = fs::read_to_string("/proc/self/status")?;
    for line in status.lines() {
        if let Some(rest) = line.strip_prefix("VmRSS:") {
            let kib: u64 = rest
                .trim()
                .trim_end_matches("kB")
                .trim()
                .parse()
                .map_err(|e| Error::from(format!("unparseable VmRSS line: {}", e)))?;
            return Ok(kib * 1024);
        }
    }
    Err("no VmRSS line in /proc/self/status".into())
}

/// Approximate resident memory on platforms without procfs: system-wide
/// used memory, in bytes. Deltas remain meaningful, absolute values less so.
#[cfg(not(target_os = "linux"))]
pub fn resident_memory() -> Result<u64> {
    let info = sys_info::mem_info()
        .map_err(|e| Error::from(format!("mem_info failed: {}", e)))?;
    Ok(info.total.saturating_sub(info.avail) * 1024)
}
