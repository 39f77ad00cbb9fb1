//! Run and benchmark reports
//!
//! The reporting layer consumes rendered bounds, so blocks are carried as
//! decimal strings here; that keeps one report shape for both engines.

use eratos_domain::{LocalCount, Partition, RangeInt};
use serde::Serialize;
use std::time::Duration;

/// One worker's assigned block and local count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    /// Worker index in partition order
    pub worker: usize,
    /// Inclusive block bounds in decimal, `None` for an empty block
    pub block: Option<(String, String)>,
    /// Primes found in the block
    pub count: u64,
}

/// Outcome of one distributed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Per-worker assignments and local counts, in worker order
    pub workers: Vec<WorkerReport>,
    /// The reduced global total
    pub total: u64,
    /// Wall time of the timed region in seconds
    pub elapsed_secs: f64,
}

impl RunReport {
    /// Report for a run that had nothing to count.
    pub(crate) fn empty(workers: usize) -> Self {
        Self {
            workers: (0..workers)
                .map(|worker| WorkerReport {
                    worker,
                    block: None,
                    count: 0,
                })
                .collect(),
            total: 0,
            elapsed_secs: 0.0,
        }
    }

    pub(crate) fn from_partition<T: RangeInt>(
        partition: &Partition<T>,
        counts: &[LocalCount],
        total: u64,
        elapsed: Duration,
    ) -> Self {
        let workers = counts
            .iter()
            .map(|local| {
                let block = partition
                    .get(local.worker.index())
                    .and_then(|b| b.bounds())
                    .map(|(start, end)| (start.to_string(), end.to_string()));
                WorkerReport {
                    worker: local.worker.index(),
                    block,
                    count: local.primes,
                }
            })
            .collect();
        Self {
            workers,
            total,
            elapsed_secs: elapsed.as_secs_f64(),
        }
    }

    /// Render a human-readable summary.
    pub fn summary(&self) -> String {
        let mut lines = Vec::with_capacity(self.workers.len() + 2);
        for w in &self.workers {
            match &w.block {
                Some((start, end)) => lines.push(format!(
                    "  worker {}: [{}, {}] -> {} primes",
                    w.worker, start, end, w.count
                )),
                None => lines.push(format!("  worker {}: (empty block) -> 0 primes", w.worker)),
            }
        }
        lines.push(format!("Total primes: {}", self.total));
        lines.push(format!("Elapsed: {:.3}s", self.elapsed_secs));
        lines.join("\n")
    }
}

/// Benchmark comparing a distributed run with a single-worker baseline
/// over the same range.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    /// The distributed run
    pub parallel: RunReport,
    /// The single-worker baseline
    pub sequential: RunReport,
    /// Worker count of the distributed run
    pub workers: usize,
    /// `sequential time / parallel time`
    pub speedup: f64,
    /// `speedup / workers`
    pub efficiency: f64,
}

impl BenchReport {
    pub(crate) fn new(parallel: RunReport, sequential: RunReport, workers: usize) -> Self {
        let speedup = if parallel.elapsed_secs > 0.0 {
            sequential.elapsed_secs / parallel.elapsed_secs
        } else {
            0.0
        };
        let efficiency = speedup / workers as f64;
        Self {
            parallel,
            sequential,
            workers,
            speedup,
            efficiency,
        }
    }

    /// Render a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{}\n\nSequential baseline: {:.3}s\nSpeedup: {:.2}x\nEfficiency: {:.1}%",
            self.parallel.summary(),
            self.sequential.elapsed_secs,
            self.speedup,
            self.efficiency * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(counts: &[u64], elapsed_secs: f64) -> RunReport {
        RunReport {
            workers: counts
                .iter()
                .enumerate()
                .map(|(worker, &count)| WorkerReport {
                    worker,
                    block: Some((worker.to_string(), (worker + 1).to_string())),
                    count,
                })
                .collect(),
            total: counts.iter().sum(),
            elapsed_secs,
        }
    }

    #[test]
    fn test_summary_lists_workers_and_total() {
        let summary = report(&[10, 32], 0.5).summary();
        assert!(summary.contains("worker 0: [0, 1] -> 10 primes"));
        assert!(summary.contains("worker 1: [1, 2] -> 32 primes"));
        assert!(summary.contains("Total primes: 42"));
    }

    #[test]
    fn test_bench_derives_speedup_and_efficiency() {
        let bench = BenchReport::new(report(&[5], 1.0), report(&[5], 3.0), 4);
        assert!((bench.speedup - 3.0).abs() < 1e-9);
        assert!((bench.efficiency - 0.75).abs() < 1e-9);
        let summary = bench.summary();
        assert!(summary.contains("Speedup: 3.00x"));
        assert!(summary.contains("Efficiency: 75.0%"));
    }

    #[test]
    fn test_reports_serialize_to_json() {
        let value = serde_json::to_value(report(&[1, 2], 0.1)).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["workers"][1]["count"], 2);
    }
}
