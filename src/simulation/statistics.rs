//! Statistics aggregation over simulated run counts.
//!
//! Builds the downstream reporting payload from the two result sequences:
//! per-inning runs and per-game totals. Each gets a full distribution
//! (mean, spread, percentiles, integer-bin histogram); games additionally
//! get threshold probabilities P(runs >= t).

use serde::Serialize;

// ── Top-level statistics ────────────────────────────────────────────

#[derive(Serialize)]
pub struct RunStatistics {
    pub num_innings: u64,
    pub num_games: u64,
    pub seed: u64,
    pub innings: RunDistribution,
    pub games: RunDistribution,
}

// ── Run distribution ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct RunDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    pub percentiles: Percentiles,
    /// One bin per run count, 0..=max.
    pub histogram: Vec<HistogramBin>,
    /// P(runs >= t) for named thresholds.
    pub thresholds: Vec<ThresholdEntry>,
}

#[derive(Serialize)]
pub struct Percentiles {
    pub p5: u32,
    pub p10: u32,
    pub p25: u32,
    pub p50: u32,
    pub p75: u32,
    pub p90: u32,
    pub p95: u32,
    pub p99: u32,
}

#[derive(Serialize)]
pub struct HistogramBin {
    pub runs: u32,
    pub count: u32,
    pub probability: f64,
}

#[derive(Serialize)]
pub struct ThresholdEntry {
    pub runs: u32,
    pub probability: f64,
}

/// Named game-score thresholds for the cumulative table.
const THRESHOLDS: [u32; 5] = [1, 3, 5, 10, 15];

// ── Aggregation ─────────────────────────────────────────────────────

/// Aggregate one run sequence into a full distribution.
/// `runs` must be non-empty.
pub fn aggregate_run_distribution(runs: &[u32]) -> RunDistribution {
    let n = runs.len() as f64;
    let mut sorted: Vec<u32> = runs.to_vec();
    sorted.sort_unstable();

    let sum: f64 = sorted.iter().map(|&r| r as f64).sum();
    let mean = sum / n;
    let variance: f64 = sorted
        .iter()
        .map(|&r| (r as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    let percentile = |p: f64| -> u32 {
        let idx = ((p / 100.0) * (sorted.len() - 1) as f64).round() as usize;
        sorted[idx.min(sorted.len() - 1)]
    };

    let percentiles = Percentiles {
        p5: percentile(5.0),
        p10: percentile(10.0),
        p25: percentile(25.0),
        p50: percentile(50.0),
        p75: percentile(75.0),
        p90: percentile(90.0),
        p95: percentile(95.0),
        p99: percentile(99.0),
    };

    let max = *sorted.last().unwrap();
    let mut counts = vec![0u32; max as usize + 1];
    for &r in &sorted {
        counts[r as usize] += 1;
    }
    let histogram: Vec<HistogramBin> = counts
        .iter()
        .enumerate()
        .map(|(r, &c)| HistogramBin {
            runs: r as u32,
            count: c,
            probability: c as f64 / n,
        })
        .collect();

    let thresholds: Vec<ThresholdEntry> = THRESHOLDS
        .iter()
        .map(|&t| {
            let count = sorted.iter().filter(|&&r| r >= t).count();
            ThresholdEntry {
                runs: t,
                probability: count as f64 / n,
            }
        })
        .collect();

    RunDistribution {
        mean,
        std_dev,
        min: sorted[0],
        max,
        median: percentile(50.0),
        percentiles,
        histogram,
        thresholds,
    }
}

/// Aggregate statistics from the inning and game run sequences.
pub fn aggregate_run_statistics(
    inning_runs: &[u32],
    game_runs: &[u32],
    seed: u64,
) -> RunStatistics {
    RunStatistics {
        num_innings: inning_runs.len() as u64,
        num_games: game_runs.len() as u64,
        seed,
        innings: aggregate_run_distribution(inning_runs),
        games: aggregate_run_distribution(game_runs),
    }
}

/// Save aggregated statistics as JSON.
pub fn save_statistics(stats: &RunStatistics, path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let json = serde_json::to_string_pretty(stats).expect("Failed to serialize statistics");
    std::fs::write(path, json).expect("Failed to write statistics file");
}
