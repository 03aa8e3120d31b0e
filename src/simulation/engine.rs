//! Inning and game simulation engine.
//!
//! Simulates half-innings by drawing weighted plate-appearance events until
//! three outs accrue, and aggregates nine innings into a game score. Batch
//! entry points fan trials out over rayon with one independently seeded
//! `SmallRng` per trial, so results are reproducible for a given seed and
//! trial count regardless of thread scheduling.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use std::time::Instant;

use crate::config::EventTable;
use crate::constants::{INNINGS_PER_GAME, MAX_EVENTS_PER_INNING};
use crate::errors::{ConfigError, SimulationError};
use crate::game_mechanics::{apply_and_settle, InningState};

/// Results of a batch simulation.
pub struct SimulationResult {
    pub runs: Vec<u32>,
    pub mean: f64,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub median: u32,
    pub elapsed: std::time::Duration,
}

/// Simulate one half-inning, returning the runs scored.
///
/// Draws events until three outs. The event cap converts a degenerate
/// table (no out-producing weight) into a reported error instead of an
/// infinite loop; a valid table terminates in a handful of events.
pub fn simulate_inning<R: Rng>(table: &EventTable, rng: &mut R) -> Result<u32, SimulationError> {
    let mut state = InningState::new();
    for _ in 0..MAX_EVENTS_PER_INNING {
        let event = table.draw(rng);
        if apply_and_settle(&mut state, event) {
            return Ok(state.runs);
        }
    }
    Err(SimulationError::NonTermination {
        events: MAX_EVENTS_PER_INNING,
    })
}

/// Simulate one nine-inning game, returning the total runs.
pub fn simulate_game<R: Rng>(table: &EventTable, rng: &mut R) -> Result<u32, SimulationError> {
    let mut total = 0u32;
    for _ in 0..INNINGS_PER_GAME {
        total += simulate_inning(table, rng)?;
    }
    Ok(total)
}

/// Simulate N innings in parallel, returning the per-inning run counts.
pub fn simulate_innings_batch(
    table: &EventTable,
    num_innings: usize,
    seed: u64,
) -> Result<Vec<u32>, SimulationError> {
    (0..num_innings)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_inning(table, &mut rng)
        })
        .collect()
}

/// Simulate N games in parallel, returning aggregate statistics.
pub fn simulate_games_batch(
    table: &EventTable,
    num_games: usize,
    seed: u64,
) -> Result<SimulationResult, SimulationError> {
    let start = Instant::now();

    let runs: Vec<u32> = (0..num_games)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_game(table, &mut rng)
        })
        .collect::<Result<_, _>>()?;

    Ok(summarize(runs, start.elapsed()))
}

/// Draw N game scores by sampling innings with replacement from a
/// precomputed pool of inning results, nine draws per game.
pub fn sample_games_from_pool(
    pool: &[u32],
    num_games: usize,
    seed: u64,
) -> Result<Vec<u32>, ConfigError> {
    if pool.is_empty() {
        return Err(ConfigError::EmptyInningPool);
    }
    let scores = (0..num_games)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            (0..INNINGS_PER_GAME)
                .map(|_| pool[rng.random_range(0..pool.len())])
                .sum()
        })
        .collect();
    Ok(scores)
}

/// Summarize a run sequence: mean, std dev, min, max, median.
pub fn summarize(mut runs: Vec<u32>, elapsed: std::time::Duration) -> SimulationResult {
    let n = runs.len() as f64;
    let sum: f64 = runs.iter().map(|&r| r as f64).sum();
    let mean = sum / n;
    let variance: f64 = runs.iter().map(|&r| (r as f64 - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    let min = *runs.iter().min().unwrap_or(&0);
    let max = *runs.iter().max().unwrap_or(&0);

    runs.sort_unstable();
    let median = if runs.is_empty() { 0 } else { runs[runs.len() / 2] };

    SimulationResult {
        runs,
        mean,
        std_dev,
        min,
        max,
        median,
        elapsed,
    }
}
