//! # Diceball — Dice-Driven Baseball Run Distribution Simulator
//!
//! Estimates the distribution of runs scored per nine-inning baseball game
//! by Monte Carlo simulation of half-innings. Each plate appearance draws
//! one weighted event (single, walk, fly out, ...) from an immutable
//! [`config::EventTable`]; a compact state machine over
//! (outs, runs, runners) applies the baseball advancement rules until
//! three outs accrue.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Event model | [`config`], [`events`] | Validated weighted event table, derived strikeout probability, `draw()` |
//! | Inning rules | [`game_mechanics`] | Per-event transitions: advancement, forced walks, outs, scoring |
//! | Simulation | [`simulation::engine`] | Inning/game loops, seeded parallel batches, pool resampling |
//! | Reporting | [`simulation::statistics`], [`simulation::raw_storage`] | Distributions, JSON output, binary run files |
//!
//! ## Event model
//!
//! The default weights come from a 29-symbol pool in which repetition
//! encodes weight. With strike weight `k` and sample space `n = 29 + k`,
//! the strikeout probability is `(k/n)^3` — three consecutive strike
//! draws before any other event. All remaining probability mass is split
//! over the pool proportionally to weight.
//!
//! ## Runner positions
//!
//! A runner's position is the number of bases already taken: 1 = first,
//! 2 = second, 3 = third, >= 4 = reached home. The batter joins at 0 and
//! advances with the hit. Home-reaching runners are converted to runs only
//! while the inning is live, so a runner pushed across home by the third
//! out never scores.

pub mod config;
pub mod constants;
pub mod env_config;
pub mod errors;
pub mod events;
pub mod game_mechanics;
pub mod simulation;
