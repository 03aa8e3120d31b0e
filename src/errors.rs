//! Error taxonomy: configuration, simulation, and storage errors.
//!
//! Configuration errors are fatal and surface before any simulation runs.
//! Simulation errors abort the affected batch. No error is retried; this
//! is pure computation with no external I/O on the hot path.

use thiserror::Error;

/// Invalid event-table configuration, rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("event table has no events")]
    EmptyEventTable,

    #[error("event pool weight is zero")]
    ZeroPoolWeight,

    #[error("strikeout probability is derived from the strike weight, not pooled")]
    DerivedStrikeout,

    #[error("unknown event symbol '{0}'")]
    UnknownEventSymbol(char),

    #[error("inning pool is empty")]
    EmptyInningPool,
}

/// A simulation trial failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// The defensive per-inning event cap was exceeded. Signals a table
    /// with no (or vanishing) out-producing weight.
    #[error("inning exceeded {events} plate appearances without three outs")]
    NonTermination { events: usize },
}

/// Runs-file read/write failure.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("bad magic {found:#010x}, expected {expected:#010x}")]
    BadMagic { found: u32, expected: u32 },

    #[error("unsupported runs file version {0}")]
    BadVersion(u32),

    #[error("truncated runs file: {len} bytes, expected {expected}")]
    Truncated { len: usize, expected: usize },
}
