//! Simulation constants and binary format identifiers.

/// Innings summed into one simulated game score.
pub const INNINGS_PER_GAME: usize = 9;

/// Defensive cap on plate appearances in a single inning.
///
/// A valid table terminates almost surely (every out event strictly
/// increases `outs`), but a table with no out-producing weight would loop
/// forever. Exceeding the cap is reported as
/// [`SimulationError::NonTermination`](crate::errors::SimulationError).
pub const MAX_EVENTS_PER_INNING: usize = 500;

/// Default strike weight. Three consecutive strike draws make a strikeout,
/// so P(strikeout) = (7/36)^3 with the default 29-symbol pool.
pub const DEFAULT_STRIKE_WEIGHT: u32 = 7;

/// Default 29-symbol event pool: repetition encodes weight.
///
/// s=single d=double t=triple h=home run e=error w=walk
/// o=out at first f=fly out u=foul out p=double play
pub const DEFAULT_EVENT_SYMBOLS: &str = "sssssssddtheewwoooooooffffuup";

/// Runs file magic number: "DBRN" in little-endian.
pub const RUNS_FILE_MAGIC: u32 = 0x4E524244;

/// Runs file format version.
pub const RUNS_FILE_VERSION: u32 = 1;
