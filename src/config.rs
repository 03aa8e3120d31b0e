//! Immutable event-table configuration with explicit weighted sampling.
//!
//! A table can be written as a symbol string in which repetition encodes
//! weight. Internally the weights are an explicit structure: a
//! cumulative-weight array searched by `partition_point`, which decouples
//! weight precision from string granularity while staying probabilistically
//! identical to a uniform draw over the repeated symbols.
//!
//! The strikeout probability is derived once at construction:
//! `p_k = (strike_weight / n)^3` with `n = pool_weight + strike_weight`,
//! modeling three consecutive strike draws before any other event.

use rand::Rng;

use crate::constants::{DEFAULT_EVENT_SYMBOLS, DEFAULT_STRIKE_WEIGHT};
use crate::errors::ConfigError;
use crate::events::{Event, ALL_EVENTS, EVENT_COUNT};

/// Validated, immutable plate-appearance event distribution.
#[derive(Debug, Clone)]
pub struct EventTable {
    /// Non-strikeout events with their pool weights.
    entries: Vec<(Event, u32)>,
    /// Running weight totals over `entries`, for binary-search draws.
    cumulative: Vec<u32>,
    /// Sum of all pool weights (29 for the default table).
    pool_weight: u32,
    strike_weight: u32,
    /// (strike_weight / n)^3, precomputed.
    p_strikeout: f64,
}

impl EventTable {
    /// Build a table from explicit `(event, weight)` pairs and a strike
    /// weight. Duplicate events are allowed and their weights accumulate;
    /// zero-weight entries are kept but never drawn.
    pub fn new(weights: &[(Event, u32)], strike_weight: u32) -> Result<Self, ConfigError> {
        if weights.is_empty() {
            return Err(ConfigError::EmptyEventTable);
        }
        if weights.iter().any(|&(e, _)| e == Event::Strikeout) {
            return Err(ConfigError::DerivedStrikeout);
        }

        let pool_weight: u32 = weights.iter().map(|&(_, w)| w).sum();
        if pool_weight == 0 {
            return Err(ConfigError::ZeroPoolWeight);
        }

        let entries: Vec<(Event, u32)> = weights.to_vec();
        let mut cumulative = Vec::with_capacity(entries.len());
        let mut total = 0u32;
        for &(_, w) in &entries {
            total += w;
            cumulative.push(total);
        }

        let n = (pool_weight + strike_weight) as f64;
        let p_strikeout = (strike_weight as f64 / n).powi(3);

        Ok(Self {
            entries,
            cumulative,
            pool_weight,
            strike_weight,
            p_strikeout,
        })
    }

    /// Build a table from the symbol-string encoding, where
    /// repetition encodes weight (e.g. `"ssdo"` = single 2, double 1,
    /// out-at-first 1).
    pub fn from_symbols(symbols: &str, strike_weight: u32) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyEventTable);
        }

        let mut counts = [0u32; EVENT_COUNT];
        for c in symbols.chars() {
            let event = Event::from_symbol(c).ok_or(ConfigError::UnknownEventSymbol(c))?;
            let idx = ALL_EVENTS.iter().position(|&e| e == event).unwrap();
            counts[idx] += 1;
        }

        let weights: Vec<(Event, u32)> = ALL_EVENTS
            .iter()
            .zip(counts.iter())
            .filter(|&(_, &w)| w > 0)
            .map(|(&e, &w)| (e, w))
            .collect();

        Self::new(&weights, strike_weight)
    }

    /// Sum of pool weights plus the strike weight: the full sample space.
    pub fn total_weight(&self) -> u32 {
        self.pool_weight + self.strike_weight
    }

    pub fn pool_weight(&self) -> u32 {
        self.pool_weight
    }

    pub fn strike_weight(&self) -> u32 {
        self.strike_weight
    }

    /// Derived strikeout probability, `(strike_weight / n)^3`.
    pub fn p_strikeout(&self) -> f64 {
        self.p_strikeout
    }

    /// Weighted events as configured (strikeout excluded).
    pub fn weights(&self) -> &[(Event, u32)] {
        &self.entries
    }

    /// Marginal probability of drawing `event` on one plate appearance.
    /// All events (including strikeout) sum to exactly 1.
    pub fn probability_of(&self, event: Event) -> f64 {
        if event == Event::Strikeout {
            return self.p_strikeout;
        }
        let weight: u32 = self
            .entries
            .iter()
            .filter(|&&(e, _)| e == event)
            .map(|&(_, w)| w)
            .sum();
        weight as f64 / self.pool_weight as f64 * (1.0 - self.p_strikeout)
    }

    /// Draw one plate-appearance event.
    ///
    /// Strikeout with probability `p_strikeout`; otherwise a uniform draw
    /// over the weighted pool via binary search on the cumulative array —
    /// equivalent to uniform selection from the repeated-symbol multiset.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Event {
        if rng.random::<f64>() < self.p_strikeout {
            return Event::Strikeout;
        }
        let t = rng.random_range(0..self.pool_weight);
        let idx = self.cumulative.partition_point(|&c| c <= t);
        self.entries[idx].0
    }
}

impl Default for EventTable {
    /// The default table: 29-symbol pool, strike weight 7, n = 36.
    fn default() -> Self {
        Self::from_symbols(DEFAULT_EVENT_SYMBOLS, DEFAULT_STRIKE_WEIGHT)
            .expect("default event table is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_table_shape() {
        let table = EventTable::default();
        assert_eq!(table.pool_weight(), 29);
        assert_eq!(table.strike_weight(), 7);
        assert_eq!(table.total_weight(), 36);

        let expected = (7.0f64 / 36.0).powi(3);
        assert!((table.p_strikeout() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_default_table_multiplicities() {
        let table = EventTable::default();
        let weight_of = |e: Event| {
            table
                .weights()
                .iter()
                .find(|&&(ev, _)| ev == e)
                .map(|&(_, w)| w)
                .unwrap_or(0)
        };
        assert_eq!(weight_of(Event::Single), 7);
        assert_eq!(weight_of(Event::OutAtFirst), 7);
        assert_eq!(weight_of(Event::FlyOut), 4);
        assert_eq!(weight_of(Event::Error), 2);
        assert_eq!(weight_of(Event::Walk), 2);
        assert_eq!(weight_of(Event::HomeRun), 1);
        assert_eq!(weight_of(Event::Strikeout), 0);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let table = EventTable::default();
        let sum: f64 = ALL_EVENTS.iter().map(|&e| table.probability_of(e)).sum();
        assert!((sum - 1.0).abs() < 1e-12, "sum={sum}");
    }

    #[test]
    fn test_zero_strike_weight() {
        let table = EventTable::new(&[(Event::Single, 1)], 0).unwrap();
        assert_eq!(table.p_strikeout(), 0.0);
        assert!((table.probability_of(Event::Single) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            EventTable::new(&[], 7).unwrap_err(),
            ConfigError::EmptyEventTable
        );
        assert_eq!(
            EventTable::new(&[(Event::Single, 0)], 7).unwrap_err(),
            ConfigError::ZeroPoolWeight
        );
        assert_eq!(
            EventTable::new(&[(Event::Strikeout, 3)], 7).unwrap_err(),
            ConfigError::DerivedStrikeout
        );
        assert_eq!(
            EventTable::from_symbols("ssx", 7).unwrap_err(),
            ConfigError::UnknownEventSymbol('x')
        );
        assert_eq!(
            EventTable::from_symbols("", 7).unwrap_err(),
            ConfigError::EmptyEventTable
        );
    }

    #[test]
    fn test_draw_deterministic() {
        let table = EventTable::default();
        let mut rng1 = SmallRng::seed_from_u64(42);
        let mut rng2 = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            assert_eq!(table.draw(&mut rng1), table.draw(&mut rng2));
        }
    }

    #[test]
    fn test_draw_skips_zero_weight_entries() {
        let table = EventTable::new(
            &[(Event::Single, 5), (Event::Double, 0), (Event::Walk, 5)],
            0,
        )
        .unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..10_000 {
            assert_ne!(table.draw(&mut rng), Event::Double);
        }
    }

    #[test]
    fn test_draw_distribution() {
        let table = EventTable::default();
        let mut rng = SmallRng::seed_from_u64(42);
        let n = 200_000usize;

        let mut counts = [0u64; ALL_EVENTS.len()];
        for _ in 0..n {
            let event = table.draw(&mut rng);
            let idx = ALL_EVENTS.iter().position(|&e| e == event).unwrap();
            counts[idx] += 1;
        }

        for (idx, &event) in ALL_EVENTS.iter().enumerate() {
            let expected = table.probability_of(event) * n as f64;
            let observed = counts[idx] as f64;
            assert!(
                (observed - expected).abs() < expected * 0.10 + 30.0,
                "{}: observed {observed}, expected ~{expected:.0}",
                event.name()
            );
        }
    }
}
