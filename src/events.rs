//! Plate-appearance event vocabulary.
//!
//! Every plate appearance resolves to exactly one [`Event`]. All events
//! except [`Event::Strikeout`] carry an integer weight in the event pool;
//! the strikeout probability is derived analytically from the strike
//! weight (three consecutive strike draws) and is never pooled.

/// Outcome of one plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Three strikes drawn before any other event. Derived, never pooled.
    Strikeout,
    FoulOut,
    OutAtFirst,
    FlyOut,
    DoublePlay,
    Single,
    Double,
    Triple,
    HomeRun,
    /// Fielding error: batter reaches first, runners advance one base.
    Error,
    /// Base on balls: batter reaches first, forced runners advance.
    Walk,
}

/// Number of distinct events.
pub const EVENT_COUNT: usize = 11;

/// All events in declaration order (strikeout first, as the derived event).
pub const ALL_EVENTS: [Event; EVENT_COUNT] = [
    Event::Strikeout,
    Event::FoulOut,
    Event::OutAtFirst,
    Event::FlyOut,
    Event::DoublePlay,
    Event::Single,
    Event::Double,
    Event::Triple,
    Event::HomeRun,
    Event::Error,
    Event::Walk,
];

impl Event {
    /// True for events that record at least one out.
    pub fn is_out(self) -> bool {
        matches!(
            self,
            Event::Strikeout
                | Event::FoulOut
                | Event::OutAtFirst
                | Event::FlyOut
                | Event::DoublePlay
        )
    }

    /// Human-readable name, used in config echoes and statistics output.
    pub fn name(self) -> &'static str {
        match self {
            Event::Strikeout => "strikeout",
            Event::FoulOut => "foul out",
            Event::OutAtFirst => "out at first",
            Event::FlyOut => "fly out",
            Event::DoublePlay => "double play",
            Event::Single => "single",
            Event::Double => "double",
            Event::Triple => "triple",
            Event::HomeRun => "home run",
            Event::Error => "error",
            Event::Walk => "walk",
        }
    }

    /// Parse one pool symbol from the string encoding.
    ///
    /// Strikeout has no symbol: its probability is derived from the strike
    /// weight, so it never appears in the pool.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            's' => Some(Event::Single),
            'd' => Some(Event::Double),
            't' => Some(Event::Triple),
            'h' => Some(Event::HomeRun),
            'e' => Some(Event::Error),
            'w' => Some(Event::Walk),
            'o' => Some(Event::OutAtFirst),
            'f' => Some(Event::FlyOut),
            'u' => Some(Event::FoulOut),
            'p' => Some(Event::DoublePlay),
            _ => None,
        }
    }

    /// Pool symbol for this event, `None` for strikeout.
    pub fn symbol(self) -> Option<char> {
        match self {
            Event::Strikeout => None,
            Event::FoulOut => Some('u'),
            Event::OutAtFirst => Some('o'),
            Event::FlyOut => Some('f'),
            Event::DoublePlay => Some('p'),
            Event::Single => Some('s'),
            Event::Double => Some('d'),
            Event::Triple => Some('t'),
            Event::HomeRun => Some('h'),
            Event::Error => Some('e'),
            Event::Walk => Some('w'),
        }
    }
}
