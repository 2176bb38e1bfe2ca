//! Game clock: the year counter, its difficulty tiers and the game-over flag.

/// Year the game starts in.
pub const START_YEAR: u32 = 1957;

/// First year the ship may fire.
pub const WEAPON_YEAR: u32 = 2020;

// ── Difficulty tables ─────────────────────────────────────────────────────────

/// Ticks between garbage spawns, or `None` while space is still clean.
pub fn garbage_delay_tics(year: u32) -> Option<u32> {
    match year {
        0..=1960 => None,
        1961..=1968 => Some(20),
        1969..=1980 => Some(14),
        1981..=1994 => Some(10),
        1995..=2009 => Some(8),
        2010..=2019 => Some(6),
        _ => Some(2),
    }
}

/// Flavour caption for years worth a headline.
pub fn milestone(year: u32) -> Option<&'static str> {
    match year {
        1957 => Some("First Sputnik"),
        1961 => Some("Gagarin flew!"),
        1969 => Some("Armstrong got on the Moon!"),
        1971 => Some("First orbital space station Salyut-1"),
        1981 => Some("Flight of the Shuttle Columbia"),
        1998 => Some("ISS construction begins"),
        2011 => Some("Messenger reaches Mercury orbit"),
        2020 => Some("Take the plasma gun! Shoot the garbage!"),
        _ => None,
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameClock {
    year: u32,
    game_over: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(START_YEAR)
    }
}

impl GameClock {
    pub fn new(year: u32) -> Self {
        Self { year, game_over: false }
    }

    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn advance(&mut self) -> u32 {
        self.year += 1;
        self.year
    }

    pub fn garbage_delay(&self) -> Option<u32> {
        garbage_delay_tics(self.year)
    }

    pub fn weapon_unlocked(&self) -> bool {
        self.year >= WEAPON_YEAR
    }

    /// HUD text for the current year.
    pub fn caption(&self) -> String {
        match milestone(self.year) {
            Some(event) => format!("Year {} - {}", self.year, event),
            None => format!("Year {}", self.year),
        }
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Raise the game-over flag.  Returns `true` only for the call that
    /// actually flipped it.
    pub fn end(&mut self) -> bool {
        !std::mem::replace(&mut self.game_over, true)
    }
}
