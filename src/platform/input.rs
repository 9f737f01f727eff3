//! Keyboard mapping and a scripted key-press source
//!
//! Only key-press transitions matter; each recognized key maps to exactly one
//! event and everything else is dropped.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::Timed;
use crate::sim::{Direction, Event};

/// A physical key, as reported by whatever captures the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Escape,
    Char(char),
}

/// Which key triggers which event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
    pub left: Key,
    pub right: Key,
    pub jump: Key,
    pub restart: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: Key::ArrowUp,
            down: Key::ArrowDown,
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
            jump: Key::Space,
            restart: Key::Enter,
        }
    }
}

impl KeyBindings {
    /// Event for a key press, or `None` for an unbound key
    pub fn event_for(&self, key: Key) -> Option<Event> {
        // Movement wins if a key is bound twice
        if key == self.up {
            Some(Event::Move(Direction::Up))
        } else if key == self.down {
            Some(Event::Move(Direction::Down))
        } else if key == self.left {
            Some(Event::Move(Direction::Left))
        } else if key == self.right {
            Some(Event::Move(Direction::Right))
        } else if key == self.jump {
            Some(Event::Jump)
        } else if key == self.restart {
            Some(Event::Restart)
        } else {
            None
        }
    }

    /// Timed variant of [`Self::event_for`]
    pub fn timed_event(&self, press: Timed<Key>) -> Option<Timed<Event>> {
        let event = self.event_for(press.value)?;
        Some(press.map(|_| event))
    }
}

/// Keys the demo player presses, weighted toward forward progress
const DEMO_KEYS: [Key; 10] = [
    Key::ArrowUp,
    Key::ArrowUp,
    Key::ArrowUp,
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::ArrowDown,
    Key::Space,
    Key::Enter,
    Key::Escape,
    Key::Char('q'),
];

/// Seeded stand-in for a human at the keyboard
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    rng: Pcg32,
    min_gap: u64,
    max_gap: u64,
}

impl ScriptedInput {
    pub fn new(seed: u64) -> Self {
        Self::with_gaps(seed, 40, 400)
    }

    /// Press intervals are drawn uniformly from `min_gap..=max_gap` (at least 1)
    pub fn with_gaps(seed: u64, min_gap: u64, max_gap: u64) -> Self {
        let min_gap = min_gap.max(1);
        Self {
            rng: Pcg32::seed_from_u64(seed),
            min_gap,
            max_gap: max_gap.max(min_gap),
        }
    }

    /// All key presses that arrive up to and including `horizon`, in order
    pub fn presses_until(&mut self, horizon: u64) -> Vec<Timed<Key>> {
        let mut presses = Vec::new();
        let mut at = 0u64;
        loop {
            let gap = self.rng.random_range(self.min_gap..=self.max_gap);
            match at.checked_add(gap) {
                Some(next) if next <= horizon => at = next,
                _ => break,
            }
            let key = DEMO_KEYS[self.rng.random_range(0..DEMO_KEYS.len())];
            presses.push(Timed::new(at, key));
        }
        presses
    }
}
