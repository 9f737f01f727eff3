//! Fixed-period tick source

use super::Timed;
use crate::consts::TICK_PERIOD;
use crate::sim::Event;

/// Emits `Tick` events with monotonically increasing elapsed time
#[derive(Debug, Clone)]
pub struct Clock {
    period: u64,
    elapsed: u64,
}

impl Clock {
    /// A zero period is bumped to one so time always advances
    pub fn new(period: u64) -> Self {
        Self {
            period: period.max(1),
            elapsed: 0,
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Iterator for Clock {
    type Item = Timed<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        self.elapsed = self.elapsed.checked_add(self.period)?;
        Some(Timed::new(
            self.elapsed,
            Event::Tick {
                elapsed: self.elapsed,
            },
        ))
    }
}
