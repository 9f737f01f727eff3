//! Platform layer around the pure core
//!
//! Handles everything the simulation must not know about:
//! - Time/ticks (`clock`)
//! - Input events (`input`)
//! - Presenting produced states (`display`)
//!
//! Both event sources yield [`Timed`] values so they can be interleaved into
//! one ordered stream by [`merge_by_arrival`].

pub mod clock;
pub mod display;
pub mod input;

use std::iter::Peekable;

use serde::{Deserialize, Serialize};

use crate::sim::Event;

pub use clock::Clock;
pub use display::{DisplayRegistry, JsonLinesSink, Lifecycle, LogSink, RenderSink};
pub use input::{Key, KeyBindings, ScriptedInput};

/// A value stamped with its arrival time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timed<T> {
    pub at: u64,
    pub value: T,
}

impl<T> Timed<T> {
    pub fn new(at: u64, value: T) -> Self {
        Self { at, value }
    }

    /// Replace the payload, keeping the arrival time
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            at: self.at,
            value: f(self.value),
        }
    }
}

/// Interleaves clock ticks and input events by arrival time.
///
/// Each source must already be ordered. On equal arrival times the input
/// event comes first, so a key pressed "at" a tick is judged by that tick.
pub struct MergeByArrival<A: Iterator, B: Iterator> {
    ticks: Peekable<A>,
    inputs: Peekable<B>,
}

impl<A, B> Iterator for MergeByArrival<A, B>
where
    A: Iterator<Item = Timed<Event>>,
    B: Iterator<Item = Timed<Event>>,
{
    type Item = Timed<Event>;

    fn next(&mut self) -> Option<Self::Item> {
        let take_input = match (self.ticks.peek(), self.inputs.peek()) {
            (Some(tick), Some(input)) => input.at <= tick.at,
            (Some(_), None) => false,
            (None, _) => true,
        };
        if take_input {
            self.inputs.next()
        } else {
            self.ticks.next()
        }
    }
}

/// Merge two ordered event sources into one ordered stream
pub fn merge_by_arrival<A, B>(ticks: A, inputs: B) -> MergeByArrival<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = Timed<Event>>,
    B: IntoIterator<Item = Timed<Event>>,
{
    MergeByArrival {
        ticks: ticks.into_iter().peekable(),
        inputs: inputs.into_iter().peekable(),
    }
}
