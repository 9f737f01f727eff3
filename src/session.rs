//! The fold loop
//!
//! A `Session` owns the one running [`GameState`]. Each event is folded
//! through [`reduce`] and the result is handed to the render sink before the
//! next event is looked at. Nothing else holds the state mutably.

use crate::platform::RenderSink;
use crate::sim::{Event, GameState, reduce};

/// Owns the running state and the sink that displays it
pub struct Session<S: RenderSink> {
    state: GameState,
    sink: S,
    events: u64,
}

impl<S: RenderSink> Session<S> {
    /// Start from the initial state; the sink sees it immediately
    pub fn new(sink: S) -> Self {
        Self::with_state(GameState::default(), sink)
    }

    /// Resume from an existing state
    pub fn with_state(state: GameState, mut sink: S) -> Self {
        sink.present(&state);
        Self {
            state,
            sink,
            events: 0,
        }
    }

    /// Fold one event and present the result
    pub fn dispatch(&mut self, event: Event) -> &GameState {
        self.state = reduce(&self.state, event);
        self.events += 1;
        self.sink.present(&self.state);
        &self.state
    }

    /// Fold a whole ordered stream
    pub fn run(&mut self, events: impl IntoIterator<Item = Event>) -> &GameState {
        for event in events {
            self.dispatch(event);
        }
        log::debug!("Session processed {} events", self.events);
        &self.state
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of events folded so far
    pub fn events(&self) -> u64 {
        self.events
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Clock, Key, KeyBindings, Timed, merge_by_arrival};
    use crate::sim::Direction;

    #[test]
    fn test_sink_sees_every_state() {
        let mut session = Session::new(Vec::new());
        let events = [
            Event::Tick { elapsed: 10 },
            Event::Move(Direction::Up),
            Event::Tick { elapsed: 20 },
        ];
        let _ = session.run(events);
        assert_eq!(session.events(), 3);

        let frames = session.into_sink();
        // Initial state plus one per event
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], GameState::default());
        assert_eq!(frames[2].agent.position.y, frames[1].agent.position.y - 50.0);
    }

    #[test]
    fn test_session_matches_plain_fold() {
        let events: Vec<_> = Clock::default().take(50).map(|t| t.value).collect();
        let mut session = Session::new(Vec::new());
        let folded = events
            .iter()
            .fold(GameState::default(), |state, &event| reduce(&state, event));
        assert_eq!(session.run(events.clone()), &folded);
    }

    #[test]
    fn test_high_score_survives_restart() {
        // Stand on the first goal and let a tick collect it
        let mut state = GameState::default();
        state.agent.position = state.goals[0].position;
        let mut session = Session::with_state(state, Vec::new());
        let _ = session.dispatch(Event::Tick { elapsed: 10 });
        assert_eq!(session.state().score, 100);

        let state = session.dispatch(Event::Restart);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 100);
    }

    #[test]
    fn test_keyboard_stream_end_to_end() {
        let bindings = KeyBindings::default();
        let presses = vec![
            Timed::new(15, Key::ArrowUp),
            Timed::new(25, Key::Char('z')),
            Timed::new(35, Key::Space),
        ];
        let inputs = presses.into_iter().filter_map(|p| bindings.timed_event(p));
        let events = merge_by_arrival(Clock::default().take(4), inputs).map(|t| t.value);

        let mut session = Session::new(Vec::new());
        let _ = session.run(events);
        // Four ticks, one move and one jump; the unbound key never arrives
        assert_eq!(session.events(), 6);
    }
}
