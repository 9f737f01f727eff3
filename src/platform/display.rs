//! Render sinks
//!
//! A sink receives every produced state, in order. Sinks never feed anything
//! back into the core; a failing sink logs and carries on.

use std::collections::BTreeMap;
use std::io::Write;

use crate::sim::{Body, GameState, ViewKind};

/// Consumer of produced states
pub trait RenderSink {
    /// Called once per produced state, in production order
    fn present(&mut self, state: &GameState);
}

/// Keeps every state (replays and tests)
impl RenderSink for Vec<GameState> {
    fn present(&mut self, state: &GameState) {
        self.push(state.clone());
    }
}

/// What happened to a display handle in one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Updated,
    Removed,
}

/// Maps entity ids to live display handles.
///
/// Pure bookkeeping: a real renderer creates, moves and destroys its visual
/// elements by following the changes returned from [`DisplayRegistry::sync`].
#[derive(Debug, Default)]
pub struct DisplayRegistry {
    handles: BTreeMap<String, ViewKind>,
}

impl DisplayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.handles.contains_key(id)
    }

    /// Drop a handle. Removing an unknown id is tolerated and only logged.
    pub fn remove(&mut self, id: &str) -> bool {
        if self.handles.remove(id).is_some() {
            true
        } else {
            log::warn!("Display handle {id} already removed, ignoring");
            false
        }
    }

    /// Bring the registry in line with `state`; removals come first
    pub fn sync(&mut self, state: &GameState) -> Vec<(String, Lifecycle)> {
        let mut changes = Vec::new();

        for body in &state.departed {
            if self.remove(&body.id) {
                changes.push((body.id.clone(), Lifecycle::Removed));
            }
        }

        for body in live_bodies(state) {
            let change = match self.handles.insert(body.id.clone(), body.view_kind) {
                Some(_) => Lifecycle::Updated,
                None => Lifecycle::Created,
            };
            changes.push((body.id.clone(), change));
        }
        changes
    }
}

/// Every body a renderer should be showing, in a stable order
fn live_bodies(state: &GameState) -> impl Iterator<Item = &Body> {
    std::iter::once(&state.agent)
        .chain(&state.hazards)
        .chain(&state.platforms)
        .chain(&state.safe_fliers)
        .chain(&state.hostile_fliers)
        .chain(&state.goals)
        .chain(&state.bonus_goals)
}

/// Reports milestones through `log`, per-frame detail at trace level
#[derive(Debug, Default)]
pub struct LogSink {
    registry: DisplayRegistry,
    frames: u64,
    last_score: u64,
    was_over: bool,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn registry(&self) -> &DisplayRegistry {
        &self.registry
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, state: &GameState) {
        self.frames += 1;
        let changes = self.registry.sync(state);
        log::trace!(
            "frame {} t={} agent=({:.1}, {:.1}) changes={}",
            self.frames,
            state.time,
            state.agent.position.x,
            state.agent.position.y,
            changes.len()
        );

        if state.score != self.last_score {
            log::info!(
                "Score {} (high {}), {} goals left",
                state.score,
                state.high_score,
                state.goals.len()
            );
            self.last_score = state.score;
        }
        if state.is_over != self.was_over {
            if state.is_over {
                log::info!("GAME OVER - press restart");
            }
            self.was_over = state.is_over;
        }
    }
}

/// Writes each state as one JSON line
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn present(&mut self, state: &GameState) {
        let written = serde_json::to_writer(&mut self.out, state)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = written {
            log::warn!("Dropped frame at t={}: {}", state.time, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Event, reduce};

    #[test]
    fn test_registry_creates_then_updates() {
        let mut registry = DisplayRegistry::new();
        let state = GameState::default();

        let first = registry.sync(&state);
        assert!(first.iter().all(|(_, c)| *c == Lifecycle::Created));
        assert!(registry.contains("agent"));
        let count = registry.len();

        let next = reduce(&state, Event::Tick { elapsed: 10 });
        let second = registry.sync(&next);
        assert!(second.iter().all(|(_, c)| *c == Lifecycle::Updated));
        assert_eq!(registry.len(), count);
    }

    #[test]
    fn test_registry_removes_departed() {
        let mut registry = DisplayRegistry::new();
        let mut state = GameState::default();
        let _ = registry.sync(&state);

        state.agent.position = state.goals[0].position;
        let goal_id = state.goals[0].id.clone();
        let picked = reduce(&state, Event::Tick { elapsed: 10 });
        let changes = registry.sync(&picked);
        assert_eq!(changes[0], (goal_id.clone(), Lifecycle::Removed));
        assert!(!registry.contains(&goal_id));
    }

    #[test]
    fn test_registry_tolerates_double_removal() {
        let mut registry = DisplayRegistry::new();
        let _ = registry.sync(&GameState::default());
        assert!(registry.remove("goal0"));
        assert!(!registry.remove("goal0"));
        assert!(!registry.remove("never-existed"));
    }

    #[test]
    fn test_json_lines_sink() {
        let mut sink = JsonLinesSink::new(Vec::new());
        let state = GameState::default();
        sink.present(&state);
        sink.present(&reduce(&state, Event::Jump));

        let out = String::from_utf8(sink.into_inner()).expect("utf8");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let back: GameState = serde_json::from_str(lines[0]).expect("valid json");
        assert_eq!(back, state);
    }

    #[test]
    fn test_log_sink_counts_frames() {
        let mut sink = LogSink::new();
        let state = GameState::default();
        sink.present(&state);
        sink.present(&state);
        assert_eq!(sink.frames(), 2);
        assert!(!sink.registry().is_empty());
    }
}
