//! State transition function
//!
//! `reduce` folds exactly one [`Event`] into a state and returns the next
//! state. The event set is closed, so the match below is exhaustive and the
//! function is total: no input combination panics or fails.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Body;
use super::kinematics::{advance, advance_unwrapped};
use super::rules::{apply_rules, spawn_bonus_goal};
use super::state::GameState;
use crate::consts::*;

/// Grid directions for a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in screen coordinates (y grows downward)
    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
        }
    }
}

/// Everything that can happen to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// One clock period elapsed; `elapsed` is the total time so far
    Tick { elapsed: u64 },
    /// Snap one grid step
    Move(Direction),
    /// Leap toward the goals
    Jump,
    /// Throw the game away and start over, keeping the high score
    Restart,
}

/// Produce the state that follows `state` after `event`
pub fn reduce(state: &GameState, event: Event) -> GameState {
    // Departures are reported once, by the transition that caused them
    let state = GameState {
        departed: Vec::new(),
        ..state.clone()
    };

    match event {
        Event::Move(direction) => step_agent(state, direction),
        Event::Jump => jump_agent(state),
        Event::Restart => restart(state),
        Event::Tick { elapsed } => tick(state, elapsed),
    }
}

/// Step one coordinate by `delta`, clamped to the reachable range.
///
/// An agent that drifted past the limit it is heading toward stays put: a move
/// never carries it back the opposite way.
fn step_axis(coordinate: f32, delta: f32) -> f32 {
    let past_limit = if delta > 0.0 {
        coordinate >= AGENT_MAX
    } else {
        coordinate <= AGENT_MIN
    };
    if past_limit {
        coordinate
    } else {
        (coordinate + delta).clamp(AGENT_MIN, AGENT_MAX)
    }
}

/// Move one grid step on the moved axis
fn step_agent(mut state: GameState, direction: Direction) -> GameState {
    if state.is_over {
        return state;
    }
    let delta = direction.offset() * GRID_STEP;
    let position = &mut state.agent.position;
    match direction {
        Direction::Left | Direction::Right => position.x = step_axis(position.x, delta.x),
        Direction::Up | Direction::Down => position.y = step_axis(position.y, delta.y),
    }
    state
}

/// Leap up; collisions are only judged on the next tick
fn jump_agent(mut state: GameState) -> GameState {
    if state.is_over {
        return state;
    }
    state.agent.position.y = step_axis(state.agent.position.y, -JUMP_STEP);
    state
}

/// Fresh game; a bonus goal still on the field is reported as departed
fn restart(state: GameState) -> GameState {
    let high_score = state.best_score();
    log::info!("Restart (score {}, high score {})", state.score, high_score);
    GameState {
        departed: state.bonus_goals,
        ..GameState::initial(high_score)
    }
}

fn advance_all(bodies: &[Body]) -> Vec<Body> {
    bodies.iter().map(advance).collect()
}

/// One simulation step
fn tick(state: GameState, elapsed: u64) -> GameState {
    // Frozen: nothing moves, the rules only confirm the loss
    if state.is_over {
        return apply_rules(state);
    }

    let agent = advance_unwrapped(&state.agent);
    let hazards = advance_all(&state.hazards);
    let platforms = advance_all(&state.platforms);
    let safe_fliers = advance_all(&state.safe_fliers);
    let hostile_fliers = if state.fliers_active() {
        advance_all(&state.hostile_fliers)
    } else {
        state.hostile_fliers.clone()
    };

    let advanced = GameState {
        time: elapsed,
        agent,
        hazards,
        platforms,
        safe_fliers,
        hostile_fliers,
        ..state
    };

    apply_rules(spawn_bonus_goal(advanced))
}
