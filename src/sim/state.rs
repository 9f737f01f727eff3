//! Game state
//!
//! A `GameState` is a value: the reducer never mutates the one it was given,
//! it returns the next one. Everything a renderer needs is in here.

use serde::{Deserialize, Serialize};

use super::entity::{
    Body, GroundZone, create_agent, create_goals, create_hostile_fliers, create_platforms,
    create_river, create_safe_fliers, create_vehicles,
};

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Elapsed time stamped by the most recent tick
    pub time: u64,
    pub agent: Body,
    /// Road vehicles
    pub hazards: Vec<Body>,
    /// River logs
    pub platforms: Vec<Body>,
    /// Geese the agent can ride (carried backward)
    pub safe_fliers: Vec<Body>,
    /// Dormant until every goal is taken
    pub hostile_fliers: Vec<Body>,
    pub hazard_zone: GroundZone,
    /// Only ever shrinks, until a restart
    pub goals: Vec<Body>,
    /// At most one, and only once `goals` is empty
    pub bonus_goals: Vec<Body>,
    /// Entities the renderer must stop displaying after this transition
    pub departed: Vec<Body>,
    /// Number of bonus goals spawned so far
    pub object_counter: u64,
    pub is_over: bool,
    pub score: u64,
    /// Best score of the session; survives restarts
    pub high_score: u64,
}

impl GameState {
    /// Fresh game with a carried-over session high score
    pub fn initial(high_score: u64) -> Self {
        Self {
            time: 0,
            agent: create_agent(),
            hazards: create_vehicles(),
            platforms: create_platforms(),
            safe_fliers: create_safe_fliers(),
            hostile_fliers: create_hostile_fliers(),
            hazard_zone: create_river(),
            goals: create_goals(),
            bonus_goals: Vec::new(),
            departed: Vec::new(),
            object_counter: 0,
            is_over: false,
            score: 0,
            high_score,
        }
    }

    /// Hostile fliers move only after the goal row is cleared
    #[inline]
    pub fn fliers_active(&self) -> bool {
        self.goals.is_empty()
    }

    /// Best score seen so far, including the running game
    #[inline]
    pub fn best_score(&self) -> u64 {
        self.score.max(self.high_score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::default();
        assert!(!state.is_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 0);
        assert!(!state.goals.is_empty());
        assert!(state.bonus_goals.is_empty());
        assert!(state.departed.is_empty());
        assert!(!state.fliers_active());
    }

    #[test]
    fn test_best_score() {
        let mut state = GameState::initial(300);
        assert_eq!(state.best_score(), 300);
        state.score = 700;
        assert_eq!(state.best_score(), 700);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::initial(42);
        let json = serde_json::to_string(&state).expect("serialize");
        let back: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
    }
}
