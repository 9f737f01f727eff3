//! Collision and rule engine
//!
//! Runs after the bodies have been advanced for a tick. Each rule is a small
//! pure helper so it can be tested alone; [`apply_rules`] composes them:
//!
//! 1. lethal collisions (vehicles, hostile fliers)
//! 2. rides (platforms, safe fliers)
//! 3. field edge
//! 4. river band, survivable only while riding
//! 5. loss
//! 6. goal / bonus pickup
//! 7. agent velocity (ride drift) or reset after a pickup
//!
//! Bonus spawning and flier release happen before the rules run, in
//! [`spawn_bonus_goal`].

use glam::Vec2;

use super::collision::{
    collides_with_any, find_ridden, find_ridden_index, in_zone_band, out_of_bounds,
};
use super::entity::{Body, agent_start, create_bonus_goal};
use super::state::GameState;
use crate::consts::{BONUS_POINTS, GOAL_POINTS};

/// What the agent is standing on this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ride {
    /// A log; carries the agent forward with its velocity
    Platform(Vec2),
    /// A goose; carries the agent backward
    SafeFlier(Vec2),
}

/// A goal reached this tick (index into the owning collection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pickup {
    Goal(usize),
    Bonus(usize),
}

/// Result of the predicate rules for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub collided: bool,
    pub ride: Option<Ride>,
    pub out_of_bounds: bool,
    pub in_hazard_band: bool,
}

impl Verdict {
    /// Loss condition: collision, field edge, or the river without a ride
    pub fn lost(&self) -> bool {
        self.collided || self.out_of_bounds || (self.in_hazard_band && self.ride.is_none())
    }
}

/// Evaluate the lethal and supportive predicates against the agent
pub fn judge(state: &GameState) -> Verdict {
    let agent = &state.agent;
    Verdict {
        collided: collides_with_any(agent, &state.hazards)
            || collides_with_any(agent, &state.hostile_fliers),
        ride: resolve_ride(agent, &state.platforms, &state.safe_fliers),
        out_of_bounds: out_of_bounds(agent),
        in_hazard_band: in_zone_band(agent, &state.hazard_zone),
    }
}

/// Platforms take precedence over safe fliers
pub fn resolve_ride(agent: &Body, platforms: &[Body], safe_fliers: &[Body]) -> Option<Ride> {
    find_ridden(agent, platforms)
        .map(|platform| Ride::Platform(platform.velocity))
        .or_else(|| find_ridden(agent, safe_fliers).map(|goose| Ride::SafeFlier(goose.velocity)))
}

/// Velocity the agent takes on from what it rides
pub fn ride_velocity(ride: Option<Ride>) -> Vec2 {
    match ride {
        Some(Ride::Platform(velocity)) => velocity,
        Some(Ride::SafeFlier(velocity)) => -velocity,
        None => Vec2::ZERO,
    }
}

/// Regular goals first; the bonus only counts when no regular goal was reached
pub fn resolve_pickup(state: &GameState) -> Option<Pickup> {
    find_ridden_index(&state.agent, &state.goals)
        .map(Pickup::Goal)
        .or_else(|| find_ridden_index(&state.agent, &state.bonus_goals).map(Pickup::Bonus))
}

/// Move the picked-up goal to `departed`, score it, and send the agent home
fn collect(mut state: GameState, pickup: Pickup) -> GameState {
    let (taken, points) = match pickup {
        Pickup::Goal(index) => (state.goals.remove(index), GOAL_POINTS),
        Pickup::Bonus(index) => (state.bonus_goals.remove(index), BONUS_POINTS),
    };
    log::debug!("Picked up {} (+{} points)", taken.id, points);

    state.score += points;
    state.departed.push(taken);
    state.agent.position = agent_start();
    state.agent.velocity = Vec2::ZERO;

    if matches!(pickup, Pickup::Goal(_)) && state.goals.is_empty() {
        log::info!("All goals taken at t={}, releasing fliers", state.time);
    }
    state
}

/// Apply the tick rules to a state whose bodies were already advanced.
///
/// Re-entrant on a finished game: predicates are recomputed but the loss
/// stays set, and no pickup or drift happens once the game is over.
pub fn apply_rules(state: GameState) -> GameState {
    let verdict = judge(&state);
    let lost = verdict.lost();

    if state.is_over || lost {
        if !state.is_over {
            log::info!(
                "Game over at t={} (score {}, collided={}, out_of_bounds={}, drowned={})",
                state.time,
                state.score,
                verdict.collided,
                verdict.out_of_bounds,
                verdict.in_hazard_band && verdict.ride.is_none(),
            );
        }
        return GameState {
            is_over: true,
            ..state
        };
    }

    match resolve_pickup(&state) {
        Some(pickup) => collect(state, pickup),
        None => {
            let mut state = state;
            state.agent.velocity = ride_velocity(verdict.ride);
            state
        }
    }
}

/// Spawn the bonus goal once the goal row is empty (at most one at a time)
pub fn spawn_bonus_goal(mut state: GameState) -> GameState {
    if state.fliers_active() && state.bonus_goals.is_empty() {
        let bonus = create_bonus_goal(state.object_counter, state.time);
        log::debug!("Spawned {} at t={}", bonus.id, state.time);
        state.object_counter += 1;
        state.bonus_goals.push(bonus);
    }
    state
}
