//! Entity definitions and the factories that build the starting population
//!
//! Every factory is a pure function of the constants in [`crate::consts`], so
//! two calls always produce identical collections. Ids are the kind tag
//! followed by a running index, unique within each collection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::vector::{Vector, VectorExt};
use crate::consts::*;

/// What a body looks like to a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewKind {
    Agent,
    Vehicle,
    Platform,
    HostileFlier,
    SafeFlier,
    Goal,
    BonusGoal,
}

impl ViewKind {
    /// Tag used as the id prefix
    pub fn tag(&self) -> &'static str {
        match self {
            ViewKind::Agent => "agent",
            ViewKind::Vehicle => "vehicle",
            ViewKind::Platform => "platform",
            ViewKind::HostileFlier => "hostile-flier",
            ViewKind::SafeFlier => "safe-flier",
            ViewKind::Goal => "goal",
            ViewKind::BonusGoal => "bonus-goal",
        }
    }
}

/// A movable circular entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Display correlation only, never read by the rules
    pub id: String,
    /// Elapsed time at which the body was created
    pub created_at: u64,
    pub view_kind: ViewKind,
    pub position: Vector,
    pub velocity: Vector,
    pub acceleration: Vector,
    pub radius: f32,
}

impl Body {
    /// Create a body at rest
    pub fn new(view_kind: ViewKind, index: usize, position: Vector, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive");
        Self {
            id: format!("{}{}", view_kind.tag(), index),
            created_at: 0,
            view_kind,
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            radius,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn created_at(mut self, time: u64) -> Self {
        self.created_at = time;
        self
    }
}

/// Kinds of static terrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    River,
}

/// Static axis-aligned rectangle of terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundZone {
    pub id: String,
    pub view_kind: ZoneKind,
    /// Top-left corner
    pub position: Vector,
    pub width: f32,
    pub height: f32,
}

impl GroundZone {
    /// Vertical extent `(top, bottom)`
    #[inline]
    pub fn vertical_band(&self) -> (f32, f32) {
        (self.position.y, self.position.y + self.height)
    }
}

/// The player's agent at its start coordinate
pub fn create_agent() -> Body {
    Body {
        id: ViewKind::Agent.tag().to_string(),
        ..Body::new(ViewKind::Agent, 0, agent_start(), AGENT_RADIUS)
    }
}

/// Where the agent starts and where it returns after every pickup
#[inline]
pub fn agent_start() -> Vector {
    Vec2::new(AGENT_START.0, AGENT_START.1)
}

/// Lay out `per_row` bodies on each row, spaced evenly and staggered per row
fn lanes(
    kind: ViewKind,
    rows: &[f32],
    speeds: &[f32],
    per_row: usize,
    stagger: f32,
    radius: f32,
) -> Vec<Body> {
    let spacing = FIELD_SIZE / per_row as f32;
    rows.iter()
        .zip(speeds)
        .enumerate()
        .flat_map(|(row, (&y, &speed))| {
            (0..per_row).map(move |i| {
                let x = (i as f32 * spacing + row as f32 * stagger) % FIELD_SIZE;
                Body::new(kind, row * per_row + i, Vec2::new(x, y), radius)
                    .with_velocity(Vec2::new(speed, 0.0))
            })
        })
        .collect()
}

/// Road traffic: one lane per row, alternating directions
pub fn create_vehicles() -> Vec<Body> {
    lanes(
        ViewKind::Vehicle,
        &VEHICLE_ROWS,
        &VEHICLE_SPEEDS,
        VEHICLES_PER_ROW,
        50.0,
        VEHICLE_RADIUS,
    )
}

/// Floating logs across the river
pub fn create_platforms() -> Vec<Body> {
    lanes(
        ViewKind::Platform,
        &PLATFORM_ROWS,
        &PLATFORM_SPEEDS,
        PLATFORMS_PER_ROW,
        70.0,
        PLATFORM_RADIUS,
    )
}

/// Geese that can carry the agent over the river
pub fn create_safe_fliers() -> Vec<Body> {
    SAFE_FLIER_POSITIONS
        .iter()
        .zip(SAFE_FLIER_SPEEDS)
        .enumerate()
        .map(|(i, (&(x, y), speed))| {
            Body::new(ViewKind::SafeFlier, i, Vec2::new(x, y), SAFE_FLIER_RADIUS)
                .with_velocity(Vec2::new(speed, 0.0))
        })
        .collect()
}

/// Hostile fliers parked on the bottom edge, headed up
pub fn create_hostile_fliers() -> Vec<Body> {
    let spacing = FIELD_SIZE / (HOSTILE_FLIER_HEADINGS.len() + 1) as f32;
    HOSTILE_FLIER_HEADINGS
        .iter()
        .enumerate()
        .map(|(i, &heading)| {
            let position = Vec2::new(spacing * (i + 1) as f32, HOSTILE_FLIER_DORMANT_Y);
            Body::new(ViewKind::HostileFlier, i, position, HOSTILE_FLIER_RADIUS)
                .with_velocity(Vec2::unit_in_direction(heading) * HOSTILE_FLIER_SPEED)
        })
        .collect()
}

/// Goal slots along the far bank
pub fn create_goals() -> Vec<Body> {
    let spacing = FIELD_SIZE / (GOAL_COUNT + 1) as f32;
    (0..GOAL_COUNT)
        .map(|i| {
            let position = Vec2::new(spacing * (i + 1) as f32, GOAL_ROW);
            Body::new(ViewKind::Goal, i, position, GOAL_RADIUS)
        })
        .collect()
}

/// The bonus goal that appears once every regular goal is taken
pub fn create_bonus_goal(counter: u64, time: u64) -> Body {
    let position = Vec2::new(BONUS_GOAL_POSITION.0, BONUS_GOAL_POSITION.1);
    Body::new(ViewKind::BonusGoal, counter as usize, position, GOAL_RADIUS).created_at(time)
}

/// The river band
pub fn create_river() -> GroundZone {
    GroundZone {
        id: "river".to_string(),
        view_kind: ZoneKind::River,
        position: Vec2::new(0.0, RIVER_TOP),
        width: FIELD_SIZE,
        height: RIVER_HEIGHT,
    }
}
