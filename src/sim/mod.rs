//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one state out
//! - Constant-driven entity construction, no RNG
//! - Stable iteration order (collections keep factory order)
//! - No rendering, timer or platform dependencies

pub mod collision;
pub mod entity;
pub mod kinematics;
pub mod reduce;
pub mod rules;
pub mod state;
pub mod vector;

pub use collision::{collides, in_zone_band, out_of_bounds, rides};
pub use entity::{Body, GroundZone, ViewKind, ZoneKind};
pub use kinematics::{advance, advance_unwrapped, wrap};
pub use reduce::{Direction, Event, reduce};
pub use rules::apply_rules;
pub use state::GameState;
pub use vector::{Vector, VectorExt};
