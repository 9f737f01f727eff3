//! Per-tick integration
//!
//! Positions move by one velocity step per tick; velocities move by one
//! acceleration step. Everything except the agent wraps at the field edges.

use glam::Vec2;

use super::entity::Body;
use crate::consts::FIELD_SIZE;

/// Bring a coordinate back into `[0, FIELD_SIZE]` with a single correction.
///
/// Per-tick displacement is far smaller than the field, so one add or subtract
/// always suffices.
#[inline]
pub fn wrap(coordinate: f32) -> f32 {
    if coordinate < 0.0 {
        coordinate + FIELD_SIZE
    } else if coordinate > FIELD_SIZE {
        coordinate - FIELD_SIZE
    } else {
        coordinate
    }
}

/// Advance a body one tick, wrapping its position around the field
pub fn advance(body: &Body) -> Body {
    let moved = body.position + body.velocity;
    Body {
        position: Vec2::new(wrap(moved.x), wrap(moved.y)),
        velocity: body.velocity + body.acceleration,
        ..body.clone()
    }
}

/// Advance a body one tick without wrapping.
///
/// Used for the agent, which must be able to drift onto a field edge.
pub fn advance_unwrapped(body: &Body) -> Body {
    Body {
        position: body.position + body.velocity,
        velocity: body.velocity + body.acceleration,
        ..body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::ViewKind;
    use proptest::prelude::*;

    fn vehicle_at(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        Body::new(ViewKind::Vehicle, 0, Vec2::new(x, y), 20.0).with_velocity(Vec2::new(vx, vy))
    }

    #[test]
    fn test_wrap_right_edge() {
        let body = vehicle_at(FIELD_SIZE - 1.0, 300.0, 5.0, 0.0);
        let next = advance(&body);
        assert_eq!(next.position, Vec2::new(4.0, 300.0));
    }

    #[test]
    fn test_wrap_left_edge() {
        let body = vehicle_at(2.0, 300.0, -3.0, 0.0);
        assert_eq!(advance(&body).position.x, FIELD_SIZE - 1.0);
    }

    #[test]
    fn test_acceleration_updates_velocity() {
        let mut body = vehicle_at(100.0, 100.0, 1.0, 0.0);
        body.acceleration = Vec2::new(0.5, -0.25);
        let next = advance(&body);
        // Position uses the old velocity
        assert_eq!(next.position, Vec2::new(101.0, 100.0));
        assert_eq!(next.velocity, Vec2::new(1.5, -0.25));
    }

    #[test]
    fn test_unwrapped_leaves_field() {
        let body = vehicle_at(FIELD_SIZE - 1.0, 300.0, 5.0, 0.0);
        assert_eq!(advance_unwrapped(&body).position.x, FIELD_SIZE + 4.0);
    }

    #[test]
    fn test_advance_keeps_identity() {
        let body = vehicle_at(10.0, 10.0, 1.0, 1.0);
        let next = advance(&body);
        assert_eq!(next.id, body.id);
        assert_eq!(next.radius, body.radius);
        assert_eq!(next.created_at, body.created_at);
    }

    proptest! {
        #[test]
        fn prop_advance_stays_in_field(
            x in 0.0f32..=FIELD_SIZE,
            y in 0.0f32..=FIELD_SIZE,
            vx in -(FIELD_SIZE - 1.0)..(FIELD_SIZE - 1.0),
            vy in -(FIELD_SIZE - 1.0)..(FIELD_SIZE - 1.0),
        ) {
            prop_assume!(Vec2::new(vx, vy).length() < FIELD_SIZE);
            let next = advance(&vehicle_at(x, y, vx, vy));
            prop_assert!((0.0..=FIELD_SIZE).contains(&next.position.x));
            prop_assert!((0.0..=FIELD_SIZE).contains(&next.position.y));
        }
    }
}
