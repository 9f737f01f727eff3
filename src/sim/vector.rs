//! 2D vector helpers
//!
//! Bodies use `glam::Vec2` directly: it is `Copy`, its arithmetic returns new
//! values, and equality is structural. This module adds the two operations
//! the game needs that glam does not phrase in degrees.

use glam::Vec2;

/// Immutable 2D vector used for positions, velocities and accelerations
pub type Vector = Vec2;

/// "Up" on the field: screen coordinates, so toward decreasing y
pub const UP: Vector = Vec2::new(0.0, -1.0);

/// Degree-based rotation helpers for [`Vector`]
pub trait VectorExt {
    /// Rotate by `degrees` using the standard 2D rotation matrix
    fn rotate_deg(self, degrees: f32) -> Self;

    /// Unit vector obtained by rotating [`UP`] by `degrees`
    fn unit_in_direction(degrees: f32) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn rotate_deg(self, degrees: f32) -> Self {
        Vec2::from_angle(degrees.to_radians()).rotate(self)
    }

    #[inline]
    fn unit_in_direction(degrees: f32) -> Self {
        UP.rotate_deg(degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_arithmetic_returns_new_values() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, -2.0);

        assert_eq!(a + b, Vec2::new(4.0, 2.0));
        assert_eq!(a - b, a + b * -1.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        // Operands are untouched
        assert_eq!(a, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let v = Vec2::new(1.0, 0.0);
        assert!(approx(v.rotate_deg(90.0), Vec2::new(0.0, 1.0)));
        assert!(approx(v.rotate_deg(180.0), Vec2::new(-1.0, 0.0)));
        assert!(approx(v.rotate_deg(360.0), v));
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Vec2::new(-7.5, 2.25);
        assert!((v.rotate_deg(33.0).length() - v.length()).abs() < 1e-4);
    }

    #[test]
    fn test_unit_in_direction() {
        assert!(approx(Vec2::unit_in_direction(0.0), UP));
        // Quarter turn from up lands on +x
        assert!(approx(Vec2::unit_in_direction(90.0), Vec2::new(1.0, 0.0)));
        assert!((Vec2::unit_in_direction(217.0).length() - 1.0).abs() < 1e-5);
    }
}
