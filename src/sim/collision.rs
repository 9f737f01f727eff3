//! Proximity tests between circles, the field edge and ground zones
//!
//! Everything is a distance comparison; there is no response or penetration
//! handling. The rules decide what a positive test means.

use super::entity::{Body, GroundZone};
use crate::consts::{FIELD_SIZE, RIDE_MARGIN};

/// Lethal contact: centers closer than the sum of the radii
#[inline]
pub fn collides(a: &Body, b: &Body) -> bool {
    a.position.distance(b.position) < a.radius + b.radius
}

/// Supportive contact: `rider` is standing on `support`.
///
/// Tighter than [`collides`] because the rider's radius is shrunk by
/// [`RIDE_MARGIN`]. Not symmetric.
#[inline]
pub fn rides(rider: &Body, support: &Body) -> bool {
    rider.position.distance(support.position) < (rider.radius - RIDE_MARGIN) + support.radius
}

/// Horizontal position at or beyond either field edge
#[inline]
pub fn out_of_bounds(body: &Body) -> bool {
    body.position.x <= 0.0 || body.position.x >= FIELD_SIZE
}

/// Vertical position within the zone's band (edges included)
#[inline]
pub fn in_zone_band(body: &Body, zone: &GroundZone) -> bool {
    let (top, bottom) = zone.vertical_band();
    (top..=bottom).contains(&body.position.y)
}

/// First body in `others` that `rider` rides, if any
pub fn find_ridden<'a>(rider: &Body, others: &'a [Body]) -> Option<&'a Body> {
    others.iter().find(|other| rides(rider, other))
}

/// Index of the first body in `others` that `rider` rides, if any
pub fn find_ridden_index(rider: &Body, others: &[Body]) -> Option<usize> {
    others.iter().position(|other| rides(rider, other))
}

/// Whether `body` collides with any of `others`
pub fn collides_with_any(body: &Body, others: &[Body]) -> bool {
    others.iter().any(|other| collides(body, other))
}
