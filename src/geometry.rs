//! Collision geometry: segment projection and circle/polygon intersection.
//!
//! Pure functions over [`Vec2`]; no ECS types.  Coordinates are field units
//! in whatever frame the caller uses (the simulation uses canvas space:
//! origin top-left, +y down).

use bevy::math::Vec2;

/// A circle used for collision tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Vec2,
    pub radius: f32,
}

impl Disc {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Bounding-box test: true if `p` lies inside the axis-aligned box spanned by
/// `start` and `end` (inclusive).
///
/// This is not a true on-segment test.  It is only meaningful for points
/// already known to lie on the line through `start` and `end`, where it is
/// equivalent to "the projection falls within the segment".
pub fn point_on_segment(p: Vec2, start: Vec2, end: Vec2) -> bool {
    p.x >= start.x.min(end.x)
        && p.x <= start.x.max(end.x)
        && p.y >= start.y.min(end.y)
        && p.y <= start.y.max(end.y)
}

/// Closest point to `point` on the segment `start..end`.
///
/// Projects onto the infinite line, keeps the projection when it lands inside
/// the segment, and otherwise snaps to the endpoint on the side it overshot.
/// A zero-length segment returns `start`.
pub fn closest_point_on_segment(point: Vec2, start: Vec2, end: Vec2) -> Vec2 {
    let edge = end - start;
    let length_sq = edge.length_squared();
    if length_sq == 0.0 {
        return start;
    }

    let t = (point - start).dot(edge) / length_sq;
    let projected = start + edge * t;

    if point_on_segment(projected, start, end) {
        projected
    } else if t < 0.0 {
        start
    } else {
        end
    }
}

/// True if the two circles overlap or touch.
pub fn circle_circle_intersect(a: Disc, b: Disc) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// True if the circle touches any edge of `polygon` (vertices in order, the
/// last connecting back to the first).
///
/// Edge-only test: a circle strictly inside the polygon without reaching an
/// edge does not count.  Returns on the first edge hit.
pub fn circle_polygon_intersect(circle: Disc, polygon: &[Vec2]) -> bool {
    debug_assert!(polygon.len() >= 3, "polygon needs at least 3 vertices");

    let n = polygon.len();
    (0..n).any(|i| {
        let start = polygon[i];
        let end = polygon[(i + 1) % n];
        let closest = closest_point_on_segment(circle.center, start, end);
        closest.distance(circle.center) <= circle.radius
    })
}
