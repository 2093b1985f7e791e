//! Player-specific rendering: ship outline and projectile circles.
//!
//! Everything is drawn with gizmos from the cached [`LatestSnapshot`]; nothing
//! here reads the session directly.

use crate::graphics::canvas_to_world;
use crate::rendering::LatestSnapshot;
use crate::simulation::FieldBounds;
use bevy::prelude::*;

/// Radius of the red dot marking the ship centre.
const SHIP_CENTRE_RADIUS: f32 = 5.0;

/// Draw the ship hull, its centre marker and every live projectile.
pub fn player_gizmo_system(
    mut gizmos: Gizmos,
    latest: Res<LatestSnapshot>,
    bounds: Res<FieldBounds>,
) {
    let Some(snapshot) = &latest.0 else {
        return;
    };

    // ── Ship ──────────────────────────────────────────────────────────────────
    let hull = snapshot.ship.hull.map(|v| canvas_to_world(v, *bounds));
    let hull_color = if snapshot.game_over {
        Color::srgb(1.0, 0.22, 0.22)
    } else {
        Color::WHITE
    };
    gizmos.linestrip_2d([hull[0], hull[1], hull[2], hull[0]], hull_color);
    gizmos.circle_2d(
        canvas_to_world(snapshot.ship.position, *bounds),
        SHIP_CENTRE_RADIUS,
        Color::srgb(1.0, 0.0, 0.0),
    );

    // ── Projectiles ───────────────────────────────────────────────────────────
    for disc in &snapshot.projectiles {
        gizmos.circle_2d(
            canvas_to_world(disc.center, *bounds),
            disc.radius,
            Color::WHITE,
        );
    }
}
