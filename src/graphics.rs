use crate::simulation::FieldBounds;
use bevy::prelude::*;

/// Setup camera for 2D rendering
pub fn setup_camera(mut commands: Commands) {
    // Default Camera2d centres the world origin in the window at 1:1 scale.
    commands.spawn(Camera2d);
    info!("[SETUP] Camera spawned");
}

/// Map a canvas-space point (origin top-left, +y down) into Bevy world space
/// (origin at window centre, +y up).
pub fn canvas_to_world(p: Vec2, bounds: FieldBounds) -> Vec2 {
    Vec2::new(p.x - bounds.width / 2.0, bounds.height / 2.0 - p.y)
}
