//! Player module: ship state, the control surface, and ship/projectile drawing.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | `Ship`, `ShipHull`, `Projectile` and their per-tick rules |
//! | [`control`] | `InputState` record, `ControlEvent`s, keyboard mapping |
//! | [`rendering`] | Ship outline and projectile gizmos |
//!
//! All public items are re-exported at this level so that the rest of the crate
//! can use flat `crate::player::*` imports.

pub mod control;
pub mod rendering;
pub mod state;

pub use control::{keyboard_control_system, Control, ControlEvent, InputState};
pub use rendering::player_gizmo_system;
pub use state::{Projectile, Ship, ShipHull};

use crate::simulation::GameSet;
use bevy::prelude::*;

/// Keyboard control surface.  Requires Bevy's `InputPlugin`.
pub struct ControlPlugin;

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .add_systems(Update, keyboard_control_system.in_set(GameSet::Input));
    }
}
