//! Control surface: discrete input events → the input record the simulation
//! step reads.
//!
//! ## Pipeline
//!
//! 1. [`keyboard_control_system`]: maps key presses/releases to [`ControlEvent`]s.
//! 2. [`InputState::apply`]: folds each event into the shared record.
//! 3. `simulation_step_system`: reads the held flags and drains fire requests.
//!
//! The **input abstraction layer** (`InputState`) keeps the step testable:
//! tests populate the resource directly and never touch the keyboard.

use bevy::prelude::*;

/// A held control axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Thrust,
    RotateLeft,
    RotateRight,
}

/// One discrete input from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Press(Control),
    Release(Control),
    /// Edge-triggered: each event launches exactly one projectile.
    Fire,
}

/// Shared input record written by the control surface and read once per tick.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub thrust: bool,
    pub rotate_left: bool,
    pub rotate_right: bool,
    /// Fire events received since the last tick.
    pub pending_fire: u32,
}

impl InputState {
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Press(control) => *self.flag_mut(control) = true,
            ControlEvent::Release(control) => *self.flag_mut(control) = false,
            ControlEvent::Fire => self.pending_fire = self.pending_fire.saturating_add(1),
        }
    }

    /// Drain and return the number of queued fire requests.
    pub fn take_fire_requests(&mut self) -> u32 {
        std::mem::take(&mut self.pending_fire)
    }

    fn flag_mut(&mut self, control: Control) -> &mut bool {
        match control {
            Control::Thrust => &mut self.thrust,
            Control::RotateLeft => &mut self.rotate_left,
            Control::RotateRight => &mut self.rotate_right,
        }
    }
}

/// Key bindings: WASD-style with arrow-key alternates.
const BINDINGS: [(KeyCode, Control); 6] = [
    (KeyCode::KeyW, Control::Thrust),
    (KeyCode::ArrowUp, Control::Thrust),
    (KeyCode::KeyA, Control::RotateLeft),
    (KeyCode::ArrowLeft, Control::RotateLeft),
    (KeyCode::KeyD, Control::RotateRight),
    (KeyCode::ArrowRight, Control::RotateRight),
];

/// Translate this frame's key transitions into [`ControlEvent`]s.
///
/// Only transitions are forwarded (`just_pressed` / `just_released`), so the
/// record behaves like the press/release listeners it models.  Space fires
/// once per press, however long it is held.
pub fn keyboard_control_system(keys: Res<ButtonInput<KeyCode>>, mut input: ResMut<InputState>) {
    for (key, control) in BINDINGS {
        if keys.just_pressed(key) {
            input.apply(ControlEvent::Press(control));
        }
        if keys.just_released(key) {
            input.apply(ControlEvent::Release(control));
        }
    }
    if keys.just_pressed(KeyCode::Space) {
        input.apply(ControlEvent::Fire);
    }
}
