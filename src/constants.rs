//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found and modified in one
//! place.  [`crate::config::GameConfig::default`] mirrors every value below;
//! `assets/game.toml` can override any subset at startup.
//!
//! Units: distances are field units (one canvas pixel), speeds are field units
//! per tick, angles are radians.  Motion is per tick, not per second.

// ── Field ─────────────────────────────────────────────────────────────────────

/// Default playfield width, used for the initial window and before the first
/// window size sync.
pub const FIELD_WIDTH: f32 = 1024.0;

/// Default playfield height.
pub const FIELD_HEIGHT: f32 = 768.0;

// ── Ship: Movement ────────────────────────────────────────────────────────────

/// Speed the ship is set to (not accelerated to) while thrust is held.
pub const SPEED: f32 = 3.0;

/// Heading change per tick while a rotate control is held.
pub const ROTATIONAL_SPEED: f32 = 0.03;

/// Per-tick velocity multiplier applied while thrust is released.
///
/// Must stay in (0, 1]: at 1.0 the ship coasts forever, at 0.97 speed halves
/// in roughly 23 ticks.
pub const FRICTION: f32 = 0.97;

// ── Ship: Hull ────────────────────────────────────────────────────────────────

/// Distance from the ship centre to the nose tip, along the heading.
pub const SHIP_NOSE_LENGTH: f32 = 30.0;

/// Distance from the ship centre back to the tail edge.
pub const SHIP_TAIL_LENGTH: f32 = 10.0;

/// Half the width of the tail edge.
pub const SHIP_HALF_WIDTH: f32 = 10.0;

// ── Projectiles ───────────────────────────────────────────────────────────────

/// Projectile speed along the ship heading at the moment of firing.
pub const PROJECTILE_SPEED: f32 = 3.0;

/// Collision radius of every projectile.
pub const PROJECTILE_RADIUS: f32 = 5.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Smallest asteroid radius the spawner produces.
pub const ASTEROID_MIN_RADIUS: f32 = 10.0;

/// Width of the radius draw: radius = MIN + RANGE · U, U ∈ [0, 1).
pub const ASTEROID_RADIUS_RANGE: f32 = 50.0;

/// Asteroid drift speed (velocity is a unit vector pointing inward).
pub const ASTEROID_SPEED: f32 = 1.0;

/// Wall-clock seconds between asteroid spawns.
pub const SPAWN_INTERVAL_SECS: f32 = 3.0;

// ── Scoring ───────────────────────────────────────────────────────────────────

/// Points awarded per asteroid destroyed by a projectile.
pub const SCORE_PER_ASTEROID: u32 = 10;

// ── Rendering ─────────────────────────────────────────────────────────────────

/// Font size of the score HUD.
pub const HUD_FONT_SIZE: f32 = 24.0;

/// Font size of the game-over banner.
pub const GAME_OVER_FONT_SIZE: f32 = 46.0;
