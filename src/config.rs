//! Runtime gameplay configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every tunable in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{
    validate_friction, validate_non_negative, validate_positive, GameError, GameResult,
};
use crate::player::ShipHull;
use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

/// Path of the optional override file, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay configuration.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Ship: Movement ────────────────────────────────────────────────────────
    pub ship_speed: f32,
    pub rotational_speed: f32,
    pub friction: f32,

    // ── Ship: Hull ────────────────────────────────────────────────────────────
    pub ship_nose_length: f32,
    pub ship_tail_length: f32,
    pub ship_half_width: f32,

    // ── Projectiles ───────────────────────────────────────────────────────────
    pub projectile_speed: f32,
    pub projectile_radius: f32,

    // ── Asteroids ─────────────────────────────────────────────────────────────
    pub asteroid_min_radius: f32,
    pub asteroid_radius_range: f32,
    pub spawn_interval_secs: f32,
    /// Upper bound on live asteroids; `None` spawns without limit.
    pub max_asteroids: Option<usize>,

    // ── Session ───────────────────────────────────────────────────────────────
    pub score_per_asteroid: u32,
    /// Fixed RNG seed for reproducible spawn sequences; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Ship: Movement
            ship_speed: SPEED,
            rotational_speed: ROTATIONAL_SPEED,
            friction: FRICTION,
            // Ship: Hull
            ship_nose_length: SHIP_NOSE_LENGTH,
            ship_tail_length: SHIP_TAIL_LENGTH,
            ship_half_width: SHIP_HALF_WIDTH,
            // Projectiles
            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            // Asteroids
            asteroid_min_radius: ASTEROID_MIN_RADIUS,
            asteroid_radius_range: ASTEROID_RADIUS_RANGE,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            max_asteroids: None,
            // Session
            score_per_asteroid: SCORE_PER_ASTEROID,
            rng_seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(contents: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(contents).map_err(|e| GameError::ConfigParse {
            path: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|err| match err {
            GameError::ConfigParse { message, .. } => GameError::ConfigParse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("ship_speed", self.ship_speed)?;
        validate_non_negative("rotational_speed", self.rotational_speed)?;
        validate_friction(self.friction)?;
        validate_positive("ship_nose_length", self.ship_nose_length)?;
        validate_positive("ship_tail_length", self.ship_tail_length)?;
        validate_positive("ship_half_width", self.ship_half_width)?;
        validate_positive("projectile_speed", self.projectile_speed)?;
        validate_positive("projectile_radius", self.projectile_radius)?;
        validate_positive("asteroid_min_radius", self.asteroid_min_radius)?;
        validate_non_negative("asteroid_radius_range", self.asteroid_radius_range)?;
        validate_positive("spawn_interval_secs", self.spawn_interval_secs)?;
        if self.asteroid_min_radius < ShipHull::from_config(self).inradius() {
            return Err(GameError::InvalidConfig {
                name: "asteroid_min_radius",
                value: self.asteroid_min_radius,
                expected: "at least the ship hull's inradius",
            });
        }
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with it.
///
/// A missing file keeps the compiled defaults.  Parse or validation errors are
/// logged and also keep the defaults; they never abort the game.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    if !Path::new(CONFIG_PATH).exists() {
        info!("No {CONFIG_PATH} found; using compiled defaults");
        return;
    }
    match GameConfig::load(CONFIG_PATH) {
        Ok(loaded) => {
            *config = loaded;
            info!("Loaded game config from {CONFIG_PATH}");
        }
        Err(e) => warn!("{e}; using defaults"),
    }
}
