//! Asteroids: state, edge spawning, and the periodic spawn clock.
//!
//! Asteroids appear just outside one of the four field edges and drift straight
//! across at unit speed.  The spawn clock is wall-clock based and independent of
//! the frame rate; the simulation step owns everything after the append.

use crate::config::GameConfig;
use crate::constants::ASTEROID_SPEED;
use crate::geometry::Disc;
use crate::simulation::{FieldBounds, GameRng, Session};
use bevy::prelude::*;
use rand::Rng;

/// A drifting rock.
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Asteroid {
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    pub fn disc(&self) -> Disc {
        Disc::new(self.position, self.radius)
    }
}

/// Field edge an asteroid enters from.  Canvas space: +y points down, so
/// `Bottom` is at `y = height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Left,
    Bottom,
    Right,
    Top,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Left,
        SpawnEdge::Bottom,
        SpawnEdge::Right,
        SpawnEdge::Top,
    ];

    /// Uniformly random edge.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Unit direction pointing from this edge into the field.
    pub fn inward(self) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::X,
            SpawnEdge::Bottom => Vec2::NEG_Y,
            SpawnEdge::Right => Vec2::NEG_X,
            SpawnEdge::Top => Vec2::Y,
        }
    }

    /// Centre position for a circle of `radius` sitting just outside this
    /// edge, `along` ∈ [0, 1) of the way down the edge.
    pub fn entry_point(self, along: f32, radius: f32, bounds: FieldBounds) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::new(-radius, along * bounds.height),
            SpawnEdge::Bottom => Vec2::new(along * bounds.width, bounds.height + radius),
            SpawnEdge::Right => Vec2::new(bounds.width + radius, along * bounds.height),
            SpawnEdge::Top => Vec2::new(along * bounds.width, -radius),
        }
    }
}

/// Build one asteroid on a random edge with a random radius.
pub fn random_asteroid<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: FieldBounds,
    config: &GameConfig,
) -> (SpawnEdge, Asteroid) {
    let edge = SpawnEdge::random(rng);
    let radius = config.asteroid_min_radius + config.asteroid_radius_range * rng.gen::<f32>();
    let along = rng.gen::<f32>();
    let asteroid = Asteroid {
        position: edge.entry_point(along, radius, bounds),
        velocity: edge.inward() * ASTEROID_SPEED,
        radius,
    };
    (edge, asteroid)
}

// ── Spawn clock ───────────────────────────────────────────────────────────────

/// Repeating wall-clock trigger for asteroid spawns.
#[derive(Resource, Debug, Clone)]
pub struct AsteroidSpawner {
    pub timer: Timer,
}

impl AsteroidSpawner {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            timer: Timer::from_seconds(config.spawn_interval_secs, TimerMode::Repeating),
        }
    }
}

impl Default for AsteroidSpawner {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// Advance the spawn clock and append one asteroid per elapsed period.
///
/// Gated on the session still running, so game over stops the clock.
pub fn asteroid_spawn_system(
    time: Res<Time>,
    mut spawner: ResMut<AsteroidSpawner>,
    mut session: ResMut<Session>,
    mut rng: ResMut<GameRng>,
    bounds: Res<FieldBounds>,
    config: Res<GameConfig>,
) {
    spawner.timer.tick(time.delta());
    for _ in 0..spawner.timer.times_finished_this_tick() {
        let (edge, asteroid) = random_asteroid(&mut rng.0, *bounds, &config);
        let radius = asteroid.radius;
        if session.push_asteroid(asteroid, config.max_asteroids) {
            debug!("Spawned asteroid r={radius:.1} from {edge:?} edge");
        } else {
            warn!(
                "Asteroid cap of {} reached; spawn skipped",
                config.max_asteroids.unwrap_or_default()
            );
        }
    }
}
