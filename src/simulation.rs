//! Session state and the per-tick simulation step.
//!
//! ## Frame pipeline (`Update`)
//!
//! | Set                    | Systems                                         |
//! |------------------------|-------------------------------------------------|
//! | [`GameSet::Input`]     | keyboard → [`InputState`]                       |
//! | [`GameSet::Simulation`]| [`asteroid_spawn_system`] → [`simulation_step_system`] |
//! | [`GameSet::Render`]    | snapshot cache, gizmos, HUD                     |
//!
//! The simulation set only runs while the session is live: game over halts
//! both the tick driver and the spawn clock.  There is no restart.
//!
//! All positions are canvas space: origin top-left, +y down, one unit per
//! pixel.  Mapping into Bevy's world space is the render side's job.

use crate::asteroid::{asteroid_spawn_system, Asteroid, AsteroidSpawner};
use crate::config::GameConfig;
use crate::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::geometry::{circle_circle_intersect, circle_polygon_intersect, Disc};
use crate::player::{InputState, Projectile, Ship, ShipHull};
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Visible field dimensions.  May change between ticks (window resize).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub width: f32,
    pub height: f32,
}

impl FieldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// True when a circle lies entirely beyond the field on either axis.
    pub fn is_outside(&self, position: Vec2, radius: f32) -> bool {
        position.x + radius < 0.0
            || position.x - radius > self.width
            || position.y + radius < 0.0
            || position.y - radius > self.height
    }
}

impl Default for FieldBounds {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// Random source for spawning.  Seeded from config for reproducible runs.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Everything that changes during play.  Owned and mutated by the step.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
    pub score: u32,
    /// Asteroids destroyed by projectiles.
    pub destroyed: u32,
    pub game_over: bool,
    /// Ticks stepped so far.
    pub tick: u64,
}

/// What happened during one [`Session::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub fired: u32,
    pub destroyed: u32,
    /// Set only on the tick the ship was hit.
    pub game_over: bool,
}

impl Session {
    /// A fresh session: stationary ship at the field centre, nothing else.
    pub fn new(bounds: FieldBounds, config: &GameConfig) -> Self {
        Self {
            ship: Ship::new(bounds.center(), ShipHull::from_config(config)),
            projectiles: Vec::new(),
            asteroids: Vec::new(),
            score: 0,
            destroyed: 0,
            game_over: false,
            tick: 0,
        }
    }

    /// Append a spawned asteroid unless `cap` live asteroids already exist.
    pub fn push_asteroid(&mut self, asteroid: Asteroid, cap: Option<usize>) -> bool {
        if cap.is_some_and(|cap| self.asteroids.len() >= cap) {
            return false;
        }
        self.asteroids.push(asteroid);
        true
    }

    /// Advance the session by one tick.
    ///
    /// Order:
    /// 1. queued shots launch from the ship's current nose
    /// 2. ship control, then ship motion
    /// 3. projectiles move
    /// 4. each asteroid moves, then checks the ship hull, then the first
    ///    overlapping projectile (both removed, points awarded), then the field
    ///    bounds.  A hull hit ends the session; asteroids after it still move
    ///    but skip every check.
    /// 5. projectiles that left the field are dropped
    ///
    /// Off-field projectiles are dropped after the asteroid pass so a shot that
    /// crosses the edge while overlapping a rock still counts.
    pub fn step(
        &mut self,
        input: &mut InputState,
        bounds: FieldBounds,
        config: &GameConfig,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let shots = input.take_fire_requests();
        if self.game_over {
            return outcome;
        }

        for _ in 0..shots {
            self.projectiles.push(self.ship.fire(config));
        }
        outcome.fired = shots;

        self.ship.apply_control(input, config);
        self.ship.integrate();

        for projectile in &mut self.projectiles {
            projectile.integrate();
        }

        let hull = self.ship.compute_hull_vertices();
        let mut ship_hit = false;
        // Reverse so swap_remove only ever moves an already-visited asteroid.
        for i in (0..self.asteroids.len()).rev() {
            let asteroid = &mut self.asteroids[i];
            asteroid.integrate();
            if ship_hit {
                continue;
            }
            let disc = asteroid.disc();

            if circle_polygon_intersect(disc, &hull) {
                self.game_over = true;
                outcome.game_over = true;
                ship_hit = true;
                continue;
            }

            let hit = self
                .projectiles
                .iter()
                .position(|p| circle_circle_intersect(disc, p.disc()));
            if let Some(j) = hit {
                self.projectiles.swap_remove(j);
                self.asteroids.swap_remove(i);
                self.score += config.score_per_asteroid;
                self.destroyed += 1;
                outcome.destroyed += 1;
                continue;
            }

            if bounds.is_outside(disc.center, disc.radius) {
                self.asteroids.swap_remove(i);
            }
        }

        self.projectiles
            .retain(|p| !bounds.is_outside(p.position, p.radius));

        self.tick += 1;
        outcome
    }

    /// Read-only view handed to the render side.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.tick,
            ship: ShipPose {
                position: self.ship.position,
                rotation: self.ship.rotation,
                hull: self.ship.compute_hull_vertices(),
            },
            projectiles: self.projectiles.iter().map(Projectile::disc).collect(),
            asteroids: self.asteroids.iter().map(Asteroid::disc).collect(),
            score: self.score,
            destroyed: self.destroyed,
            game_over: self.game_over,
        }
    }
}

// ── Render-facing output ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipPose {
    pub position: Vec2,
    pub rotation: f32,
    /// World-space hull triangle, nose first.
    pub hull: [Vec2; 3],
}

/// Emitted once per tick after the step, including the tick that ends the game.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub ship: ShipPose,
    pub projectiles: Vec<Disc>,
    pub asteroids: Vec<Disc>,
    pub score: u32,
    pub destroyed: u32,
    pub game_over: bool,
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Ordering of the per-frame game systems.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Simulation,
    Render,
}

/// Core game loop: session bootstrap, spawn clock and simulation step.
///
/// Needs only `MinimalPlugins`; input and rendering are separate plugins.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<FieldBounds>()
            .init_resource::<InputState>()
            .add_message::<FrameSnapshot>()
            .configure_sets(
                Update,
                (GameSet::Input, GameSet::Simulation, GameSet::Render).chain(),
            )
            .add_systems(Startup, start_session_system)
            .add_systems(
                Update,
                (asteroid_spawn_system, simulation_step_system)
                    .chain()
                    .in_set(GameSet::Simulation)
                    .run_if(session_running),
            );
    }
}

/// Run condition: a session exists and has not ended.
pub fn session_running(session: Option<Res<Session>>) -> bool {
    session.is_some_and(|s| !s.game_over)
}

/// Startup system: create the session, spawn clock and RNG from the loaded
/// config.  Resources inserted before startup are kept as-is.
pub fn start_session_system(
    mut commands: Commands,
    bounds: Res<FieldBounds>,
    config: Res<GameConfig>,
    session: Option<Res<Session>>,
    spawner: Option<Res<AsteroidSpawner>>,
    rng: Option<Res<GameRng>>,
) {
    if rng.is_none() {
        commands.insert_resource(GameRng::from_seed(config.rng_seed));
    }
    if spawner.is_none() {
        commands.insert_resource(AsteroidSpawner::from_config(&config));
    }
    if session.is_none() {
        commands.insert_resource(Session::new(*bounds, &config));
        info!(
            "Session started on {}x{} field (seed: {:?})",
            bounds.width, bounds.height, config.rng_seed
        );
    }
}

/// Run one tick of the session and publish the resulting snapshot.
pub fn simulation_step_system(
    mut session: ResMut<Session>,
    mut input: ResMut<InputState>,
    bounds: Res<FieldBounds>,
    config: Res<GameConfig>,
    mut snapshots: MessageWriter<FrameSnapshot>,
) {
    let outcome = session.step(&mut input, *bounds, &config);

    if outcome.destroyed > 0 {
        debug!(
            "+{} points. Total score: {}",
            outcome.destroyed * config.score_per_asteroid,
            session.score
        );
    }
    if outcome.game_over {
        info!(
            "GAME OVER at tick {} with score {}",
            session.tick, session.score
        );
    }

    snapshots.write(session.snapshot());
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn bounds() -> FieldBounds {
        FieldBounds::new(800.0, 600.0)
    }

    fn session() -> Session {
        Session::new(bounds(), &GameConfig::default())
    }

    fn asteroid(x: f32, y: f32, r: f32, vx: f32, vy: f32) -> Asteroid {
        Asteroid {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius: r,
        }
    }

    fn projectile(x: f32, y: f32, vx: f32, vy: f32) -> Projectile {
        Projectile {
            position: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
            radius: 5.0,
        }
    }

    fn step(s: &mut Session, input: &mut InputState) -> StepOutcome {
        s.step(input, bounds(), &GameConfig::default())
    }

    #[test]
    fn new_session_centres_stationary_ship() {
        let s = session();
        assert_eq!(s.ship.position, Vec2::new(400.0, 300.0));
        assert_eq!(s.ship.velocity, Vec2::ZERO);
        assert_eq!(s.score, 0);
        assert!(!s.game_over);
    }

    #[test]
    fn thrust_scenario_reaches_steady_speed() {
        let mut s = session();
        let mut input = InputState {
            thrust: true,
            ..Default::default()
        };
        for _ in 0..10 {
            step(&mut s, &mut input);
        }
        assert!((s.ship.velocity - Vec2::new(3.0, 0.0)).length() < EPS);
        let before = s.ship.position;
        step(&mut s, &mut input);
        assert!((s.ship.position - before - Vec2::new(3.0, 0.0)).length() < EPS);
    }

    #[test]
    fn projectile_destroys_asteroid_at_left_edge() {
        let mut s = session();
        s.asteroids.push(asteroid(-30.0, 200.0, 30.0, 1.0, 0.0));
        s.projectiles.push(projectile(-25.0, 200.0, 3.0, 0.0));
        let mut input = InputState::default();

        step(&mut s, &mut input);
        step(&mut s, &mut input);

        assert!(s.asteroids.is_empty());
        assert!(s.projectiles.is_empty());
        assert_eq!(s.score, 10);
        assert_eq!(s.destroyed, 1);
    }

    #[test]
    fn asteroid_absorbs_at_most_one_projectile_per_tick() {
        let mut s = session();
        s.asteroids.push(asteroid(100.0, 100.0, 40.0, 0.0, 0.0));
        s.projectiles.push(projectile(100.0, 100.0, 0.0, 0.0));
        s.projectiles.push(projectile(110.0, 100.0, 0.0, 0.0));

        let outcome = step(&mut s, &mut InputState::default());

        assert_eq!(outcome.destroyed, 1);
        assert_eq!(s.projectiles.len(), 1);
        assert_eq!(s.score, 10);
    }

    #[test]
    fn one_projectile_destroys_only_one_asteroid() {
        let mut s = session();
        s.asteroids.push(asteroid(100.0, 100.0, 20.0, 0.0, 0.0));
        s.asteroids.push(asteroid(110.0, 100.0, 20.0, 0.0, 0.0));
        s.projectiles.push(projectile(105.0, 100.0, 0.0, 0.0));

        step(&mut s, &mut InputState::default());

        assert_eq!(s.asteroids.len(), 1);
        assert!(s.projectiles.is_empty());
        assert_eq!(s.score, 10);
    }

    #[test]
    fn hull_contact_ends_session_and_freezes_state() {
        let mut s = session();
        // Just ahead of the nose at (430, 300), drifting in.
        s.asteroids.push(asteroid(440.0, 300.0, 10.0, -1.0, 0.0));
        s.asteroids.push(asteroid(100.0, 100.0, 20.0, 0.0, 1.0));
        s.projectiles.push(projectile(700.0, 500.0, 0.0, 0.0));
        let mut input = InputState::default();

        let outcome = step(&mut s, &mut input);
        assert!(outcome.game_over);
        assert!(s.game_over);

        let frozen = s.snapshot();
        input.thrust = true;
        input.pending_fire = 3;
        for _ in 0..5 {
            assert_eq!(step(&mut s, &mut input), StepOutcome::default());
        }
        assert_eq!(s.snapshot(), frozen);
        assert_eq!(input.pending_fire, 0, "late shots are discarded");
    }

    #[test]
    fn asteroids_keep_moving_on_the_game_over_tick() {
        let mut s = session();
        // Index 0 is visited after the hull hit at index 1.
        s.asteroids.push(asteroid(100.0, 100.0, 20.0, 1.0, 0.0));
        s.asteroids.push(asteroid(440.0, 300.0, 10.0, -1.0, 0.0));
        s.projectiles.push(projectile(103.0, 100.0, 0.0, 0.0));

        let outcome = step(&mut s, &mut InputState::default());

        assert!(outcome.game_over);
        assert_eq!(s.asteroids.len(), 2);
        assert_eq!(s.asteroids[0].position, Vec2::new(101.0, 100.0));
        assert_eq!(s.asteroids[1].position, Vec2::new(439.0, 300.0));
        // Overlapping, but collision work stopped at the hull hit.
        assert_eq!(s.projectiles.len(), 1);
        assert_eq!(s.score, 0);
    }

    #[test]
    fn fire_requests_launch_from_pre_tick_nose() {
        let mut s = session();
        let mut input = InputState {
            pending_fire: 2,
            ..Default::default()
        };
        let outcome = step(&mut s, &mut input);
        assert_eq!(outcome.fired, 2);
        assert_eq!(s.projectiles.len(), 2);
        // Nose was (430, 300); one tick of travel at 3 units.
        for p in &s.projectiles {
            assert!((p.position - Vec2::new(433.0, 300.0)).length() < EPS);
        }
        assert_eq!(input.pending_fire, 0);
    }

    #[test]
    fn off_field_entities_are_pruned() {
        let mut s = session();
        s.projectiles.push(projectile(798.0, 50.0, 10.0, 0.0));
        s.asteroids.push(asteroid(50.0, -15.0, 10.0, 0.0, -1.0));
        s.asteroids.push(asteroid(50.0, 50.0, 10.0, 0.0, -1.0));

        step(&mut s, &mut InputState::default());

        assert!(s.projectiles.is_empty());
        assert_eq!(s.asteroids.len(), 1);
        assert_eq!(s.asteroids[0].position, Vec2::new(50.0, 49.0));
    }

    #[test]
    fn shrunken_field_prunes_against_new_bounds() {
        let mut s = session();
        s.asteroids.push(asteroid(700.0, 300.0, 10.0, 0.0, 0.0));
        s.asteroids.push(asteroid(600.0, 300.0, 10.0, 0.0, 0.0));
        s.projectiles.push(projectile(400.0, 550.0, 0.0, 0.0));
        s.projectiles.push(projectile(400.0, 450.0, 0.0, 0.0));

        let smaller = FieldBounds::new(640.0, 480.0);
        s.step(&mut InputState::default(), smaller, &GameConfig::default());

        assert_eq!(s.asteroids.len(), 1);
        assert_eq!(s.asteroids[0].position, Vec2::new(600.0, 300.0));
        assert_eq!(s.projectiles.len(), 1);
        assert_eq!(s.projectiles[0].position, Vec2::new(400.0, 450.0));
    }

    #[test]
    fn outside_flag_is_stable_while_drifting_away() {
        let b = bounds();
        let mut a = asteroid(-31.0, 200.0, 30.0, -1.0, 0.0);
        for _ in 0..50 {
            assert!(b.is_outside(a.position, a.radius));
            a.integrate();
        }
    }

    #[test]
    fn entity_straddling_edge_is_kept() {
        let b = bounds();
        assert!(!b.is_outside(Vec2::new(-30.0, 200.0), 30.0));
        assert!(!b.is_outside(Vec2::new(830.0, 200.0), 30.0));
        assert!(b.is_outside(Vec2::new(830.5, 200.0), 30.0));
        assert!(b.is_outside(Vec2::new(400.0, 665.0), 60.0));
    }

    #[test]
    fn asteroid_cap_rejects_extra_spawns() {
        let mut s = session();
        assert!(s.push_asteroid(asteroid(0.0, 0.0, 10.0, 1.0, 0.0), Some(1)));
        assert!(!s.push_asteroid(asteroid(0.0, 0.0, 10.0, 1.0, 0.0), Some(1)));
        assert!(s.push_asteroid(asteroid(0.0, 0.0, 10.0, 1.0, 0.0), None));
        assert_eq!(s.asteroids.len(), 2);
    }

    #[test]
    fn snapshot_mirrors_session() {
        let mut s = session();
        s.asteroids.push(asteroid(10.0, 20.0, 15.0, 1.0, 0.0));
        s.score = 30;
        let snap = s.snapshot();
        assert_eq!(snap.score, 30);
        assert_eq!(snap.asteroids, vec![Disc::new(Vec2::new(10.0, 20.0), 15.0)]);
        assert_eq!(snap.ship.hull, s.ship.compute_hull_vertices());
        assert!(!snap.game_over);
    }
}
