//! Ship and projectile state plus their per-tick update rules.
//!
//! Systems that drive this state live in the sibling modules:
//! - [`super::control`]: input record consumed by [`Ship::apply_control`]
//! - [`super::rendering`]: ship outline and projectile drawing

use super::control::InputState;
use crate::config::GameConfig;
use crate::geometry::Disc;
use bevy::math::Vec2;

// ── Ship ───────────────────────────────────────────────────────────────────────

/// Local-space hull dimensions.  The nose points along local +x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipHull {
    pub nose_length: f32,
    pub tail_length: f32,
    pub half_width: f32,
}

impl ShipHull {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            nose_length: config.ship_nose_length,
            tail_length: config.ship_tail_length,
            half_width: config.ship_half_width,
        }
    }

    /// Local-space triangle: nose tip, then the two tail corners.
    pub fn local_vertices(&self) -> [Vec2; 3] {
        [
            Vec2::new(self.nose_length, 0.0),
            Vec2::new(-self.tail_length, -self.half_width),
            Vec2::new(-self.tail_length, self.half_width),
        ]
    }

    /// Radius of the largest circle that fits inside the hull.
    ///
    /// Hull collision only tests edges, so any asteroid smaller than this could
    /// sit inside the ship unnoticed.
    pub fn inradius(&self) -> f32 {
        let length = self.nose_length + self.tail_length;
        let side = length.hypot(self.half_width);
        self.half_width * length / (self.half_width + side)
    }
}

impl Default for ShipHull {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

/// The player ship.  Exactly one lives per session and it is never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub position: Vec2,
    pub velocity: Vec2,
    /// Heading in radians; 0 points along +x.
    pub rotation: f32,
    pub hull: ShipHull,
}

impl Ship {
    /// A stationary ship at `position`, heading along +x.
    pub fn new(position: Vec2, hull: ShipHull) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            hull,
        }
    }

    /// Unit vector along the current heading.
    pub fn heading(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    /// World-space nose tip, where projectiles are launched from.
    pub fn nose(&self) -> Vec2 {
        self.position + self.heading() * self.hull.nose_length
    }

    /// World-space collision triangle: each local vertex rotated by the
    /// heading, then offset by the position.
    pub fn compute_hull_vertices(&self) -> [Vec2; 3] {
        let rot = self.heading();
        self.hull
            .local_vertices()
            .map(|local| self.position + rot.rotate(local))
    }

    /// Apply one tick of control input.
    ///
    /// Thrust *sets* the velocity to full speed along the heading, discarding
    /// any drift.  Without thrust the velocity decays by `friction`.  Right
    /// rotation wins when both rotate flags are held.
    pub fn apply_control(&mut self, input: &InputState, config: &GameConfig) {
        if input.thrust {
            self.velocity = self.heading() * config.ship_speed;
        } else {
            self.velocity *= config.friction;
        }

        if input.rotate_right {
            self.rotation += config.rotational_speed;
        } else if input.rotate_left {
            self.rotation -= config.rotational_speed;
        }
    }

    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    /// Launch a projectile from the nose along the current heading.
    pub fn fire(&self, config: &GameConfig) -> Projectile {
        Projectile {
            position: self.nose(),
            velocity: self.heading() * config.projectile_speed,
            radius: config.projectile_radius,
        }
    }
}

// ── Projectile ─────────────────────────────────────────────────────────────────

/// A fired round.  Flies in a straight line until it leaves the field or hits
/// an asteroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Projectile {
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    pub fn disc(&self) -> Disc {
        Disc::new(self.position, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-4;

    fn ship_at(x: f32, y: f32) -> Ship {
        Ship::new(Vec2::new(x, y), ShipHull::default())
    }

    fn thrusting() -> InputState {
        InputState {
            thrust: true,
            ..Default::default()
        }
    }

    fn triangle_area(v: [Vec2; 3]) -> f32 {
        ((v[1] - v[0]).perp_dot(v[2] - v[0]) * 0.5).abs()
    }

    #[test]
    fn hull_at_zero_rotation_matches_local_offsets() {
        let ship = ship_at(100.0, 50.0);
        let v = ship.compute_hull_vertices();
        assert!((v[0] - Vec2::new(130.0, 50.0)).length() < EPS);
        assert!((v[1] - Vec2::new(90.0, 40.0)).length() < EPS);
        assert!((v[2] - Vec2::new(90.0, 60.0)).length() < EPS);
    }

    #[test]
    fn default_hull_inradius() {
        // Area 400 over semi-perimeter 10 + sqrt(1700).
        let expected = 400.0 / (10.0 + 1700f32.sqrt());
        assert!((ShipHull::default().inradius() - expected).abs() < EPS);
        assert!(ShipHull::default().inradius() < 10.0);
    }

    #[test]
    fn hull_rotates_about_ship_centre() {
        let mut ship = ship_at(0.0, 0.0);
        ship.rotation = FRAC_PI_2;
        let v = ship.compute_hull_vertices();
        assert!((v[0] - Vec2::new(0.0, 30.0)).length() < EPS);
        assert!((v[1] - Vec2::new(10.0, -10.0)).length() < EPS);
        assert!((v[2] - Vec2::new(-10.0, -10.0)).length() < EPS);
    }

    #[test]
    fn hull_is_never_degenerate() {
        let mut ship = ship_at(400.0, 300.0);
        for step in 0..64 {
            ship.rotation = -4.0 * PI + step as f32 * 0.37;
            let area = triangle_area(ship.compute_hull_vertices());
            assert!((area - 400.0).abs() < 0.05, "area {area} at step {step}");
        }
    }

    #[test]
    fn thrust_sets_velocity_rather_than_accumulating() {
        let cfg = GameConfig::default();
        let mut ship = ship_at(0.0, 0.0);
        ship.velocity = Vec2::new(-50.0, 20.0);
        ship.apply_control(&thrusting(), &cfg);
        assert!((ship.velocity - Vec2::new(3.0, 0.0)).length() < EPS);
    }

    #[test]
    fn friction_decays_without_reversing() {
        let cfg = GameConfig::default();
        let mut ship = ship_at(0.0, 0.0);
        ship.velocity = Vec2::new(3.0, -2.0);
        let idle = InputState::default();
        let mut last = ship.velocity.length();
        for _ in 0..200 {
            ship.apply_control(&idle, &cfg);
            let speed = ship.velocity.length();
            assert!(speed < last);
            assert!(ship.velocity.x > 0.0 && ship.velocity.y < 0.0);
            last = speed;
        }
    }

    #[test]
    fn right_rotation_takes_priority() {
        let cfg = GameConfig::default();
        let mut ship = ship_at(0.0, 0.0);
        let both = InputState {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        ship.apply_control(&both, &cfg);
        assert!((ship.rotation - cfg.rotational_speed).abs() < EPS);

        let left = InputState {
            rotate_left: true,
            ..Default::default()
        };
        ship.apply_control(&left, &cfg);
        ship.apply_control(&left, &cfg);
        assert!((ship.rotation + cfg.rotational_speed).abs() < EPS);
    }

    #[test]
    fn thrust_for_ten_ticks_advances_three_per_tick() {
        let cfg = GameConfig::default();
        let mut ship = ship_at(400.0, 300.0);
        let input = thrusting();
        for _ in 0..10 {
            ship.apply_control(&input, &cfg);
            ship.integrate();
        }
        assert!((ship.velocity - Vec2::new(3.0, 0.0)).length() < EPS);
        assert!((ship.position - Vec2::new(430.0, 300.0)).length() < EPS);

        ship.apply_control(&input, &cfg);
        ship.integrate();
        assert!((ship.position - Vec2::new(433.0, 300.0)).length() < EPS);
    }

    #[test]
    fn projectile_launches_from_nose_along_heading() {
        let cfg = GameConfig::default();
        let mut ship = ship_at(10.0, 10.0);
        ship.rotation = FRAC_PI_2;
        let p = ship.fire(&cfg);
        assert!((p.position - Vec2::new(10.0, 40.0)).length() < EPS);
        assert!((p.velocity - Vec2::new(0.0, 3.0)).length() < EPS);
        assert_eq!(p.radius, 5.0);
    }
}
