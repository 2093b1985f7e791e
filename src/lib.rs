//! Asteroids game library
//!
//! A ship rotates and thrusts around a fixed field, fires projectiles, and must
//! destroy or dodge asteroids that drift in from the edges.  The simulation
//! core (geometry, entities, spawner, step) is plain Rust driven by Bevy
//! systems; input and rendering are separate plugins layered on top.

pub mod asteroid;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod player;
pub mod rendering;
pub mod simulation;
