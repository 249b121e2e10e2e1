//! Core state types for the three-body simulation.
//!
//! Defines the body/system structs:
//! - `Body` using `NVec2` for position and velocity, `NVec3` for color
//! - `System` holding the fixed, ordered array of three bodies and the
//!   current simulation time `t`.

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

/// Number of bodies in a system. The whole pipeline is specialized to three.
pub const BODY_COUNT: usize = 3;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, unit-square coordinates (not clamped)
    pub v: NVec2, // velocity
    pub m: f64, // mass
    pub color: NVec3, // display color, fixed at creation
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: [Body; BODY_COUNT], // ordered; indices are never reordered
    pub t: f64, // time
}
