//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`RenderConfig`]     – canvas dimensions and stamp/decay settings
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – optional explicit initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! render:
//!   height: 360             # canvas height in pixels
//!   width: 720              # canvas width in pixels
//!   color_factor: 0.005     # 1.0 when the consumer rescales to 8-bit
//!   decay: 0.999            # canvas retention per micro-step
//!   steps_per_frame: 30     # micro-steps per emitted frame
//!
//! parameters:
//!   h0: 0.01                # fixed step size
//!   seed: 42                # deterministic seed
//!   eps2: 0.0               # softening; 0 keeps the bare denominator
//!   G: 1.0e-4               # gravitational constant
//!
//! bodies:                   # optional; omitted -> seeded random placement
//!   - x: [ 0.5, 0.5 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.0
//!     color: [ 0.8, 0.3, 0.2 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation.

use serde::Deserialize;

fn default_color_factor() -> f64 {
    1.0
}

fn default_decay() -> f32 {
    0.999
}

fn default_steps_per_frame() -> u32 {
    30
}

fn default_h0() -> f64 {
    0.01
}

fn default_seed() -> u64 {
    42
}

fn default_g() -> f64 {
    1.0e-4
}

/// Canvas and stamping configuration
/// `height` and `width` are required; the rest default to the values above
#[derive(Deserialize, Debug, Clone)]
pub struct RenderConfig {
    pub height: u32, // canvas height in pixels, must be > 0
    pub width: u32,  // canvas width in pixels, must be > 0
    #[serde(default = "default_color_factor")]
    pub color_factor: f64, // scalar multiplier applied to every stamp
    #[serde(default = "default_decay")]
    pub decay: f32, // canvas retention factor per micro-step
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: u32, // micro-steps per emitted frame
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
#[allow(non_snake_case)]
pub struct ParametersConfig {
    #[serde(default = "default_h0")]
    pub h0: f64, // time step size
    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic seed to make runs reproducible
    #[serde(default)]
    pub eps2: f64, // softening - prevents singular forces at zero separation
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: default_h0(),
            seed: default_seed(),
            eps2: 0.0,
            G: default_g(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position `x` in unit-square coordinates
    pub v: Vec<f64>, // initial velocity `v` in units per time step
    pub m: f64,      // mass of the body
    pub color: Vec<f64>, // RGB intensities used when stamping the body
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub render: RenderConfig, // canvas dimensions and stamp/decay settings
    #[serde(default)]
    pub parameters: ParametersConfig, // global numerical and physical parameters
    #[serde(default)]
    pub bodies: Option<Vec<BodyConfig>>, // exactly three when given; random otherwise
}
