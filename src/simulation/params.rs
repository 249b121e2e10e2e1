//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - integration step size,
//! - softening and gravitational constant (`eps2`, `G`),
//! - deterministic random seed

#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct Parameters {
    pub h0: f64, // step size
    pub seed: u64, // deterministic seed
    pub eps2: f64, // softening
    pub G: f64, // gravitational constant
}
