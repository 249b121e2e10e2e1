//! Force contributors for the three-body engine
//!
//! Defines the force trait and pairwise Newtonian gravity.

use crate::simulation::states::{System, NVec2, BODY_COUNT};

/// Collection of force terms
/// Each term implements [`Force`] and their contributions are summed
/// into a single net-force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total net forces at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, t: f64, sys: &System, out: &mut [NVec2; BODY_COUNT]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.net_forces(t, sys, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn net_forces(&self, t: f64, sys: &System, out: &mut [NVec2; BODY_COUNT]);
}

/// Pairwise Newtonian gravity
///
/// The force of body `j` on body `i` is `G * m_i * m_j / d^2` times the raw
/// displacement `x_j - x_i`; the displacement is not normalized, so the
/// magnitude falls off as 1/d rather than 1/d^2. `eps2` is added to the
/// squared separation; at the default of zero, coincident bodies produce a
/// non-finite force.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Force for NewtonianGravity {
    fn net_forces(&self, _t: f64, sys: &System, out: &mut [NVec2; BODY_COUNT]) {
        // Loop over each unordered pair (i, j) with i < j. The reaction force
        // is applied by negation, so each pair is evaluated exactly once and
        // the three net forces always sum to zero.
        for i in 0..BODY_COUNT {
            // bi: body i (left side of the pair)
            let bi = &sys.bodies[i];

            for j in (i + 1)..BODY_COUNT {
                // bj: body j (right side of the pair)
                let bj = &sys.bodies[j];

                // r points from i to j: i is pulled along +r, j along -r
                let r = bj.x - bi.x;

                // Squared separation plus the softening floor
                let d2 = r.norm_squared() + self.eps2;

                // F_ij = G * m_i * m_j / d^2 * r
                let coef = self.G * bi.m * bj.m / d2;

                out[i] += coef * r;
                out[j] -= coef * r;
            }
        }
    }
}
