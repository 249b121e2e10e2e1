//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with three bodies at t = 0)
//! - active force set (`ForceSet`)
//! - render settings, carried along for the frame stream

use anyhow::{bail, Result};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::configuration::config::{ScenarioConfig, BodyConfig, RenderConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{System, Body, NVec2, NVec3, BODY_COUNT};
use crate::simulation::forces::{ForceSet, NewtonianGravity};

/// Fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the numerical parameters, current system state, the set of
/// active force laws, and the render settings consumed by the frame stream.
pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
    pub render: RenderConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        if cfg.render.height == 0 || cfg.render.width == 0 {
            bail!(
                "canvas dimensions must be positive, got {}x{}",
                cfg.render.height,
                cfg.render.width
            );
        }

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            h0: p_cfg.h0,
            seed: p_cfg.seed,
            eps2: p_cfg.eps2,
            G: p_cfg.G,
        };

        // Bodies: explicit list when given, seeded random placement otherwise
        let bodies = match cfg.bodies {
            Some(list) => explicit_bodies(list)?,
            None => random_bodies(parameters.seed),
        };

        // Initial system state: bodies at t = 0
        let system = System {
            bodies,
            t: 0.0,
        };

        // Forces: construct a ForceSet and register Newtonian gravity
        let mut forces = ForceSet::new();
        forces = forces.with(NewtonianGravity {
            G: parameters.G,
            eps2: parameters.eps2,
        });

        Ok(Self {
            parameters,
            system,
            forces,
            render: cfg.render,
        })
    }
}

/// Map explicit `BodyConfig` entries to runtime bodies; exactly three required
fn explicit_bodies(list: Vec<BodyConfig>) -> Result<[Body; BODY_COUNT]> {
    let [a, b, c]: [BodyConfig; BODY_COUNT] = list
        .try_into()
        .map_err(|l: Vec<BodyConfig>| {
            anyhow::anyhow!("expected exactly {} bodies, got {}", BODY_COUNT, l.len())
        })?;
    Ok([to_body(a)?, to_body(b)?, to_body(c)?])
}

fn to_body(bc: BodyConfig) -> Result<Body> {
    if bc.x.len() != 2 || bc.v.len() != 2 {
        bail!("body position and velocity must be 2-component vectors");
    }
    if bc.color.len() != 3 {
        bail!("body color must be a 3-component vector");
    }
    Ok(Body {
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        m: bc.m,
        color: NVec3::new(bc.color[0], bc.color[1], bc.color[2]),
    })
}

/// Seeded random placement: positions uniform in [0.25, 0.75), velocities
/// zero, unit masses, colors uniform in [0.2, 0.9) per channel. No
/// center-of-mass recentering is applied.
fn random_bodies(seed: u64) -> [Body; BODY_COUNT] {
    let mut rng = Pcg64Mcg::seed_from_u64(seed);
    std::array::from_fn(|_| Body {
        x: NVec2::new(rng.gen_range(0.25..0.75), rng.gen_range(0.25..0.75)),
        v: NVec2::zeros(),
        m: 1.0,
        color: NVec3::new(
            rng.gen_range(0.2..0.9),
            rng.gen_range(0.2..0.9),
            rng.gen_range(0.2..0.9),
        ),
    })
}
