use std::time::Instant;
use crate::configuration::config::{ParametersConfig, RenderConfig, ScenarioConfig};
use crate::rendering::stream::FrameStream;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, System, NVec2, NVec3, BODY_COUNT};

/// Helper to build a manual three-body System
fn make_system() -> System {
    let positions = [[0.35, 0.4], [0.6, 0.55], [0.45, 0.7]];
    let bodies = std::array::from_fn(|i| Body {
        x: positions[i].into(),
        v: NVec2::zeros(),
        m: 1.0,
        color: NVec3::new(0.6, 0.4, 0.8),
    });
    System { bodies, t: 0.0 }
}

pub fn bench_forces() {
    let sys = make_system();
    let forces = ForceSet::new().with(NewtonianGravity {
        G: 1.0e-4,
        eps2: 0.0,
    });
    let mut out = [NVec2::zeros(); BODY_COUNT];

    // Warm up
    forces.accumulate_forces(sys.t, &sys, &mut out);

    let iters = 1_000_000u32;
    let t0 = Instant::now();
    for _ in 0..iters {
        forces.accumulate_forces(sys.t, &sys, &mut out);
    }
    let per_eval = t0.elapsed().as_secs_f64() / iters as f64;

    println!("force eval = {:8.1} ns", per_eval * 1e9);
}

pub fn bench_frames() {
    // Different canvas sizes to test
    let sizes = [(180u32, 360u32), (360, 720), (720, 1440)];
    let frames = 30;

    for (height, width) in sizes {
        let cfg = ScenarioConfig {
            render: RenderConfig {
                height,
                width,
                color_factor: 1.0,
                decay: 0.999,
                steps_per_frame: 30,
            },
            parameters: ParametersConfig::default(),
            bodies: None,
        };
        let scenario = Scenario::build_scenario(cfg).expect("benchmark scenario");
        let mut stream = FrameStream::new(scenario);

        // Warm up
        stream.next_frame();

        let t0 = Instant::now();
        for _ in 0..frames {
            stream.next_frame();
        }
        let per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        println!("{height:4} x {width:4}: {per_frame:8.6} s/frame");
    }
}
