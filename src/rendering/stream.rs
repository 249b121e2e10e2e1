//! Lazy frame production.
//!
//! A `FrameStream` owns the simulator state and the renderer and produces an
//! unbounded sequence of frames. Each pulled frame is the canvas after
//! `steps_per_frame` micro-steps, where one micro-step decays the canvas,
//! advances the simulation by one fixed step, and stamps all three bodies.

use crate::rendering::canvas::Canvas;
use crate::rendering::renderer::Renderer;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::System;

pub struct FrameStream {
    system: System,
    forces: ForceSet,
    parameters: Parameters,
    renderer: Renderer,
    decay: f32,
    steps_per_frame: u32,
}

impl FrameStream {
    pub fn new(scenario: Scenario) -> Self {
        let render = scenario.render;
        Self {
            system: scenario.system,
            forces: scenario.forces,
            parameters: scenario.parameters,
            renderer: Renderer::new(
                render.height as usize,
                render.width as usize,
                render.color_factor,
            ),
            decay: render.decay,
            steps_per_frame: render.steps_per_frame,
        }
    }

    /// Current simulator state
    pub fn system(&self) -> &System {
        &self.system
    }

    /// Run one macro-step and borrow the resulting frame.
    ///
    /// The canvas persists between calls: decay is continuous and nothing is
    /// reset, so each frame carries the faded trails of the previous ones.
    pub fn next_frame(&mut self) -> &Canvas {
        for _ in 0..self.steps_per_frame {
            self.renderer.decay(self.decay);
            euler_integrator(&mut self.system, &self.forces, &self.parameters);
            for body in self.system.bodies.iter() {
                self.renderer.stamp(body);
            }
        }
        self.renderer.canvas()
    }
}

/// Owned-frame adapter: each `next()` runs one macro-step and clones the
/// canvas. The stream never terminates on its own; callers bound the
/// iteration themselves.
impl Iterator for FrameStream {
    type Item = Canvas;

    fn next(&mut self) -> Option<Canvas> {
        Some(self.next_frame().clone())
    }
}
