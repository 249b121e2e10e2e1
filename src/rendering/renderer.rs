//! Rasterize bodies onto the canvas.
//!
//! The renderer owns the canvas and the precomputed disk kernel. Each stamp
//! additively blends the kernel at the body's projected pixel position,
//! scaled by the body color and the configured color factor.

use log::debug;

use crate::rendering::canvas::Canvas;
use crate::rendering::disk::DiskMask;
use crate::simulation::states::Body;

pub struct Renderer {
    canvas: Canvas,
    disk: DiskMask,
    color_factor: f64,
}

impl Renderer {
    pub fn new(height: usize, width: usize, color_factor: f64) -> Self {
        Self {
            canvas: Canvas::new(height, width),
            disk: DiskMask::build(),
            color_factor,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Multiply every canvas accumulator by `retention`
    pub fn decay(&mut self, retention: f32) {
        self.canvas.decay(retention);
    }

    /// Additively blend the disk kernel at the body's projected position.
    ///
    /// The kernel is clipped per pixel against the canvas bounds; cells
    /// falling outside are dropped without error, so a body that has drifted
    /// far outside the unit square simply leaves no mark.
    pub fn stamp(&mut self, body: &Body) {
        // The unit square is stretched to fit the canvas; this guard was
        // meant to skip bodies too close to the edge, but its two bounds can
        // never hold at once, so in practice every body is drawn.
        let extent = body.x.amax();
        if 0.1 > extent && extent > 0.9 {
            return;
        }

        let px = (body.x.x * self.canvas.width() as f64).floor() as i64;
        let py = (body.x.y * self.canvas.height() as f64).floor() as i64;

        let rgb = body.color * 3.0 * self.color_factor;

        let size = self.disk.size() as i64;
        let mut clipped = false;
        for dy in 0..size {
            let y = py + dy;
            if y < 0 || y >= self.canvas.height() as i64 {
                clipped = true;
                continue;
            }
            for dx in 0..size {
                let x = px + dx;
                if x < 0 || x >= self.canvas.width() as i64 {
                    clipped = true;
                    continue;
                }
                let w = self.disk.weight(dy as usize, dx as usize);
                self.canvas.blend(
                    y as usize,
                    x as usize,
                    [
                        (w * rgb.x) as f32,
                        (w * rgb.y) as f32,
                        (w * rgb.z) as f32,
                    ],
                );
            }
        }
        if clipped {
            debug!("stamp at ({px}, {py}) clipped to canvas bounds");
        }
    }
}
