//! Soft-edged disk kernel used to rasterize a body.
//!
//! The mask is built on a (2r x 2r) grid with a linear falloff from 1.0 at
//! the center cell to 0.0 at the circle boundary, then the first row and
//! first column are trimmed away, leaving a (2r - 1) x (2r - 1) kernel. The
//! trim is asymmetric and is kept exactly as-is so stamped blobs land where
//! they always have.

/// Disk radius in pixels. The trimmed kernel is (2 * R - 1) cells square.
pub const DISK_RADIUS: usize = 4;

#[derive(Debug, Clone)]
pub struct DiskMask {
    size: usize,
    weights: Vec<f64>,
}

impl DiskMask {
    /// Precompute the trimmed kernel
    pub fn build() -> Self {
        let n = 2 * DISK_RADIUS;
        let full = Self::build_untrimmed();

        // Drop the first row and the first column
        let size = n - 1;
        let mut weights = Vec::with_capacity(size * size);
        for y in 1..n {
            for x in 1..n {
                weights.push(full[y * n + x]);
            }
        }

        Self { size, weights }
    }

    /// The untrimmed (2r x 2r) grid of falloff weights
    ///
    /// A cell at offset (x, y) with squared distance d2 to the center (r, r)
    /// gets weight `1 - d2/r^2` when d2 < r^2, and 0.0 outside the circle.
    pub fn build_untrimmed() -> Vec<f64> {
        let n = 2 * DISK_RADIUS;
        let r2 = (DISK_RADIUS * DISK_RADIUS) as f64;
        let mut weights = vec![0.0; n * n];
        for y in 0..n {
            for x in 0..n {
                let dx = x as f64 - DISK_RADIUS as f64;
                let dy = y as f64 - DISK_RADIUS as f64;
                let d2 = dx * dx + dy * dy;
                if d2 < r2 {
                    weights[y * n + x] = 1.0 - d2 / r2;
                }
            }
        }
        weights
    }

    /// Side length of the trimmed kernel
    pub fn size(&self) -> usize {
        self.size
    }

    /// Weight at kernel cell (y, x)
    #[inline]
    pub fn weight(&self, y: usize, x: usize) -> f64 {
        self.weights[y * self.size + x]
    }
}
