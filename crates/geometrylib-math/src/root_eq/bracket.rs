use super::StepError;
use nalgebra::Vector2;

/// Pair of adjacent sample indices, `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub low: usize,
    pub high: usize,
}

impl Bracket {
    pub const fn new(low: usize, high: usize) -> Self {
        Self { low, high }
    }

    /// Returns true if either end is the first or last of `len` samples.
    pub fn touches_boundary(&self, len: usize) -> bool {
        self.low == 0 || self.high + 1 >= len
    }

    /// Midpoint between the x-coordinates of both ends.
    pub fn midpoint(&self, samples: &[Vector2<f64>]) -> f64 {
        0.5 * (samples[self.low].x + samples[self.high].x)
    }

    /// Slope of the line through both ends.
    pub fn slope(&self, samples: &[Vector2<f64>]) -> f64 {
        let (low, high) = (samples[self.low], samples[self.high]);
        (low.y - high.y) / (low.x - high.x)
    }

    /// X-intercept of the line through both ends.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::DegenerateInput`] if the line is horizontal or vertical.
    pub fn secant_root(&self, samples: &[Vector2<f64>]) -> Result<f64, StepError> {
        let high = samples[self.high];
        let m = self.slope(samples);
        let n = high.y - high.x * m;
        let root = -n / m;
        if root.is_finite() {
            Ok(root)
        } else {
            Err(StepError::DegenerateInput {
                left: samples[self.low].x,
                right: high.x,
            })
        }
    }
}
