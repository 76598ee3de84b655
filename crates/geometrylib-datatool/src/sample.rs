//! Element kinds that can be stored in a [`DataArray`](crate::DataArray).
use nalgebra::{Vector2, Vector3};

/// A single data point: an ordered tuple of `f64` coordinates.
pub trait Sample {
    /// Number of coordinates of every sample of this kind, or `None` when it is only known at
    /// runtime.
    const DIMENSIONS: Option<usize>;

    /// Coordinates of the sample, in dimension order.
    fn coords(&self) -> &[f64];
}

impl Sample for f64 {
    const DIMENSIONS: Option<usize> = Some(1);

    fn coords(&self) -> &[f64] {
        std::slice::from_ref(self)
    }
}

impl Sample for Vector2<f64> {
    const DIMENSIONS: Option<usize> = Some(2);

    fn coords(&self) -> &[f64] {
        self.as_slice()
    }
}

impl Sample for Vector3<f64> {
    const DIMENSIONS: Option<usize> = Some(3);

    fn coords(&self) -> &[f64] {
        self.as_slice()
    }
}

impl Sample for Box<[f64]> {
    const DIMENSIONS: Option<usize> = None;

    fn coords(&self) -> &[f64] {
        self
    }
}
