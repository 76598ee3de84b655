//! Vector helpers on top of [`nalgebra`] that are not provided by it directly.
//!
//! Construction, addition, scaling, magnitude, normalization, dot and cross products are used
//! straight from [`nalgebra::Vector2`] and [`nalgebra::Vector3`].
use nalgebra::{Rotation2, Rotation3, SVector, Unit, Vector2, Vector3};

/// Unsigned angle between two vectors, in `[0, π]`.
///
/// Rounding errors pushing the cosine outside of `[-1, 1]` are clamped away. Returns 0 if either
/// vector has zero length.
pub fn angle_between<const D: usize>(a: &SVector<f64, D>, b: &SVector<f64, D>) -> f64 {
    a.angle(b)
}

/// Determinant of the 2x2 matrix `[a b]`.
pub fn determinant2(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    a.perp(b)
}

/// Angle between two vectors, positive when `b` lies clockwise from `a`.
pub fn signed_angle2(a: &Vector2<f64>, b: &Vector2<f64>) -> f64 {
    let angle = angle_between(a, b);
    if determinant2(a, b) > 0.0 {
        -angle
    } else {
        angle
    }
}

/// Rotates `v` clockwise by `angle` radians.
pub fn rotate2(v: &Vector2<f64>, angle: f64) -> Vector2<f64> {
    Rotation2::new(-angle) * v
}

/// Rotates `v` by `angle` radians around `axis`, following the right-hand rule.
pub fn rotate_about_axis(v: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle) * v
}

/// Projection of `v` onto the direction of `onto`.
pub fn project<const D: usize>(v: &SVector<f64, D>, onto: &SVector<f64, D>) -> SVector<f64, D> {
    let direction = onto.normalize();
    direction * v.dot(&direction)
}
