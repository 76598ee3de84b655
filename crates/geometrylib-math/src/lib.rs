use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;
use std::f64::consts::{PI, TAU};

pub mod plane;
pub mod root_eq;
pub mod vec;

pub use nalgebra::{Vector2, Vector3};

#[replace_float_literals(T::cast_from(literal))]
pub fn deg_to_rad<T: Float + CastFrom<f64>>(deg: T) -> T {
    deg / 180.0 * T::cast_from(PI)
}

#[replace_float_literals(T::cast_from(literal))]
pub fn rad_to_deg<T: Float + CastFrom<f64>>(rad: T) -> T {
    rad / T::cast_from(PI) * 180.0
}

/// Wraps an angle in radians into `[0, 2π)`.
#[replace_float_literals(T::cast_from(literal))]
pub fn normalize_angle<T: Float + CastFrom<f64>>(rad: T) -> T {
    let tau = T::cast_from(TAU);
    let wrapped = rad % tau;
    if wrapped >= 0.0 {
        return wrapped;
    }
    // Tiny negative remainders round up to exactly 2π
    let wrapped = wrapped + tau;
    if wrapped >= tau {
        0.0
    } else {
        wrapped
    }
}
