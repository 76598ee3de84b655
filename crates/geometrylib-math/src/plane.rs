//! Planes in 3D space, described by an origin and two spanning vectors.
use crate::vec::{angle_between, project};
use nalgebra::{Matrix3x4, Vector3};
use std::f64::consts::FRAC_PI_2;

/// Plane through `origin`, spanned by `u` and `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane3 {
    pub origin: Vector3<f64>,
    pub u: Vector3<f64>,
    pub v: Vector3<f64>,
}

impl Plane3 {
    pub const fn new(origin: Vector3<f64>, u: Vector3<f64>, v: Vector3<f64>) -> Self {
        Self { origin, u, v }
    }

    /// Normal vector `u × v`. Not normalized.
    pub fn normal(&self) -> Vector3<f64> {
        self.u.cross(&self.v)
    }

    /// Angle between the plane and a vector, in `[-π/2, π/2]`. 0 when the vector lies in the plane.
    pub fn angle_to_vector(&self, v: &Vector3<f64>) -> f64 {
        FRAC_PI_2 - angle_between(&self.normal(), v)
    }

    /// Angle between the normals of both planes, in `[0, π]`.
    pub fn angle_to_plane(&self, other: &Plane3) -> f64 {
        angle_between(&self.normal(), &other.normal())
    }

    /// Component of `v` lying in the plane.
    pub fn project_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        v - project(v, &self.normal())
    }

    /// Direction of the line where both planes intersect, expressed in `other`'s spanning
    /// vectors. Not normalized.
    ///
    /// When the planes are parallel, `other.u` is returned.
    pub fn intersection_direction(&self, other: &Plane3) -> Vector3<f64> {
        // Solve s·u₁ + t·v₁ = p·u₂ + q·v₂ down to a single row a·p + b·q = 0
        let m = Matrix3x4::from_columns(&[self.u, self.v, -other.u, -other.v]);
        let r0 = m.row(0).clone_owned();
        let r1 = m.row(1) * m[(0, 0)] - r0 * m[(1, 0)];
        let r2 = m.row(2) * m[(0, 0)] - r0 * m[(2, 0)];
        let (pivot, factor) = (r1[1], r2[1]);
        let r2 = r2 * pivot - r1 * factor;

        let (a, b) = (r2[2], r2[3]);
        if a == 0.0 {
            return other.u;
        }
        other.v - other.u * (b / a)
    }
}
