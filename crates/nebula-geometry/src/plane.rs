//! Planes stored as the coefficients of `a*x + b*y + c*z + d = 0`.
//!
//! Planes are not normalized implicitly. [`Plane::distance`] returns the raw
//! equation value, which is only a Euclidean distance after
//! [`Plane::normalized`].

use glam::{DVec3, DVec4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

macro_rules! impl_plane {
    ($(#[$meta:meta])* $name:ident, $scalar:ty, $vec3:ty, $vec4:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// X coefficient of the normal.
            pub a: $scalar,
            /// Y coefficient of the normal.
            pub b: $scalar,
            /// Z coefficient of the normal.
            pub c: $scalar,
            /// Constant term.
            pub d: $scalar,
        }

        impl $name {
            /// Create a plane from its equation coefficients.
            pub fn new(a: $scalar, b: $scalar, c: $scalar, d: $scalar) -> Self {
                Self { a, b, c, d }
            }

            /// Plane through `point` with the given `normal`.
            pub fn from_point_normal(point: $vec3, normal: $vec3) -> Self {
                Self {
                    a: normal.x,
                    b: normal.y,
                    c: normal.z,
                    d: -normal.dot(point),
                }
            }

            /// Plane through three points.
            ///
            /// The normal is `(p1 - p0) x (p2 - p0)`, so counter-clockwise
            /// points (seen from the front) produce a normal facing the viewer.
            /// Collinear points yield a zero normal.
            pub fn from_points(p0: $vec3, p1: $vec3, p2: $vec3) -> Self {
                let normal = (p1 - p0).cross(p2 - p0);
                Self::from_point_normal(p0, normal)
            }

            /// Create a plane from `(a, b, c, d)`.
            pub fn from_vec4(v: $vec4) -> Self {
                Self::new(v.x, v.y, v.z, v.w)
            }

            /// The coefficients as `(a, b, c, d)`.
            pub fn as_vec4(&self) -> $vec4 {
                <$vec4>::new(self.a, self.b, self.c, self.d)
            }

            /// The (possibly non-unit) normal `(a, b, c)`.
            pub fn normal(&self) -> $vec3 {
                <$vec3>::new(self.a, self.b, self.c)
            }

            /// Copy of this plane scaled so that its normal has unit length.
            pub fn normalized(&self) -> Self {
                let inv_len = 1.0 / self.normal().length();
                Self {
                    a: self.a * inv_len,
                    b: self.b * inv_len,
                    c: self.c * inv_len,
                    d: self.d * inv_len,
                }
            }

            /// Value of the plane equation at `point`.
            pub fn distance(&self, point: $vec3) -> $scalar {
                self.a * point.x + self.b * point.y + self.c * point.z + self.d
            }
        }
    };
}

impl_plane!(
    /// A single-precision plane.
    Plane,
    f32,
    Vec3,
    Vec4
);

impl_plane!(
    /// A double-precision plane.
    DPlane,
    f64,
    DVec3,
    DVec4
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_point_normal() {
        let plane = Plane::from_point_normal(Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
        assert_eq!(plane.as_vec4(), Vec4::new(0.0, 1.0, 0.0, -2.0));
        assert_eq!(plane.distance(Vec3::new(5.0, 3.0, -1.0)), 1.0);
    }

    #[test]
    fn test_from_points_winding_sets_orientation() {
        let ccw = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!(ccw.distance(Vec3::Z) > 0.0);

        let cw = Plane::from_points(Vec3::ZERO, Vec3::Y, Vec3::X);
        assert!(cw.distance(Vec3::Z) < 0.0);
    }

    #[test]
    fn test_distance_is_raw_until_normalized() {
        let plane = DPlane::new(0.0, 0.0, 2.0, -4.0);
        let p = DVec3::new(0.0, 0.0, 5.0);
        assert_eq!(plane.distance(p), 6.0);
        assert_eq!(plane.normalized().distance(p), 3.0);
    }

    #[test]
    fn test_normalizing_zero_normal_is_not_finite() {
        let plane = Plane::new(0.0, 0.0, 0.0, 1.0);
        assert!(!plane.normalized().d.is_finite());
    }
}
