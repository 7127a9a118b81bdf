//! Spheres defined by a center and a radius.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::plane::{DPlane, Plane};

macro_rules! impl_sphere {
    ($(#[$meta:meta])* $name:ident, $scalar:ty, $vec3:ty, $plane:ident, $routines:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// Center point.
            pub center: $vec3,
            /// Radius. Negative radii are not rejected.
            pub radius: $scalar,
        }

        impl $name {
            /// Create a sphere from its center and radius.
            pub fn new(center: $vec3, radius: $scalar) -> Self {
                Self { center, radius }
            }

            /// Copy of this sphere moved by `delta`.
            pub fn translate(&self, delta: $vec3) -> Self {
                Self {
                    center: self.center + delta,
                    radius: self.radius,
                }
            }

            /// Whether `point` lies inside or on the sphere.
            pub fn contains_point(&self, point: $vec3) -> bool {
                self.center.distance_squared(point) <= self.radius * self.radius
            }

            /// Whether the two spheres overlap or touch.
            pub fn intersects_sphere(&self, other: &Self) -> bool {
                let reach = self.radius + other.radius;
                self.center.distance_squared(other.center) <= reach * reach
            }

            /// Whether the sphere touches `plane`.
            pub fn intersects_plane(&self, plane: &$plane) -> bool {
                crate::intersection::$routines::test_plane_sphere(
                    plane.as_vec4(),
                    self.center,
                    self.radius,
                )
            }
        }
    };
}

impl_sphere!(
    /// A single-precision sphere.
    Sphere,
    f32,
    Vec3,
    Plane,
    f32
);

impl_sphere!(
    /// A double-precision sphere.
    DSphere,
    f64,
    DVec3,
    DPlane,
    f64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_keeps_radius() {
        let s = Sphere::new(Vec3::ZERO, 2.0).translate(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.center, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(s.radius, 2.0);
    }

    #[test]
    fn test_contains_point_includes_surface() {
        let s = DSphere::new(DVec3::ZERO, 1.0);
        assert!(s.contains_point(DVec3::X));
        assert!(!s.contains_point(DVec3::new(1.0, 0.1, 0.0)));
    }

    #[test]
    fn test_intersects_sphere() {
        let a = Sphere::new(Vec3::ZERO, 1.0);
        assert!(a.intersects_sphere(&Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0)));
        assert!(!a.intersects_sphere(&Sphere::new(Vec3::new(2.5, 0.0, 0.0), 1.0)));
    }

    #[test]
    fn test_contained_and_identical_spheres_intersect() {
        let outer = Sphere::new(Vec3::ZERO, 10.0);
        assert!(outer.intersects_sphere(&Sphere::new(Vec3::X, 1.0)));
        assert!(Sphere::new(Vec3::X, 1.0).intersects_sphere(&outer));
        assert!(outer.intersects_sphere(&outer));
    }

    #[test]
    fn test_intersects_unnormalized_plane() {
        let ground = Plane::new(0.0, 4.0, 0.0, 0.0);
        assert!(Sphere::new(Vec3::new(0.0, 0.9, 0.0), 1.0).intersects_plane(&ground));
        assert!(!Sphere::new(Vec3::new(0.0, 1.5, 0.0), 1.0).intersects_plane(&ground));
    }

    #[test]
    fn test_intersects_plane() {
        let ground = Plane::from_point_normal(Vec3::ZERO, Vec3::Y);
        assert!(Sphere::new(Vec3::new(0.0, 0.5, 0.0), 1.0).intersects_plane(&ground));
        assert!(!Sphere::new(Vec3::new(0.0, 3.0, 0.0), 1.0).intersects_plane(&ground));
    }
}
