//! Rays with an origin point and an unnormalized direction.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

macro_rules! impl_ray {
    ($(#[$meta:meta])* $name:ident, $scalar:ty, $vec3:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// Start point of the ray.
            pub origin: $vec3,
            /// Direction of the ray. Not required to be normalized.
            pub direction: $vec3,
        }

        impl $name {
            /// Create a ray from an origin and a direction.
            pub fn new(origin: $vec3, direction: $vec3) -> Self {
                Self { origin, direction }
            }

            /// Point at parameter `t` of `origin + t * direction`.
            pub fn at(&self, t: $scalar) -> $vec3 {
                self.origin + self.direction * t
            }

            /// Copy of this ray with a unit-length direction.
            ///
            /// A zero direction yields NaN components.
            pub fn normalized(&self) -> Self {
                Self {
                    origin: self.origin,
                    direction: self.direction / self.direction.length(),
                }
            }
        }
    };
}

impl_ray!(
    /// A single-precision ray `origin + t * direction`.
    Ray,
    f32,
    Vec3
);

impl_ray!(
    /// A double-precision ray `origin + t * direction`.
    DRay,
    f64,
    DVec3
);
