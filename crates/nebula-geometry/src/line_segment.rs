//! Finite line segments between two points.

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

macro_rules! impl_line_segment {
    ($(#[$meta:meta])* $name:ident, $scalar:ty, $vec3:ty) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            /// First end point, at parameter `t = 0`.
            pub a: $vec3,
            /// Second end point, at parameter `t = 1`.
            pub b: $vec3,
        }

        impl $name {
            /// Create a segment from its two end points.
            pub fn new(a: $vec3, b: $vec3) -> Self {
                Self { a, b }
            }

            /// The vector `b - a`.
            pub fn direction(&self) -> $vec3 {
                self.b - self.a
            }

            /// Point at parameter `t` of `a + t * (b - a)`.
            pub fn at(&self, t: $scalar) -> $vec3 {
                self.a + (self.b - self.a) * t
            }

            /// Euclidean length of the segment.
            pub fn length(&self) -> $scalar {
                self.a.distance(self.b)
            }
        }
    };
}

impl_line_segment!(
    /// A single-precision line segment.
    LineSegment,
    f32,
    Vec3
);

impl_line_segment!(
    /// A double-precision line segment.
    DLineSegment,
    f64,
    DVec3
);
