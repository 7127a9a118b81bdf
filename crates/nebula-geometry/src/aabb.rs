//! Axis-aligned bounding boxes in single, double and integer precision.
//!
//! A box is the closed region `min..=max` for overlap tests, but point
//! containment is half-open (`min <= p < max`) so that boxes tiling space
//! claim every point exactly once.
//!
//! A fresh box is [`Aabb::EMPTY`]: min at positive infinity and max at
//! negative infinity. Growing it with [`Aabb::union_point`] yields the tight
//! bounds of the added points.

use glam::{DMat4, DVec2, DVec3, IVec3, Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::intersection::SegmentAabIntersection;
use crate::line_segment::{DLineSegment, LineSegment};
use crate::plane::{DPlane, Plane};
use crate::ray::{DRay, Ray};
use crate::sphere::{DSphere, Sphere};

macro_rules! impl_float_aabb {
    (
        $(#[$meta:meta])*
        $name:ident, $scalar:ident, $vec2:ty, $vec3:ty, $mat4:ty,
        $plane:ident, $sphere:ident, $ray:ident, $segment:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
        pub struct $name {
            /// Minimum corner.
            pub min: $vec3,
            /// Maximum corner.
            pub max: $vec3,
        }

        impl Default for $name {
            fn default() -> Self {
                Self::EMPTY
            }
        }

        impl $name {
            /// The inverted box that contains nothing and is the identity of
            /// [`Self::union`].
            pub const EMPTY: Self = Self {
                min: <$vec3>::INFINITY,
                max: <$vec3>::NEG_INFINITY,
            };

            /// Create a box from its corners as given. No sorting is done.
            pub fn new(min: $vec3, max: $vec3) -> Self {
                Self { min, max }
            }

            /// Create a box from any two opposite corners.
            pub fn from_corners(a: $vec3, b: $vec3) -> Self {
                Self {
                    min: a.min(b),
                    max: a.max(b),
                }
            }

            /// Swap min and max per axis wherever they are inverted.
            pub fn correct_bounds(&mut self) {
                *self = Self::from_corners(self.min, self.max);
            }

            /// Whether `min <= max` on every axis.
            pub fn is_valid(&self) -> bool {
                self.min.cmple(self.max).all()
            }

            /// Minimum corner component `index` (0 = x, 1 = y, 2 = z).
            pub fn min_component(&self, index: usize) -> Result<$scalar, GeometryError> {
                component(self.min, index)
            }

            /// Maximum corner component `index` (0 = x, 1 = y, 2 = z).
            pub fn max_component(&self, index: usize) -> Result<$scalar, GeometryError> {
                component(self.max, index)
            }

            /// Set minimum corner component `index`.
            pub fn set_min_component(&mut self, index: usize, value: $scalar) -> Result<(), GeometryError> {
                set_component(&mut self.min, index, value)
            }

            /// Set maximum corner component `index`.
            pub fn set_max_component(&mut self, index: usize, value: $scalar) -> Result<(), GeometryError> {
                set_component(&mut self.max, index, value)
            }

            /// Center point.
            pub fn center(&self) -> $vec3 {
                (self.min + self.max) * 0.5
            }

            /// Half of the size on each axis.
            pub fn extent(&self) -> $vec3 {
                (self.max - self.min) * 0.5
            }

            /// Size on each axis.
            pub fn size(&self) -> $vec3 {
                self.max - self.min
            }

            /// Copy of this box moved by `delta`.
            pub fn translate(&self, delta: $vec3) -> Self {
                Self {
                    min: self.min + delta,
                    max: self.max + delta,
                }
            }

            /// Smallest box containing this box and `point`.
            pub fn union_point(&self, point: $vec3) -> Self {
                Self {
                    min: self.min.min(point),
                    max: self.max.max(point),
                }
            }

            /// Smallest box containing both boxes.
            pub fn union(&self, other: &Self) -> Self {
                Self {
                    min: self.min.min(other.min),
                    max: self.max.max(other.max),
                }
            }

            /// Overlap of both boxes, or [`Self::EMPTY`] when they are disjoint.
            pub fn intersection(&self, other: &Self) -> Self {
                let result = Self {
                    min: self.min.max(other.min),
                    max: self.max.min(other.max),
                };
                if result.is_valid() { result } else { Self::EMPTY }
            }

            /// Whether `other` lies entirely within this box.
            pub fn contains_aabb(&self, other: &Self) -> bool {
                other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
            }

            /// Whether `point` lies in the half-open region `min <= p < max`.
            pub fn contains_point(&self, point: $vec3) -> bool {
                point.cmpge(self.min).all() && point.cmplt(self.max).all()
            }

            /// Whether the boxes overlap. Touching faces count.
            pub fn intersects_aabb(&self, other: &Self) -> bool {
                crate::intersection::$scalar::test_aab_aab(self.min, self.max, other.min, other.max)
            }

            /// Whether `plane` passes through this box.
            pub fn intersects_plane(&self, plane: &$plane) -> bool {
                crate::intersection::$scalar::test_aab_plane(self.min, self.max, plane.as_vec4())
            }

            /// Whether `sphere` touches this box.
            pub fn intersects_sphere(&self, sphere: &$sphere) -> bool {
                crate::intersection::$scalar::test_aab_sphere(
                    self.min,
                    self.max,
                    sphere.center,
                    sphere.radius * sphere.radius,
                )
            }

            /// Whether `ray` hits this box.
            pub fn intersects_ray(&self, ray: &$ray) -> bool {
                crate::intersection::$scalar::test_ray_aab(ray.origin, ray.direction, self.min, self.max)
            }

            /// Near and far ray parameters where `ray` crosses this box.
            pub fn intersect_ray(&self, ray: &$ray) -> Option<$vec2> {
                crate::intersection::$scalar::intersect_ray_aab(ray.origin, ray.direction, self.min, self.max)
            }

            /// Classify `segment` against this box.
            pub fn intersect_line_segment(&self, segment: &$segment) -> SegmentAabIntersection<$vec2> {
                crate::intersection::$scalar::intersect_line_segment_aab(segment.a, segment.b, self.min, self.max)
            }

            /// Bounds of this box after an affine transform.
            ///
            /// Transforms the center and sums the absolute linear part against
            /// the extent, which yields the tight bounds of the eight
            /// transformed corners.
            pub fn transform(&self, m: &$mat4) -> Self {
                if !self.is_valid() {
                    return Self::EMPTY;
                }
                let center = m.transform_point3(self.center());
                let e = self.extent();
                let extent = m.x_axis.truncate().abs() * e.x
                    + m.y_axis.truncate().abs() * e.y
                    + m.z_axis.truncate().abs() * e.z;
                Self {
                    min: center - extent,
                    max: center + extent,
                }
            }
        }

        impl From<$sphere> for $name {
            fn from(sphere: $sphere) -> Self {
                let r = <$vec3>::splat(sphere.radius);
                Self::new(sphere.center - r, sphere.center + r)
            }
        }

        impl $sphere {
            /// Whether this sphere touches `aabb`.
            pub fn intersects_aabb(&self, aabb: &$name) -> bool {
                aabb.intersects_sphere(self)
            }
        }
    };
}

fn component<T: Copy, V: std::ops::Index<usize, Output = T>>(v: V, index: usize) -> Result<T, GeometryError> {
    match index {
        0..=2 => Ok(v[index]),
        _ => Err(GeometryError::InvalidComponent(index)),
    }
}

fn set_component<T, V: std::ops::IndexMut<usize, Output = T>>(
    v: &mut V,
    index: usize,
    value: T,
) -> Result<(), GeometryError> {
    match index {
        0..=2 => {
            v[index] = value;
            Ok(())
        }
        _ => Err(GeometryError::InvalidComponent(index)),
    }
}

impl_float_aabb!(
    /// A single-precision axis-aligned box.
    Aabb, f32, Vec2, Vec3, Mat4, Plane, Sphere, Ray, LineSegment
);

impl_float_aabb!(
    /// A double-precision axis-aligned box.
    DAabb, f64, DVec2, DVec3, DMat4, DPlane, DSphere, DRay, DLineSegment
);

/// An integer axis-aligned box, used for voxel and grid bounds.
///
/// Geometric queries against planes, spheres, rays and segments run in single
/// precision on the converted corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IAabb {
    /// Minimum corner.
    pub min: IVec3,
    /// Maximum corner.
    pub max: IVec3,
}

impl Default for IAabb {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl IAabb {
    /// The inverted box with min at `i32::MAX` and max at `i32::MIN`.
    pub const EMPTY: Self = Self {
        min: IVec3::splat(i32::MAX),
        max: IVec3::splat(i32::MIN),
    };

    /// Create a box from its corners as given. No sorting is done.
    pub fn new(min: IVec3, max: IVec3) -> Self {
        Self { min, max }
    }

    /// Create a box from any two opposite corners.
    pub fn from_corners(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Swap min and max per axis wherever they are inverted.
    pub fn correct_bounds(&mut self) {
        *self = Self::from_corners(self.min, self.max);
    }

    /// Whether `min <= max` on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Minimum corner component `index` (0 = x, 1 = y, 2 = z).
    pub fn min_component(&self, index: usize) -> Result<i32, GeometryError> {
        component(self.min, index)
    }

    /// Maximum corner component `index` (0 = x, 1 = y, 2 = z).
    pub fn max_component(&self, index: usize) -> Result<i32, GeometryError> {
        component(self.max, index)
    }

    /// Set minimum corner component `index`.
    pub fn set_min_component(&mut self, index: usize, value: i32) -> Result<(), GeometryError> {
        set_component(&mut self.min, index, value)
    }

    /// Set maximum corner component `index`.
    pub fn set_max_component(&mut self, index: usize, value: i32) -> Result<(), GeometryError> {
        set_component(&mut self.max, index, value)
    }

    /// Center point, which may fall between grid cells.
    pub fn center(&self) -> Vec3 {
        (self.min.as_vec3() + self.max.as_vec3()) * 0.5
    }

    /// Half of the size on each axis.
    pub fn extent(&self) -> Vec3 {
        (self.max.as_vec3() - self.min.as_vec3()) * 0.5
    }

    /// Size on each axis, saturating at `i32::MAX`. Zero for an invalid box.
    pub fn size(&self) -> IVec3 {
        if !self.is_valid() {
            return IVec3::ZERO;
        }
        self.max.saturating_sub(self.min)
    }

    /// Copy of this box moved by `delta`, saturating at the `i32` range.
    /// An invalid box stays [`Self::EMPTY`].
    pub fn translate(&self, delta: IVec3) -> Self {
        if !self.is_valid() {
            return Self::EMPTY;
        }
        Self {
            min: self.min.saturating_add(delta),
            max: self.max.saturating_add(delta),
        }
    }

    /// Smallest box containing this box and `point`.
    pub fn union_point(&self, point: IVec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Overlap of both boxes, or [`Self::EMPTY`] when they are disjoint.
    pub fn intersection(&self, other: &Self) -> Self {
        let result = Self {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        };
        if result.is_valid() { result } else { Self::EMPTY }
    }

    /// Whether `other` lies entirely within this box.
    pub fn contains_aabb(&self, other: &Self) -> bool {
        other.min.cmpge(self.min).all() && other.max.cmple(self.max).all()
    }

    /// Whether `point` lies in the half-open region `min <= p < max`.
    pub fn contains_point(&self, point: IVec3) -> bool {
        point.cmpge(self.min).all() && point.cmplt(self.max).all()
    }

    /// Whether the boxes overlap. Touching faces count.
    pub fn intersects_aabb(&self, other: &Self) -> bool {
        self.max.cmpge(other.min).all() && self.min.cmple(other.max).all()
    }

    /// Whether `plane` passes through this box.
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        self.as_aabb().intersects_plane(plane)
    }

    /// Whether `sphere` touches this box.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        self.as_aabb().intersects_sphere(sphere)
    }

    /// Whether `ray` hits this box.
    pub fn intersects_ray(&self, ray: &Ray) -> bool {
        self.as_aabb().intersects_ray(ray)
    }

    /// Near and far ray parameters where `ray` crosses this box.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Vec2> {
        self.as_aabb().intersect_ray(ray)
    }

    /// Classify `segment` against this box.
    pub fn intersect_line_segment(&self, segment: &LineSegment) -> SegmentAabIntersection<Vec2> {
        self.as_aabb().intersect_line_segment(segment)
    }

    /// Bounds after an affine transform, rounded outward to whole units.
    pub fn transform(&self, m: &Mat4) -> Self {
        if !self.is_valid() {
            return Self::EMPTY;
        }
        let bounds = self.as_aabb().transform(m);
        Self {
            min: bounds.min.floor().as_ivec3(),
            max: bounds.max.ceil().as_ivec3(),
        }
    }

    /// The same box in single precision.
    pub fn as_aabb(&self) -> Aabb {
        Aabb::new(self.min.as_vec3(), self.max.as_vec3())
    }
}

impl From<IAabb> for Aabb {
    fn from(aabb: IAabb) -> Self {
        aabb.as_aabb()
    }
}

impl From<Aabb> for DAabb {
    fn from(aabb: Aabb) -> Self {
        DAabb::new(aabb.min.as_dvec3(), aabb.max.as_dvec3())
    }
}
