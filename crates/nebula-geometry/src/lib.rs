//! Bounding volumes, intersection tests, frustum culling, and point-in-polygon
//! queries for the Nebula Engine.
//!
//! Vector and matrix arithmetic comes from [`glam`]. This crate layers the
//! spatial-query subsystem on top of it:
//!
//! - **Primitives**: [`Aabb`]/[`DAabb`]/[`IAabb`], [`Plane`], [`Ray`],
//!   [`Sphere`], [`LineSegment`] and their double-precision twins.
//! - **Intersection routines**: slab-method ray/box tests, Möller–Trumbore
//!   ray/triangle tests and friends in [`intersection::f32`] and
//!   [`intersection::f64`].
//! - **Frustum culling**: [`Culler`] and [`FrustumIntersection`] extract six
//!   planes from a clip matrix; [`FrustumRayBuilder`] and [`RayCaster`] build
//!   per-pixel view rays from the same matrix.
//! - **Polygon containment**: [`PolygonPointIntersection`] and
//!   [`PolygonsPointIntersection`] answer even-odd point queries through a
//!   static interval tree over edge y-spans.
//!
//! Degenerate input (zero-length directions, axis-parallel rays, coincident
//! points) is not rejected. Results follow IEEE-754 infinity/NaN propagation,
//! which the slab method in particular relies on.
//!
//! ```rust
//! use glam::Vec3;
//! use nebula_geometry::{Aabb, Ray};
//!
//! let unit = Aabb::new(Vec3::ZERO, Vec3::ONE);
//! let ray = Ray::new(Vec3::new(-1.0, 0.5, 0.5), Vec3::X);
//! let t = unit.intersect_ray(&ray).unwrap();
//! assert_eq!((t.x, t.y), (1.0, 2.0));
//! ```

mod aabb;
mod error;
pub mod frustum;
pub mod intersection;
mod layout;
mod line_segment;
mod plane;
pub mod polygon;
mod ray;
mod sphere;

pub use aabb::{Aabb, DAabb, IAabb};
pub use error::GeometryError;
pub use frustum::{
    Containment, Culler, DepthRange, FrustumIntersection, FrustumPlane, FrustumRayBuilder,
    PlaneMask, RayCaster,
};
pub use intersection::{SegmentAabIntersection, TriangleRegion};
pub use layout::ByteLayout;
pub use line_segment::{DLineSegment, LineSegment};
pub use plane::{DPlane, Plane};
pub use polygon::{PolygonPointIntersection, PolygonScratch, PolygonSet, PolygonsPointIntersection};
pub use ray::{DRay, Ray};
pub use sphere::{DSphere, Sphere};
