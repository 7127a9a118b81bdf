//! Stateless intersection routines.
//!
//! Every routine exists once per precision, in [`f32`] over `glam::Vec*` and
//! in [`f64`] over `glam::DVec*`. The two modules are generated from the same
//! source and differ only in their scalar type.
//!
//! None of these routines guard against division by zero. Axis-parallel rays
//! rely on IEEE-754 infinities in the slab test, and degenerate input such as
//! a zero-length plane normal produces infinities or NaN rather than an error.
//! Tangent and grazing contacts count as intersections.

use serde::{Deserialize, Serialize};

/// Classification of a line segment against an axis-aligned box.
///
/// Every intersecting variant carries the `(near, far)` parameters of the
/// segment `p0 + t * (p1 - p0)` clamped to `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SegmentAabIntersection<V> {
    /// The segment misses the box.
    Outside,
    /// Both end points lie inside the box.
    Inside(V),
    /// Exactly one end point lies inside the box. The crossing is at `near`
    /// when `p0` is outside, otherwise at `far`.
    OneIntersection(V),
    /// The segment enters and leaves the box.
    TwoIntersections(V),
}

impl<V: Copy> SegmentAabIntersection<V> {
    /// Whether the segment touches the box at all.
    pub fn is_intersecting(&self) -> bool {
        !matches!(self, Self::Outside)
    }

    /// The clamped `(near, far)` parameters, or `None` for [`Self::Outside`].
    pub fn params(&self) -> Option<V> {
        match *self {
            Self::Outside => None,
            Self::Inside(t) | Self::OneIntersection(t) | Self::TwoIntersections(t) => Some(t),
        }
    }
}

/// Which feature of a triangle the closest point to a query point lies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriangleRegion {
    /// One of the three corners.
    Vertex,
    /// The interior of an edge.
    Edge,
    /// The interior of the triangle.
    Face,
}

/// Closest point on a triangle, by Voronoi region, for any glam vector type.
macro_rules! impl_closest_point_on_triangle {
    ($(#[$meta:meta])* $name:ident, $vec:ty) => {
        $(#[$meta])*
        pub fn $name(v0: $vec, v1: $vec, v2: $vec, p: $vec) -> ($vec, TriangleRegion) {
            let ab = v1 - v0;
            let ac = v2 - v0;
            let ap = p - v0;
            let d1 = ab.dot(ap);
            let d2 = ac.dot(ap);
            if d1 <= 0.0 && d2 <= 0.0 {
                return (v0, TriangleRegion::Vertex);
            }

            let bp = p - v1;
            let d3 = ab.dot(bp);
            let d4 = ac.dot(bp);
            if d3 >= 0.0 && d4 <= d3 {
                return (v1, TriangleRegion::Vertex);
            }

            let vc = d1 * d4 - d3 * d2;
            if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
                return (v0 + ab * (d1 / (d1 - d3)), TriangleRegion::Edge);
            }

            let cp = p - v2;
            let d5 = ab.dot(cp);
            let d6 = ac.dot(cp);
            if d6 >= 0.0 && d5 <= d6 {
                return (v2, TriangleRegion::Vertex);
            }

            let vb = d5 * d2 - d1 * d6;
            if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
                return (v0 + ac * (d2 / (d2 - d6)), TriangleRegion::Edge);
            }

            let va = d3 * d6 - d5 * d4;
            if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
                let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
                return (v1 + (v2 - v1) * w, TriangleRegion::Edge);
            }

            let denom = 1.0 / (va + vb + vc);
            (v0 + ab * (vb * denom) + ac * (vc * denom), TriangleRegion::Face)
        }
    };
}

macro_rules! impl_intersections {
    ($scalar:ident, $vec2:ty, $vec3:ty, $vec4:ty) => {
        use super::{SegmentAabIntersection, TriangleRegion};

        /// Slab intersection of a ray with the box spanned by two opposite
        /// corners, returning the entry and exit parameters.
        ///
        /// A hit requires `near < far` and `far >= 0`; a ray starting inside
        /// the box reports a negative `near`.
        #[inline]
        pub fn intersect_ray_aab(
            origin: $vec3,
            dir: $vec3,
            corner_a: $vec3,
            corner_b: $vec3,
        ) -> Option<$vec2> {
            let inv_dir = <$vec3>::ONE / dir;
            let t_a = (corner_a - origin) * inv_dir;
            let t_b = (corner_b - origin) * inv_dir;
            let t_near = t_a.min(t_b).max_element();
            let t_far = t_a.max(t_b).min_element();
            if t_near < t_far && t_far >= 0.0 {
                Some(<$vec2>::new(t_near, t_far))
            } else {
                None
            }
        }

        /// Whether a ray hits the box spanned by two opposite corners.
        #[inline]
        pub fn test_ray_aab(origin: $vec3, dir: $vec3, corner_a: $vec3, corner_b: $vec3) -> bool {
            intersect_ray_aab(origin, dir, corner_a, corner_b).is_some()
        }

        /// Classify the segment `p0..p1` against the box `min..max`.
        pub fn intersect_line_segment_aab(
            p0: $vec3,
            p1: $vec3,
            min: $vec3,
            max: $vec3,
        ) -> SegmentAabIntersection<$vec2> {
            let inv_dir = <$vec3>::ONE / (p1 - p0);
            let t_a = (min - p0) * inv_dir;
            let t_b = (max - p0) * inv_dir;
            let t_near = t_a.min(t_b).max_element();
            let t_far = t_a.max(t_b).min_element();
            if !(t_near <= t_far && t_near <= 1.0 && t_far >= 0.0) {
                return SegmentAabIntersection::Outside;
            }

            let t = <$vec2>::new(t_near.max(0.0), t_far.min(1.0));
            match (t_near < 0.0, t_far > 1.0) {
                (true, true) => SegmentAabIntersection::Inside(t),
                (false, false) => SegmentAabIntersection::TwoIntersections(t),
                _ => SegmentAabIntersection::OneIntersection(t),
            }
        }

        /// Backface-culled Möller-Trumbore test returning the hit parameter.
        ///
        /// Only triangles whose vertices appear counter-clockwise when seen
        /// against `dir` are hit. Hits behind the origin are reported too;
        /// callers filter on the sign of `t` when they need to.
        pub fn intersect_ray_triangle(
            origin: $vec3,
            dir: $vec3,
            v0: $vec3,
            v1: $vec3,
            v2: $vec3,
            epsilon: $scalar,
        ) -> Option<$scalar> {
            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            let pvec = dir.cross(edge2);
            let det = edge1.dot(pvec);
            if det <= epsilon {
                return None;
            }
            let tvec = origin - v0;
            let u = tvec.dot(pvec);
            if u < 0.0 || u > det {
                return None;
            }
            let qvec = tvec.cross(edge1);
            let v = dir.dot(qvec);
            if v < 0.0 || u + v > det {
                return None;
            }
            Some(edge2.dot(qvec) / det)
        }

        /// Whether a ray hits the front face of a triangle.
        #[inline]
        pub fn test_ray_triangle(
            origin: $vec3,
            dir: $vec3,
            v0: $vec3,
            v1: $vec3,
            v2: $vec3,
            epsilon: $scalar,
        ) -> bool {
            intersect_ray_triangle(origin, dir, v0, v1, v2, epsilon).is_some()
        }

        /// Whether two boxes overlap. Touching faces count.
        #[inline]
        pub fn test_aab_aab(min_a: $vec3, max_a: $vec3, min_b: $vec3, max_b: $vec3) -> bool {
            max_a.cmpge(min_b).all() && min_a.cmple(max_b).all()
        }

        /// Whether the plane `(a, b, c, d)` passes through the box.
        pub fn test_aab_plane(min: $vec3, max: $vec3, plane: $vec4) -> bool {
            let normal = plane.truncate();
            let positive = <$vec3>::select(normal.cmpgt(<$vec3>::ZERO), max, min);
            let negative = <$vec3>::select(normal.cmpgt(<$vec3>::ZERO), min, max);
            let dist_n = normal.dot(negative) + plane.w;
            let dist_p = normal.dot(positive) + plane.w;
            dist_n <= 0.0 && dist_p >= 0.0
        }

        /// Whether the sphere touches the box, using the squared radius.
        pub fn test_aab_sphere(min: $vec3, max: $vec3, center: $vec3, radius_squared: $scalar) -> bool {
            let closest = center.clamp(min, max);
            center.distance_squared(closest) <= radius_squared
        }

        /// Euclidean signed distance from `point` to the plane `(a, b, c, d)`.
        #[inline]
        pub fn distance_point_plane(point: $vec3, plane: $vec4) -> $scalar {
            (plane.truncate().dot(point) + plane.w) / plane.truncate().length()
        }

        /// Whether the sphere touches the plane `(a, b, c, d)`.
        pub fn test_plane_sphere(plane: $vec4, center: $vec3, radius: $scalar) -> bool {
            let dist = distance_point_plane(center, plane);
            -radius <= dist && dist <= radius
        }

        /// Circle where the plane cuts the sphere, as `(center, radius)`.
        pub fn intersect_plane_sphere(plane: $vec4, center: $vec3, radius: $scalar) -> Option<$vec4> {
            let inv_len = 1.0 / plane.truncate().length();
            let unit_normal = plane.truncate() * inv_len;
            let dist = (plane.truncate().dot(center) + plane.w) * inv_len;
            if -radius <= dist && dist <= radius {
                let circle_center = center - unit_normal * dist;
                Some(circle_center.extend((radius * radius - dist * dist).sqrt()))
            } else {
                None
            }
        }

        /// Whether two solid spheres, given by squared radii, overlap or
        /// touch. A sphere inside another counts.
        pub fn test_sphere_sphere(
            center_a: $vec3,
            radius_squared_a: $scalar,
            center_b: $vec3,
            radius_squared_b: $scalar,
        ) -> bool {
            let reach = radius_squared_a + radius_squared_b + 2.0 * (radius_squared_a * radius_squared_b).sqrt();
            center_a.distance_squared(center_b) <= reach
        }

        /// Circle where the surfaces of two spheres meet, as
        /// `(center, radius)`.
        ///
        /// A sphere strictly inside another has no such circle. Concentric
        /// spheres produce NaN and report no intersection.
        pub fn intersect_sphere_sphere(
            center_a: $vec3,
            radius_squared_a: $scalar,
            center_b: $vec3,
            radius_squared_b: $scalar,
        ) -> Option<$vec4> {
            let d = center_b - center_a;
            let dist_squared = d.length_squared();
            let h = 0.5 + (radius_squared_a - radius_squared_b) / dist_squared;
            let r_i = radius_squared_a - h * h * dist_squared;
            if r_i >= 0.0 {
                Some((center_a + d * h).extend(r_i.sqrt()))
            } else {
                None
            }
        }

        /// Entry and exit parameters of a ray through a sphere.
        ///
        /// `dir` must be normalized. A ray starting inside the sphere reports
        /// a negative entry parameter.
        pub fn intersect_ray_sphere(
            origin: $vec3,
            dir: $vec3,
            center: $vec3,
            radius_squared: $scalar,
        ) -> Option<$vec2> {
            let l = center - origin;
            let tca = l.dot(dir);
            let d2 = l.length_squared() - tca * tca;
            if d2 > radius_squared {
                return None;
            }
            let thc = (radius_squared - d2).sqrt();
            let t0 = tca - thc;
            let t1 = tca + thc;
            if t0 < t1 && t1 >= 0.0 {
                Some(<$vec2>::new(t0, t1))
            } else {
                None
            }
        }

        /// Whether a ray with normalized `dir` hits a sphere.
        #[inline]
        pub fn test_ray_sphere(origin: $vec3, dir: $vec3, center: $vec3, radius_squared: $scalar) -> bool {
            intersect_ray_sphere(origin, dir, center, radius_squared).is_some()
        }

        /// Parameter at which a ray hits the front side of a plane.
        ///
        /// The plane is hit only when `dot(normal, dir) < epsilon` and the hit
        /// lies in front of the origin.
        pub fn intersect_ray_plane(
            origin: $vec3,
            dir: $vec3,
            plane: $vec4,
            epsilon: $scalar,
        ) -> Option<$scalar> {
            let normal = plane.truncate();
            let denom = normal.dot(dir);
            if denom < epsilon {
                let t = -(normal.dot(origin) + plane.w) / denom;
                if t >= 0.0 {
                    return Some(t);
                }
            }
            None
        }

        /// Whether the segment `p0..p1` touches a sphere.
        pub fn test_line_segment_sphere(p0: $vec3, p1: $vec3, center: $vec3, radius_squared: $scalar) -> bool {
            let d = p1 - p0;
            let u = (center - p0).dot(d) / d.length_squared();
            let closest = if u < 0.0 {
                p0
            } else if u > 1.0 {
                p1
            } else {
                p0 + d * u
            };
            closest.distance_squared(center) <= radius_squared
        }

        /// Whether the segment `p0..p1` crosses a triangle of either winding.
        ///
        /// Segments within `epsilon` of parallel to the triangle count only
        /// when they lie in its plane, regardless of where in that plane.
        pub fn test_line_segment_triangle(
            p0: $vec3,
            p1: $vec3,
            v0: $vec3,
            v1: $vec3,
            v2: $vec3,
            epsilon: $scalar,
        ) -> bool {
            let u = v1 - v0;
            let v = v2 - v0;
            let normal = u.cross(v);
            if normal == <$vec3>::ZERO {
                return false;
            }
            let dir = p1 - p0;
            let a = -normal.dot(p0 - v0);
            let b = normal.dot(dir);
            if b.abs() < epsilon {
                return a == 0.0;
            }
            let r = a / b;
            if !(0.0..=1.0).contains(&r) {
                return false;
            }

            let w = p0 + dir * r - v0;
            let (uu, uv, vv) = (u.dot(u), u.dot(v), v.dot(v));
            let (wu, wv) = (w.dot(u), w.dot(v));
            let d = uv * uv - uu * vv;
            let s = (uv * wv - vv * wu) / d;
            if !(0.0..=1.0).contains(&s) {
                return false;
            }
            let t = (uv * wu - uu * wv) / d;
            t >= 0.0 && s + t <= 1.0
        }

        impl_closest_point_on_triangle!(
            /// Closest point on the triangle `v0, v1, v2` to `p`, and the
            /// triangle feature it lies on.
            find_closest_point_on_triangle,
            $vec3
        );

        impl_closest_point_on_triangle!(
            /// Closest point on the 2D triangle `v0, v1, v2` to `p`, and the
            /// triangle feature it lies on.
            find_closest_point_on_triangle_2d,
            $vec2
        );

        /// General equation `(a, b, c)` of the 2D line through `p0` and
        /// `p1`, so that `a * x + b * y + c = 0`. Points to the left of
        /// `p0 -> p1` are on the positive side.
        #[inline]
        pub fn line_through(p0: $vec2, p1: $vec2) -> $vec3 {
            <$vec3>::new(p0.y - p1.y, p1.x - p0.x, (p0.x - p1.x) * p0.y + (p1.y - p0.y) * p0.x)
        }

        /// Euclidean signed distance from `point` to the line `(a, b, c)`.
        #[inline]
        pub fn distance_point_line(point: $vec2, line: $vec3) -> $scalar {
            (line.truncate().dot(point) + line.z) / line.truncate().length()
        }

        /// Parameter at which a 2D ray hits the front side of the line through
        /// `point` with `normal`.
        ///
        /// The line is hit only when `dot(normal, dir) < epsilon` and the hit
        /// lies in front of the origin.
        pub fn intersect_ray_line(
            origin: $vec2,
            dir: $vec2,
            point: $vec2,
            normal: $vec2,
            epsilon: $scalar,
        ) -> Option<$scalar> {
            let denom = normal.dot(dir);
            if denom < epsilon {
                let t = (point - origin).dot(normal) / denom;
                if t >= 0.0 {
                    return Some(t);
                }
            }
            None
        }

        /// Whether the line `(a, b, c)` touches a circle.
        pub fn test_line_circle(line: $vec3, center: $vec2, radius: $scalar) -> bool {
            let dist = distance_point_line(center, line);
            -radius <= dist && dist <= radius
        }

        /// Chord where the line `(a, b, c)` cuts a circle, as its midpoint and
        /// half length packed into `(x, y, half_length)`.
        pub fn intersect_line_circle(line: $vec3, center: $vec2, radius: $scalar) -> Option<$vec3> {
            let inv_len = 1.0 / line.truncate().length();
            let dist = (line.truncate().dot(center) + line.z) * inv_len;
            if -radius <= dist && dist <= radius {
                let foot = center - line.truncate() * (dist * inv_len);
                Some(foot.extend((radius * radius - dist * dist).sqrt()))
            } else {
                None
            }
        }

        /// Whether the line `(a, b, c)` passes through the rectangle
        /// `min..max`.
        pub fn test_aar_line(min: $vec2, max: $vec2, line: $vec3) -> bool {
            let normal = line.truncate();
            let positive = <$vec2>::select(normal.cmpgt(<$vec2>::ZERO), max, min);
            let negative = <$vec2>::select(normal.cmpgt(<$vec2>::ZERO), min, max);
            normal.dot(negative) + line.z <= 0.0 && normal.dot(positive) + line.z >= 0.0
        }

        /// Whether two rectangles overlap. Touching edges count.
        #[inline]
        pub fn test_aar_aar(min_a: $vec2, max_a: $vec2, min_b: $vec2, max_b: $vec2) -> bool {
            max_a.cmpge(min_b).all() && min_a.cmple(max_b).all()
        }

        /// Whether `point` lies inside or on the rectangle `min..max`.
        #[inline]
        pub fn test_point_aar(point: $vec2, min: $vec2, max: $vec2) -> bool {
            point.cmpge(min).all() && point.cmple(max).all()
        }

        /// Whether `point` lies inside or on a circle given by its squared
        /// radius.
        #[inline]
        pub fn test_point_circle(point: $vec2, center: $vec2, radius_squared: $scalar) -> bool {
            point.distance_squared(center) <= radius_squared
        }

        /// Whether a circle touches the rectangle `min..max`.
        pub fn test_aar_circle(min: $vec2, max: $vec2, center: $vec2, radius_squared: $scalar) -> bool {
            center.distance_squared(center.clamp(min, max)) <= radius_squared
        }

        /// Whether two solid circles, given by squared radii, overlap or
        /// touch. A circle inside another counts.
        pub fn test_circle_circle(
            center_a: $vec2,
            radius_squared_a: $scalar,
            center_b: $vec2,
            radius_squared_b: $scalar,
        ) -> bool {
            let reach = radius_squared_a + radius_squared_b + 2.0 * (radius_squared_a * radius_squared_b).sqrt();
            center_a.distance_squared(center_b) <= reach
        }

        /// Chord where the outlines of two circles meet, as its midpoint and
        /// half length packed into `(x, y, half_length)`.
        ///
        /// A circle strictly inside another has no such chord.
        pub fn intersect_circle_circle(
            center_a: $vec2,
            radius_squared_a: $scalar,
            center_b: $vec2,
            radius_squared_b: $scalar,
        ) -> Option<$vec3> {
            let d = center_b - center_a;
            let dist_squared = d.length_squared();
            let h = 0.5 + (radius_squared_a - radius_squared_b) / dist_squared;
            let r_i = radius_squared_a - h * h * dist_squared;
            if r_i >= 0.0 {
                Some((center_a + d * h).extend(r_i.sqrt()))
            } else {
                None
            }
        }

        /// Whether a circle touches a triangle of counter-clockwise winding,
        /// including a circle entirely inside it.
        pub fn test_circle_triangle(
            center: $vec2,
            radius_squared: $scalar,
            v0: $vec2,
            v1: $vec2,
            v2: $vec2,
        ) -> bool {
            let (c1, c2, c3) = (center - v0, center - v1, center - v2);
            let (c1_sqr, c2_sqr, c3_sqr) = (
                c1.length_squared() - radius_squared,
                c2.length_squared() - radius_squared,
                c3.length_squared() - radius_squared,
            );
            if c1_sqr <= 0.0 || c2_sqr <= 0.0 || c3_sqr <= 0.0 {
                return true;
            }

            let (e1, e2, e3) = (v1 - v0, v2 - v1, v0 - v2);
            if e1.perp_dot(c1) >= 0.0 && e2.perp_dot(c2) >= 0.0 && e3.perp_dot(c3) >= 0.0 {
                return true;
            }

            [(c1, e1, c1_sqr), (c2, e2, c2_sqr), (c3, e3, c3_sqr)]
                .into_iter()
                .any(|(c, e, c_sqr)| {
                    let k = c.dot(e);
                    let len = e.length_squared();
                    k >= 0.0 && k <= len && c_sqr * len <= k * k
                })
        }

        /// Entry and exit parameters of a 2D ray through a circle.
        ///
        /// `dir` must be normalized. A ray starting inside the circle reports
        /// a negative entry parameter.
        pub fn intersect_ray_circle(
            origin: $vec2,
            dir: $vec2,
            center: $vec2,
            radius_squared: $scalar,
        ) -> Option<$vec2> {
            let l = center - origin;
            let tca = l.dot(dir);
            let d2 = l.length_squared() - tca * tca;
            if d2 > radius_squared {
                return None;
            }
            let thc = (radius_squared - d2).sqrt();
            let t0 = tca - thc;
            let t1 = tca + thc;
            if t0 < t1 && t1 >= 0.0 {
                Some(<$vec2>::new(t0, t1))
            } else {
                None
            }
        }

        /// Whether a 2D ray with normalized `dir` hits a circle.
        #[inline]
        pub fn test_ray_circle(origin: $vec2, dir: $vec2, center: $vec2, radius_squared: $scalar) -> bool {
            intersect_ray_circle(origin, dir, center, radius_squared).is_some()
        }

        /// Slab intersection of a 2D ray with the rectangle spanned by two
        /// opposite corners, returning the entry and exit parameters.
        pub fn intersect_ray_aar(
            origin: $vec2,
            dir: $vec2,
            corner_a: $vec2,
            corner_b: $vec2,
        ) -> Option<$vec2> {
            let inv_dir = <$vec2>::ONE / dir;
            let t_a = (corner_a - origin) * inv_dir;
            let t_b = (corner_b - origin) * inv_dir;
            let t_near = t_a.min(t_b).max_element();
            let t_far = t_a.max(t_b).min_element();
            if t_near < t_far && t_far >= 0.0 {
                Some(<$vec2>::new(t_near, t_far))
            } else {
                None
            }
        }

        /// Whether a 2D ray hits the rectangle spanned by two opposite corners.
        #[inline]
        pub fn test_ray_aar(origin: $vec2, dir: $vec2, corner_a: $vec2, corner_b: $vec2) -> bool {
            intersect_ray_aar(origin, dir, corner_a, corner_b).is_some()
        }

        /// Whether a 2D point lies inside a triangle of either winding.
        pub fn test_point_triangle(p: $vec2, v0: $vec2, v1: $vec2, v2: $vec2) -> bool {
            let b1 = (p.x - v1.x) * (v0.y - v1.y) - (v0.x - v1.x) * (p.y - v1.y) < 0.0;
            let b2 = (p.x - v2.x) * (v1.y - v2.y) - (v1.x - v2.x) * (p.y - v2.y) < 0.0;
            if b1 != b2 {
                return false;
            }
            let b3 = (p.x - v0.x) * (v2.y - v0.y) - (v2.x - v0.x) * (p.y - v0.y) < 0.0;
            b2 == b3
        }
    };
}

/// Single-precision routines over `glam::Vec2`, `Vec3` and `Vec4`.
pub mod f32 {
    use glam::{Vec2, Vec3, Vec4};

    impl_intersections!(f32, Vec2, Vec3, Vec4);
}

/// Double-precision routines over `glam::DVec2`, `DVec3` and `DVec4`.
pub mod f64 {
    use glam::{DVec2, DVec3, DVec4};

    impl_intersections!(f64, DVec2, DVec3, DVec4);
}

#[cfg(test)]
mod tests {
    use glam::{DVec3, Vec2, Vec3, Vec4};

    use super::f32::*;
    use super::{SegmentAabIntersection, TriangleRegion};

    const EPS: f32 = 1e-6;

    #[test]
    fn test_ray_enters_unit_box_from_outside() {
        let t = intersect_ray_aab(Vec3::new(-1.0, 0.5, 0.5), Vec3::X, Vec3::ZERO, Vec3::ONE);
        assert_eq!(t, Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        assert!(!test_ray_aab(Vec3::new(2.0, 0.5, 0.5), Vec3::X, Vec3::ZERO, Vec3::ONE));
    }

    #[test]
    fn test_ray_from_inside_reports_negative_near() {
        let t = intersect_ray_aab(Vec3::splat(0.5), Vec3::Y, Vec3::ZERO, Vec3::ONE).unwrap();
        assert_eq!(t, Vec2::new(-0.5, 0.5));
    }

    #[test]
    fn test_ray_corner_order_does_not_matter() {
        let origin = Vec3::new(-3.0, 0.2, 0.7);
        let dir = Vec3::new(1.0, 0.1, -0.05);
        let a = Vec3::new(-1.0, -1.0, -1.0);
        let b = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(intersect_ray_aab(origin, dir, a, b), intersect_ray_aab(origin, dir, b, a));
    }

    #[test]
    fn test_segment_classification() {
        let (min, max) = (Vec3::ZERO, Vec3::ONE);

        let outside = intersect_line_segment_aab(Vec3::splat(2.0), Vec3::splat(3.0), min, max);
        assert_eq!(outside, SegmentAabIntersection::Outside);

        let inside = intersect_line_segment_aab(Vec3::splat(0.25), Vec3::splat(0.75), min, max);
        assert_eq!(inside, SegmentAabIntersection::Inside(Vec2::new(0.0, 1.0)));

        let one = intersect_line_segment_aab(Vec3::new(-1.0, 0.5, 0.5), Vec3::splat(0.5), min, max);
        assert_eq!(one, SegmentAabIntersection::OneIntersection(Vec2::new(2.0 / 3.0, 1.0)));

        let two = intersect_line_segment_aab(Vec3::new(-1.0, 0.5, 0.5), Vec3::new(3.0, 0.5, 0.5), min, max);
        assert_eq!(two, SegmentAabIntersection::TwoIntersections(Vec2::new(0.25, 0.5)));
        assert_eq!(two.params(), Some(Vec2::new(0.25, 0.5)));
    }

    #[test]
    fn test_segment_stopping_short_of_box_is_outside() {
        let result = intersect_line_segment_aab(Vec3::new(-3.0, 0.5, 0.5), Vec3::new(-1.0, 0.5, 0.5), Vec3::ZERO, Vec3::ONE);
        assert!(!result.is_intersecting());
        assert_eq!(result.params(), None);
    }

    #[test]
    fn test_triangle_hit_at_unit_distance() {
        let t = intersect_ray_triangle(
            Vec3::new(0.2, 0.2, 1.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            EPS,
        );
        assert_eq!(t, Some(1.0));
    }

    #[test]
    fn test_triangle_back_face_is_culled() {
        let origin = Vec3::new(0.2, 0.2, 1.0);
        assert!(!test_ray_triangle(origin, Vec3::NEG_Z, Vec3::ZERO, Vec3::Y, Vec3::X, EPS));
    }

    #[test]
    fn test_triangle_parallel_ray_misses() {
        let origin = Vec3::new(-1.0, 0.2, 0.0);
        assert!(!test_ray_triangle(origin, Vec3::X, Vec3::ZERO, Vec3::X, Vec3::Y, EPS));
    }

    #[test]
    fn test_triangle_hit_behind_origin_is_reported() {
        let t = intersect_ray_triangle(
            Vec3::new(0.2, 0.2, -1.0),
            Vec3::NEG_Z,
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            EPS,
        );
        assert_eq!(t, Some(-1.0));
    }

    #[test]
    fn test_triangle_miss_outside_edges() {
        let origin = Vec3::new(0.8, 0.8, 1.0);
        assert!(!test_ray_triangle(origin, Vec3::NEG_Z, Vec3::ZERO, Vec3::X, Vec3::Y, EPS));
    }

    #[test]
    fn test_aab_aab_touching_counts() {
        assert!(test_aab_aab(Vec3::ZERO, Vec3::ONE, Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0)));
        assert!(!test_aab_aab(Vec3::ZERO, Vec3::ONE, Vec3::new(1.5, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0)));
    }

    #[test]
    fn test_aab_plane() {
        let plane = Vec4::new(0.0, 1.0, 0.0, -0.5);
        assert!(super::f32::test_aab_plane(Vec3::ZERO, Vec3::ONE, plane));
        let above = Vec4::new(0.0, 1.0, 0.0, -2.0);
        assert!(!super::f32::test_aab_plane(Vec3::ZERO, Vec3::ONE, above));
    }

    #[test]
    fn test_aab_sphere() {
        assert!(super::f32::test_aab_sphere(Vec3::ZERO, Vec3::ONE, Vec3::new(2.0, 0.5, 0.5), 1.0));
        assert!(!super::f32::test_aab_sphere(Vec3::ZERO, Vec3::ONE, Vec3::new(2.0, 2.0, 0.5), 1.0));
    }

    #[test]
    fn test_plane_sphere_circle() {
        let ground = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let circle = intersect_plane_sphere(ground, Vec3::new(1.0, 0.5, 0.0), 1.0).unwrap();
        assert_eq!(circle.truncate(), Vec3::new(1.0, 0.0, 0.0));
        assert!((circle.w - 0.75f32.sqrt()).abs() < EPS);
        assert!(!test_plane_sphere(ground, Vec3::new(0.0, 2.0, 0.0), 1.0));
    }

    #[test]
    fn test_sphere_sphere_circle() {
        let circle = intersect_sphere_sphere(Vec3::ZERO, 1.0, Vec3::X, 1.0).unwrap();
        assert_eq!(circle.truncate(), Vec3::new(0.5, 0.0, 0.0));
        assert!((circle.w - 0.75f32.sqrt()).abs() < EPS);
        assert!(!test_sphere_sphere(Vec3::ZERO, 1.0, Vec3::new(3.0, 0.0, 0.0), 1.0));
    }

    #[test]
    fn test_sphere_inside_sphere_overlaps_without_circle() {
        assert!(test_sphere_sphere(Vec3::ZERO, 100.0, Vec3::X, 1.0));
        assert!(test_sphere_sphere(Vec3::ZERO, 4.0, Vec3::ZERO, 4.0));
        assert!(test_sphere_sphere(Vec3::ZERO, 1.0, Vec3::new(2.0, 0.0, 0.0), 1.0));
        assert_eq!(intersect_sphere_sphere(Vec3::ZERO, 100.0, Vec3::X, 1.0), None);
    }

    #[test]
    fn test_ray_sphere() {
        let t = intersect_ray_sphere(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, Vec3::ZERO, 1.0).unwrap();
        assert_eq!(t, Vec2::new(4.0, 6.0));
        assert!(!super::f32::test_ray_sphere(Vec3::new(5.0, 0.0, 0.0), Vec3::X, Vec3::ZERO, 1.0));
    }

    #[test]
    fn test_ray_plane_front_facing_only() {
        let ground = Vec4::new(0.0, 1.0, 0.0, 0.0);
        let origin = Vec3::new(0.0, 2.0, 0.0);
        assert_eq!(intersect_ray_plane(origin, Vec3::NEG_Y, ground, EPS), Some(2.0));
        assert_eq!(intersect_ray_plane(origin, Vec3::Y, ground, EPS), None);
    }

    #[test]
    fn test_distance_point_plane_normalizes() {
        let plane = Vec4::new(0.0, 0.0, 2.0, -2.0);
        assert_eq!(distance_point_plane(Vec3::new(0.0, 0.0, 4.0), plane), 3.0);
    }

    #[test]
    fn test_line_segment_sphere() {
        assert!(super::f32::test_line_segment_sphere(Vec3::new(-2.0, 0.5, 0.0), Vec3::new(2.0, 0.5, 0.0), Vec3::ZERO, 1.0));
        assert!(!super::f32::test_line_segment_sphere(Vec3::new(2.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0), Vec3::ZERO, 1.0));
    }

    #[test]
    fn test_point_triangle_either_winding() {
        let (a, b, c) = (Vec2::ZERO, Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0));
        let p = Vec2::new(0.5, 0.5);
        assert!(test_point_triangle(p, a, b, c));
        assert!(test_point_triangle(p, a, c, b));
        assert!(!test_point_triangle(Vec2::new(1.5, 1.5), a, b, c));
    }

    #[test]
    fn test_closest_point_on_triangle_regions() {
        let (v0, v1, v2) = (Vec3::new(0.0, 0.0, 1.0), Vec3::new(2.0, 0.0, 1.0), Vec3::new(0.0, 2.0, 1.0));
        let closest = |p| find_closest_point_on_triangle(v0, v1, v2, p);

        assert_eq!(closest(Vec3::new(0.5, 0.5, 4.0)), (Vec3::new(0.5, 0.5, 1.0), TriangleRegion::Face));
        assert_eq!(closest(Vec3::new(-1.0, -1.0, 1.0)), (v0, TriangleRegion::Vertex));
        assert_eq!(closest(Vec3::new(5.0, -1.0, 1.0)), (v1, TriangleRegion::Vertex));
        assert_eq!(closest(Vec3::new(1.0, -1.0, 6.0)), (Vec3::new(1.0, 0.0, 1.0), TriangleRegion::Edge));
        assert_eq!(closest(Vec3::new(3.0, 3.0, 1.0)), (Vec3::new(1.0, 1.0, 1.0), TriangleRegion::Edge));
    }

    #[test]
    fn test_closest_point_on_2d_triangle() {
        let (v0, v1, v2) = (Vec2::ZERO, Vec2::new(2.0, 0.0), Vec2::new(0.0, 2.0));
        let inside = Vec2::new(0.5, 0.5);
        assert_eq!(find_closest_point_on_triangle_2d(v0, v1, v2, inside), (inside, TriangleRegion::Face));
        assert_eq!(
            find_closest_point_on_triangle_2d(v0, v1, v2, Vec2::new(-1.0, 1.0)),
            (Vec2::new(0.0, 1.0), TriangleRegion::Edge)
        );
    }

    #[test]
    fn test_line_segment_triangle() {
        let (v0, v1, v2) = (Vec3::ZERO, Vec3::X, Vec3::Y);
        let (above, below) = (Vec3::new(0.2, 0.2, 1.0), Vec3::new(0.2, 0.2, -1.0));
        assert!(super::f32::test_line_segment_triangle(above, below, v0, v1, v2, EPS));
        assert!(super::f32::test_line_segment_triangle(below, above, v0, v2, v1, EPS));
        assert!(!super::f32::test_line_segment_triangle(Vec3::new(0.2, 0.2, 3.0), above, v0, v1, v2, EPS));
        assert!(!super::f32::test_line_segment_triangle(Vec3::new(0.8, 0.8, 1.0), Vec3::new(0.8, 0.8, -1.0), v0, v1, v2, EPS));
    }

    #[test]
    fn test_point_line_distance() {
        let x_axis = line_through(Vec2::ZERO, Vec2::X);
        assert_eq!(distance_point_line(Vec2::new(0.0, 3.0), x_axis), 3.0);
        assert_eq!(distance_point_line(Vec2::new(0.0, -3.0), x_axis), -3.0);
        assert_eq!(distance_point_line(Vec2::new(0.0, 3.0), Vec3::new(0.0, 2.0, -2.0)), 2.0);
    }

    #[test]
    fn test_ray_line_front_facing_only() {
        let origin = Vec2::new(0.0, 2.0);
        assert_eq!(intersect_ray_line(origin, Vec2::NEG_Y, Vec2::ZERO, Vec2::Y, EPS), Some(2.0));
        assert_eq!(intersect_ray_line(origin, Vec2::Y, Vec2::ZERO, Vec2::Y, EPS), None);
    }

    #[test]
    fn test_line_circle_chord() {
        let x_axis = Vec3::new(0.0, 1.0, 0.0);
        let chord = intersect_line_circle(x_axis, Vec2::new(1.0, 0.5), 1.0).unwrap();
        assert_eq!(chord.truncate(), Vec2::new(1.0, 0.0));
        assert!((chord.z - 0.75f32.sqrt()).abs() < EPS);
        assert!(test_line_circle(x_axis, Vec2::new(0.0, -0.5), 1.0));
        assert!(!test_line_circle(x_axis, Vec2::new(0.0, 2.0), 1.0));
    }

    #[test]
    fn test_rectangle_tests() {
        let (min, max) = (Vec2::ZERO, Vec2::ONE);
        assert!(test_aar_line(min, max, Vec3::new(0.0, 1.0, -0.5)));
        assert!(!test_aar_line(min, max, Vec3::new(0.0, 1.0, -2.0)));
        assert!(test_aar_aar(min, max, Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)));
        assert!(!test_aar_aar(min, max, Vec2::new(1.5, 0.0), Vec2::new(2.0, 1.0)));
        assert!(test_point_aar(Vec2::ONE, min, max));
        assert!(!test_point_aar(Vec2::new(1.1, 0.5), min, max));
        assert!(test_aar_circle(min, max, Vec2::new(2.0, 0.5), 1.0));
        assert!(!test_aar_circle(min, max, Vec2::new(2.0, 2.0), 1.0));
    }

    #[test]
    fn test_ray_rectangle() {
        let t = intersect_ray_aar(Vec2::new(-1.0, 0.5), Vec2::X, Vec2::ZERO, Vec2::ONE);
        assert_eq!(t, Some(Vec2::new(1.0, 2.0)));
        assert!(!test_ray_aar(Vec2::new(2.0, 0.5), Vec2::X, Vec2::ZERO, Vec2::ONE));
    }

    #[test]
    fn test_circle_circle() {
        assert!(super::f32::test_circle_circle(Vec2::ZERO, 100.0, Vec2::X, 1.0));
        assert!(!super::f32::test_circle_circle(Vec2::ZERO, 1.0, Vec2::new(3.0, 0.0), 1.0));
        let chord = intersect_circle_circle(Vec2::ZERO, 1.0, Vec2::X, 1.0).unwrap();
        assert_eq!(chord.truncate(), Vec2::new(0.5, 0.0));
        assert!((chord.z - 0.75f32.sqrt()).abs() < EPS);
        assert_eq!(intersect_circle_circle(Vec2::ZERO, 100.0, Vec2::X, 1.0), None);
    }

    #[test]
    fn test_point_and_ray_circle() {
        assert!(test_point_circle(Vec2::new(0.6, 0.6), Vec2::ZERO, 1.0));
        assert!(!test_point_circle(Vec2::new(1.0, 1.0), Vec2::ZERO, 1.0));
        let t = intersect_ray_circle(Vec2::new(-5.0, 0.0), Vec2::X, Vec2::ZERO, 1.0);
        assert_eq!(t, Some(Vec2::new(4.0, 6.0)));
        assert!(!test_ray_circle(Vec2::new(5.0, 0.0), Vec2::X, Vec2::ZERO, 1.0));
    }

    #[test]
    fn test_circle_triangle() {
        let (v0, v1, v2) = (Vec2::ZERO, Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0));
        assert!(super::f32::test_circle_triangle(Vec2::new(1.0, 1.0), 0.01, v0, v1, v2));
        assert!(super::f32::test_circle_triangle(Vec2::new(2.0, -0.5), 1.0, v0, v1, v2));
        assert!(super::f32::test_circle_triangle(Vec2::new(-0.5, -0.5), 1.0, v0, v1, v2));
        assert!(!super::f32::test_circle_triangle(Vec2::new(10.0, 10.0), 1.0, v0, v1, v2));
    }

    #[test]
    fn test_double_precision_matches() {
        use super::f64::intersect_ray_aab as intersect_ray_aab_f64;
        let t = intersect_ray_aab_f64(DVec3::new(-1.0, 0.5, 0.5), DVec3::X, DVec3::ZERO, DVec3::ONE);
        assert_eq!(t, Some(glam::DVec2::new(1.0, 2.0)));
    }
}
