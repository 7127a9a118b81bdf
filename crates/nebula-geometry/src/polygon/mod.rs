//! Point-in-polygon queries accelerated by an interval tree over edge spans.
//!
//! Vertices are interleaved `x0, y0, x1, y1, ...` and the closing edge from
//! the last vertex back to the first is implicit. Containment uses the
//! even-odd rule with a half-open crossing test, so a point on a boundary
//! whose interior lies to its right counts as outside while a point on a
//! boundary whose interior lies to its left counts as inside.

pub(crate) mod interval_tree;
mod point;
mod points;

pub use point::{PolygonPointIntersection, PolygonScratch};
pub use points::{PolygonSet, PolygonsPointIntersection};

use glam::Vec2;

use crate::error::GeometryError;
use interval_tree::{Interval, midpoint};

/// Bounding box and bounding circle used to reject far-away points cheaply.
#[derive(Clone, Copy, Debug, PartialEq)]
struct PolygonBounds {
    min: Vec2,
    max: Vec2,
    center: Vec2,
    radius_squared: f32,
}

impl PolygonBounds {
    fn from_polygons<'a>(polygons: impl IntoIterator<Item = &'a [f32]>) -> Self {
        let mut min = Vec2::INFINITY;
        let mut max = Vec2::NEG_INFINITY;
        for vertices in polygons {
            for xy in vertices.chunks_exact(2) {
                let p = Vec2::new(xy[0], xy[1]);
                min = min.min(p);
                max = max.max(p);
            }
        }
        let center = Vec2::new(midpoint(min.x, max.x), midpoint(min.y, max.y));
        Self {
            min,
            max,
            center,
            radius_squared: max.distance_squared(center),
        }
    }

    /// Whether `(x, y)` is certainly outside every polygon.
    fn rejects(&self, x: f32, y: f32) -> bool {
        let p = Vec2::new(x, y);
        p.distance_squared(self.center) > self.radius_squared
            || self.max.x < x
            || self.max.y < y
            || self.min.x > x
            || self.min.y > y
    }
}

/// Check that `vertices` holds at least `count` complete vertices and that
/// `count` describes a polygon.
fn validate_vertices(vertices: &[f32], count: usize) -> Result<(), GeometryError> {
    let available = vertices.len() / 2;
    if count > available {
        return Err(GeometryError::VertexCountMismatch { count, available });
    }
    if count < 3 {
        return Err(GeometryError::DegeneratePolygon(count));
    }
    Ok(())
}

/// Edge intervals of one polygon, pairing each vertex with its predecessor.
fn edge_intervals(vertices: &[f32], polygon: usize) -> impl Iterator<Item = Interval> + '_ {
    let count = vertices.len() / 2;
    (0..count).map(move |i| {
        let j = if i == 0 { count - 1 } else { i - 1 };
        Interval::new(vertices[2 * i + 1], vertices[2 * j + 1], i, j, polygon)
    })
}

/// Whether the edge `(xi, yi)-(xj, yj)` crosses the horizontal ray going left
/// from `(x, y)`.
#[inline]
fn crosses_left_ray(vertices: &[f32], ival: &Interval, x: f32, y: f32) -> bool {
    let (xi, yi) = (vertices[2 * ival.i], vertices[2 * ival.i + 1]);
    let (xj, yj) = (vertices[2 * ival.j], vertices[2 * ival.j + 1]);
    ((yi < y && yj >= y) || (yj < y && yi >= y))
        && (xi <= x || xj <= x)
        && xi + (y - yi) / (yj - yi) * (xj - xi) < x
}

/// Reference even-odd test over every edge, without the interval tree.
#[cfg(test)]
pub(crate) fn brute_force_contains(vertices: &[f32], x: f32, y: f32) -> bool {
    edge_intervals(vertices, 0).fold(false, |inside, ival| inside ^ crosses_left_ray(vertices, &ival, x, y))
}
