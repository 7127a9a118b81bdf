use super::interval_tree::{Interval, IntervalTree};
use super::{PolygonBounds, crosses_left_ray, edge_intervals, validate_vertices};
use crate::error::GeometryError;

/// Working memory for [`PolygonPointIntersection::point_in_polygon`].
///
/// Each thread querying a shared polygon needs its own scratch.
#[derive(Clone, Debug, Default)]
pub struct PolygonScratch {
    intervals: Vec<Interval>,
}

impl PolygonScratch {
    /// Create scratch space for queries collecting up to `capacity` edges.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: Vec::with_capacity(capacity),
        }
    }
}

/// A single polygon prepared for repeated point-containment queries.
///
/// The polygon is immutable once built, so one instance can serve queries
/// from many threads at once as long as each thread brings its own
/// [`PolygonScratch`].
#[derive(Debug)]
pub struct PolygonPointIntersection {
    vertices: Vec<f32>,
    bounds: PolygonBounds,
    tree: IntervalTree,
}

impl PolygonPointIntersection {
    /// Build a polygon from the first `count` interleaved vertices of
    /// `vertices_xy`.
    pub fn new(vertices_xy: &[f32], count: usize) -> Result<Self, GeometryError> {
        validate_vertices(vertices_xy, count)?;
        let vertices = vertices_xy[..2 * count].to_vec();
        let bounds = PolygonBounds::from_polygons([vertices.as_slice()]);
        let tree = IntervalTree::build(edge_intervals(&vertices, 0).collect(), bounds.center.y);
        Ok(Self { vertices, bounds, tree })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }

    /// The most edges a single query can collect.
    pub fn working_size(&self) -> usize {
        self.tree.max_count()
    }

    /// Scratch space sized for this polygon.
    pub fn scratch(&self) -> PolygonScratch {
        PolygonScratch::with_capacity(self.working_size())
    }

    /// Whether `(x, y)` lies inside the polygon.
    pub fn point_in_polygon(&self, x: f32, y: f32, scratch: &mut PolygonScratch) -> bool {
        if self.bounds.rejects(x, y) {
            return false;
        }
        scratch.intervals.clear();
        self.tree.query(y, &mut scratch.intervals);
        scratch
            .intervals
            .iter()
            .fold(false, |inside, ival| inside ^ crosses_left_ray(&self.vertices, ival, x, y))
    }
}
