use super::interval_tree::{Interval, IntervalTree};
use super::{PolygonBounds, crosses_left_ray, edge_intervals, validate_vertices};
use crate::error::GeometryError;

/// Set of polygon indices, returned by
/// [`PolygonsPointIntersection::point_in_polygons`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolygonSet {
    words: Vec<u64>,
}

impl PolygonSet {
    fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(64)],
        }
    }

    fn clear(&mut self) {
        self.words.fill(0);
    }

    fn toggle(&mut self, index: usize) {
        self.words[index / 64] ^= 1u64 << (index % 64);
    }

    /// Whether polygon `index` is in the set.
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / 64)
            .is_some_and(|word| word & (1u64 << (index % 64)) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == 0)
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Polygon indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            (0..64usize).filter(move |&bit| word & (1u64 << bit) != 0).map(move |bit| w * 64 + bit)
        })
    }
}

/// A group of polygons sharing one interval tree, answering which of them
/// contain a point.
///
/// Queries reuse internal working memory and therefore take `&mut self`.
/// Use one instance per thread for concurrent queries.
#[derive(Debug)]
pub struct PolygonsPointIntersection {
    polygons: Vec<Vec<f32>>,
    bounds: PolygonBounds,
    tree: IntervalTree,
    scratch: Vec<Interval>,
    inside: PolygonSet,
}

impl PolygonsPointIntersection {
    /// Build from interleaved vertex lists, one per polygon.
    pub fn new(polygons: &[&[f32]]) -> Result<Self, GeometryError> {
        for vertices in polygons {
            let count = vertices.len().div_ceil(2);
            validate_vertices(vertices, count)?;
        }
        let polygons: Vec<Vec<f32>> = polygons.iter().map(|vertices| vertices.to_vec()).collect();
        let bounds = PolygonBounds::from_polygons(polygons.iter().map(Vec::as_slice));
        let intervals = polygons
            .iter()
            .enumerate()
            .flat_map(|(index, vertices)| edge_intervals(vertices, index))
            .collect();
        let tree = IntervalTree::build(intervals, bounds.center.y);
        Ok(Self {
            scratch: Vec::with_capacity(tree.max_count()),
            inside: PolygonSet::with_len(polygons.len()),
            polygons,
            bounds,
            tree,
        })
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// The polygons containing `(x, y)`, or `None` if there are none.
    pub fn point_in_polygons(&mut self, x: f32, y: f32) -> Option<&PolygonSet> {
        if self.bounds.rejects(x, y) {
            return None;
        }
        self.scratch.clear();
        self.tree.query(y, &mut self.scratch);
        self.inside.clear();
        for ival in &self.scratch {
            if crosses_left_ray(&self.polygons[ival.polygon], ival, x, y) {
                self.inside.toggle(ival.polygon);
            }
        }
        if self.inside.is_empty() { None } else { Some(&self.inside) }
    }

    /// Even-odd containment across all polygons together.
    ///
    /// A point covered by an odd number of polygons is inside, so polygons
    /// nested within another act as holes.
    pub fn test_point(&mut self, x: f32, y: f32) -> bool {
        self.point_in_polygons(x, y).is_some_and(|set| set.len() % 2 == 1)
    }
}
