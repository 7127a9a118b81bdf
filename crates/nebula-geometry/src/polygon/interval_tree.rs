//! Centered interval tree over the y-spans of polygon edges.
//!
//! Every node splits its intervals at a center value. Intervals entirely
//! below the center go to the left child, those entirely above to the right
//! child, and the rest stay at the node in two lists: sorted by start
//! ascending and by end descending. A query at height `y` visits one path
//! from the root and stops scanning each list as soon as the sort order rules
//! out further matches.

use std::cmp::Ordering;

/// The y-span of one polygon edge, from vertex `j` to vertex `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Interval {
    pub start: f32,
    pub end: f32,
    pub i: usize,
    pub j: usize,
    pub polygon: usize,
}

/// Midpoint of `a` and `b` that stays finite for any finite input.
#[inline]
pub(crate) fn midpoint(a: f32, b: f32) -> f32 {
    a * 0.5 + b * 0.5
}

impl Interval {
    pub fn new(yi: f32, yj: f32, i: usize, j: usize, polygon: usize) -> Self {
        Self {
            start: yi.min(yj),
            end: yi.max(yj),
            i,
            j,
            polygon,
        }
    }
}

#[derive(Debug)]
struct Node {
    center: f32,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
    by_start: Vec<Interval>,
    by_end: Vec<Interval>,
    max_count: usize,
}

#[derive(Debug)]
pub(crate) struct IntervalTree {
    root: Node,
}

impl IntervalTree {
    /// Build a tree whose root splits at `center`.
    pub fn build(intervals: Vec<Interval>, center: f32) -> Self {
        let count = intervals.len();
        let mut nodes = 0;
        let root = Node::build(intervals, center, &mut nodes);
        tracing::debug!(intervals = count, nodes, max_count = root.max_count, "built edge interval tree");
        Self { root }
    }

    /// Upper bound on the number of intervals a single query can collect.
    pub fn max_count(&self) -> usize {
        self.root.max_count
    }

    /// Append every interval with `start <= y <= end` to `out`.
    pub fn query(&self, y: f32, out: &mut Vec<Interval>) {
        let mut node = Some(&self.root);
        while let Some(current) = node {
            node = current.collect(y, out);
        }
    }
}

impl Node {
    fn build(intervals: Vec<Interval>, center: f32, nodes: &mut usize) -> Self {
        *nodes += 1;

        // Keep the center within the spans so that neither child receives
        // every interval.
        let (lo, hi) = intervals
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), ival| (lo.min(ival.start), hi.max(ival.end)));
        let center = if lo <= hi { center.max(lo).min(hi) } else { center };

        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut by_start = Vec::new();
        let (mut left_min, mut left_max) = (f32::INFINITY, f32::NEG_INFINITY);
        let (mut right_min, mut right_max) = (f32::INFINITY, f32::NEG_INFINITY);

        for ival in intervals {
            if ival.start < center && ival.end < center {
                left_min = left_min.min(ival.start);
                left_max = left_max.max(ival.end);
                left.push(ival);
            } else if ival.start > center && ival.end > center {
                right_min = right_min.min(ival.start);
                right_max = right_max.max(ival.end);
                right.push(ival);
            } else {
                by_start.push(ival);
            }
        }

        let mut by_end = by_start.clone();
        by_start.sort_by(|a, b| a.start.partial_cmp(&b.start).unwrap_or(Ordering::Equal));
        by_end.sort_by(|a, b| b.end.partial_cmp(&a.end).unwrap_or(Ordering::Equal));

        let left = (!left.is_empty()).then(|| Box::new(Node::build(left, midpoint(left_min, left_max), nodes)));
        let right =
            (!right.is_empty()).then(|| Box::new(Node::build(right, midpoint(right_min, right_max), nodes)));

        let child_max = left
            .iter()
            .chain(right.iter())
            .map(|child| child.max_count)
            .max()
            .unwrap_or(0);

        Self {
            center,
            max_count: by_start.len() + child_max,
            left,
            right,
            by_start,
            by_end,
        }
    }

    /// Collect this node's matches and return the child to descend into.
    fn collect(&self, y: f32, out: &mut Vec<Interval>) -> Option<&Node> {
        if y < self.center {
            out.extend(self.by_start.iter().take_while(|ival| ival.start <= y));
            self.left.as_deref()
        } else if y > self.center {
            out.extend(self.by_end.iter().take_while(|ival| ival.end >= y));
            self.right.as_deref()
        } else {
            out.extend_from_slice(&self.by_start);
            None
        }
    }
}
