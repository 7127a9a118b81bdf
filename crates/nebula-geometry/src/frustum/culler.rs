use glam::{Mat4, Vec3, Vec4};

use super::{DepthRange, FrustumPlane, PlaneMask, extract_planes};

/// Conservative visibility tests against the six planes of a view frustum.
///
/// Boxes use the p-vertex test, which never rejects a visible box but may
/// accept a box that lies just outside a frustum edge or corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Culler {
    planes: [Vec4; 6],
    depth_range: DepthRange,
}

impl Culler {
    /// Create a culler for an OpenGL-style projection-view matrix.
    pub fn new(m: &Mat4) -> Self {
        Self::with_depth_range(m, DepthRange::NegativeOneToOne)
    }

    /// Create a culler for a matrix using the given clip depth convention.
    pub fn with_depth_range(m: &Mat4, depth_range: DepthRange) -> Self {
        Self {
            planes: extract_planes(m, depth_range),
            depth_range,
        }
    }

    /// Recompute all planes from `m`, keeping the depth convention.
    pub fn set(&mut self, m: &Mat4) -> &mut Self {
        self.planes = extract_planes(m, self.depth_range);
        tracing::trace!(depth_range = ?self.depth_range, "culler planes updated");
        self
    }

    /// The normalized planes, indexed by [`FrustumPlane::index`].
    pub fn planes(&self) -> &[Vec4; 6] {
        &self.planes
    }

    pub fn depth_range(&self) -> DepthRange {
        self.depth_range
    }

    /// Whether `point` is inside or on the boundary of the frustum.
    pub fn is_point_inside_frustum(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| signed_distance(plane, point) >= 0.0)
    }

    /// Whether the sphere is at least partially inside the frustum.
    pub fn is_sphere_inside_frustum(&self, center: Vec3, radius: f32) -> bool {
        self.planes.iter().all(|plane| signed_distance(plane, center) >= -radius)
    }

    /// Test the box `min..max` against every plane.
    ///
    /// Returns `None` when the box is inside or intersecting, or the first
    /// plane (in [`FrustumPlane::ALL`] order) that rejects it.
    pub fn is_aab_inside_frustum(&self, min: Vec3, max: Vec3) -> Option<FrustumPlane> {
        self.is_aab_inside_frustum_masked(min, max, PlaneMask::ALL)
    }

    /// Like [`Self::is_aab_inside_frustum`] but skipping planes not in `mask`.
    ///
    /// Useful for hierarchical culling, where a parent already known to be
    /// inside some planes lets its children skip them.
    pub fn is_aab_inside_frustum_masked(&self, min: Vec3, max: Vec3, mask: PlaneMask) -> Option<FrustumPlane> {
        FrustumPlane::ALL
            .into_iter()
            .filter(|plane| mask.contains(plane.mask()))
            .find(|plane| {
                let p = &self.planes[plane.index()];
                signed_distance(p, positive_vertex(p, min, max)) < 0.0
            })
    }
}

#[inline]
pub(super) fn signed_distance(plane: &Vec4, point: Vec3) -> f32 {
    plane.truncate().dot(point) + plane.w
}

/// Corner of `min..max` furthest along the plane normal.
#[inline]
pub(super) fn positive_vertex(plane: &Vec4, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::select(plane.truncate().cmplt(Vec3::ZERO), min, max)
}

/// Corner of `min..max` furthest against the plane normal.
#[inline]
pub(super) fn negative_vertex(plane: &Vec4, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::select(plane.truncate().cmplt(Vec3::ZERO), max, min)
}
