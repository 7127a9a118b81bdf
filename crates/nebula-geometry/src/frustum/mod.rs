//! View frustum planes, culling and per-pixel ray generation.
//!
//! Planes are extracted from a combined projection-view matrix with the
//! Griggs-Hartmann method. Each plane is stored as `Vec4(a, b, c, d)` with an
//! inward-facing unit normal, so a point `p` is on the inner side when
//! `dot(n, p) + d >= 0`.

mod culler;
mod intersection;
mod ray_builder;

pub use culler::Culler;
pub use intersection::{Containment, FrustumIntersection};
pub use ray_builder::{FrustumRayBuilder, RayCaster};

use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

/// One of the six frustum planes, named by the clip-space axis it bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrustumPlane {
    /// `x = -w` (left).
    Nx = 0,
    /// `x = w` (right).
    Px = 1,
    /// `y = -w` (bottom).
    Ny = 2,
    /// `y = w` (top).
    Py = 3,
    /// Near clip plane.
    Nz = 4,
    /// Far clip plane.
    Pz = 5,
}

impl FrustumPlane {
    /// All planes in test order.
    pub const ALL: [FrustumPlane; 6] = [Self::Nx, Self::Px, Self::Ny, Self::Py, Self::Nz, Self::Pz];

    /// Index of this plane in [`Culler::planes`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The mask bit selecting this plane.
    pub fn mask(self) -> PlaneMask {
        PlaneMask::from_bits_truncate(1 << self.index())
    }
}

bitflags::bitflags! {
    /// Selects which frustum planes a masked test considers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PlaneMask: u8 {
        const NX = 0b0000_0001;
        const PX = 0b0000_0010;
        const NY = 0b0000_0100;
        const PY = 0b0000_1000;
        const NZ = 0b0001_0000;
        const PZ = 0b0010_0000;
        const ALL = 0b0011_1111;
    }
}

impl Default for PlaneMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Clip-space depth convention of the projection matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepthRange {
    /// OpenGL style, `-w <= z <= w`.
    #[default]
    NegativeOneToOne,
    /// wgpu, Vulkan and Direct3D style, `0 <= z <= w`.
    ZeroToOne,
}

/// Extract the six inward-facing, normalized planes of `m`.
pub(crate) fn extract_planes(m: &Mat4, depth_range: DepthRange) -> [Vec4; 6] {
    let rows = [m.row(0), m.row(1), m.row(2), m.row(3)];

    let mut planes = [Vec4::ZERO; 6];
    planes[FrustumPlane::Nx.index()] = rows[3] + rows[0];
    planes[FrustumPlane::Px.index()] = rows[3] - rows[0];
    planes[FrustumPlane::Ny.index()] = rows[3] + rows[1];
    planes[FrustumPlane::Py.index()] = rows[3] - rows[1];
    planes[FrustumPlane::Nz.index()] = match depth_range {
        DepthRange::NegativeOneToOne => rows[3] + rows[2],
        DepthRange::ZeroToOne => rows[2],
    };
    planes[FrustumPlane::Pz.index()] = rows[3] - rows[2];

    for plane in &mut planes {
        *plane /= plane.truncate().length();
    }
    planes
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_extracted_normals_are_unit_length() {
        let m = Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 0.1, 100.0);
        for plane in extract_planes(&m, DepthRange::NegativeOneToOne) {
            assert!((plane.truncate().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_near_plane_depends_on_depth_range() {
        let gl = Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 0.5, 100.0);
        let wgpu = Mat4::perspective_rh(FRAC_PI_2, 1.0, 0.5, 100.0);
        let near_gl = extract_planes(&gl, DepthRange::NegativeOneToOne)[FrustumPlane::Nz.index()];
        let near_wgpu = extract_planes(&wgpu, DepthRange::ZeroToOne)[FrustumPlane::Nz.index()];
        let sample = Vec3::new(0.0, 0.0, -0.5);
        assert!((near_gl.truncate().dot(sample) + near_gl.w).abs() < 1e-4);
        assert!((near_wgpu.truncate().dot(sample) + near_wgpu.w).abs() < 1e-4);
    }

    #[test]
    fn test_plane_mask_bits_follow_indices() {
        for plane in FrustumPlane::ALL {
            assert_eq!(plane.mask().bits(), 1 << plane.index());
        }
        assert_eq!(PlaneMask::default(), PlaneMask::ALL);
    }
}
