use glam::{Mat4, Vec3};

use crate::ray::Ray;

/// Builds world-space rays through a viewport from a projection-view matrix.
///
/// The four corner directions are the intersection lines of adjacent side
/// planes. Directions for interior points are bilinear blends of those
/// corners, and the eye position is the common point of the side planes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrustumRayBuilder {
    nxny: Vec3,
    pxny: Vec3,
    pxpy: Vec3,
    nxpy: Vec3,
    origin: Vec3,
}

impl FrustumRayBuilder {
    pub fn new(m: &Mat4) -> Self {
        let mut builder = Self::default();
        builder.set(m);
        builder
    }

    /// Recompute the corner rays and eye position from `m`.
    pub fn set(&mut self, m: &Mat4) -> &mut Self {
        let (r0, r1, r3) = (m.row(0), m.row(1), m.row(3));
        let left = r3 + r0;
        let right = r3 - r0;
        let bottom = r3 + r1;
        let top = r3 - r1;
        let (nx, px, ny, py) = (left.truncate(), right.truncate(), bottom.truncate(), top.truncate());

        self.nxny = ny.cross(nx);
        self.pxny = px.cross(ny);
        self.nxpy = nx.cross(py);
        self.pxpy = py.cross(px);

        let pxnx = px.cross(nx);
        let inv_dot = 1.0 / nx.dot(self.pxpy);
        self.origin = (-self.pxpy * left.w - self.nxpy * right.w - pxnx * top.w) * inv_dot;

        tracing::trace!(origin = ?self.origin, "frustum ray builder updated");
        self
    }

    /// Eye position of the frustum.
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Normalized direction through viewport point `(x, y)`.
    ///
    /// `(0, 0)` is the bottom-left corner and `(1, 1)` the top-right corner.
    pub fn dir(&self, x: f32, y: f32) -> Vec3 {
        let left = self.nxny.lerp(self.nxpy, y);
        let right = self.pxny.lerp(self.pxpy, y);
        left.lerp(right, x).normalize()
    }
}

/// Produces picking rays for viewport and pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RayCaster {
    builder: FrustumRayBuilder,
}

impl RayCaster {
    pub fn new(m: &Mat4) -> Self {
        Self {
            builder: FrustumRayBuilder::new(m),
        }
    }

    pub fn set(&mut self, m: &Mat4) -> &mut Self {
        self.builder.set(m);
        self
    }

    pub fn builder(&self) -> &FrustumRayBuilder {
        &self.builder
    }

    /// Ray from the eye through viewport point `(x, y)` in `[0, 1]`.
    pub fn ray(&self, x: f32, y: f32) -> Ray {
        Ray::new(self.builder.origin(), self.builder.dir(x, y))
    }

    /// Ray through the center of pixel `(px, py)`.
    ///
    /// Pixel rows count down from the top of the viewport, as in window
    /// coordinates.
    pub fn ray_at_pixel(&self, px: u32, py: u32, width: u32, height: u32) -> Ray {
        let x = (px as f32 + 0.5) / width as f32;
        let y = 1.0 - (py as f32 + 0.5) / height as f32;
        self.ray(x, y)
    }
}
