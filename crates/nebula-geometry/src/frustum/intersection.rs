use glam::{Mat4, Vec3, Vec4};

use super::culler::{negative_vertex, positive_vertex, signed_distance};
use super::{Culler, DepthRange, FrustumPlane, PlaneMask};

/// Where a volume lies relative to the frustum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Containment {
    /// Entirely inside all planes.
    Inside,
    /// Partially inside. May also be reported for volumes just outside a
    /// frustum edge or corner.
    Intersect,
    /// Entirely outside the given plane.
    Outside(FrustumPlane),
}

/// Frustum tests that distinguish full containment from partial overlap.
///
/// The boolean tests match [`Culler`]. The `intersect_*` methods additionally
/// report whether a volume is fully inside, which lets callers skip testing
/// the children of a fully visible node.
#[derive(Clone, Debug, PartialEq)]
pub struct FrustumIntersection {
    culler: Culler,
}

impl FrustumIntersection {
    pub fn new(m: &Mat4) -> Self {
        Self { culler: Culler::new(m) }
    }

    pub fn with_depth_range(m: &Mat4, depth_range: DepthRange) -> Self {
        Self {
            culler: Culler::with_depth_range(m, depth_range),
        }
    }

    pub fn set(&mut self, m: &Mat4) -> &mut Self {
        self.culler.set(m);
        self
    }

    pub fn planes(&self) -> &[Vec4; 6] {
        self.culler.planes()
    }

    pub fn test_point(&self, point: Vec3) -> bool {
        self.culler.is_point_inside_frustum(point)
    }

    pub fn test_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.culler.is_sphere_inside_frustum(center, radius)
    }

    pub fn test_aab(&self, min: Vec3, max: Vec3) -> bool {
        self.culler.is_aab_inside_frustum(min, max).is_none()
    }

    /// Classify a sphere against the frustum.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Containment {
        let mut inside = true;
        for plane in FrustumPlane::ALL {
            let dist = signed_distance(&self.planes()[plane.index()], center);
            if dist < -radius {
                return Containment::Outside(plane);
            }
            inside &= dist >= radius;
        }
        if inside { Containment::Inside } else { Containment::Intersect }
    }

    /// Classify the box `min..max` against the frustum.
    pub fn intersect_aab(&self, min: Vec3, max: Vec3) -> Containment {
        self.intersect_aab_masked(min, max, PlaneMask::ALL)
    }

    /// Classify the box `min..max`, rejecting it only on the planes selected
    /// by `mask`.
    ///
    /// Every plane still takes part in the inside test, so a box beyond a
    /// masked-off plane is reported as [`Containment::Intersect`].
    pub fn intersect_aab_masked(&self, min: Vec3, max: Vec3, mask: PlaneMask) -> Containment {
        let mut inside = true;
        for plane in FrustumPlane::ALL {
            let p = &self.planes()[plane.index()];
            if mask.contains(plane.mask()) && signed_distance(p, positive_vertex(p, min, max)) < 0.0 {
                return Containment::Outside(plane);
            }
            inside &= signed_distance(p, negative_vertex(p, min, max)) >= 0.0;
        }
        if inside { Containment::Inside } else { Containment::Intersect }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn frustum() -> FrustumIntersection {
        FrustumIntersection::new(&Mat4::perspective_rh_gl(FRAC_PI_2, 1.0, 0.1, 100.0))
    }

    #[test]
    fn test_aab_fully_inside() {
        let containment = frustum().intersect_aab(Vec3::new(-0.5, -0.5, -6.0), Vec3::new(0.5, 0.5, -5.0));
        assert_eq!(containment, Containment::Inside);
    }

    #[test]
    fn test_aab_straddling_left_plane() {
        let containment = frustum().intersect_aab(Vec3::new(-5.0, -0.5, -3.0), Vec3::new(0.0, 0.5, -2.0));
        assert_eq!(containment, Containment::Intersect);
    }

    #[test]
    fn test_aab_outside_reports_plane() {
        let f = frustum();
        let behind = f.intersect_aab(Vec3::new(-1.0, -1.0, 1.0), Vec3::new(1.0, 1.0, 2.0));
        assert!(matches!(behind, Containment::Outside(_)));
        assert!(!f.test_aab(Vec3::new(-1.0, -1.0, 1.0), Vec3::new(1.0, 1.0, 2.0)));

        let above = f.intersect_aab(Vec3::new(-1.0, 10.0, -5.0), Vec3::new(1.0, 11.0, -4.0));
        assert_eq!(above, Containment::Outside(FrustumPlane::Py));
    }

    #[test]
    fn test_masked_planes_still_decide_inside() {
        let f = frustum();
        let straddling = (Vec3::new(-5.0, -0.5, -3.0), Vec3::new(0.0, 0.5, -2.0));
        let mask = PlaneMask::PX | PlaneMask::NZ;
        assert_eq!(f.intersect_aab_masked(straddling.0, straddling.1, mask), Containment::Intersect);

        let left = (Vec3::new(-20.0, -0.5, -3.0), Vec3::new(-10.0, 0.5, -2.0));
        assert_eq!(f.intersect_aab(left.0, left.1), Containment::Outside(FrustumPlane::Nx));
        assert_eq!(f.intersect_aab_masked(left.0, left.1, mask), Containment::Intersect);

        let centered = (Vec3::new(-0.5, -0.5, -6.0), Vec3::new(0.5, 0.5, -5.0));
        assert_eq!(f.intersect_aab_masked(centered.0, centered.1, mask), Containment::Inside);
        assert_eq!(f.intersect_aab_masked(centered.0, centered.1, PlaneMask::empty()), Containment::Inside);
    }

    #[test]
    fn test_sphere_classification() {
        let f = frustum();
        assert_eq!(f.intersect_sphere(Vec3::new(0.0, 0.0, -5.0), 1.0), Containment::Inside);
        assert_eq!(f.intersect_sphere(Vec3::new(2.0, 0.0, -2.0), 1.0), Containment::Intersect);
        assert_eq!(
            f.intersect_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0),
            Containment::Outside(FrustumPlane::Nx)
        );
    }

    #[test]
    fn test_boolean_tests_match_culler() {
        let f = frustum();
        assert!(f.test_point(Vec3::new(0.0, 0.0, -5.0)));
        assert!(f.test_sphere(Vec3::new(1.0, 0.0, -2.0), 0.1));
        assert!(!f.test_sphere(Vec3::new(4.0, 0.0, -2.0), 1.0));
    }
}
