//! Fixed binary layout for the primitive value types.
//!
//! Every type is written as its scalar fields in declaration order, each as a
//! big-endian IEEE-754 `f32`/`f64` or a big-endian `i32`. There is no header
//! and no padding.
//!
//! | Type | Fields |
//! |------|--------|
//! | [`LineSegment`] | aX, aY, aZ, bX, bY, bZ |
//! | [`Plane`] | a, b, c, d |
//! | [`Ray`] | originX, originY, originZ, dirX, dirY, dirZ |
//! | [`Sphere`] | x, y, z, r |
//! | [`Aabb`], [`IAabb`] | minX, minY, minZ, maxX, maxY, maxZ |
//!
//! The double-precision variants use the same field order with 8-byte
//! scalars.

use glam::{DVec3, IVec3, Vec3};

use crate::aabb::{Aabb, DAabb, IAabb};
use crate::error::GeometryError;
use crate::line_segment::{DLineSegment, LineSegment};
use crate::plane::{DPlane, Plane};
use crate::ray::{DRay, Ray};
use crate::sphere::{DSphere, Sphere};

/// A value with a fixed-size big-endian binary encoding.
pub trait ByteLayout: Sized {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Append the encoding of `self` to `buf`.
    fn write_to(&self, buf: &mut Vec<u8>);

    /// Encode `self` into a new buffer of exactly [`Self::SIZE`] bytes.
    fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::SIZE);
        self.write_to(&mut buf);
        buf
    }

    /// Decode a value from the first [`Self::SIZE`] bytes of `bytes`.
    ///
    /// Trailing bytes are ignored so that values can be read back to back.
    fn read_from(bytes: &[u8]) -> Result<Self, GeometryError>;
}

trait BeScalar: Copy {
    const WIDTH: usize;

    fn put(self, buf: &mut Vec<u8>);

    /// Caller guarantees `bytes.len() >= WIDTH`.
    fn get(bytes: &[u8]) -> Self;
}

macro_rules! impl_be_scalar {
    ($($scalar:ty => $width:literal),* $(,)?) => {
        $(
            impl BeScalar for $scalar {
                const WIDTH: usize = $width;

                fn put(self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_be_bytes());
                }

                fn get(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; $width];
                    raw.copy_from_slice(&bytes[..$width]);
                    <$scalar>::from_be_bytes(raw)
                }
            }
        )*
    };
}

impl_be_scalar!(f32 => 4, f64 => 8, i32 => 4);

macro_rules! impl_byte_layout {
    ($ty:ty, $scalar:ty, $n:literal, |$value:ident| $fields:expr, |$f:ident| $build:expr) => {
        impl ByteLayout for $ty {
            const SIZE: usize = $n * <$scalar as BeScalar>::WIDTH;

            fn write_to(&self, buf: &mut Vec<u8>) {
                let $value = self;
                let fields: [$scalar; $n] = $fields;
                for field in fields {
                    field.put(buf);
                }
            }

            fn read_from(bytes: &[u8]) -> Result<Self, GeometryError> {
                if bytes.len() < Self::SIZE {
                    return Err(GeometryError::Truncated {
                        expected: Self::SIZE,
                        actual: bytes.len(),
                    });
                }
                let width = <$scalar as BeScalar>::WIDTH;
                let $f: [$scalar; $n] =
                    std::array::from_fn(|i| <$scalar as BeScalar>::get(&bytes[i * width..]));
                Ok($build)
            }
        }
    };
}

impl_byte_layout!(LineSegment, f32, 6,
    |s| [s.a.x, s.a.y, s.a.z, s.b.x, s.b.y, s.b.z],
    |f| LineSegment::new(Vec3::new(f[0], f[1], f[2]), Vec3::new(f[3], f[4], f[5])));

impl_byte_layout!(DLineSegment, f64, 6,
    |s| [s.a.x, s.a.y, s.a.z, s.b.x, s.b.y, s.b.z],
    |f| DLineSegment::new(DVec3::new(f[0], f[1], f[2]), DVec3::new(f[3], f[4], f[5])));

impl_byte_layout!(Plane, f32, 4,
    |p| [p.a, p.b, p.c, p.d],
    |f| Plane::new(f[0], f[1], f[2], f[3]));

impl_byte_layout!(DPlane, f64, 4,
    |p| [p.a, p.b, p.c, p.d],
    |f| DPlane::new(f[0], f[1], f[2], f[3]));

impl_byte_layout!(Ray, f32, 6,
    |r| [r.origin.x, r.origin.y, r.origin.z, r.direction.x, r.direction.y, r.direction.z],
    |f| Ray::new(Vec3::new(f[0], f[1], f[2]), Vec3::new(f[3], f[4], f[5])));

impl_byte_layout!(DRay, f64, 6,
    |r| [r.origin.x, r.origin.y, r.origin.z, r.direction.x, r.direction.y, r.direction.z],
    |f| DRay::new(DVec3::new(f[0], f[1], f[2]), DVec3::new(f[3], f[4], f[5])));

impl_byte_layout!(Sphere, f32, 4,
    |s| [s.center.x, s.center.y, s.center.z, s.radius],
    |f| Sphere::new(Vec3::new(f[0], f[1], f[2]), f[3]));

impl_byte_layout!(DSphere, f64, 4,
    |s| [s.center.x, s.center.y, s.center.z, s.radius],
    |f| DSphere::new(DVec3::new(f[0], f[1], f[2]), f[3]));

impl_byte_layout!(Aabb, f32, 6,
    |b| [b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z],
    |f| Aabb::new(Vec3::new(f[0], f[1], f[2]), Vec3::new(f[3], f[4], f[5])));

impl_byte_layout!(DAabb, f64, 6,
    |b| [b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z],
    |f| DAabb::new(DVec3::new(f[0], f[1], f[2]), DVec3::new(f[3], f[4], f[5])));

impl_byte_layout!(IAabb, i32, 6,
    |b| [b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z],
    |f| IAabb::new(IVec3::new(f[0], f[1], f[2]), IVec3::new(f[3], f[4], f[5])));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_bytes_are_big_endian_in_field_order() {
        let bytes = Plane::new(1.0, -2.0, 0.5, 0.0).to_bytes();
        assert_eq!(bytes.len(), Plane::SIZE);
        assert_eq!(&bytes[0..4], &[0x3F, 0x80, 0x00, 0x00]);
        assert_eq!(&bytes[4..8], &[0xC0, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[8..12], &[0x3F, 0x00, 0x00, 0x00]);
        assert_eq!(&bytes[12..16], &[0x00; 4]);
    }

    #[test]
    fn test_sizes() {
        assert_eq!(LineSegment::SIZE, 24);
        assert_eq!(DLineSegment::SIZE, 48);
        assert_eq!(Ray::SIZE, 24);
        assert_eq!(Sphere::SIZE, 16);
        assert_eq!(DSphere::SIZE, 32);
        assert_eq!(Aabb::SIZE, 24);
        assert_eq!(IAabb::SIZE, 24);
    }

    #[test]
    fn test_iaabb_reads_back() {
        let aabb = IAabb::new(IVec3::new(-1, 2, -3), IVec3::new(4, 5, i32::MAX));
        let bytes = aabb.to_bytes();
        assert_eq!(&bytes[0..4], &(-1i32).to_be_bytes());
        assert_eq!(IAabb::read_from(&bytes), Ok(aabb));
    }

    #[test]
    fn test_values_read_back_to_back() {
        let mut buf = Vec::new();
        let first = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 4.0);
        let second = Sphere::new(Vec3::ZERO, 0.5);
        first.write_to(&mut buf);
        second.write_to(&mut buf);
        assert_eq!(Sphere::read_from(&buf), Ok(first));
        assert_eq!(Sphere::read_from(&buf[Sphere::SIZE..]), Ok(second));
    }

    #[test]
    fn test_truncated_input_is_rejected() {
        let bytes = Ray::new(Vec3::ZERO, Vec3::X).to_bytes();
        assert_eq!(
            Ray::read_from(&bytes[..10]),
            Err(GeometryError::Truncated {
                expected: 24,
                actual: 10
            })
        );
        assert!(DAabb::read_from(&[]).is_err());
    }
}
