/// Vector and matrix primitives shared by every pipeline stage
use nalgebra::{Matrix4, Point2, Point3, Vector3};

use crate::error::{Error, Result};

/// Object or world space point/direction.
pub type Vec3 = Vector3<f64>;

/// Raster pixel coordinate, origin top-left.
pub type Vec2i = Point2<i32>;

/// Homogeneous 4x4 transform, column-vector convention.
pub type Mat4 = Matrix4<f64>;

/// Lengths at or below this are treated as zero.
const MIN_NORM: f64 = 1e-12;

/// Normalize `v`, reporting zero-length input instead of yielding NaNs.
pub fn normalize(v: &Vec3) -> Result<Vec3> {
    let length = v.norm();
    if !length.is_finite() || length <= MIN_NORM {
        return Err(Error::ZeroLengthVector);
    }
    Ok(v / length)
}

/// Invert `m`, reporting singular matrices.
pub fn inverse(m: &Mat4) -> Result<Mat4> {
    m.try_inverse().ok_or(Error::DegenerateMatrix)
}

/// Multiply `p` (with implicit w = 1) by `m`.
///
/// Affine matrices leave w at 1; anything else gets the homogeneous divide.
/// Points that land at infinity (w = 0) come back undivided.
pub fn transform_point(m: &Mat4, p: &Vec3) -> Vec3 {
    let h = m * p.push(1.0);
    let w = h.w;
    if w == 1.0 || w == 0.0 {
        Vec3::new(h.x, h.y, h.z)
    } else {
        Vec3::new(h.x / w, h.y / w, h.z / w)
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    nalgebra::distance(&Point3::from(*a), &Point3::from(*b))
}
