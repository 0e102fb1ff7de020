/// Object space to world space transformations
use nalgebra::Matrix3;

use crate::math::{Mat4, Vec3};

/// Build the fixed Z-X-Y Euler rotation for `angles` (radians).
///
/// `angles.z` is the first elemental rotation, then `angles.x`, then
/// `angles.y`, all folded into one matrix.
pub fn rotation_matrix(angles: &Vec3) -> Matrix3<f64> {
    let (sina, cosa) = angles.z.sin_cos();
    let (sinb, cosb) = angles.x.sin_cos();
    let (sinc, cosc) = angles.y.sin_cos();

    Matrix3::new(
        cosa * cosb,
        cosa * sinb * sinc - sina * cosc,
        cosa * sinb * cosc + sina * sinc,
        sina * cosb,
        sina * sinb * sinc + cosa * cosc,
        sina * sinb * cosc - cosa * sinc,
        -sinb,
        cosb * sinc,
        cosb * cosc,
    )
}

/// Scale, rotation and translation state of a renderable object
///
/// The `*_by` operations add a delta to the stored state, which is what the
/// per-frame animation relies on. The `set_*` operations replace it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectTransform {
    pub scale: Vec3,
    /// Euler angles in radians, see [`rotation_matrix`].
    pub rotation: Vec3,
    pub translation: Vec3,
}

impl ObjectTransform {
    pub fn new(scale: Vec3, rotation: Vec3, translation: Vec3) -> Self {
        Self {
            scale,
            rotation,
            translation,
        }
    }

    pub fn identity() -> Self {
        Self::new(Vec3::new(1.0, 1.0, 1.0), Vec3::zeros(), Vec3::zeros())
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate_by(&mut self, delta: &Vec3) {
        self.rotation += delta;
    }

    pub fn scale_by(&mut self, delta: &Vec3) {
        self.scale += delta;
    }

    pub fn translate_by(&mut self, delta: &Vec3) {
        self.translation += delta;
    }

    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    /// Transform every point: rotate, then scale, then translate.
    pub fn apply_all(&self, points: &[Vec3]) -> Vec<Vec3> {
        let rotation = rotation_matrix(&self.rotation);
        points
            .iter()
            .map(|p| (rotation * p).component_mul(&self.scale) + self.translation)
            .collect()
    }

    pub fn apply(&self, point: &Vec3) -> Vec3 {
        (rotation_matrix(&self.rotation) * point).component_mul(&self.scale) + self.translation
    }

    /// The same composition as a single homogeneous matrix.
    pub fn model_matrix(&self) -> Mat4 {
        let rotation = rotation_matrix(&self.rotation).to_homogeneous();
        let scale = Transform::scale_matrix(&self.scale);
        let translation = Transform::translation_matrix(&self.translation);
        translation * scale * rotation
    }
}

impl Default for ObjectTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    /// Create a translation matrix
    pub fn translation_matrix(offset: &Vec3) -> Mat4 {
        Mat4::new_translation(offset)
    }

    /// Create a scale matrix
    pub fn scale_matrix(factors: &Vec3) -> Mat4 {
        Mat4::new_nonuniform_scaling(factors)
    }
}
