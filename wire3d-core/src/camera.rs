/// Camera placement and view matrix construction
use log::warn;

use crate::error::{Error, Result};
use crate::math::{self, Mat4, Vec3};
use crate::transform::Transform;

/// World up direction used to derive the camera basis.
pub const WORLD_UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Orthonormal camera basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub u: Vec3,
    pub v: Vec3,
    /// Points from the look-at target back towards the eye.
    pub w: Vec3,
}

/// Camera configuration for 3D rendering
///
/// The eye is never allowed to sit on its target; [`Camera::new`] and
/// [`Camera::translate`] both refuse such a placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vec3,
    look_at: Vec3,
}

impl Camera {
    pub fn new(position: Vec3, look_at: Vec3) -> Result<Self> {
        if position == look_at {
            return Err(Error::DegenerateCamera);
        }
        Ok(Self { position, look_at })
    }

    pub fn position(&self) -> &Vec3 {
        &self.position
    }

    pub fn look_at(&self) -> &Vec3 {
        &self.look_at
    }

    /// Move the eye by `delta`, keeping the target fixed.
    pub fn translate(&mut self, delta: &Vec3) -> Result<()> {
        let position = self.position + delta;
        if position == self.look_at {
            warn!("ignoring camera move onto its look-at target {:?}", self.look_at);
            return Err(Error::DegenerateCamera);
        }
        self.position = position;
        Ok(())
    }

    /// Derive `w = |position - look_at|`, `u = |WORLD_UP x w|`, `v = w x u`.
    ///
    /// A view direction parallel to [`WORLD_UP`] leaves `u` without a
    /// direction and is reported as [`Error::ZeroLengthVector`].
    pub fn basis(&self) -> Result<Basis> {
        let w = math::normalize(&(self.position - self.look_at))?;
        let u = math::normalize(&WORLD_UP.cross(&w))?;
        let v = w.cross(&u);
        Ok(Basis { u, v, w })
    }

    /// Place the camera in the world: basis vectors u, v, w as the rotation
    /// columns, followed by a translation to `position`.
    pub fn camera_to_world(&self) -> Result<Mat4> {
        let Basis { u, v, w } = self.basis()?;
        #[rustfmt::skip]
        let rotation = Mat4::new(
            u.x, v.x, w.x, 0.0,
            u.y, v.y, w.y, 0.0,
            u.z, v.z, w.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );
        Ok(Transform::translation_matrix(&self.position) * rotation)
    }

    /// Create the view matrix (world to camera), the inverse of
    /// [`Camera::camera_to_world`].
    pub fn view_matrix(&self) -> Result<Mat4> {
        math::inverse(&self.camera_to_world()?)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 60.0, 40.0),
            look_at: Vec3::zeros(),
        }
    }
}

/// Distance window, measured from the eye, for drawing segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCull {
    pub min: f64,
    pub max: f64,
}

impl RangeCull {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min && distance <= self.max
    }

    /// A segment survives when at least one endpoint lies inside the window.
    pub fn keeps(&self, eye: &Vec3, a: &Vec3, b: &Vec3) -> bool {
        self.contains(math::distance(eye, a)) || self.contains(math::distance(eye, b))
    }
}

impl Default for RangeCull {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_camera_rejected() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(Camera::new(p, p), Err(Error::DegenerateCamera));
    }

    #[test]
    fn test_translate_onto_target_rejected() {
        let mut camera = Camera::new(Vec3::new(0.0, 1.0, 0.0), Vec3::zeros()).unwrap();
        assert_eq!(
            camera.translate(&Vec3::new(0.0, -1.0, 0.0)),
            Err(Error::DegenerateCamera)
        );
        assert_eq!(camera.position(), &Vec3::new(0.0, 1.0, 0.0));

        camera.translate(&Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert_eq!(camera.position(), &Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = Camera::new(Vec3::new(50.0, 50.0, 50.0), Vec3::new(150.0, 1.0, 1.0)).unwrap();
        let Basis { u, v, w } = camera.basis().unwrap();
        for axis in [u, v, w] {
            assert!((axis.norm() - 1.0).abs() < 1e-12);
        }
        assert!(u.dot(&v).abs() < 1e-12);
        assert!(v.dot(&w).abs() < 1e-12);
        assert!(w.dot(&u).abs() < 1e-12);
        assert!(u.z.abs() < 1e-12);
    }

    #[test]
    fn test_vertical_view_has_no_basis() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::zeros()).unwrap();
        assert_eq!(camera.basis(), Err(Error::ZeroLengthVector));
        assert_eq!(camera.view_matrix(), Err(Error::ZeroLengthVector));
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let camera = Camera::new(Vec3::new(4.0, -3.0, 7.0), Vec3::new(1.0, 1.0, 1.0)).unwrap();
        let view = camera.view_matrix().unwrap();
        let eye = math::transform_point(&view, camera.position());
        assert!(eye.norm() < 1e-9);

        let round_trip = camera.camera_to_world().unwrap() * view;
        assert!((round_trip - Mat4::identity()).norm() < 1e-9);
    }

    #[test]
    fn test_view_rotation_is_transposed_basis() {
        let camera = Camera::new(Vec3::new(40.0, 0.0, 30.0), Vec3::zeros()).unwrap();
        let Basis { u, v, w } = camera.basis().unwrap();
        let view = camera.view_matrix().unwrap();
        for (row, axis) in [u, v, w].iter().enumerate() {
            for col in 0..3 {
                assert!((view[(row, col)] - axis[col]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_target_lies_down_negative_z() {
        for (position, distance) in [
            (Vec3::new(0.0, 30.0, 40.0), 50.0),
            (Vec3::new(40.0, 0.0, 30.0), 50.0),
            (Vec3::new(60.0, 0.0, 0.0), 60.0),
            (Vec3::new(-12.0, 9.0, -20.0), 25.0),
        ] {
            let camera = Camera::new(position, Vec3::zeros()).unwrap();
            let view = camera.view_matrix().unwrap();
            let target = math::transform_point(&view, camera.look_at());
            assert!(target.x.abs() < 1e-9, "{position:?}: {target:?}");
            assert!(target.y.abs() < 1e-9, "{position:?}: {target:?}");
            assert!((target.z + distance).abs() < 1e-9, "{position:?}: {target:?}");
        }
    }

    #[test]
    fn test_range_cull() {
        let cull = RangeCull::default();
        let eye = Vec3::zeros();
        let near = Vec3::new(50.0, 0.0, 0.0);
        let near2 = Vec3::new(0.0, 50.0, 0.0);
        let far = Vec3::new(150.0, 0.0, 0.0);
        let far2 = Vec3::new(0.0, 0.0, -101.0);

        assert!(cull.keeps(&eye, &near, &near2));
        assert!(cull.keeps(&eye, &near, &far));
        assert!(!cull.keeps(&eye, &far, &far2));
    }
}
