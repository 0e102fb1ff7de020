/// Projection of world space points onto the raster
use crate::error::Result;
use crate::math::{self, Mat4, Vec2i, Vec3};

/// Projection mode for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Points are already normalized to [-1, 1] and mapped straight to pixels.
    Orthographic,
    /// Points go through the camera and a perspective divide.
    Perspective,
}

/// Project `p_world` through `world_to_camera` onto an image of
/// `image_width` x `image_height` pixels.
///
/// The camera looks down -Z. Points at or behind the eye (`z >= 0` in camera
/// space) have no meaningful projection and come out degenerate; nothing is
/// clipped or clamped to the image here.
pub fn project_to_raster(
    p_world: &Vec3,
    world_to_camera: &Mat4,
    canvas_width: f64,
    canvas_height: f64,
    image_width: u32,
    image_height: u32,
) -> Vec2i {
    let p_camera = math::transform_point(world_to_camera, p_world);

    let screen_x = p_camera.x / -p_camera.z;
    let screen_y = p_camera.y / -p_camera.z;

    let ndc_x = (screen_x + canvas_width * 0.5) / canvas_width;
    let ndc_y = (screen_y + canvas_height * 0.5) / canvas_height;

    Vec2i::new(
        (ndc_x * image_width as f64).floor() as i32,
        ((1.0 - ndc_y) * image_height as f64).floor() as i32,
    )
}

/// Maps pre-normalized coordinates onto a screen, Y flipped
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    dx: f64,
    dy: f64,
}

impl ScreenTransform {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            dx: width as f64 / 2.0,
            dy: height as f64 / 2.0,
        }
    }

    /// `x' = (x + 1) * width / 2`, `y' = (-y + 1) * height / 2`; z is ignored.
    pub fn transform(&self, v: &Vec3) -> Vec2i {
        Vec2i::new(
            ((v.x + 1.0) * self.dx).floor() as i32,
            ((-v.y + 1.0) * self.dy).floor() as i32,
        )
    }
}

/// Perspective projection parameters for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub world_to_camera: Mat4,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub image_width: u32,
    pub image_height: u32,
}

impl Perspective {
    /// Build the projection from where the camera sits in the world.
    ///
    /// Fails with [`Error::DegenerateMatrix`](crate::Error::DegenerateMatrix)
    /// when `camera_to_world` cannot be inverted.
    pub fn from_camera_to_world(
        camera_to_world: &Mat4,
        canvas_width: f64,
        canvas_height: f64,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self> {
        Ok(Self {
            world_to_camera: math::inverse(camera_to_world)?,
            canvas_width,
            canvas_height,
            image_width,
            image_height,
        })
    }

    pub fn project(&self, p: &Vec3) -> Vec2i {
        project_to_raster(
            p,
            &self.world_to_camera,
            self.canvas_width,
            self.canvas_height,
            self.image_width,
            self.image_height,
        )
    }
}

/// World to raster strategy used by the draw loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Orthographic(ScreenTransform),
    Perspective(Perspective),
}

impl Projection {
    pub fn project(&self, p: &Vec3) -> Vec2i {
        match self {
            Projection::Orthographic(screen) => screen.transform(p),
            Projection::Perspective(perspective) => perspective.project(p),
        }
    }

    pub fn mode(&self) -> ProjectionMode {
        match self {
            Projection::Orthographic(_) => ProjectionMode::Orthographic,
            Projection::Perspective(_) => ProjectionMode::Perspective,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::error::Error;
    use crate::geometry::RenderObject;

    #[test]
    fn test_origin_projects_to_image_center() {
        for position in [
            Vec3::new(0.0, 10.0, 0.0),
            Vec3::new(0.0, 60.0, 40.0),
            Vec3::new(40.0, 0.0, 30.0),
            Vec3::new(60.0, 0.0, 0.0),
            Vec3::new(30.0, 30.0, 20.0),
            Vec3::new(-20.0, 35.0, -15.0),
        ] {
            let camera = Camera::new(position, Vec3::zeros()).unwrap();
            let view = camera.view_matrix().unwrap();
            let raster = project_to_raster(&Vec3::zeros(), &view, 2.0, 2.0, 1000, 1000);
            // The exact centre can floor either way after the inverse.
            assert!((499..=500).contains(&raster.x), "{position:?}: {raster:?}");
            assert!((499..=500).contains(&raster.y), "{position:?}: {raster:?}");
        }
    }

    #[test]
    fn test_pinned_camera_to_world() {
        #[rustfmt::skip]
        let camera_to_world = Mat4::new(
            0.871214, -0.192902, 0.451415, 14.777467,
            0.0, 0.919559, 0.392953, 29.361945,
            -0.490904, -0.342346, 0.801132, 27.993464,
            0.0, 0.0, 0.0, 1.0,
        );
        let perspective =
            Perspective::from_camera_to_world(&camera_to_world, 2.0, 2.0, 1000, 1000).unwrap();

        let eye_world = Vec3::new(14.777467, 29.361945, 27.993464);
        let eye = math::transform_point(&perspective.world_to_camera, &eye_world);
        assert!(eye.norm() < 1e-6);

        assert_eq!(perspective.project(&Vec3::new(0.0, 39.034, 0.0)), Vec2i::new(517, 78));
        assert_eq!(perspective.project(&Vec3::new(3.0, 36.604, 0.0)), Vec2i::new(569, 128));
        assert_eq!(perspective.project(&Vec3::new(12.278, 8.9323, 0.0)), Vec2i::new(683, 638));
        assert_eq!(perspective.project(&Vec3::zeros()), Vec2i::new(510, 679));
    }

    #[test]
    fn test_singular_camera_to_world_rejected() {
        let flat = Mat4::new_nonuniform_scaling(&Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(
            Perspective::from_camera_to_world(&flat, 2.0, 2.0, 100, 100),
            Err(Error::DegenerateMatrix)
        );
    }

    #[test]
    fn test_identity_camera_mapping() {
        // Camera space equals world space; one unit left at depth 1 hits the canvas edge.
        let view = Mat4::identity();
        let p = Vec3::new(-1.0, 1.0, -1.0);
        assert_eq!(project_to_raster(&p, &view, 2.0, 2.0, 640, 480), Vec2i::new(0, 0));

        let p = Vec3::new(0.5, -0.5, -1.0);
        assert_eq!(project_to_raster(&p, &view, 2.0, 2.0, 640, 480), Vec2i::new(480, 360));
    }

    #[test]
    fn test_no_clamping_outside_canvas() {
        let view = Mat4::identity();
        let p = Vec3::new(3.0, -3.0, -1.0);
        assert_eq!(project_to_raster(&p, &view, 2.0, 2.0, 100, 100), Vec2i::new(200, 200));
    }

    #[test]
    fn test_scenario_cube_baseline() {
        let camera = Camera::new(Vec3::new(50.0, 50.0, 50.0), Vec3::new(150.0, 1.0, 1.0)).unwrap();
        let view = camera.view_matrix().unwrap();
        let cube = RenderObject::cube(25.0);

        let raster: Vec<Vec2i> = cube
            .lines()
            .points()
            .iter()
            .map(|p| project_to_raster(p, &view, 10.0, 10.0, 1000, 1000))
            .collect();

        // The target points away from the cube. Corners 0, 1, 2, 3 and 6 sit
        // behind the eye and 1, 6 share the eye's diagonal.
        let expected = [
            Vec2i::new(-254, 86),
            Vec2i::new(-7640, -6191),
            Vec2i::new(210, 262),
            Vec2i::new(-52, -160),
            Vec2i::new(1268, 889),
            Vec2i::new(872, 805),
            Vec2i::new(-7640, -6191),
            Vec2i::new(1030, 1178),
        ];
        assert_eq!(raster, expected);
    }

    #[test]
    fn test_screen_transform() {
        let screen = ScreenTransform::new(800, 600);
        assert_eq!(screen.transform(&Vec3::new(-1.0, 1.0, 0.0)), Vec2i::new(0, 0));
        assert_eq!(screen.transform(&Vec3::new(0.0, 0.0, 5.0)), Vec2i::new(400, 300));
        assert_eq!(screen.transform(&Vec3::new(0.125, -0.5, 0.0)), Vec2i::new(450, 450));
    }

    #[test]
    fn test_strategies_stay_distinct() {
        let p = Vec3::new(0.5, 0.5, -2.0);
        let ortho = Projection::Orthographic(ScreenTransform::new(100, 100));
        let perspective = Projection::Perspective(Perspective {
            world_to_camera: Mat4::identity(),
            canvas_width: 2.0,
            canvas_height: 2.0,
            image_width: 100,
            image_height: 100,
        });

        assert_eq!(ortho.mode(), ProjectionMode::Orthographic);
        assert_eq!(perspective.mode(), ProjectionMode::Perspective);
        assert_eq!(ortho.project(&p), Vec2i::new(75, 25));
        assert_eq!(perspective.project(&p), Vec2i::new(62, 37));
    }
}
