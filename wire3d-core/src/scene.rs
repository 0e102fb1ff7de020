/// Scene state and the per-frame update/compose driver
use log::{debug, info};

use crate::camera::{Camera, RangeCull};
use crate::error::{Error, Result};
use crate::geometry::{RenderObject, Topology};
use crate::input::{Input, Key};
use crate::math::Vec3;
use crate::projection::{Perspective, Projection, ProjectionMode, ScreenTransform};
use crate::render::{self, FaceEdges, Surface, WireframeStyle};

/// Everything needed to build a [`Scene`]
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Edge length of the cube.
    pub cube_size: f64,
    pub camera_position: Vec3,
    pub look_at: Vec3,
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Height over width of one raster pixel. When set, the canvas height is
    /// derived from `canvas_width` and the image size so that pixels that are
    /// not square still show an undistorted picture.
    pub pixel_aspect: Option<f64>,
    /// Orthographic mode expects the object to fit in [-1, 1] already.
    pub mode: ProjectionMode,
    pub topology: Topology,
    pub face_edges: FaceEdges,
    pub range: Option<RangeCull>,
    /// Rotation added to the object every frame.
    pub spin: Vec3,
    pub camera_step: f64,
    pub rotate_step: f64,
    pub scale_step: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            cube_size: 25.0,
            camera_position: *camera.position(),
            look_at: *camera.look_at(),
            canvas_width: 1.0,
            canvas_height: 1.0,
            pixel_aspect: None,
            mode: ProjectionMode::Perspective,
            topology: Topology::Edges,
            face_edges: FaceEdges::All,
            range: Some(RangeCull::default()),
            spin: Vec3::new(0.01, 0.01, 0.01),
            camera_step: 1.0,
            rotate_step: 0.05,
            scale_step: 0.01,
        }
    }
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The object, camera and drawing options that persist across frames
#[derive(Debug, Clone)]
pub struct Scene {
    pub object: RenderObject,
    pub camera: Camera,
    config: SceneConfig,
    style: WireframeStyle,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self> {
        let camera = Camera::new(config.camera_position, config.look_at)?;
        let style = WireframeStyle {
            face_edges: config.face_edges,
            cull: config.range,
            ..WireframeStyle::default()
        };
        info!(
            "scene: cube {} at origin, camera {:?} -> {:?}, {:?} {:?}",
            config.cube_size,
            camera.position(),
            camera.look_at(),
            config.mode,
            config.topology
        );

        Ok(Self {
            object: RenderObject::cube(config.cube_size),
            camera,
            config,
            style,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Advance the animation and apply this frame's key presses.
    pub fn update<I: Input + ?Sized>(&mut self, input: &I) {
        let spin = self.config.spin;
        self.object.transform.rotate_by(&spin);

        let step = self.config.camera_step;
        let mut camera_delta = Vec3::zeros();
        for (key, delta) in [
            (Key::Left, Vec3::new(-step, 0.0, 0.0)),
            (Key::Right, Vec3::new(step, 0.0, 0.0)),
            (Key::Up, Vec3::new(0.0, step, 0.0)),
            (Key::Down, Vec3::new(0.0, -step, 0.0)),
            (Key::PageUp, Vec3::new(0.0, 0.0, step)),
            (Key::PageDown, Vec3::new(0.0, 0.0, -step)),
        ] {
            if input.is_key_pressed(key) {
                camera_delta += delta;
            }
        }
        if camera_delta != Vec3::zeros() {
            if let Err(e) = self.camera.translate(&camera_delta) {
                debug!("camera stays at {:?}: {}", self.camera.position(), e);
            }
        }

        let turn = self.config.rotate_step;
        let mut rotation = Vec3::zeros();
        for (key, delta) in [
            ('w', Vec3::new(turn, 0.0, 0.0)),
            ('s', Vec3::new(-turn, 0.0, 0.0)),
            ('a', Vec3::new(0.0, -turn, 0.0)),
            ('d', Vec3::new(0.0, turn, 0.0)),
            ('z', Vec3::new(0.0, 0.0, turn)),
            ('x', Vec3::new(0.0, 0.0, -turn)),
        ] {
            if input.is_key_pressed(Key::Char(key)) {
                rotation += delta;
            }
        }
        self.object.transform.rotate_by(&rotation);

        let grow = self.config.scale_step;
        if input.is_key_pressed(Key::Char('+')) || input.is_key_pressed(Key::Char('=')) {
            self.object.transform.scale_by(&Vec3::new(grow, grow, grow));
        }
        if input.is_key_pressed(Key::Char('-')) {
            self.object.transform.scale_by(&Vec3::new(-grow, -grow, -grow));
        }
        if input.is_key_pressed(Key::Char('r')) {
            debug!("resetting object transform");
            self.object.transform = Default::default();
        }
    }

    /// Canvas extent used for a `width` x `height` image.
    pub fn canvas(&self, width: u32, height: u32) -> (f64, f64) {
        let canvas_width = self.config.canvas_width;
        match self.config.pixel_aspect {
            Some(aspect) if width > 0 => (
                canvas_width,
                canvas_width * aspect * f64::from(height) / f64::from(width),
            ),
            _ => (canvas_width, self.config.canvas_height),
        }
    }

    /// Projection strategy for the current camera onto a `width` x `height` image.
    pub fn projection(&self, width: u32, height: u32) -> Result<Projection> {
        Ok(match self.config.mode {
            ProjectionMode::Orthographic => Projection::Orthographic(ScreenTransform::new(width, height)),
            ProjectionMode::Perspective => {
                let (canvas_width, canvas_height) = self.canvas(width, height);
                Projection::Perspective(Perspective::from_camera_to_world(
                    &self.camera.camera_to_world()?,
                    canvas_width,
                    canvas_height,
                    width,
                    height,
                )?)
            }
        })
    }

    /// Draw the object onto `surface`, returning the number of segments.
    pub fn compose<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<usize> {
        let (width, height) = surface.dimensions();
        let projection = self.projection(width, height)?;
        let list = self.object.indexed(self.config.topology);
        Ok(render::draw_wireframe(
            &list,
            &projection,
            self.camera.position(),
            &self.style,
            surface,
        ))
    }

    /// Run one frame: check for exit, then update and compose inside the
    /// surface's frame bracket.
    pub fn go<S, I>(&mut self, surface: &mut S, input: &I) -> Result<Flow, S::Error>
    where
        S: Surface + ?Sized,
        S::Error: From<Error>,
        I: Input + ?Sized,
    {
        if input.is_key_pressed(Key::Escape) {
            info!("escape pressed, leaving frame loop");
            return Ok(Flow::Exit);
        }

        surface.begin_frame()?;
        self.update(input);
        let composed = self.compose(surface);
        surface.end_frame()?;
        composed?;

        Ok(Flow::Continue)
    }
}
