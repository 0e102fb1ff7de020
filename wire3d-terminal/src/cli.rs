use clap::{Parser, ValueEnum};
use wire3d_core::parse::{parse_extent, parse_vec3};
use wire3d_core::{FaceEdges, ProjectionMode, RangeCull, SceneConfig, Topology, Vec3};

/// Spin a wireframe cube in the terminal.
///
/// Arrows and PageUp/PageDown move the camera, w/s a/d z/x rotate the cube,
/// +/- scale it, r resets it and q or Esc quits.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Edge length of the cube.
    #[clap(long, env = "WIRE3D_SIZE", default_value_t = 25.0)]
    pub size: f64,

    /// Camera position as "x,y,z".
    #[clap(long, env = "WIRE3D_CAMERA", value_parser = parse_vec3, default_value = "0,60,40")]
    pub camera: Vec3,

    /// Point the camera looks at, as "x,y,z".
    #[clap(long, env = "WIRE3D_LOOK_AT", value_parser = parse_vec3, default_value = "0,0,0")]
    pub look_at: Vec3,

    /// Canvas extent at unit distance from the eye, as "width,height".
    ///
    /// The height is only used as given when --cell-aspect is 0.
    #[clap(long, value_parser = parse_extent, default_value = "1,1")]
    pub canvas: (f64, f64),

    /// Height over width of one terminal cell. The canvas height is derived
    /// from it and the terminal size so the cube is not stretched; 0 turns
    /// the correction off.
    #[clap(long, env = "WIRE3D_CELL_ASPECT", default_value_t = 2.0)]
    pub cell_aspect: f64,

    #[clap(long, value_enum, default_value_t = Mode::Perspective)]
    pub mode: Mode,

    /// Draw the cube's edge list or its triangle faces.
    #[clap(long, value_enum, default_value_t = Geometry::Edges)]
    pub geometry: Geometry,

    /// Edges drawn per triangle face.
    #[clap(long, value_enum, default_value_t = Faces::All)]
    pub faces: Faces,

    /// Segments with both endpoints closer than this are skipped.
    #[clap(long, default_value_t = 0.0)]
    pub min_range: f64,

    /// Segments with both endpoints farther than this are skipped.
    #[clap(long, default_value_t = 100.0)]
    pub max_range: f64,

    /// Draw every segment regardless of distance.
    #[clap(long)]
    pub no_cull: bool,

    /// Rotation added every frame, in radians, as "x,y,z".
    #[clap(long, value_parser = parse_vec3, default_value = "0.01,0.01,0.01")]
    pub spin: Vec3,

    /// Target frames per second.
    #[clap(long, env = "WIRE3D_FPS", default_value_t = 30)]
    pub fps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Geometry is already in [-1, 1] and mapped straight to the screen.
    Orthographic,
    /// Geometry goes through the camera and a perspective divide.
    Perspective,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Geometry {
    Edges,
    Triangles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Faces {
    All,
    /// Leave the closing edge of each triangle out.
    Open,
}

impl Cli {
    pub fn scene_config(&self) -> SceneConfig {
        let (canvas_width, canvas_height) = self.canvas;
        SceneConfig {
            cube_size: self.size,
            camera_position: self.camera,
            look_at: self.look_at,
            canvas_width,
            canvas_height,
            pixel_aspect: (self.cell_aspect > 0.0).then_some(self.cell_aspect),
            mode: match self.mode {
                Mode::Orthographic => ProjectionMode::Orthographic,
                Mode::Perspective => ProjectionMode::Perspective,
            },
            topology: match self.geometry {
                Geometry::Edges => Topology::Edges,
                Geometry::Triangles => Topology::Triangles,
            },
            face_edges: match self.faces {
                Faces::All => FaceEdges::All,
                Faces::Open => FaceEdges::Open,
            },
            range: (!self.no_cull).then(|| RangeCull::new(self.min_range, self.max_range)),
            spin: self.spin,
            ..SceneConfig::default()
        }
    }
}
