/// Frame composition: projects indexed geometry and emits line segments
use log::trace;

use crate::camera::RangeCull;
use crate::geometry::{IndexedLineList, Topology};
use crate::math::{Vec2i, Vec3};
use crate::projection::Projection;

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Something line segments can be drawn onto
///
/// Every frame is bracketed by [`Surface::begin_frame`] and
/// [`Surface::end_frame`]. Coordinates handed to [`Surface::draw_line`] may
/// lie outside [`Surface::dimensions`]; the surface clips them.
pub trait Surface {
    type Error;

    /// Raster size in pixels, `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    fn begin_frame(&mut self) -> Result<(), Self::Error>;

    fn draw_line(&mut self, from: Vec2i, to: Vec2i, color: Color);

    fn end_frame(&mut self) -> Result<(), Self::Error>;
}

/// How many edges of each triangle face are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FaceEdges {
    /// v0-v1, v1-v2 and v2-v0.
    #[default]
    All,
    /// Only v0-v1 and v1-v2, leaving the closing edge open.
    Open,
}

impl FaceEdges {
    fn count(self) -> usize {
        match self {
            FaceEdges::All => 3,
            FaceEdges::Open => 2,
        }
    }
}

/// Colors and policies for drawing a wireframe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeStyle {
    /// Color of every segment of an edge list.
    pub line_color: Color,
    /// Colors of the v0-v1, v1-v2 and v2-v0 edges of a triangle.
    pub edge_colors: [Color; 3],
    pub face_edges: FaceEdges,
    pub cull: Option<RangeCull>,
}

impl Default for WireframeStyle {
    fn default() -> Self {
        Self {
            line_color: Color::WHITE,
            edge_colors: [Color::BLUE, Color::RED, Color::GREEN],
            face_edges: FaceEdges::All,
            cull: None,
        }
    }
}

/// Project `list` and draw it onto `surface`.
///
/// Triangle corners are projected per face, shared vertices included.
/// `eye` is the reference point for the range cull. Returns the number of
/// segments drawn.
pub fn draw_wireframe<S: Surface + ?Sized>(
    list: &IndexedLineList,
    projection: &Projection,
    eye: &Vec3,
    style: &WireframeStyle,
    surface: &mut S,
) -> usize {
    let keeps = |a: &Vec3, b: &Vec3| style.cull.map_or(true, |cull| cull.keeps(eye, a, b));
    let mut drawn = 0;

    match list.topology() {
        Topology::Edges => {
            for [a, b] in list.segments() {
                if !keeps(a, b) {
                    continue;
                }
                surface.draw_line(projection.project(a), projection.project(b), style.line_color);
                drawn += 1;
            }
        }
        Topology::Triangles => {
            for corners in list.triangles() {
                let raster = corners.map(|p| projection.project(p));
                for edge in 0..style.face_edges.count() {
                    let (i, j) = (edge, (edge + 1) % 3);
                    if !keeps(corners[i], corners[j]) {
                        continue;
                    }
                    surface.draw_line(raster[i], raster[j], style.edge_colors[edge]);
                    drawn += 1;
                }
            }
        }
    }

    trace!("drew {} segments from {} {:?} groups", drawn, list.len(), list.topology());
    drawn
}
