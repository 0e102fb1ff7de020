//! wire3d Core Library - Software wireframe geometry pipeline
//!
//! Takes object space geometry through model (scale/rotate/translate), view
//! and projection stages down to raster line segments. Drawing, windowing
//! and input live behind the [`Surface`] and [`Input`] traits so front ends
//! can plug in their own.

pub mod camera;
pub mod error;
pub mod geometry;
pub mod input;
pub mod math;
pub mod parse;
pub mod projection;
pub mod render;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use camera::{Camera, RangeCull};
pub use error::{Error, Result};
pub use geometry::{IndexedLineList, RenderObject, Topology};
pub use input::{Input, Key};
pub use math::{Mat4, Vec2i, Vec3};
pub use projection::{Projection, ProjectionMode};
pub use render::{Color, FaceEdges, Surface, WireframeStyle};
pub use scene::{Flow, Scene, SceneConfig};
pub use transform::{ObjectTransform, Transform};
