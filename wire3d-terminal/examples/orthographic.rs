/// Example: Render a pre-normalized cube without a camera
///
/// The cube is small enough to sit inside [-1, 1], so it is mapped straight
/// onto the terminal and drawn from its triangle faces with the closing edge
/// of every triangle left open.
///
/// Usage: cargo run --example orthographic
use wire3d_core::{FaceEdges, ProjectionMode, SceneConfig, Topology};
use wire3d_terminal::{Result, TerminalApp};

fn main() -> Result<()> {
    env_logger::init();

    let config = SceneConfig {
        cube_size: 0.5,
        mode: ProjectionMode::Orthographic,
        topology: Topology::Triangles,
        face_edges: FaceEdges::Open,
        range: None,
        ..SceneConfig::default()
    };

    let mut app = TerminalApp::new(config, 30)?;
    app.run()?;

    println!("Thank you for using wire3d!");
    Ok(())
}
