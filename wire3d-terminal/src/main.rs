/// wire3d Terminal Demo - Rotating wireframe cube
///
/// Controls:
///   - Arrows / PageUp / PageDown: Move the camera
///   - W/S, A/D, Z/X: Rotate the cube
///   - +/-: Scale the cube, R: Reset it
///   - Q/ESC: Quit
use clap::Parser;
use wire3d_terminal::{cli::Cli, Result, TerminalApp};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    println!("wire3d Terminal Renderer - Loading...");
    let mut app = TerminalApp::new(cli.scene_config(), cli.fps)?;

    println!("Starting terminal renderer (press Q to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    app.run()?;

    println!("Thank you for using wire3d!");
    Ok(())
}
