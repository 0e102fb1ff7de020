/// Terminal front end: crossterm surface, keyboard and frame loop
use crossterm::{cursor, execute, terminal};
use log::{debug, info};
use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};
use wire3d_core::{Flow, Scene, SceneConfig};

pub mod cli;
pub mod error;
pub mod keyboard;
pub mod renderer;

pub use error::{Error, Result};
pub use keyboard::KeyboardState;
pub use renderer::{AsciiCanvas, TerminalSurface};

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    surface: TerminalSurface<Stdout>,
    keyboard: KeyboardState,
    target_frame_time: Duration,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(config: SceneConfig, fps: u32) -> Result<Self> {
        let (width, height) = terminal::size()?;
        let scene = Scene::new(config)?;

        Ok(Self {
            scene,
            surface: TerminalSurface::new(width as usize, height as usize, stdout()),
            keyboard: KeyboardState::new(),
            target_frame_time: Duration::from_millis(1000 / u64::from(fps.max(1))),
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        info!("frame loop started at {:?} per frame", self.target_frame_time);

        loop {
            let frame_start = Instant::now();

            self.keyboard.poll()?;
            if let Some((width, height)) = self.keyboard.take_resize() {
                self.surface.resize(width as usize, height as usize);
            }

            self.surface.set_status(format!(
                "wire3d | FPS: {:.1} | Arrows/PgUp/PgDn=Camera WS/AD/ZX=Rotate +/-=Scale R=Reset Q=Quit",
                self.fps
            ));
            if self.scene.go(&mut self.surface, &self.keyboard)? == Flow::Exit {
                break;
            }

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < self.target_frame_time {
                std::thread::sleep(self.target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                debug!("{:.1} fps, rotation {:?}", self.fps, self.scene.object.transform.rotation);
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }
}
