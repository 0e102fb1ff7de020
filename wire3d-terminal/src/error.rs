/// Errors surfaced by the terminal front end
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing to or configuring the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The geometry pipeline rejected the scene.
    #[error("{0}")]
    Render(#[from] wire3d_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
