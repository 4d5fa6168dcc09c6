//! Viewer error types.

use thiserror::Error;
use winit::error::{EventLoopError, OsError};

/// Errors that can occur while presenting a plot.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),

    #[error("Failed to open a window: {0}")]
    Window(#[from] OsError),

    #[error("Failed to create a render surface: {0}")]
    Surface(#[source] vello::Error),

    #[error("Failed to create the renderer: {0}")]
    Renderer(#[source] vello::Error),

    #[error("Failed to render the scene: {0}")]
    Render(#[source] vello::Error),

    #[error("GPU out of memory")]
    OutOfMemory,
}
