#![doc = include_str!("../README.md")]

pub use quadfile;

pub mod app;
pub mod canvas;
pub mod error;
pub mod glyph;
pub mod plot;
pub mod scene;
pub mod style;
pub mod viewport;

pub use app::show;
pub use canvas::{Canvas, Primitive, Recorder};
pub use error::ViewError;
pub use plot::Plot;
pub use scene::SceneCanvas;
pub use style::{BoxStyle, Marker, PlotStyle, VertexStyle};
pub use viewport::Viewport;
