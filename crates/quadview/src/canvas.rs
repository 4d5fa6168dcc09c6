//! The drawing contract between a [`Plot`](crate::Plot) and whatever
//! presents it.

use kurbo::{Point, Rect};
use vello::peniko::Color;

use crate::style::{BoxStyle, Marker, VertexStyle};

/// A surface that accepts plot primitives in data coordinates.
///
/// Mapping data space onto pixels is the canvas' responsibility.
pub trait Canvas {
    /// Draws one node box.
    fn draw_box(&mut self, rect: Rect, style: &BoxStyle);

    /// Draws `text` centered on `anchor`.
    fn draw_text(&mut self, anchor: Point, text: &str, color: Color);

    /// Draws a whole scatter layer.
    fn draw_points(&mut self, points: &[Point], style: &VertexStyle);
}

/// A primitive captured by [`Recorder`].
#[derive(Debug, Clone)]
pub enum Primitive {
    Box {
        rect: Rect,
        stroke_color: Color,
        filled: bool,
    },
    Text {
        anchor: Point,
        text: String,
        color: Color,
    },
    Points {
        points: Vec<Point>,
        color: Color,
        marker: Marker,
    },
}

/// Headless [`Canvas`] that records every primitive in draw order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn boxes(&self) -> impl Iterator<Item = &Rect> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Box { rect, .. } => Some(rect),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&Point, &str)> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text { anchor, text, .. } => {
                Some((anchor, text.as_str()))
            }
            _ => None,
        })
    }

    /// Every scatter layer that was drawn.
    pub fn point_layers(&self) -> impl Iterator<Item = &[Point]> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Points { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }
}

impl Canvas for Recorder {
    fn draw_box(&mut self, rect: Rect, style: &BoxStyle) {
        self.primitives.push(Primitive::Box {
            rect,
            stroke_color: style.stroke_color,
            filled: style.filled,
        });
    }

    fn draw_text(&mut self, anchor: Point, text: &str, color: Color) {
        self.primitives.push(Primitive::Text {
            anchor,
            text: text.to_owned(),
            color,
        });
    }

    fn draw_points(&mut self, points: &[Point], style: &VertexStyle) {
        self.primitives.push(Primitive::Points {
            points: points.to_vec(),
            color: style.color,
            marker: style.marker,
        });
    }
}
