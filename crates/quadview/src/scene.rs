use kurbo::{Affine, BezPath, Circle, Point, Rect, Stroke};
use vello::Scene;
use vello::peniko::{Color, Fill};

use crate::canvas::Canvas;
use crate::glyph;
use crate::style::{BoxStyle, Marker, VertexStyle};
use crate::viewport::Viewport;

/// Opacity of a filled node box.
const FILL_ALPHA: f32 = 0.2;

/// [`Canvas`] that encodes primitives into a vello [`Scene`].
///
/// Geometry is mapped through the [`Viewport`] before it is stroked,
/// so line widths and marker sizes stay in pixels whatever the zoom.
pub struct SceneCanvas<'s> {
    scene: &'s mut Scene,
    viewport: Viewport,
    /// Pixels per logical pixel.
    scale_factor: f64,
    stroke_width: f64,
    label_size: f64,
}

impl<'s> SceneCanvas<'s> {
    pub fn new(scene: &'s mut Scene, viewport: Viewport) -> Self {
        Self {
            scene,
            viewport,
            scale_factor: 1.0,
            stroke_width: 1.0,
            label_size: 10.0,
        }
    }

    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_label_size(mut self, label_size: f64) -> Self {
        self.label_size = label_size;
        self
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.stroke_width * self.scale_factor)
    }
}

impl Canvas for SceneCanvas<'_> {
    fn draw_box(&mut self, rect: Rect, style: &BoxStyle) {
        let rect = self.viewport.rect_to_screen(rect);
        let stroke = self.stroke();

        if style.filled {
            self.scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                style.stroke_color.with_alpha(FILL_ALPHA),
                None,
                &rect,
            );
        }

        self.scene.stroke(
            &stroke,
            Affine::IDENTITY,
            style.stroke_color,
            None,
            &rect,
        );
    }

    fn draw_text(&mut self, anchor: Point, text: &str, color: Color) {
        let path = glyph::text_path(
            text,
            self.viewport.to_screen(anchor),
            self.label_size * self.scale_factor,
        );
        if path.is_empty() {
            return;
        }
        let stroke = self.stroke();

        self.scene.stroke(
            &stroke,
            Affine::IDENTITY,
            color,
            None,
            &path,
        );
    }

    fn draw_points(&mut self, points: &[Point], style: &VertexStyle) {
        if points.is_empty() {
            return;
        }

        let half = style.size * self.scale_factor * 0.5;
        let stroke = self.stroke();

        match style.marker {
            Marker::Cross => {
                let mut path = BezPath::new();
                for point in points {
                    let Point { x, y } = self.viewport.to_screen(*point);
                    path.move_to((x - half, y - half));
                    path.line_to((x + half, y + half));
                    path.move_to((x - half, y + half));
                    path.line_to((x + half, y - half));
                }

                self.scene.stroke(
                    &stroke,
                    Affine::IDENTITY,
                    style.color,
                    None,
                    &path,
                );
            }
            Marker::Dot => {
                for point in points {
                    let dot =
                        Circle::new(self.viewport.to_screen(*point), half);
                    self.scene.fill(
                        Fill::NonZero,
                        Affine::IDENTITY,
                        style.color,
                        None,
                        &dot,
                    );
                }
            }
        }
    }
}
