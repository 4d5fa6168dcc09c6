use kurbo::Rect;
use quadfile::{QuadFile, Section};
use tracing::{info, warn};

use crate::canvas::Canvas;
use crate::style::PlotStyle;

/// A loaded dump together with the style it is drawn with.
#[derive(Debug, Clone)]
pub struct Plot {
    file: QuadFile,
    style: PlotStyle,
}

impl Plot {
    pub fn new(file: QuadFile, style: PlotStyle) -> Self {
        report_section("vertex", file.vertex_section());
        report_section("quadtree", file.node_section());

        Self { file, style }
    }

    pub fn file(&self) -> &QuadFile {
        &self.file
    }

    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Data-space region the plot covers, a unit square at the origin
    /// when there is nothing to draw.
    pub fn bounds(&self) -> Rect {
        self.file
            .bounds()
            .unwrap_or(Rect::new(-0.5, -0.5, 0.5, 0.5))
    }

    /// Draws one box per node in file order, each followed by its
    /// label when labels are on, then a single scatter layer holding
    /// every vertex.
    pub fn draw(&self, canvas: &mut impl Canvas) {
        let boxes = &self.style.boxes;

        for (index, node) in self.file.indexed_nodes() {
            canvas.draw_box(node.bounds(), boxes);

            if boxes.label {
                canvas.draw_text(
                    node.center(),
                    &index.to_string(),
                    boxes.stroke_color,
                );
            }
        }

        canvas.draw_points(self.file.vertices(), &self.style.vertices);
    }
}

fn report_section<T>(name: &str, section: &Section<T>) {
    match section.header_line() {
        Some(line) => {
            info!("{name} block at line {line}: {} records", section.len())
        }
        None => warn!("no {name} block found, drawing none"),
    }
}
