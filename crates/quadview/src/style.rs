use vello::peniko::Color;

/// How quadtree node boxes are drawn.
#[derive(Debug, Clone, Copy)]
pub struct BoxStyle {
    /// Outline color, also used for the fill and the label.
    pub stroke_color: Color,
    /// Paint the interior with a translucent version of
    /// [`Self::stroke_color`].
    pub filled: bool,
    /// Write the node index at the center of its box.
    pub label: bool,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::BLACK,
            filled: false,
            label: false,
        }
    }
}

/// Builders.
impl BoxStyle {
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_fill(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn with_label(mut self, label: bool) -> Self {
        self.label = label;
        self
    }
}

/// Shape drawn at each vertex.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    #[default]
    Cross,
    Dot,
}

/// How the vertex scatter layer is drawn.
#[derive(Debug, Clone, Copy)]
pub struct VertexStyle {
    pub color: Color,
    pub marker: Marker,
    /// Marker extent in logical pixels.
    pub size: f64,
}

impl Default for VertexStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(220, 30, 30),
            marker: Marker::Cross,
            size: 8.0,
        }
    }
}

/// Builders.
impl VertexStyle {
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }
}

/// Complete rendering configuration of a plot.
///
/// Lengths are in logical pixels and are scaled by the window's
/// scale factor when drawing.
#[derive(Debug, Clone, Copy)]
pub struct PlotStyle {
    pub boxes: BoxStyle,
    pub vertices: VertexStyle,
    pub background: Color,
    pub stroke_width: f64,
    /// Empty border kept around the data.
    pub margin: f64,
    /// Height of node labels.
    pub label_size: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            boxes: BoxStyle::default(),
            vertices: VertexStyle::default(),
            background: Color::WHITE,
            stroke_width: 1.0,
            margin: 24.0,
            label_size: 10.0,
        }
    }
}

/// Builders.
impl PlotStyle {
    pub fn with_boxes(mut self, boxes: BoxStyle) -> Self {
        self.boxes = boxes;
        self
    }

    pub fn with_vertices(mut self, vertices: VertexStyle) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_label_size(mut self, label_size: f64) -> Self {
        self.label_size = label_size;
        self
    }
}
