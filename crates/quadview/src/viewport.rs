use kurbo::{Affine, Point, Rect, Size};

/// Mapping from data space onto a pixel surface.
///
/// Both axes share one scale factor, so a square in data space is a
/// square on screen. The y axis is flipped to point up and the data is
/// centered on the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    transform: Affine,
    scale: f64,
}

impl Viewport {
    /// Fits `data` inside `surface`, leaving `margin` pixels on every
    /// side.
    ///
    /// A data rect without width or height (a single vertex, or a row
    /// of them) is widened to one unit along the flat axis. Extents too
    /// small or too large to resolve in `f64` fall back to a square
    /// around the data center, so the mapping is always finite with a
    /// positive scale.
    pub fn fit(data: Rect, surface: Size, margin: f64) -> Self {
        let data = data.abs();
        let available = Size::new(
            (surface.width - 2.0 * margin).max(1.0),
            (surface.height - 2.0 * margin).max(1.0),
        );

        // Halved before subtracting so finite input never overflows.
        let center = Point::new(
            data.x0 * 0.5 + data.x1 * 0.5,
            data.y0 * 0.5 + data.y1 * 0.5,
        );
        let half = Size::new(
            half_extent(data.x1 * 0.5 - data.x0 * 0.5),
            half_extent(data.y1 * 0.5 - data.y0 * 0.5),
        );

        let viewport =
            Self::centered(center, fit_scale(half, available), surface);
        if viewport.is_finite() {
            return viewport;
        }

        let center = if center.is_finite() { center } else { Point::ZERO };
        let half = (center.x.abs().max(center.y.abs()) * f64::EPSILON)
            .max(0.5);
        Self::centered(
            center,
            fit_scale(Size::new(half, half), available),
            surface,
        )
    }

    fn centered(center: Point, scale: f64, surface: Size) -> Self {
        let transform = Affine::new([
            scale,
            0.0,
            0.0,
            -scale,
            surface.width * 0.5 - center.x * scale,
            surface.height * 0.5 + center.y * scale,
        ]);

        Self { transform, scale }
    }

    fn is_finite(&self) -> bool {
        self.scale.is_finite()
            && self.scale > 0.0
            && self.transform.is_finite()
    }

    /// Pixels per data unit, identical on both axes.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn transform(&self) -> Affine {
        self.transform
    }

    pub fn to_screen(&self, point: Point) -> Point {
        self.transform * point
    }

    /// Maps an axis-aligned rect, the result is normalized so that
    /// `x0 < x1` and `y0 < y1` on screen.
    pub fn rect_to_screen(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.to_screen(rect.origin()),
            self.to_screen(Point::new(rect.x1, rect.y1)),
        )
    }
}

fn half_extent(half: f64) -> f64 {
    if half > 0.0 { half } else { 0.5 }
}

/// Largest scale that fits `half` extents into `available` pixels.
fn fit_scale(half: Size, available: Size) -> f64 {
    (available.width * 0.5 / half.width)
        .min(available.height * 0.5 / half.height)
}
