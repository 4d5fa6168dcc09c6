use core::fmt::{Display, Formatter};
use core::ops::Deref;

use kurbo::{Point, Rect};

/// Returns the axis-aligned square of edge `scale` centered on
/// `center`.
///
/// ```text
///            scale
///   |<------------------>| max
///   +--------------------+
///   |                    |
///   |       center       | scale
///   |         *          |
///   |                    |
///   +--------------------+
/// min
/// ```
///
/// Defined for any input. A non-positive `scale` yields an empty or
/// inverted rect, which is why [`QuadtreeNode::new()`] rejects it.
pub fn square_bounds(center: Point, scale: f64) -> Rect {
    let half = scale * 0.5;
    Rect::new(
        center.x - half,
        center.y - half,
        center.x + half,
        center.y + half,
    )
}

/// One node of a quadtree dump: a square region and the number of
/// items the producer stored in it.
///
/// The bounding box is computed once at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadtreeNode {
    center: Point,
    scale: f64,
    item_count: u32,
    bounds: Rect,
}

impl QuadtreeNode {
    /// Creates a node, rejecting a non-positive or non-finite
    /// `scale`.
    pub fn new(
        center: impl Into<Point>,
        scale: f64,
        item_count: u32,
    ) -> Result<Self, DegenerateScale> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(DegenerateScale(scale));
        }

        let center = center.into();
        Ok(Self {
            center,
            scale,
            item_count,
            bounds: square_bounds(center, scale),
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Edge length of the square.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Informational only, it plays no part in the geometry.
    pub fn item_count(&self) -> u32 {
        self.item_count
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn min_corner(&self) -> Point {
        self.bounds.origin()
    }

    pub fn max_corner(&self) -> Point {
        Point::new(self.bounds.x1, self.bounds.y1)
    }
}

/// A scale that cannot describe a square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateScale(pub f64);

/// Position of a node inside the `QTREE` block, starting at zero.
///
/// This is a display label derived from the order of the records, not
/// the identity the node had in the tree that produced the dump.
#[derive(
    Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct NodeIndex(pub usize);

impl Deref for NodeIndex {
    type Target = usize;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for NodeIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn square_is_centered() {
        let rect = square_bounds(Point::new(0.0, 0.0), 4.0);
        assert_eq!(rect, Rect::new(-2.0, -2.0, 2.0, 2.0));
    }

    #[test]
    fn edges_equal_scale() {
        let cases = [
            ((6.0, 6.0), 12.0),
            ((1.5, 4.5), 3.0),
            ((10.5, 1.5), 0.75),
            ((-1e3, 2e-3), 1e-4),
        ];

        for (center, scale) in cases {
            let node = QuadtreeNode::new(center, scale, 0).unwrap();
            let min = node.min_corner();
            let max = node.max_corner();

            assert!((max.x - min.x - scale).abs() < EPSILON * scale.max(1.0));
            assert!((max.y - min.y - scale).abs() < EPSILON * scale.max(1.0));
            assert!(min.x < max.x && min.y < max.y);
            let offset = node.bounds().center() - node.center();
            assert!(offset.hypot() < EPSILON * scale.max(1.0) * 1e3);
        }
    }

    #[test]
    fn rejects_degenerate_scale() {
        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(QuadtreeNode::new((0.0, 0.0), scale, 0).is_err());
        }
    }

    #[test]
    fn item_count_does_not_affect_geometry() {
        let a = QuadtreeNode::new((3.0, 9.0), 6.0, 0).unwrap();
        let b = QuadtreeNode::new((3.0, 9.0), 6.0, 7).unwrap();

        assert_eq!(a.bounds(), b.bounds());
        assert_eq!(b.item_count(), 7);
    }

    #[test]
    fn index_displays_as_number() {
        assert_eq!(NodeIndex(12).to_string(), "12");
        assert_eq!(*NodeIndex(3), 3);
    }
}
