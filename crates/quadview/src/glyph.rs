//! A stroke font for node labels.
//!
//! Labels are node indices, so the font only covers the ASCII digits
//! and `-`, drawn as seven-segment figures. Other characters leave a
//! blank cell.
//!
//! ```text
//!  --a--
//! |     |
//! f     b
//! |     |
//!  --g--
//! |     |
//! e     c
//! |     |
//!  --d--
//! ```

use kurbo::{BezPath, Point};

/// Glyph width relative to its height.
const ASPECT: f64 = 0.5;
/// Horizontal distance between glyph origins, relative to the height.
const ADVANCE: f64 = 0.8;

const A: u8 = 1 << 0;
const B: u8 = 1 << 1;
const C: u8 = 1 << 2;
const D: u8 = 1 << 3;
const E: u8 = 1 << 4;
const F: u8 = 1 << 5;
const G: u8 = 1 << 6;

/// Segment mask for a character, `None` if the font lacks it.
pub fn segments(ch: char) -> Option<u8> {
    let mask = match ch {
        '0' => A | B | C | D | E | F,
        '1' => B | C,
        '2' => A | B | D | E | G,
        '3' => A | B | C | D | G,
        '4' => B | C | F | G,
        '5' => A | C | D | F | G,
        '6' => A | C | D | E | F | G,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G,
        '9' => A | B | C | D | F | G,
        '-' => G,
        _ => return None,
    };

    Some(mask)
}

/// Lays out `text` centered on `center` with glyphs of `height`
/// pixels. Screen coordinates, y pointing down.
pub fn text_path(text: &str, center: Point, height: f64) -> BezPath {
    let width = height * ASPECT;
    let advance = height * ADVANCE;
    let count = text.chars().count();
    let total_width = if count == 0 {
        0.0
    } else {
        (count - 1) as f64 * advance + width
    };

    let mut path = BezPath::new();
    let mut origin = Point::new(
        center.x - total_width * 0.5,
        center.y - height * 0.5,
    );

    for ch in text.chars() {
        if let Some(mask) = segments(ch) {
            push_glyph(&mut path, origin, width, height, mask);
        }
        origin.x += advance;
    }

    path
}

fn push_glyph(
    path: &mut BezPath,
    origin: Point,
    width: f64,
    height: f64,
    mask: u8,
) {
    let Point { x, y } = origin;
    let middle = y + height * 0.5;
    let bottom = y + height;
    let right = x + width;

    let strokes = [
        (A, (x, y), (right, y)),
        (B, (right, y), (right, middle)),
        (C, (right, middle), (right, bottom)),
        (D, (x, bottom), (right, bottom)),
        (E, (x, middle), (x, bottom)),
        (F, (x, y), (x, middle)),
        (G, (x, middle), (right, middle)),
    ];

    for (segment, from, to) in strokes {
        if mask & segment != 0 {
            path.move_to(from);
            path.line_to(to);
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{PathEl, Shape};

    use super::*;

    fn stroke_count(path: &BezPath) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    #[test]
    fn digits_have_expected_segments() {
        assert_eq!(stroke_count(&text_path("8", Point::ZERO, 10.0)), 7);
        assert_eq!(stroke_count(&text_path("1", Point::ZERO, 10.0)), 2);
        assert_eq!(stroke_count(&text_path("10", Point::ZERO, 10.0)), 8);
        assert_eq!(stroke_count(&text_path("-", Point::ZERO, 10.0)), 1);
    }

    #[test]
    fn every_digit_is_covered() {
        for ch in '0'..='9' {
            assert!(segments(ch).is_some(), "missing glyph for {ch}");
        }
        assert_eq!(segments('x'), None);
    }

    #[test]
    fn text_is_centered_on_anchor() {
        let center = Point::new(40.0, 25.0);
        let bounds = text_path("808", center, 12.0).bounding_box();

        assert!((bounds.center().x - center.x).abs() < 1e-9);
        assert!((bounds.center().y - center.y).abs() < 1e-9);
        assert!((bounds.height() - 12.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_characters_draw_nothing() {
        assert!(text_path("?", Point::ZERO, 10.0).is_empty());
        assert!(text_path("", Point::ZERO, 10.0).is_empty());
    }
}
