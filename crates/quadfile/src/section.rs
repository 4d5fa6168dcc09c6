//! Locating and decoding the `VERTICES` and `QTREE` blocks.
//!
//! A block is a header line `<KEYWORD> <count>` followed by exactly
//! `count` record lines of comma-separated numbers. Each block is
//! found independently by scanning from the top of the
//! comment-stripped lines, so the order of the blocks in the file does
//! not matter.

use core::fmt::{Display, Formatter};

use alloc::string::ToString;
use alloc::vec::Vec;
use kurbo::Point;

use crate::comment::SourceLine;
use crate::error::{ParseError, RecordFault};
use crate::node::{DegenerateScale, QuadtreeNode};

/// The two kinds of block a dump may contain.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum SectionKind {
    Vertices,
    Quadtree,
}

impl SectionKind {
    /// Header keyword that opens the block.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Vertices => "VERTICES",
            Self::Quadtree => "QTREE",
        }
    }

    /// Number of comma-separated fields in one record.
    pub const fn field_count(self) -> usize {
        match self {
            Self::Vertices => 2,
            Self::Quadtree => 4,
        }
    }
}

impl Display for SectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A located block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub kind: SectionKind,
    /// Index of the header inside the stripped line sequence.
    pub position: usize,
    /// 1-based line number in the original text.
    pub line: usize,
    /// Number of records the header declares.
    pub count: usize,
}

/// Outcome of reading one block.
///
/// A file without the header is not an error. It yields
/// [`Section::Missing`], which reads as zero records but stays
/// distinguishable from a header that declares zero records.
#[derive(Debug, Clone, PartialEq)]
pub enum Section<T> {
    Missing,
    Present { header_line: usize, records: Vec<T> },
}

impl<T> Section<T> {
    /// Records of the block, empty when the block is missing.
    pub fn records(&self) -> &[T] {
        match self {
            Self::Missing => &[],
            Self::Present { records, .. } => records,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Line of the header, if the block exists.
    pub fn header_line(&self) -> Option<usize> {
        match self {
            Self::Missing => None,
            Self::Present { header_line, .. } => Some(*header_line),
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::Missing
    }
}

/// Finds the first header of the given kind.
///
/// Returns `Ok(None)` when no line starts with the keyword. A header
/// without a valid non-negative integer count is an error. Tokens
/// after the count are ignored.
pub fn find_header(
    lines: &[SourceLine<'_>],
    kind: SectionKind,
) -> Result<Option<Header>, ParseError> {
    let Some((position, line)) = lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.first_token() == Some(kind.keyword()))
    else {
        return Ok(None);
    };

    let count = line
        .text
        .split_whitespace()
        .nth(1)
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or(ParseError::MalformedHeader {
            line: line.number,
            kind,
        })?;

    Ok(Some(Header {
        kind,
        position,
        line: line.number,
        count,
    }))
}

/// Returns exactly the `count` lines that follow the header.
pub fn read_records<'l, 'a>(
    lines: &'l [SourceLine<'a>],
    header: &Header,
) -> Result<&'l [SourceLine<'a>], ParseError> {
    let start = header.position + 1;
    let available = lines.len().saturating_sub(start);

    if available < header.count {
        return Err(ParseError::MalformedRecord {
            line: header.line,
            kind: header.kind,
            reason: RecordFault::Truncated {
                declared: header.count,
                available,
            },
        });
    }

    Ok(&lines[start..start + header.count])
}

/// Splits a record line into the [`SectionKind::field_count`] finite
/// numbers of a `kind` record.
///
/// Whitespace around each field is ignored. `N` is the record layout
/// of the caller, a line of the wrong width is rejected with
/// [`RecordFault::FieldCount`] before `N` is consulted.
///
/// # Panics
///
/// If `N` differs from `kind.field_count()`.
pub fn split_fields<const N: usize>(
    line: &SourceLine<'_>,
    kind: SectionKind,
) -> Result<[f64; N], ParseError> {
    let malformed = |reason| ParseError::MalformedRecord {
        line: line.number,
        kind,
        reason,
    };

    let expected = kind.field_count();
    let found = line.text.split(',').count();
    if found != expected {
        return Err(malformed(RecordFault::FieldCount { expected, found }));
    }
    assert_eq!(N, expected, "{kind} records have {expected} fields");

    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(line.text.split(',')) {
        let field = field.trim();
        let parsed = field.parse::<f64>().map_err(|_| {
            malformed(RecordFault::InvalidNumber {
                field: field.to_string(),
            })
        })?;

        if !parsed.is_finite() {
            return Err(malformed(RecordFault::NonFinite {
                field: field.to_string(),
            }));
        }

        *value = parsed;
    }

    Ok(values)
}

/// Decodes the `VERTICES` block.
pub fn parse_vertices(
    lines: &[SourceLine<'_>],
) -> Result<Section<Point>, ParseError> {
    parse_section(lines, SectionKind::Vertices, |_, line| {
        let [x, y] = split_fields::<2>(line, SectionKind::Vertices)?;
        Ok(Point::new(x, y))
    })
}

/// Decodes the `QTREE` block.
///
/// Nodes with a non-positive scale are rejected here, before any box
/// is handed to a renderer.
pub fn parse_nodes(
    lines: &[SourceLine<'_>],
) -> Result<Section<QuadtreeNode>, ParseError> {
    parse_section(lines, SectionKind::Quadtree, |index, line| {
        let [cx, cy, scale, items] =
            split_fields::<4>(line, SectionKind::Quadtree)?;
        let item_count = parse_item_count(items).ok_or(
            ParseError::MalformedRecord {
                line: line.number,
                kind: SectionKind::Quadtree,
                reason: RecordFault::InvalidItemCount { value: items },
            },
        )?;

        QuadtreeNode::new((cx, cy), scale, item_count).map_err(
            |DegenerateScale(scale)| ParseError::DegenerateGeometry {
                line: line.number,
                index,
                scale,
            },
        )
    })
}

fn parse_section<T, F>(
    lines: &[SourceLine<'_>],
    kind: SectionKind,
    mut decode: F,
) -> Result<Section<T>, ParseError>
where
    F: FnMut(usize, &SourceLine<'_>) -> Result<T, ParseError>,
{
    let Some(header) = find_header(lines, kind)? else {
        return Ok(Section::Missing);
    };

    let records = read_records(lines, &header)?
        .iter()
        .enumerate()
        .map(|(index, line)| decode(index, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Section::Present {
        header_line: header.line,
        records,
    })
}

/// Item counts are written as integers but read as numbers, so `2`
/// and `2.0` are both accepted.
fn parse_item_count(value: f64) -> Option<u32> {
    let in_range = value >= 0.0 && value <= u32::MAX as f64;
    // `value as u32` saturates, the round trip catches fractions.
    (in_range && (value as u32) as f64 == value).then_some(value as u32)
}
