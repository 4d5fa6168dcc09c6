use core::fmt::{Display, Formatter};
use core::str::FromStr;

use kurbo::{Point, Rect};

use crate::comment::{SourceLine, strip_comments};
use crate::error::ParseError;
use crate::node::{NodeIndex, QuadtreeNode};
use crate::section::{Section, SectionKind, parse_nodes, parse_vertices};

/// A decoded quadtree dump: the vertex block and the quadtree block.
///
/// Both sequences keep file order and are independent of each other,
/// a vertex and a node at the same position share nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuadFile {
    vertices: Section<Point>,
    nodes: Section<QuadtreeNode>,
}

impl QuadFile {
    /// Builds a file from already decoded sections.
    pub fn new(
        vertices: Section<Point>,
        nodes: Section<QuadtreeNode>,
    ) -> Self {
        Self { vertices, nodes }
    }

    /// Decodes the full text of a dump.
    ///
    /// Comment lines are removed first, then each block is located by
    /// its header keyword. A missing block is not an error, see
    /// [`Section::Missing`].
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let lines = strip_comments(SourceLine::enumerate(text));

        Ok(Self {
            vertices: parse_vertices(&lines)?,
            nodes: parse_nodes(&lines)?,
        })
    }

    pub fn vertices(&self) -> &[Point] {
        self.vertices.records()
    }

    pub fn nodes(&self) -> &[QuadtreeNode] {
        self.nodes.records()
    }

    /// Nodes paired with their position in the `QTREE` block.
    pub fn indexed_nodes(
        &self,
    ) -> impl Iterator<Item = (NodeIndex, &QuadtreeNode)> + '_ {
        self.nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeIndex(index), node))
    }

    pub fn vertex_section(&self) -> &Section<Point> {
        &self.vertices
    }

    pub fn node_section(&self) -> &Section<QuadtreeNode> {
        &self.nodes
    }

    /// Smallest rect covering every node box and every vertex.
    ///
    /// Returns `None` if there is nothing to cover.
    pub fn bounds(&self) -> Option<Rect> {
        let boxes = self.nodes().iter().map(QuadtreeNode::bounds);
        let points = self
            .vertices()
            .iter()
            .map(|point| Rect::from_points(*point, *point));

        boxes.chain(points).reduce(|acc, rect| acc.union(rect))
    }
}

impl FromStr for QuadFile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the dump back in the canonical layout, numbers with five
/// decimals. Missing blocks are not written.
impl Display for QuadFile {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.vertices.is_present() {
            writeln!(
                f,
                "{} {}",
                SectionKind::Vertices,
                self.vertices.len()
            )?;
            for point in self.vertices() {
                writeln!(f, "{:.5},{:.5}", point.x, point.y)?;
            }
        }

        if self.nodes.is_present() {
            writeln!(f, "{} {}", SectionKind::Quadtree, self.nodes.len())?;
            for node in self.nodes() {
                let center = node.center();
                writeln!(
                    f,
                    "{:.5},{:.5},{:.5},{}",
                    center.x,
                    center.y,
                    node.scale(),
                    node.item_count()
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    const CANONICAL: &str = "\
VERTICES 2
1.0,2.0
3.0,4.0
QTREE 1
0.0,0.0,4.0,2
";

    const REORDERED: &str = "\
# the same dump, quadtree first
QTREE 1
0.0,0.0,4.0,2

VERTICES 2
1.0,2.0
# between records
3.0,4.0
# Found objects: (1,2)
";

    #[test]
    fn parses_canonical_example() {
        let file = QuadFile::parse(CANONICAL).unwrap();

        assert_eq!(
            file.vertices(),
            [Point::new(1.0, 2.0), Point::new(3.0, 4.0)]
        );
        assert_eq!(file.nodes().len(), 1);

        let node = &file.nodes()[0];
        assert_eq!(node.center(), Point::new(0.0, 0.0));
        assert_eq!(node.scale(), 4.0);
        assert_eq!(node.min_corner(), Point::new(-2.0, -2.0));
        assert_eq!(node.max_corner(), Point::new(2.0, 2.0));
        assert_eq!(node.item_count(), 2);
    }

    #[test]
    fn block_order_does_not_matter() {
        let canonical = QuadFile::parse(CANONICAL).unwrap();
        let reordered: QuadFile = REORDERED.parse().unwrap();

        assert_eq!(canonical.vertices(), reordered.vertices());
        assert_eq!(canonical.nodes(), reordered.nodes());
    }

    #[test]
    fn missing_quadtree_block_parses_empty() {
        let file = QuadFile::parse("VERTICES 1\n5,5\n").unwrap();

        assert!(file.nodes().is_empty());
        assert_eq!(*file.node_section(), Section::Missing);
        assert_eq!(file.vertex_section().header_line(), Some(1));
    }

    #[test]
    fn empty_input_is_two_missing_sections() {
        let file = QuadFile::parse("").unwrap();

        assert_eq!(file, QuadFile::default());
        assert_eq!(file.bounds(), None);
    }

    #[test]
    fn indices_follow_block_position() {
        let text = "# c\nQTREE 3\n0,0,1,0\n# c\n2,0,1,0\n4,0,1,0\n";
        let file = QuadFile::parse(text).unwrap();

        let indexed = file
            .indexed_nodes()
            .map(|(index, node)| (*index, node.center().x))
            .collect::<alloc::vec::Vec<_>>();
        assert_eq!(indexed, [(0, 0.0), (1, 2.0), (2, 4.0)]);
    }

    #[test]
    fn bounds_cover_boxes_and_vertices() {
        let text = "VERTICES 1\n5.0,-1.0\nQTREE 2\n0,0,2,0\n1,1,2,0\n";
        let file = QuadFile::parse(text).unwrap();

        assert_eq!(file.bounds(), Some(Rect::new(-1.0, -1.0, 5.0, 2.0)));
    }

    #[test]
    fn writes_canonical_layout() {
        let file = QuadFile::parse(REORDERED).unwrap();
        let expected = "\
VERTICES 2
1.00000,2.00000
3.00000,4.00000
QTREE 1
0.00000,0.00000,4.00000,2
";

        assert_eq!(file.to_string(), expected);

        let reread = QuadFile::parse(expected).unwrap();
        assert_eq!(reread.vertices(), file.vertices());
        assert_eq!(reread.nodes(), file.nodes());
    }

    #[test]
    fn missing_blocks_are_not_written() {
        let file = QuadFile::parse("QTREE 0\n").unwrap();
        assert_eq!(file.to_string(), "QTREE 0\n");
    }

    #[test]
    fn reads_producer_output() {
        let text = include_str!("../../../data/sample_quadtree.txt");
        let file = QuadFile::parse(text).unwrap();

        assert_eq!(file.vertices().len(), 12);
        assert_eq!(file.nodes().len(), 13);
        assert_eq!(file.bounds(), Some(Rect::new(0.0, 0.0, 12.0, 12.0)));

        let items = file.nodes().iter().map(QuadtreeNode::item_count);
        assert_eq!(items.sum::<u32>(), 12);
    }

    #[test]
    fn first_error_aborts_the_whole_file() {
        let text = "VERTICES 1\n1,2\nQTREE 1\n0,0,-1,0\n";
        let err = QuadFile::parse(text).unwrap_err();

        assert!(matches!(err, ParseError::DegenerateGeometry { .. }));
        assert_eq!(err.line(), 4);
    }

    #[test]
    fn assembles_from_decoded_sections() {
        let node = QuadtreeNode::new((0.5, 0.5), 1.0, 1).unwrap();
        let file = QuadFile::new(
            Section::Missing,
            Section::Present {
                header_line: 1,
                records: alloc::vec![node],
            },
        );

        assert!(file.vertices().is_empty());
        assert_eq!(file.bounds(), Some(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(file.to_string(), "QTREE 1\n0.50000,0.50000,1.00000,1\n");
    }
}
