#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;

pub use kurbo;

pub mod comment;
pub mod error;
pub mod file;
pub mod node;
pub mod section;

pub use comment::{SourceLine, is_comment, strip_comments};
pub use error::{ParseError, RecordFault};
pub use file::QuadFile;
pub use node::{NodeIndex, QuadtreeNode, square_bounds};
pub use section::{Section, SectionKind};

/// A single 2D point read from the `VERTICES` block.
pub type Vertex = kurbo::Point;
