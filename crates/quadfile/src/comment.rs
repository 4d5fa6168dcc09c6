use alloc::vec::Vec;

/// Marks a line as a comment when it is the first non-whitespace
/// character.
pub const COMMENT_MARKER: char = '#';

/// A line of the input together with its 1-based position in the
/// original text.
///
/// The position survives comment stripping so that errors can point
/// at the line the user actually wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

impl<'a> SourceLine<'a> {
    pub fn new(number: usize, text: &'a str) -> Self {
        Self { number, text }
    }

    /// Splits `text` into numbered lines.
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn enumerate(
        text: &'a str,
    ) -> impl Iterator<Item = SourceLine<'a>> + 'a {
        text.lines()
            .enumerate()
            .map(|(index, text)| Self::new(index + 1, text))
    }

    /// First whitespace-delimited token of the line, if any.
    pub fn first_token(&self) -> Option<&'a str> {
        self.text.split_whitespace().next()
    }
}

/// Whether `text` is a comment line.
///
/// Blank and whitespace-only lines are not comments.
pub fn is_comment(text: &str) -> bool {
    text.trim_start().starts_with(COMMENT_MARKER)
}

/// Removes every comment line, keeping the remaining lines in their
/// original order.
pub fn strip_comments<'a, I>(lines: I) -> Vec<SourceLine<'a>>
where
    I: IntoIterator<Item = SourceLine<'a>>,
{
    lines
        .into_iter()
        .filter(|line| !is_comment(line.text))
        .collect()
}
