//! Forward-only scan position over document text

use crate::error::{Location, MalformedXmlError, ParseError, ParseErrorKind};

/// Longest excerpt of input attached to an error as context
const CONTEXT_CHARS: usize = 32;

/// Cursor over the whitespace-trimmed part of the input.
///
/// Offsets are absolute byte offsets into the untrimmed input.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        let start = input.len() - input.trim_start().len();
        let end = input.trim_end().len().max(start);
        Self {
            input,
            pos: start,
            end,
        }
    }

    /// Get current position index
    pub const fn pos(&self) -> usize {
        self.pos
    }

    /// Check if at end of input
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Unconsumed input
    pub fn rest(&self) -> &'a str {
        self.input.get(self.pos..self.end).unwrap_or_default()
    }

    /// Get current char without consuming
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn starts_with(&self, pattern: &str) -> bool {
        self.rest().starts_with(pattern)
    }

    /// Absolute offset of the next `pattern` at or after the cursor
    pub fn find(&self, pattern: &str) -> Option<usize> {
        self.find_from(self.pos, pattern)
    }

    /// Absolute offset of the next `pattern` at or after `offset`
    pub fn find_from(&self, offset: usize, pattern: &str) -> Option<usize> {
        self.input
            .get(offset..self.end)?
            .find(pattern)
            .map(|found| offset + found)
    }

    /// Input between two absolute offsets
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        self.input.get(start..end.min(self.end)).unwrap_or_default()
    }

    pub fn advance_to(&mut self, offset: usize) {
        self.pos = offset.clamp(self.pos, self.end);
    }

    pub fn advance_by(&mut self, len: usize) {
        self.advance_to(self.pos.saturating_add(len));
    }

    /// Skip a run of space characters
    pub fn skip_spaces(&mut self) {
        let spaces = self.rest().len() - self.rest().trim_start_matches(' ').len();
        self.advance_by(spaces);
    }

    pub fn location_at(&self, offset: usize) -> Location {
        Location::from_offset(self.input, offset)
    }

    /// Builds a located error pointing at `offset`
    pub fn error_at(&self, offset: usize, err: MalformedXmlError) -> ParseError {
        self.locate(ParseError::new(ParseErrorKind::Malformed(err)), offset)
    }

    /// Attaches the location of `offset` to an error raised without one
    pub fn locate(&self, err: ParseError, offset: usize) -> ParseError {
        if err.location().is_some() {
            return err;
        }
        let location = self.location_at(offset);
        err.with_location(location.line, location.column)
            .with_context(self.excerpt(offset))
    }

    fn excerpt(&self, offset: usize) -> String {
        self.input
            .get(offset..)
            .unwrap_or_default()
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(CONTEXT_CHARS)
            .collect()
    }
}
