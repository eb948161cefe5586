//! Error handling types for the converter
//!
//! This module provides custom error types that give detailed information about
//! conversion failures, including line and column information where the scanner
//! knows where it stopped.

use std::{error::Error as StdError, fmt};
use thiserror::Error;

/// Main error type for parsing operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, counted in characters)
    pub column: usize,
}

/// Top-level error categories
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("{0}")]
    IO(IOError),
    #[error("{0}")]
    Malformed(MalformedXmlError),
    #[error("{0}")]
    Security(SecurityError),
}

/// Structural errors found while scanning XML
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedXmlError {
    /// A tag or declaration has no closing '>'
    #[error("Missing closing '>' for tag")]
    MissingTagClose,
    /// A close tag does not match the innermost open tag
    #[error("Closing tag '{found}' does not match open tag '{expected}'")]
    MismatchedCloseTag { expected: String, found: String },
    /// A close tag appeared while no element was open
    #[error("Closing tag '{0}' has no matching open tag")]
    UnexpectedCloseTag(String),
    /// Input ended while an element was still open
    #[error("Element '{0}' is never closed")]
    UnclosedTag(String),
    /// Text or markup ran past the end of the input
    #[error("Unexpected end of input")]
    UnexpectedEOF,
    /// A comment has no closing '-->'
    #[error("Unterminated comment")]
    UnterminatedComment,
    /// '<>' or '</>'
    #[error("Empty tag")]
    EmptyTag,
    /// Tag name is empty or contains non-word characters
    #[error("Invalid tag name '{0}'")]
    InvalidTagName(String),
    /// Attribute text could not be split into key=value
    #[error("Malformed attribute '{0}'")]
    MalformedAttribute(String),
    /// Quoted attribute value has no closing quote
    #[error("Unterminated value for attribute '{0}'")]
    UnterminatedAttributeValue(String),
}

/// Security-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    /// Exceeded maximum depth of element nesting
    #[error("Maximum nesting depth exceeded")]
    MaxDepthExceeded,
    /// Exceeded maximum input size
    #[error("Maximum input size exceeded")]
    MaxSizeExceeded,
    /// Exceeded maximum number of attributes on one element
    #[error("Maximum number of attributes exceeded")]
    MaxAttributesExceeded,
    /// Exceeded maximum accumulated text length of one element
    #[error("Maximum text length exceeded")]
    MaxTextLengthExceeded,
}

/// IO operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Permission denied: {0}")]
    PermissionDenied(String),
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Write error: {0}")]
    WriteError(String),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            context: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Resolves a byte offset into `input` to a line and column
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let consumed = input.as_bytes().get(..offset).unwrap_or(input.as_bytes());
        let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
        let line_start = consumed
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        let column = String::from_utf8_lossy(consumed.get(line_start..).unwrap_or_default())
            .chars()
            .count()
            + 1;
        Self { line, column }
    }

    pub fn create_error(self, kind: ParseErrorKind, context: &str) -> ParseError {
        ParseError::new(kind)
            .with_location(self.line, self.column)
            .with_context(context)
    }
}

impl From<MalformedXmlError> for ParseError {
    fn from(err: MalformedXmlError) -> Self {
        Self::new(ParseErrorKind::Malformed(err))
    }
}

impl From<SecurityError> for ParseError {
    fn from(err: SecurityError) -> Self {
        Self::new(ParseErrorKind::Security(err))
    }
}

impl From<IOError> for ParseError {
    fn from(err: IOError) -> Self {
        Self::new(ParseErrorKind::IO(err))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "at line {}, column {}: {}", loc.line, loc.column, self.kind)?;
        } else {
            write!(f, "Error: {}", self.kind)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        Ok(())
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.kind)
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
