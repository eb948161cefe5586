//! Alternate scanner that recognises each construct with an anchored regex
//! instead of searching for delimiters by hand.
//!
//! It feeds the same [`ParserState`] as [`XmlParser`](super::xml::XmlParser),
//! so both scanners accept the same documents and build the same trees.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::common::{ParserState, Tag};
use crate::error::{MalformedXmlError, Result};
use crate::parser::config::ParserConfig;
use crate::parser::cursor::Cursor;
use crate::parser::element::ElementTree;

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| compile(r"\A<\?(?s:.*?)\?>"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| compile(r"\A +"));
static COMMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"\A<!--(?s:.*?)-->"));
static ELEMENT: LazyLock<Regex> = LazyLock::new(|| compile(r"\A<([^>]*)>"));
static TEXT: LazyLock<Regex> = LazyLock::new(|| compile(r"\A[^<]+"));

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("scanner patterns are valid")
}

#[derive(Debug)]
pub struct PatternXmlParser<'a> {
    cursor: Cursor<'a>,
    state: ParserState,
}

impl<'a> PatternXmlParser<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a str, config: ParserConfig) -> Result<Self> {
        let state = ParserState::with_config(config);
        state.validate_input_size(input.len())?;
        Ok(Self {
            cursor: Cursor::new(input),
            state,
        })
    }

    pub fn parse(&mut self) -> Result<ElementTree> {
        debug!("Starting pattern XML scan");
        if self.cursor.starts_with("<?") && !self.skip(&DECLARATION) {
            return Err(self
                .cursor
                .error_at(self.cursor.pos(), MalformedXmlError::MissingTagClose));
        }

        while !self.cursor.is_eof() {
            self.skip(&SPACES);
            while self.cursor.starts_with("<!--") {
                if !self.skip(&COMMENT) {
                    return Err(self
                        .cursor
                        .error_at(self.cursor.pos(), MalformedXmlError::UnterminatedComment));
                }
                self.skip(&SPACES);
            }

            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.starts_with("<") {
                self.parse_element()?;
            } else {
                self.parse_text()?;
            }
        }

        let end = self.cursor.pos();
        let tree = self
            .state
            .finish()
            .map_err(|e| self.cursor.locate(e, end))?;
        debug!(elements = tree.len(), "Finished pattern XML scan");
        Ok(tree)
    }

    /// Consumes a match of `pattern` at the cursor, if there is one
    fn skip(&mut self, pattern: &Regex) -> bool {
        match pattern.find(self.cursor.rest()) {
            Some(found) => {
                self.cursor.advance_by(found.end());
                true
            }
            None => false,
        }
    }

    fn parse_element(&mut self) -> Result<()> {
        let start = self.cursor.pos();
        let rest = self.cursor.rest();
        let (matched, body) = ELEMENT
            .captures(rest)
            .and_then(|caps| Some((caps.get(0)?.len(), caps.get(1)?.as_str())))
            .ok_or_else(|| self.cursor.error_at(start, MalformedXmlError::MissingTagClose))?;

        let tag = Tag::parse(body).map_err(|e| self.cursor.error_at(start, e))?;
        self.state
            .apply_tag(tag)
            .map_err(|e| self.cursor.locate(e, start))?;

        self.cursor.advance_by(matched);
        Ok(())
    }

    fn parse_text(&mut self) -> Result<()> {
        let start = self.cursor.pos();
        let rest = self.cursor.rest();
        let run = TEXT
            .find(rest)
            .map(|found| found.as_str())
            .filter(|run| run.len() < rest.len())
            .ok_or_else(|| self.cursor.error_at(start, MalformedXmlError::UnexpectedEOF))?;

        self.state
            .push_text(run)
            .map_err(|e| self.cursor.locate(e, start))?;

        self.cursor.advance_by(run.len());
        Ok(())
    }
}
