use tracing::debug;

use crate::common::{ParserState, Tag};
use crate::error::{MalformedXmlError, Result};
use crate::parser::config::ParserConfig;
use crate::parser::cursor::Cursor;
use crate::parser::element::ElementTree;

/// XML scanner driven by explicit index arithmetic over a single forward cursor
#[derive(Debug)]
pub struct XmlParser<'a> {
    cursor: Cursor<'a>,
    state: ParserState,
}

impl<'a> XmlParser<'a> {
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

    /// Scans the whole document into an element tree under the synthetic root
    pub fn parse(&mut self) -> Result<ElementTree> {
        debug!("Starting manual XML scan");
        self.skip_declaration()?;

        while !self.cursor.is_eof() {
            self.cursor.skip_spaces();
            self.skip_comments()?;

            match self.cursor.current() {
                None => break,
                Some('<') => self.parse_element()?,
                Some(_) => self.parse_text()?,
            }
        }

        let end = self.cursor.pos();
        let tree = self
            .state
            .finish()
            .map_err(|e| self.cursor.locate(e, end))?;
        debug!(elements = tree.len(), "Finished manual XML scan");
        Ok(tree)
    }

    fn skip_declaration(&mut self) -> Result<()> {
        if !self.cursor.starts_with("<?") {
            return Ok(());
        }
        let start = self.cursor.pos();
        let end = self
            .cursor
            .find_from(start + 2, "?>")
            .ok_or_else(|| self.cursor.error_at(start, MalformedXmlError::MissingTagClose))?;
        self.cursor.advance_to(end + 2);
        Ok(())
    }

    fn skip_comments(&mut self) -> Result<()> {
        while self.cursor.starts_with("<!--") {
            let start = self.cursor.pos();
            let end = self.cursor.find_from(start + 4, "-->").ok_or_else(|| {
                self.cursor
                    .error_at(start, MalformedXmlError::UnterminatedComment)
            })?;
            self.cursor.advance_to(end + 3);
            self.cursor.skip_spaces();
        }
        Ok(())
    }

    fn parse_element(&mut self) -> Result<()> {
        let start = self.cursor.pos();
        let close = self
            .cursor
            .find(">")
            .ok_or_else(|| self.cursor.error_at(start, MalformedXmlError::MissingTagClose))?;

        let body = self.cursor.slice(start + 1, close);
        let tag = Tag::parse(body).map_err(|e| self.cursor.error_at(start, e))?;
        self.state
            .apply_tag(tag)
            .map_err(|e| self.cursor.locate(e, start))?;

        self.cursor.advance_to(close + 1);
        Ok(())
    }

    fn parse_text(&mut self) -> Result<()> {
        let start = self.cursor.pos();
        let next_tag = self
            .cursor
            .find("<")
            .ok_or_else(|| self.cursor.error_at(start, MalformedXmlError::UnexpectedEOF))?;

        let run = self.cursor.slice(start, next_tag);
        self.state
            .push_text(run)
            .map_err(|e| self.cursor.locate(e, start))?;

        self.cursor.advance_to(next_tag);
        Ok(())
    }
}
