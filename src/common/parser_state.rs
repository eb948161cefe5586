use std::mem;

use tracing::trace;

use super::tag::Tag;
use super::tree_builder::TreeBuilder;
use crate::error::Result;
use crate::parser::config::{ParserConfig, ParsingContext};
use crate::parser::element::ElementTree;

/// Limits, depth tracking and the tree under construction, owned by one scanner.
///
/// Errors raised here carry no location; the scanner attaches one from its
/// scan position.
#[derive(Debug)]
pub struct ParserState {
    pub config: ParserConfig,
    pub context: ParsingContext,
    builder: TreeBuilder,
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

impl ParserState {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            context: ParsingContext::new(),
            builder: TreeBuilder::new(),
        }
    }

    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        self.config.validate_input_size(size)
    }

    /// Applies a scanned tag to the tree
    pub fn apply_tag(&mut self, tag: Tag<'_>) -> Result<()> {
        match tag {
            Tag::Open { name, attributes } => {
                self.config.validate_attributes(attributes.len())?;
                self.context.enter_nested(&self.config)?;
                trace!(depth = self.context.depth(), "open <{}>", name);
                self.builder.open(name, attributes);
            }
            Tag::SelfClosing { name, attributes } => {
                self.config.validate_attributes(attributes.len())?;
                trace!(depth = self.context.depth(), "empty <{}/>", name);
                self.builder.empty(name, attributes);
            }
            Tag::Close { name } => {
                self.builder.close(name)?;
                self.context.exit_nested();
                trace!(depth = self.context.depth(), "close </{}>", name);
            }
        }
        Ok(())
    }

    /// Adds a text run to the innermost element unless it is only whitespace
    pub fn push_text(&mut self, run: &str) -> Result<()> {
        if run.trim().is_empty() {
            return Ok(());
        }
        let len = self.builder.append_text(run);
        self.config.validate_text_length(len)
    }

    /// Takes the finished tree, leaving a fresh builder behind
    pub fn finish(&mut self) -> Result<ElementTree> {
        self.context = ParsingContext::new();
        let tree = mem::take(&mut self.builder).finish(self.config.require_closed_tags)?;
        Ok(tree)
    }
}
