use crate::error::{Result, SecurityError};

pub const DEFAULT_MAX_DEPTH: usize = 100;
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 1024 * 1024; // 1MB
pub const DEFAULT_MAX_ATTRIBUTES: usize = 1000;

/// Configuration for parser limits and validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of open elements
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum accumulated text of a single element
    pub max_text_length: usize,
    /// Maximum number of attributes on a single element
    pub max_attributes: usize,
    /// Reject input that ends while elements are still open
    pub require_closed_tags: bool,
}

/// Tracks nesting depth during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            max_attributes: DEFAULT_MAX_ATTRIBUTES,
            require_closed_tags: true,
        }
    }
}

impl ParserConfig {
    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(SecurityError::MaxSizeExceeded.into());
        }
        Ok(())
    }

    pub fn validate_text_length(&self, len: usize) -> Result<()> {
        if len > self.max_text_length {
            return Err(SecurityError::MaxTextLengthExceeded.into());
        }
        Ok(())
    }

    pub fn validate_attributes(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            return Err(SecurityError::MaxAttributesExceeded.into());
        }
        Ok(())
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(SecurityError::MaxDepthExceeded.into());
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}
