mod yaml;

pub use self::yaml::{escape_scalar, YamlFormatter};
use crate::parser::Value;

/// Configuration options for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per indentation level
    pub indent_spaces: usize,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_spaces: 2 }
    }
}

impl FormatConfig {
    /// Leading whitespace for `depth` levels
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(depth.saturating_mul(self.indent_spaces))
    }
}

/// Trait for rendering a Value as text
pub trait Formatter {
    fn format(&self, value: &Value, config: &FormatConfig) -> String;
}
