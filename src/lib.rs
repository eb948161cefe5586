//! xml2yaml: a hand-written XML scanner and YAML emitter
//!
//! This crate provides functionality to:
//! - Scan XML documents into an element tree, with either an index-driven or a
//!   regex-driven scanner
//! - Fold the tree into strings, ordered mappings and sequences
//! - Render the folded value as block-style YAML
//! - Handle errors with line, column and context
//!
//! # Examples
//! ```
//! use xml2yaml::{convert, Result};
//!
//! fn example() -> Result<()> {
//!     let yaml = convert("<a><b>1</b><b>2</b></a>")?;
//!     assert_eq!(yaml, "\na:\n  b:\n  - 1\n  - 2\n");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod common;
pub mod converter;
pub mod enums;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod test_utils;
pub mod utils;

// Re-exports
pub use converter::Converter;
pub use enums::ScannerKind;
pub use error::{IOError, MalformedXmlError, ParseError, ParseErrorKind, Result, SecurityError};
pub use formatter::{FormatConfig, Formatter, YamlFormatter};
pub use parser::{
    element::ElementTree, pattern::PatternXmlParser, value::Value, xml::XmlParser,
};
use utils::{format_yaml, parse_xml, read_file};

/// Converts an XML document to YAML with the default scanner and indentation
pub fn convert(xml: &str) -> Result<String> {
    let value = parse_xml(xml)?;
    Ok(format_yaml(&value))
}

/// Reads an XML file and converts it to YAML
#[instrument]
pub fn convert_file(path: &str) -> Result<String> {
    debug!("Starting to convert file: {}", path);

    let content = read_file(path)?;

    info!("File read successfully, converting {} bytes", content.len());

    let result = convert(&content);

    debug!("Conversion completed");
    result
}
