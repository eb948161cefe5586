use tracing::debug;

use crate::{
    enums::ScannerKind,
    error::Result,
    formatter::{FormatConfig, Formatter, YamlFormatter},
    parser::{
        config::ParserConfig, element::ElementTree, pattern::PatternXmlParser, value::Value,
        xml::XmlParser,
    },
};

/// High-level "Converter" utility struct that runs the XML to YAML pipeline
/// with either scanner.
pub struct Converter;

impl Converter {
    /// Scans `xml` into an element tree
    pub fn parse(xml: &str, scanner: ScannerKind) -> Result<ElementTree> {
        Self::parse_with_config(xml, scanner, ParserConfig::default())
    }

    pub fn parse_with_config(
        xml: &str,
        scanner: ScannerKind,
        config: ParserConfig,
    ) -> Result<ElementTree> {
        debug!(%scanner, bytes = xml.len(), "Parsing XML");
        match scanner {
            ScannerKind::Manual => XmlParser::with_config(xml, config)?.parse(),
            ScannerKind::Pattern => PatternXmlParser::with_config(xml, config)?.parse(),
        }
    }

    /// Scans and folds `xml` into a structured value
    pub fn xml_to_value(xml: &str, scanner: ScannerKind) -> Result<Value> {
        Self::parse(xml, scanner).map(|tree| tree.fold())
    }

    /// Runs the whole pipeline: scan, fold, render
    pub fn xml_to_yaml(xml: &str, scanner: ScannerKind, config: &FormatConfig) -> Result<String> {
        let value = Self::xml_to_value(xml, scanner)?;
        Ok(YamlFormatter.format(&value, config))
    }
}
