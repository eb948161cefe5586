use crate::{
    enums::ScannerKind,
    error::{IOError, ParseError, ParseErrorKind, Result},
    formatter::{FormatConfig, Formatter, YamlFormatter},
    parser::{value::Value, xml::XmlParser},
    Converter,
};
use std::fs;

pub fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => {
            ParseError::new(ParseErrorKind::IO(IOError::FileNotFound(path.to_string())))
        }
        std::io::ErrorKind::PermissionDenied => ParseError::new(ParseErrorKind::IO(
            IOError::PermissionDenied(path.to_string()),
        )),
        _ => ParseError::new(ParseErrorKind::IO(IOError::ReadError(e.to_string()))),
    })
}

pub fn write_file(path: &str, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => ParseError::new(ParseErrorKind::IO(
            IOError::PermissionDenied(path.to_string()),
        )),
        _ => ParseError::new(ParseErrorKind::IO(IOError::WriteError(e.to_string()))),
    })
}

/// Parses and folds `content` with the reference scanner
pub fn parse_xml(content: &str) -> Result<Value> {
    let mut parser = XmlParser::new(content)?;
    parser.parse().map(|tree| tree.fold())
}

/// Parses and folds `content` with the chosen scanner
pub fn parse_xml_with(content: &str, scanner: ScannerKind) -> Result<Value> {
    Converter::xml_to_value(content, scanner)
}

pub fn format_yaml(value: &Value) -> String {
    YamlFormatter.format(value, &FormatConfig::default())
}
