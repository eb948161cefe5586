mod comparison;
mod data;
mod fixtures;
mod helpers;

pub use comparison::{assert_scanners_agree, parse_both};
pub use data::{read_test_file, TestData};
pub use fixtures::{INVALID_XML_SAMPLES, TEST_FILES};
pub use helpers::{catalog_xml, nested_xml, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    convert, convert_file,
    converter::Converter,
    enums::ScannerKind,
    error::{IOError, Location, MalformedXmlError, ParseError, ParseErrorKind, Result, SecurityError},
    formatter::{escape_scalar, FormatConfig, Formatter, YamlFormatter},
    parser::{
        config::{
            ParserConfig, DEFAULT_MAX_ATTRIBUTES, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE,
            DEFAULT_MAX_TEXT_LENGTH,
        },
        element::{ElementTree, NodeId},
        pattern::PatternXmlParser,
        value::{Mapping, Value},
        xml::XmlParser,
    },
    utils::{format_yaml, parse_xml, parse_xml_with, read_file, write_file},
};
