use std::fs;

use crate::error::{IOError, ParseError, ParseErrorKind, Result};

pub struct TestData {
    pub countries_xml: String,
    pub countries_yaml: String,
    pub config_xml: String,
    pub config_yaml: String,
}

impl TestData {
    pub fn load() -> Result<Self> {
        Ok(Self {
            countries_xml: read_test_file("tests/input/countries.xml")?,
            countries_yaml: read_test_file("tests/input/countries.yaml")?,
            config_xml: read_test_file("tests/input/config.xml")?,
            config_yaml: read_test_file("tests/input/config.yaml")?,
        })
    }
}

pub fn read_test_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ParseError::new(ParseErrorKind::IO(IOError::ReadError(format!(
            "Failed to read {}: {}",
            path, e
        ))))
    })
}
