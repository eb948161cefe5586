use crate::{
    error::Result,
    parser::{element::ElementTree, pattern::PatternXmlParser, xml::XmlParser},
};

/// Parses `input` with both scanners
pub fn parse_both(input: &str) -> (Result<ElementTree>, Result<ElementTree>) {
    (
        XmlParser::new(input).and_then(|mut parser| parser.parse()),
        PatternXmlParser::new(input).and_then(|mut parser| parser.parse()),
    )
}

/// Asserts that both scanners build the same tree, or fail with the same error
///
/// # Panics
///
/// Panics if the scanners disagree
pub fn assert_scanners_agree(input: &str) {
    let (manual, pattern) = parse_both(input);
    assert_eq!(manual, pattern, "scanners disagree on input: {:?}", input);
}
