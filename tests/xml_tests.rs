#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use xml2yaml::test_utils::*;

fn malformed_kind(input: &str) -> MalformedXmlError {
    match parse_xml(input).map_err(|e| e.kind().clone()) {
        Err(ParseErrorKind::Malformed(err)) => err,
        other => panic!("Expected malformed XML error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_text_only_element_is_scalar() {
    let value = parse_xml("<greeting>  hello world  </greeting>").unwrap();
    assert_eq!(value.get("greeting"), Some(&Value::from("hello world")));
}

#[test]
fn test_attribute_turns_text_into_mapping() {
    let value = parse_xml(r#"<a x="1">hi</a>"#).unwrap();
    assert_eq!(
        value,
        Value::from([(
            "a",
            Value::from([("__text", Value::from("hi")), ("_x", Value::from("1"))])
        )])
    );
}

#[test]
fn test_child_turns_text_into_mapping() {
    let value = parse_xml("<a>hi<b>1</b></a>").unwrap();
    let a = value.get("a").unwrap();
    assert_eq!(a.get("__text"), Some(&Value::from("hi")));
    assert_eq!(a.get("b"), Some(&Value::from("1")));
}

#[test]
fn test_list_promotion() {
    let two = parse_xml("<a><b>1</b><b>2</b></a>").unwrap();
    assert_eq!(two.to_string(), "{a: {b: [1, 2]}}");

    let three = parse_xml("<a><b>1</b><c/><b>2</b><b>3</b></a>").unwrap();
    assert_eq!(three.to_string(), "{a: {b: [1, 2, 3], c: {}}}");
}

#[test]
fn test_repeated_mappings_promote() {
    let value = parse_xml(r#"<r><p id="1"/><p id="2"><q>x</q></p></r>"#).unwrap();
    let items = value.get("r").and_then(|r| r.get("p")).and_then(Value::as_sequence).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].to_string(), "{_id: 1}");
    assert_eq!(items[1].to_string(), "{q: x, _id: 2}");
}

#[test]
fn test_self_closing_equals_empty_pair() {
    assert_eq!(
        parse_xml(r#"<x a="1"/>"#).unwrap(),
        parse_xml(r#"<x a="1"></x>"#).unwrap()
    );
}

#[test]
fn test_declaration_and_comments_are_dropped() {
    let value = parse_xml(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- head -->\n<a>\n  <!-- inside -->\n  <b>1</b>\n</a>\n<!-- tail -->",
    )
    .unwrap();
    assert_eq!(value.to_string(), "{a: {b: 1}}");
}

#[test]
fn test_attribute_order_and_duplicates() {
    let value = parse_xml(r#"<a z="1" y="2" z="3"/>"#).unwrap();
    let keys: Vec<&str> = value
        .get("a")
        .and_then(Value::as_mapping)
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["_z", "_y"]);
    assert_eq!(value.get("a").and_then(|a| a.get("_z")), Some(&Value::from("3")));
}

#[test]
fn test_unquoted_and_multiline_attributes() {
    let value = parse_xml("<a\n  x=1\n  y = \"two words\"\n/>").unwrap();
    assert_eq!(value.to_string(), "{a: {_x: 1, _y: two words}}");
}

#[test]
fn test_multiple_top_level_elements() {
    let value = parse_xml("<a>1</a><b>2</b><a>3</a>").unwrap();
    assert_eq!(value.to_string(), "{a: [1, 3], b: 2}");
}

#[test]
fn test_invalid_samples_fail() {
    for (input, description) in INVALID_XML_SAMPLES {
        let result = parse_xml(input);
        assert!(result.is_err(), "{} should fail: {:?}", description, input);
        assert!(
            matches!(result.unwrap_err().kind(), ParseErrorKind::Malformed(_)),
            "{} should be a malformed XML error",
            description
        );
    }
}

#[test]
fn test_specific_malformed_kinds() {
    assert_eq!(
        malformed_kind("<a><b></a>"),
        MalformedXmlError::MismatchedCloseTag {
            expected: "b".to_string(),
            found: "a".to_string(),
        }
    );
    assert_eq!(malformed_kind("<a>text"), MalformedXmlError::UnexpectedEOF);
    assert_eq!(
        malformed_kind("<a-b></a-b>"),
        MalformedXmlError::InvalidTagName("a-b".to_string())
    );
    assert_eq!(
        malformed_kind("<a checked></a>"),
        MalformedXmlError::MalformedAttribute("checked".to_string())
    );
}

#[test]
fn test_error_location_points_at_tag() {
    let err = parse_xml("<a>\n  <b>\n  </c>\n</a>").unwrap_err();
    assert_eq!(err.location(), Some(&Location::new(3, 3)));
    assert_eq!(err.context(), Some("</c>"));
    assert!(err.to_string().starts_with("at line 3, column 3:"));
}

#[test]
fn test_element_tree_structure() {
    let tree = XmlParser::new("<a><b/><c>t</c></a>").unwrap().parse().unwrap();
    assert_eq!(tree.len(), 3);
    let a = tree.children(NodeId::ROOT).next().unwrap();
    assert_eq!(a.tag, "a");
    let tags: Vec<&str> = a
        .children
        .iter()
        .filter_map(|&id| tree.get(id))
        .map(|e| e.tag.as_str())
        .collect();
    assert_eq!(tags, ["b", "c"]);
}

#[test]
fn test_fixtures_parse_with_both_scanners() {
    let data = TestData::load().unwrap();
    assert_scanners_agree(&data.countries_xml);
    assert_scanners_agree(&data.config_xml);
    for (input, _) in INVALID_XML_SAMPLES {
        assert_scanners_agree(input);
    }
}

#[test]
fn test_pattern_scanner_selection() {
    let value = parse_xml_with("<a><b>1</b><b>2</b></a>", ScannerKind::Pattern).unwrap();
    assert_eq!(value.to_string(), "{a: {b: [1, 2]}}");
}
