#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use xml2yaml::test_utils::*;

#[test]
fn test_fixture_files_convert_to_expected_yaml() {
    for (xml_path, yaml_path) in TEST_FILES {
        let xml = read_test_file(xml_path).expect("fixture XML");
        let expected = read_test_file(yaml_path).expect("fixture YAML");
        for scanner in [ScannerKind::Manual, ScannerKind::Pattern] {
            let yaml = Converter::xml_to_yaml(&xml, scanner, &FormatConfig::default())
                .unwrap_or_else(|e| panic!("{} failed with {} scanner: {}", xml_path, scanner, e));
            assert_eq!(yaml, expected, "{} with {} scanner", xml_path, scanner);
        }
    }
}

#[test]
fn test_countries_fold() {
    let data = TestData::load().unwrap();
    let value = parse_xml(&data.countries_xml).unwrap();
    let countries = value
        .get("data")
        .and_then(|d| d.get("country"))
        .and_then(Value::as_sequence)
        .unwrap();
    assert_eq!(countries.len(), 3);

    let singapore = countries.get(1).unwrap();
    assert_eq!(singapore.get("_name"), Some(&Value::from("Singapore")));
    // a single neighbor stays a mapping
    assert!(singapore.get("neighbor").and_then(Value::as_mapping).is_some());

    let panama = countries.get(2).unwrap();
    assert_eq!(
        panama
            .get("neighbor")
            .and_then(Value::as_sequence)
            .map(<[Value]>::len),
        Some(2)
    );
}

#[test]
fn test_convert_matches_converter() {
    let data = TestData::load().unwrap();
    assert_eq!(
        convert(&data.config_xml).unwrap(),
        Converter::xml_to_yaml(&data.config_xml, ScannerKind::Manual, &FormatConfig::default())
            .unwrap()
    );
    assert_eq!(convert(&data.config_xml).unwrap(), data.config_yaml);
}

#[test]
fn test_failed_conversion_produces_no_output() {
    let result = convert("<a><b></a>");
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ParseErrorKind::Malformed(MalformedXmlError::MismatchedCloseTag { .. }))
    ));
}

#[test]
fn test_generated_catalog_converts() {
    let xml = catalog_xml(50);
    let yaml = convert(&xml).unwrap();
    assert!(yaml.starts_with("\ncatalog:\n  item:\n  - name: Item 0\n"));
    assert!(yaml.contains("    _stock: \"yes\"\n"));
    assert_eq!(yaml.matches("  - name: Item").count(), 50);
    assert!(!yaml.contains("note"));
}
