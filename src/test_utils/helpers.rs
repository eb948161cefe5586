use std::{env, fmt::Write, fs, path::PathBuf};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("xml2yaml_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// A flat catalog of `items` repeated `<item>` elements
pub fn catalog_xml(items: usize) -> String {
    let mut xml = String::from("<?xml version=\"1.0\"?>\n<catalog>\n");
    for i in 0..items {
        let _ = writeln!(
            xml,
            "  <item id=\"{i}\" stock=\"yes\">\n    <name>Item {i}</name>\n    <price>{}.99</price>\n    <!-- note {i} -->\n    <tag>a</tag>\n    <tag>b</tag>\n  </item>",
            i % 100
        );
    }
    xml.push_str("</catalog>\n");
    xml
}

/// `depth` elements nested inside each other
pub fn nested_xml(depth: usize) -> String {
    let mut xml = "<n>".repeat(depth);
    xml.push_str("leaf");
    xml.push_str(&"</n>".repeat(depth));
    xml
}
