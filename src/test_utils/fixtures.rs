pub const TEST_FILES: [(&str, &str); 2] = [
    ("tests/input/countries.xml", "tests/input/countries.yaml"),
    ("tests/input/config.xml", "tests/input/config.yaml"),
];

pub const INVALID_XML_SAMPLES: [(&str, &str); 10] = [
    ("<a", "Missing closing '>'"),
    ("<?xml version=\"1.0\"", "Unterminated declaration"),
    ("<a>text", "Text runs to end of input"),
    ("<!-- note", "Unterminated comment"),
    ("<a></>", "Empty close tag"),
    ("<a><b></a>", "Mismatched close tag"),
    ("</a>", "Close tag without open tag"),
    ("<a><b></b>", "Unclosed element"),
    ("<a-b></a-b>", "Invalid tag name"),
    ("<a x=\"1></a>", "Unterminated attribute value"),
];
