//! Block-style YAML emitter.
//!
//! Layout depends on the kind of container a value sits in, not only on its
//! depth: a mapping inside a sequence starts on the `- ` line, a sequence
//! inside a mapping is indented one level less than its depth, and a sequence
//! inside a sequence starts on its parent's `- ` line.

use std::borrow::Cow;

use super::{FormatConfig, Formatter};
use crate::parser::value::{Mapping, ParentKind, Value};

/// Scalars YAML would read as booleans or null
const RESERVED_WORDS: [&str; 9] = ["true", "false", "null", "y", "n", "yes", "no", "on", "off"];

/// Characters with syntactic meaning in plain YAML scalars
const SPECIAL_CHARS: &[char] = &[
    '[', ']', '{', '}', ':', ',', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

/// Renders a [`Value`] as block-style YAML
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format(&self, value: &Value, config: &FormatConfig) -> String {
        let mut out = String::new();
        Self::render(&mut out, value, 0, ParentKind::None, config);
        out
    }
}

impl YamlFormatter {
    fn render(
        out: &mut String,
        value: &Value,
        depth: usize,
        parent: ParentKind,
        config: &FormatConfig,
    ) {
        match value {
            Value::Mapping(map) => Self::render_mapping(out, map, depth, parent, config),
            Value::Sequence(items) => Self::render_sequence(out, items, depth, parent, config),
            Value::Text(text) => Self::render_text(out, text, depth, config),
        }
    }

    fn render_mapping(
        out: &mut String,
        map: &Mapping,
        depth: usize,
        parent: ParentKind,
        config: &FormatConfig,
    ) {
        let mut entries = map.iter();
        match (parent, entries.next()) {
            (ParentKind::Sequence, Some((key, value))) => {
                Self::render_entry(out, key, value, depth, config);
            }
            (_, first) => {
                out.push('\n');
                if let Some((key, value)) = first {
                    out.push_str(&config.indent(depth));
                    Self::render_entry(out, key, value, depth, config);
                }
            }
        }

        for (key, value) in entries {
            out.push_str(&config.indent(depth));
            Self::render_entry(out, key, value, depth, config);
        }
    }

    fn render_entry(out: &mut String, key: &str, value: &Value, depth: usize, config: &FormatConfig) {
        out.push_str(&escape_scalar(key));
        out.push(':');
        Self::render_child(out, value, depth + 1, ParentKind::Mapping, config);
    }

    fn render_sequence(
        out: &mut String,
        items: &[Value],
        depth: usize,
        parent: ParentKind,
        config: &FormatConfig,
    ) {
        let depth = match parent {
            ParentKind::Mapping => depth.saturating_sub(1),
            _ => depth,
        };

        let mut items = items.iter();
        match (parent, items.next()) {
            (ParentKind::Sequence, Some(first)) => Self::render_item(out, first, depth, config),
            (_, first) => {
                out.push('\n');
                if let Some(item) = first {
                    out.push_str(&config.indent(depth));
                    Self::render_item(out, item, depth, config);
                }
            }
        }

        for item in items {
            out.push_str(&config.indent(depth));
            Self::render_item(out, item, depth, config);
        }
    }

    fn render_item(out: &mut String, item: &Value, depth: usize, config: &FormatConfig) {
        out.push('-');
        Self::render_child(out, item, depth + 1, ParentKind::Sequence, config);
    }

    fn render_text(out: &mut String, text: &str, depth: usize, config: &FormatConfig) {
        if text.contains('\n') {
            out.push_str("|-\n");
            let indent = config.indent(depth);
            for line in text.lines() {
                out.push_str(&indent);
                out.push_str(line);
                out.push('\n');
            }
        } else {
            out.push_str(&escape_scalar(text));
            out.push('\n');
        }
    }

    /// Writes the separator after `key:` or `-`, then the value
    fn render_child(
        out: &mut String,
        value: &Value,
        depth: usize,
        parent: ParentKind,
        config: &FormatConfig,
    ) {
        if !starts_on_new_line(value, parent) {
            out.push(' ');
        }
        Self::render(out, value, depth, parent, config);
    }
}

/// Whether `value` rendered under `parent` begins with a line break
fn starts_on_new_line(value: &Value, parent: ParentKind) -> bool {
    match value {
        Value::Text(_) => false,
        Value::Mapping(map) => parent != ParentKind::Sequence || map.is_empty(),
        Value::Sequence(items) => parent != ParentKind::Sequence || items.is_empty(),
    }
}

/// Whether a plain scalar must be double-quoted
pub fn needs_quotes(s: &str) -> bool {
    RESERVED_WORDS.contains(&s) || s.contains(SPECIAL_CHARS)
}

/// Wraps `s` in double quotes when it is a reserved word or contains a special character.
///
/// The content is left untouched, so an embedded `"` is not escaped.
pub fn escape_scalar(s: &str) -> Cow<'_, str> {
    if needs_quotes(s) {
        Cow::Owned(format!("\"{}\"", s))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(value: &Value) -> String {
        YamlFormatter.format(value, &FormatConfig::default())
    }

    fn seq(items: &[&str]) -> Value {
        Value::Sequence(items.iter().map(|&s| Value::from(s)).collect())
    }

    #[test]
    fn test_sequence_under_mapping() {
        let value = Value::from([("a", Value::from([("b", seq(&["1", "2"]))]))]);
        assert_eq!(yaml(&value), "\na:\n  b:\n  - 1\n  - 2\n");
    }

    #[test]
    fn test_mapping_items_start_on_dash_line() {
        let value = Value::from([(
            "x",
            Value::Sequence(vec![
                Value::from([("a", Value::from("1")), ("b", Value::from("2"))]),
                Value::from([("a", Value::from("3"))]),
            ]),
        )]);
        assert_eq!(yaml(&value), "\nx:\n- a: 1\n  b: 2\n- a: 3\n");
    }

    #[test]
    fn test_nested_mapping_in_sequence_item() {
        let value = Value::from([(
            "x",
            Value::Sequence(vec![
                Value::from([("a", Value::from([("c", Value::from("1"))]))]),
                Value::from("t"),
            ]),
        )]);
        assert_eq!(yaml(&value), "\nx:\n- a:\n    c: 1\n- t\n");
    }

    #[test]
    fn test_sequence_in_sequence() {
        let value = Value::Sequence(vec![seq(&["1", "2"]), seq(&["3"])]);
        assert_eq!(yaml(&value), "\n- - 1\n  - 2\n- - 3\n");
    }

    #[test]
    fn test_multiline_text_is_block_literal() {
        let value = Value::from([
            ("a", Value::from("line1\nline2")),
            ("b", Value::from([("c", Value::from("x\ny"))])),
        ]);
        assert_eq!(
            yaml(&value),
            "\na: |-\n  line1\n  line2\nb:\n  c: |-\n    x\n    y\n"
        );
    }

    #[test]
    fn test_single_line_text_is_plain() {
        let value = Value::from([("a", Value::from("plain words"))]);
        assert_eq!(yaml(&value), "\na: plain words\n");
    }

    #[test]
    fn test_reserved_words_and_special_chars_are_quoted() {
        for word in RESERVED_WORDS {
            assert_eq!(escape_scalar(word), format!("\"{}\"", word));
        }
        assert_eq!(escape_scalar("a: b"), "\"a: b\"");
        assert_eq!(escape_scalar("say \"hi\""), "\"say \"hi\"\"");
        assert_eq!(escape_scalar("True"), "True");
        assert_eq!(escape_scalar("1"), "1");
        assert_eq!(escape_scalar("no-op"), "no-op");
    }

    #[test]
    fn test_keys_are_escaped() {
        let value = Value::from([("on", Value::from("off"))]);
        assert_eq!(yaml(&value), "\n\"on\": \"off\"\n");
    }

    #[test]
    fn test_empty_containers_render_as_null() {
        let value = Value::from([
            ("a", Value::Mapping(Mapping::new())),
            (
                "b",
                Value::Sequence(vec![Value::Mapping(Mapping::new()), Value::Sequence(vec![])]),
            ),
        ]);
        assert_eq!(yaml(&value), "\na:\nb:\n-\n-\n");
    }

    #[test]
    fn test_top_level_text() {
        assert_eq!(yaml(&Value::from("yes")), "\"yes\"\n");
    }

    #[test]
    fn test_indent_width() {
        let value = Value::from([("a", Value::from([("b", seq(&["1"]))]))]);
        let config = FormatConfig { indent_spaces: 4 };
        assert_eq!(
            YamlFormatter.format(&value, &config),
            "\na:\n    b:\n    - 1\n"
        );
    }
}
