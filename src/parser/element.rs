//! Element tree produced by the scanners.
//!
//! Nodes live in a flat arena and refer to their children by [`NodeId`]. The
//! synthetic `root` element always occupies slot 0; the document's top-level
//! elements are its children.

use super::value::{Mapping, Value};
use indexmap::IndexMap;

/// Tag of the synthetic element enclosing the whole document
pub const ROOT_TAG: &str = "root";
/// Mapping key holding an element's own text when it also has attributes or children
pub const TEXT_KEY: &str = "__text";
/// Prefix marking attribute keys in a folded mapping
pub const ATTRIBUTE_PREFIX: char = '_';

/// Ordered attribute name to value pairs
pub type Attributes = IndexMap<String, String>;

/// Index of an element in its [`ElementTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: Self = Self(0);

    pub const fn index(self) -> usize {
        self.0
    }
}

/// A single XML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attributes: Attributes,
    pub children: Vec<NodeId>,
    /// Raw text runs seen while this element was innermost, untrimmed
    pub text: String,
}

impl Element {
    pub fn new(tag: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
            text: String::new(),
        }
    }
}

/// Arena of parsed elements rooted at the synthetic `root`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTree {
    nodes: Vec<Element>,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new(ROOT_TAG, Attributes::new())],
        }
    }

    #[allow(clippy::indexing_slicing)]
    pub fn root(&self) -> &Element {
        // slot 0 is populated by `new` and never removed
        &self.nodes[NodeId::ROOT.index()]
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.index())
    }

    /// Number of elements, not counting the synthetic root
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Children of `id` in document order
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Element> + '_ {
        self.get(id)
            .map(|element| element.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&child| self.get(child))
    }

    /// Appends `element` as the last child of `parent`
    pub(crate) fn append_child(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(element);
        if let Some(parent) = self.get_mut(parent) {
            parent.children.push(id);
        }
        id
    }

    /// Folds the whole document into a [`Value`]
    pub fn fold(&self) -> Value {
        self.fold_node(NodeId::ROOT)
    }

    /// Folds the subtree at `id`.
    ///
    /// Text-only elements become bare strings. Anything else becomes a mapping
    /// of `__text`, then child tags in order of first appearance, then
    /// `_`-prefixed attributes. A tag seen a second time among siblings turns
    /// its entry into a sequence; later siblings append to it.
    pub fn fold_node(&self, id: NodeId) -> Value {
        let Some(element) = self.get(id) else {
            return Value::Mapping(Mapping::new());
        };

        let text = element.text.trim();
        if !text.is_empty() && element.attributes.is_empty() && element.children.is_empty() {
            return Value::Text(text.to_string());
        }

        let mut map = Mapping::new();
        if !text.is_empty() {
            map.insert(TEXT_KEY.to_string(), Value::Text(text.to_string()));
        }

        for &child_id in &element.children {
            let Some(child) = self.get(child_id) else {
                continue;
            };
            let value = self.fold_node(child_id);
            match map.get_mut(&child.tag) {
                None => {
                    map.insert(child.tag.clone(), value);
                }
                Some(Value::Sequence(items)) => items.push(value),
                Some(existing) => {
                    let first = std::mem::replace(existing, Value::Sequence(Vec::new()));
                    *existing = Value::Sequence(vec![first, value]);
                }
            }
        }

        for (key, value) in &element.attributes {
            map.insert(
                format!("{ATTRIBUTE_PREFIX}{key}"),
                Value::Text(value.clone()),
            );
        }

        Value::Mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: &str, text: &str) -> Element {
        let mut element = Element::new(tag, Attributes::new());
        element.text = text.to_string();
        element
    }

    #[test]
    fn test_new_tree_has_only_root() {
        let tree = ElementTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.root().tag, ROOT_TAG);
        assert_eq!(tree.fold(), Value::Mapping(Mapping::new()));
    }

    #[test]
    fn test_text_only_folds_to_scalar() {
        let mut tree = ElementTree::new();
        let id = tree.append_child(NodeId::ROOT, element("a", "\n  hi \n"));
        assert_eq!(tree.fold_node(id), Value::from("hi"));
    }

    #[test]
    fn test_text_with_attribute_folds_to_mapping() {
        let mut tree = ElementTree::new();
        let mut a = element("a", "hi");
        a.attributes.insert("x".to_string(), "1".to_string());
        let id = tree.append_child(NodeId::ROOT, a);
        assert_eq!(
            tree.fold_node(id),
            Value::from([("__text", Value::from("hi")), ("_x", Value::from("1"))])
        );
    }

    #[test]
    fn test_repeated_siblings_promote_to_sequence() {
        let mut tree = ElementTree::new();
        let a = tree.append_child(NodeId::ROOT, element("a", ""));
        tree.append_child(a, element("b", "1"));
        tree.append_child(a, element("c", "x"));
        tree.append_child(a, element("b", "2"));
        tree.append_child(a, element("b", "3"));

        let folded = tree.fold();
        let a = folded.get("a").and_then(Value::as_mapping).map(|m| {
            m.iter()
                .map(|(k, v)| (k.as_str(), v.to_string()))
                .collect::<Vec<_>>()
        });
        assert_eq!(
            a,
            Some(vec![("b", "[1, 2, 3]".to_string()), ("c", "x".to_string())])
        );
    }

    #[test]
    fn test_key_order_text_children_attributes() {
        let mut tree = ElementTree::new();
        let mut a = element("a", "t");
        a.attributes.insert("id".to_string(), "7".to_string());
        let a = tree.append_child(NodeId::ROOT, a);
        tree.append_child(a, element("z", "1"));
        tree.append_child(a, element("m", "2"));

        let folded = tree.fold_node(a);
        let keys: Vec<&str> = folded
            .as_mapping()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, ["__text", "z", "m", "_id"]);
    }

    #[test]
    fn test_children_iterates_in_document_order() {
        let mut tree = ElementTree::new();
        tree.append_child(NodeId::ROOT, element("x", ""));
        tree.append_child(NodeId::ROOT, element("y", ""));
        let tags: Vec<&str> = tree
            .children(NodeId::ROOT)
            .map(|e| e.tag.as_str())
            .collect();
        assert_eq!(tags, ["x", "y"]);
        assert_eq!(tree.len(), 2);
    }
}
