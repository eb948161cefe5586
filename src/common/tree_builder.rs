use crate::error::MalformedXmlError;
use crate::parser::element::{Attributes, Element, ElementTree, NodeId};

/// Builds an [`ElementTree`] from a stream of tag and text events.
///
/// The open-tag stack starts with the synthetic root, which is never popped.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: ElementTree,
    stack: Vec<NodeId>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: ElementTree::new(),
            stack: vec![NodeId::ROOT],
        }
    }

    /// Innermost open element
    pub fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or(NodeId::ROOT)
    }

    /// Number of open elements, not counting the root
    pub fn open_count(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Appends an element under the innermost open element and makes it innermost
    pub fn open(&mut self, tag: &str, attributes: Attributes) -> NodeId {
        let id = self.empty(tag, attributes);
        self.stack.push(id);
        id
    }

    /// Appends an element that takes no children
    pub fn empty(&mut self, tag: &str, attributes: Attributes) -> NodeId {
        let parent = self.current();
        self.tree.append_child(parent, Element::new(tag, attributes))
    }

    /// Closes the innermost open element, which must be named `tag`
    pub fn close(&mut self, tag: &str) -> Result<(), MalformedXmlError> {
        if self.stack.len() <= 1 {
            return Err(MalformedXmlError::UnexpectedCloseTag(tag.to_string()));
        }
        let expected = self.tag_of(self.current());
        if expected != tag {
            return Err(MalformedXmlError::MismatchedCloseTag {
                expected: expected.to_string(),
                found: tag.to_string(),
            });
        }
        self.stack.pop();
        Ok(())
    }

    /// Appends a raw text run to the innermost element, returning its new text length
    pub fn append_text(&mut self, run: &str) -> usize {
        let current = self.current();
        self.tree.get_mut(current).map_or(0, |element| {
            element.text.push_str(run);
            element.text.len()
        })
    }

    /// Hands over the tree, failing if elements are still open and `require_closed` is set
    pub fn finish(self, require_closed: bool) -> Result<ElementTree, MalformedXmlError> {
        if require_closed && self.open_count() > 0 {
            return Err(MalformedXmlError::UnclosedTag(
                self.tag_of(self.current()).to_string(),
            ));
        }
        Ok(self.tree)
    }

    fn tag_of(&self, id: NodeId) -> &str {
        self.tree.get(id).map_or("", |element| element.tag.as_str())
    }
}
