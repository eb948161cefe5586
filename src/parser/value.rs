use indexmap::IndexMap;
use std::fmt;

/// Ordered key/value entries of a folded element
pub type Mapping = IndexMap<String, Value>;

/// Represents a folded XML element, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Represents a leaf string
    Text(String),
    /// Represents an element with attributes, children or both
    Mapping(Mapping),
    /// Represents repeated sibling elements sharing one tag
    Sequence(Vec<Value>),
}

/// The container directly enclosing a value while it is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    None,
    Mapping,
    Sequence,
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up `key` if this is a mapping
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// The parent kind this value imposes on its own children
    pub fn kind(&self) -> ParentKind {
        match self {
            Self::Text(_) => ParentKind::None,
            Self::Mapping(_) => ParentKind::Mapping,
            Self::Sequence(_) => ParentKind::Sequence,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Self::Mapping(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl<const N: usize> From<[(&str, Value); N]> for Value {
    fn from(entries: [(&str, Value); N]) -> Self {
        Self::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value))
                .collect(),
        )
    }
}

/// Flow-style rendering, used for logs and assertion messages
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Mapping(map) => {
                write!(f, "{{")?;
                for (i, (key, val)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
        }
    }
}
