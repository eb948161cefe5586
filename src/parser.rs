pub mod config;
pub mod cursor;
pub mod element;
pub mod pattern;
pub mod value;
pub mod xml;

pub use config::ParserConfig;
pub use element::{Element, ElementTree, NodeId};
pub use pattern::PatternXmlParser;
pub use value::{Mapping, ParentKind, Value};
pub use xml::XmlParser;
