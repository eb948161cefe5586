pub mod parser_state;
pub mod tag;
pub mod tree_builder;

pub use parser_state::ParserState;
pub use tag::Tag;
pub use tree_builder::TreeBuilder;
