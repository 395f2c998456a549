//! Parsed IRC lines, borrowed and owned.

mod borrowed;
mod nom_parser;
pub mod tags;
mod types;

pub use self::borrowed::MessageRef;
pub use self::tags::{Tag, TagValue};
pub use self::types::Message;
