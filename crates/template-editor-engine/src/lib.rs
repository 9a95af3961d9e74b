pub mod editing;
pub mod models;
pub mod parsing;
pub mod serialize;

// Re-export key types for easier usage
pub use editing::{AutoFormatter, EditorSession, Key, KeyOutcome, SessionOptions, handle_key};
pub use models::*;
pub use parsing::parse;
pub use serialize::{
    ItalicDelimiter, SerializeOptions, equivalent, normalize_whitespace, serialize, serialize_with,
};
