//! # Inline Kinds
//!
//! Inline constructs that own their syntax delimiters. The parser and the
//! serializer read these constants; neither hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod escape;

pub use code_span::CodeSpan;
pub use emphasis::{Delimiter, Emphasis};
pub use escape::Escape;
