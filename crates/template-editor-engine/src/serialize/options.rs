//! Options for markdown serialization

use crate::parsing::inline::kinds::{Delimiter, Emphasis};

/// Which delimiter family italic and bold are written with.
///
/// The two families never share a character, so italic nested in bold (or
/// the reverse) stays unambiguous on re-parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItalicDelimiter {
    /// `_italic_` and `**bold**`
    #[default]
    Underscore,
    /// `*italic*` and `__bold__`
    Asterisk,
}

impl ItalicDelimiter {
    /// Reads the italic token as written in configuration: `"_"` or `"*"`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "_" => Some(Self::Underscore),
            "*" => Some(Self::Asterisk),
            _ => None,
        }
    }

    pub fn italic(self) -> Delimiter {
        match self {
            Self::Underscore => Emphasis::ITALIC_UNDERSCORE,
            Self::Asterisk => Emphasis::ITALIC_ASTERISK,
        }
    }

    pub fn bold(self) -> Delimiter {
        match self {
            Self::Underscore => Emphasis::BOLD_ASTERISKS,
            Self::Asterisk => Emphasis::BOLD_UNDERSCORES,
        }
    }
}

/// Options for markdown serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SerializeOptions {
    pub italic: ItalicDelimiter,
}
