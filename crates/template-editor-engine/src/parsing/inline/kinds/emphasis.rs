use crate::models::Mark;

/// A paired emphasis delimiter and the mark it applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub token: &'static str,
    pub mark: Mark,
}

/// Emphasis-style inline marks: bold, italic, underline and strikethrough.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD_ASTERISKS: Delimiter = Delimiter {
        token: "**",
        mark: Mark::Bold,
    };
    pub const BOLD_UNDERSCORES: Delimiter = Delimiter {
        token: "__",
        mark: Mark::Bold,
    };
    pub const ITALIC_ASTERISK: Delimiter = Delimiter {
        token: "*",
        mark: Mark::Italic,
    };
    pub const ITALIC_UNDERSCORE: Delimiter = Delimiter {
        token: "_",
        mark: Mark::Italic,
    };
    /// Private extension; not part of CommonMark.
    pub const UNDERLINE: Delimiter = Delimiter {
        token: "++",
        mark: Mark::Underline,
    };
    pub const STRIKETHROUGH: Delimiter = Delimiter {
        token: "~~",
        mark: Mark::Strikethrough,
    };

    /// Parse order: doubled tokens before the single ones they start with.
    pub const PARSE_ORDER: [Delimiter; 6] = [
        Self::BOLD_ASTERISKS,
        Self::BOLD_UNDERSCORES,
        Self::STRIKETHROUGH,
        Self::UNDERLINE,
        Self::ITALIC_ASTERISK,
        Self::ITALIC_UNDERSCORE,
    ];

    /// Characters that are escaped wherever they appear in text.
    pub const ALWAYS_ESCAPED: [char; 4] = ['\\', '*', '_', '`'];

    /// Characters that are escaped only next to a repeat of themselves or a
    /// delimiter, since a single one is never a delimiter.
    pub const PAIR_ESCAPED: [(char, Mark); 2] =
        [('+', Mark::Underline), ('~', Mark::Strikethrough)];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubled_tokens_come_first() {
        for (i, d) in Emphasis::PARSE_ORDER.iter().enumerate() {
            for later in &Emphasis::PARSE_ORDER[i + 1..] {
                assert!(
                    !later.token.starts_with(d.token) || later.token == d.token,
                    "{} shadows {}",
                    d.token,
                    later.token
                );
            }
        }
    }
}
