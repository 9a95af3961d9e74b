/// Heading depth, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Maps a count of `#` characters to a level; anything outside 1..=6 is not a heading.
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    pub fn depth(self) -> usize {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

/// Bullet character a list was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListMarker {
    #[default]
    Dash, // "-"
    Asterisk, // "*"
    Plus,     // "+"
}

impl ListMarker {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Dash),
            '*' => Some(Self::Asterisk),
            '+' => Some(Self::Plus),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Asterisk => '*',
            Self::Plus => '+',
        }
    }
}

/// Fence character of a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FenceKind {
    #[default]
    Backticks,
    Tildes,
}

impl FenceKind {
    pub fn as_char(self) -> char {
        match self {
            Self::Backticks => '`',
            Self::Tildes => '~',
        }
    }
}

/// The closed set of block kinds.
///
/// Text leaves (`Paragraph`, `Heading`, `ListItem`, `CodeBlock`,
/// `ThematicBreak`) hold inline runs. `BlockQuote` and `UnorderedList` are
/// containers and only hold child blocks. A `ListItem` is a text leaf that may
/// additionally own nested `UnorderedList` children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Paragraph,
    Heading(HeadingLevel),
    BlockQuote,
    UnorderedList(ListMarker),
    ListItem,
    CodeBlock { fence: FenceKind, info: String },
    ThematicBreak,
}

impl BlockKind {
    /// A plain backtick-fenced code block without an info string.
    pub fn code_block() -> Self {
        Self::CodeBlock {
            fence: FenceKind::Backticks,
            info: String::new(),
        }
    }

    /// True for kinds that hold inline runs and can carry a cursor.
    pub fn is_text(&self) -> bool {
        !self.is_container()
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::BlockQuote | Self::UnorderedList(_))
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Self::Heading(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::UnorderedList(_))
    }

    /// Inline marks are meaningless inside these kinds.
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::CodeBlock { .. } | Self::ThematicBreak)
    }
}
