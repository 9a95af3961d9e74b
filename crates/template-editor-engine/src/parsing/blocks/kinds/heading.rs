use crate::models::HeadingLevel;

/// ATX heading syntax.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Recognizes `#`..`######` followed by a space or the end of the line.
    pub fn parse(line: &str) -> Option<(HeadingLevel, &str)> {
        let t = line.trim_start();
        let count = t.chars().take_while(|c| *c == Self::MARKER).count();
        let level = HeadingLevel::from_count(count)?;
        let rest = &t[count..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((level, rest.trim()))
    }

    pub fn prefix(level: HeadingLevel) -> String {
        Self::MARKER.to_string().repeat(level.depth())
    }
}
