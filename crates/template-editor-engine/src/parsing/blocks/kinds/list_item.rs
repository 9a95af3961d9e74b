use crate::models::ListMarker;

/// Unordered list item syntax.
pub struct ListItem;

impl ListItem {
    /// Columns an item's text is indented by: the marker and one space.
    pub const CONTENT_INDENT: usize = 2;

    /// Recognizes `-`, `*` or `+` followed by a space or the end of the line.
    pub fn parse(line: &str) -> Option<(ListMarker, &str)> {
        let t = line.trim_start();
        let mut chars = t.chars();
        let marker = ListMarker::from_char(chars.next()?)?;
        let rest = chars.as_str();
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        Some((marker, rest.trim()))
    }
}
