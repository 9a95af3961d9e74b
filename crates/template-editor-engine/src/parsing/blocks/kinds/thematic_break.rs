/// Thematic break syntax.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;
    /// What the serializer always writes.
    pub const CANONICAL: &'static str = "---";

    /// Three or more of one break character, optionally separated by spaces.
    pub fn matches(line: &str) -> bool {
        let mut marks = line.chars().filter(|c| !c.is_whitespace());
        let Some(first) = marks.next() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 1;
        for c in marks {
            if c != first {
                return false;
            }
            count += 1;
        }
        count >= Self::MIN_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_breaks() {
        assert!(ThematicBreak::matches("---"));
        assert!(ThematicBreak::matches("* * *"));
        assert!(ThematicBreak::matches("_____"));
    }

    #[test]
    fn rejects_near_misses() {
        assert!(!ThematicBreak::matches("--"));
        assert!(!ThematicBreak::matches("-*-"));
        assert!(!ThematicBreak::matches("- item"));
        assert!(!ThematicBreak::matches(""));
    }
}
