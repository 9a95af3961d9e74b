use crate::models::Selection;

/// A keystroke as reported by the editing host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Space,
    Backspace,
    Enter,
    /// Any other key, carrying the text it would insert.
    Other(String),
}

impl Key {
    /// Maps a host key identifier (`" "`, `"Backspace"`, `"Enter"`) to a key.
    pub fn from_identifier(id: &str) -> Self {
        match id {
            " " => Self::Space,
            "Backspace" => Self::Backspace,
            "Enter" => Self::Enter,
            other => Self::Other(other.to_string()),
        }
    }

    /// Text the key inserts when the host applies it as a plain edit.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Space => Some(" "),
            Self::Other(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Reads a key script: `{enter}`, `{backspace}` and `{space}` name keys,
/// a newline is Enter and every other character is typed as itself.
pub fn parse_script(script: &str) -> Vec<Key> {
    let mut keys = Vec::new();
    let mut rest = script;
    while let Some(c) = rest.chars().next() {
        if let Some((key, len)) = named_key(rest) {
            keys.push(key);
            rest = &rest[len..];
            continue;
        }
        keys.push(match c {
            ' ' => Key::Space,
            '\n' => Key::Enter,
            c => Key::Other(c.to_string()),
        });
        rest = &rest[c.len_utf8()..];
    }
    keys
}

fn named_key(s: &str) -> Option<(Key, usize)> {
    let end = s.strip_prefix('{')?.find('}')? + 1;
    let key = match s[1..end].to_ascii_lowercase().as_str() {
        "enter" => Key::Enter,
        "backspace" => Key::Backspace,
        "space" => Key::Space,
        _ => return None,
    };
    Some((key, end + 1))
}

impl From<&str> for Key {
    fn from(id: &str) -> Self {
        Self::from_identifier(id)
    }
}

/// What the auto-formatter did with a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The document was changed; the host adopts `selection` and drops the key.
    Intercepted { selection: Selection },
    /// Nothing changed; the host applies the key itself.
    Passthrough,
}

impl KeyOutcome {
    pub fn is_intercepted(&self) -> bool {
        matches!(self, Self::Intercepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(" ", Key::Space)]
    #[case("Backspace", Key::Backspace)]
    #[case("Enter", Key::Enter)]
    #[case("a", Key::Other("a".to_string()))]
    #[case("Tab", Key::Other("Tab".to_string()))]
    fn identifiers(#[case] id: &str, #[case] key: Key) {
        assert_eq!(Key::from(id), key);
    }

    #[test]
    fn script_tokens() {
        let other = |s: &str| Key::Other(s.to_string());
        assert_eq!(
            parse_script("# a{Enter}b{backspace}{x}\n"),
            vec![
                other("#"),
                Key::Space,
                other("a"),
                Key::Enter,
                other("b"),
                Key::Backspace,
                other("{"),
                other("x"),
                other("}"),
                Key::Enter,
            ]
        );
    }

    #[test]
    fn inserted_text() {
        assert_eq!(Key::Space.text(), Some(" "));
        assert_eq!(Key::Other("x".to_string()).text(), Some("x"));
        assert_eq!(Key::Enter.text(), None);
    }
}
