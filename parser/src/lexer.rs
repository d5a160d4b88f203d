/// Character access for the scanner. Offsets are character offsets into the raw expression.
pub(crate) struct Lexer {
    values: Vec<char>,
}

impl Lexer {
    pub fn new(value: &str) -> Lexer {
        Lexer {
            values: value.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn char_at(&self, index: usize) -> Option<char> {
        self.values.get(index).copied()
    }

    /// The character before the index, if there is one
    pub fn char_before(&self, index: usize) -> Option<char> {
        index.checked_sub(1).and_then(|index| self.char_at(index))
    }

    /// Whether the text at the index starts with the needle
    pub fn find_ahead(&self, index: usize, needle: &str) -> bool {
        let mut offset = index;
        for expected in needle.chars() {
            if self.char_at(offset) != Some(expected) {
                return false;
            }
            offset += 1;
        }
        true
    }

    /// Whether there is an escaped brace, like `\{`, starting at the index
    pub fn is_escaped_brace(&self, index: usize) -> bool {
        self.char_at(index) == Some('\\') && matches!(self.char_at(index + 1), Some('{' | '}'))
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        self.values[start..end].iter().collect()
    }
}
