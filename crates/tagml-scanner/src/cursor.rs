/// Pull-only character source with line tracking.
///
/// The scanner carries its one character of lookahead itself (the "current
/// character" in each handler), so the cursor offers no peek and no pushback:
/// `next` consumes unconditionally, and consuming a newline advances the
/// 1-based line counter used for diagnostics.
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Cursor {
    /// Create a cursor over the given source, positioned at line 1.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// Consume and return the next character, or `None` at end of input.
    pub fn next(&mut self) -> Option<char> {
        let ch = self.chars.get(self.pos).copied()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_consumes_in_order() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.next(), Some('a'));
        assert_eq!(cursor.next(), Some('b'));
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_newline_bumps_line() {
        let mut cursor = Cursor::new("a\nb\nc");
        assert_eq!(cursor.line(), 1);
        cursor.next(); // a
        assert_eq!(cursor.line(), 1);
        cursor.next(); // \n
        assert_eq!(cursor.line(), 2);
        cursor.next(); // b
        cursor.next(); // \n
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn test_next_at_end_stays_none() {
        let mut cursor = Cursor::new("x");
        cursor.next();
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut cursor = Cursor::new("é<");
        assert_eq!(cursor.next(), Some('é'));
        assert_eq!(cursor.next(), Some('<'));
    }
}
