use crate::attrs::is_valid_attributes;
use crate::cursor::Cursor;
use crate::stack::TagStack;
use crate::{ScanError, ScanErrorKind};

/// TagML well-formedness scanner.
///
/// Consumes the source in a single forward pass with one character of
/// lookahead, alternating between skipping inter-tag whitespace and
/// dispatching on `<` to the opening- or closing-tag handler. Open tags are
/// tracked on a per-scan [`TagStack`]; the first violation aborts the scan
/// with a line-numbered [`ScanError`].
///
/// Whitespace policy: whitespace is tolerated between all structural
/// elements inside tag syntax (after `<`, around `/`, around a closing tag
/// name) but never inside a name. `< a>`, `</ a >`, and `<a / >` all
/// validate.
pub struct Scanner {
    cursor: Cursor,
    stack: TagStack,
}

impl Scanner {
    /// Create a scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            cursor: Cursor::new(source),
            stack: TagStack::new(),
        }
    }

    /// Validate a complete document in one call.
    pub fn validate(source: &str) -> Result<(), ScanError> {
        Scanner::new(source).scan()
    }

    /// Run the scan to completion.
    ///
    /// Succeeds only if end of input is reached with every opened tag closed.
    pub fn scan(mut self) -> Result<(), ScanError> {
        while let Some(ch) = self.cursor.next() {
            if ch.is_whitespace() {
                continue;
            }

            // The dialect is tags-only; free text between tags is an error.
            if ch != '<' {
                return Err(self.error(ScanErrorKind::UnexpectedCharacter));
            }

            match self.next_non_space()? {
                '/' => self.close_tag()?,
                c if c.is_ascii_alphabetic() => self.open_tag(c)?,
                _ => return Err(self.error(ScanErrorKind::UnexpectedCharacter)),
            }
        }

        if self.stack.is_empty() {
            Ok(())
        } else {
            Err(self.error(ScanErrorKind::UnbalancedDocument))
        }
    }

    // --- Tag handlers ---

    /// Handle an opening tag. The first letter of the name has already been
    /// consumed by the dispatch in `scan`.
    fn open_tag(&mut self, first: char) -> Result<(), ScanError> {
        let mut name = String::new();
        name.push(first);

        let mut ch = loop {
            match self.cursor.next() {
                Some(c) if c.is_ascii_alphabetic() => name.push(c),
                Some(c) => break c,
                None => return Err(self.error(ScanErrorKind::UnterminatedTag)),
            }
        };

        if !ch.is_whitespace() && ch != '>' && ch != '/' {
            return Err(self.error(ScanErrorKind::UnexpectedCharacter));
        }

        // <name/> — self-closing, nothing pushed.
        if ch == '/' {
            return self.expect_close_angle();
        }

        // <name>
        if ch == '>' {
            self.stack.push(name);
            return Ok(());
        }

        // Whitespace after the name: an attribute, `>`, or `/` must follow.
        ch = self.next_non_space()?;
        match ch {
            '>' => {
                self.stack.push(name);
                return Ok(());
            }
            '/' => return self.expect_close_angle(),
            c if c.is_ascii_alphabetic() => {}
            _ => return Err(self.error(ScanErrorKind::UnexpectedCharacter)),
        }

        // Accumulate raw attribute text up to `>`, `<`, or an unquoted `/`.
        // The quote toggle keeps a `/` inside a quoted value from
        // terminating the tag.
        let mut attrs = String::new();
        let mut in_quotes = false;
        while ch != '>' && ch != '<' {
            if ch == '"' || ch == '\'' {
                in_quotes = !in_quotes;
            }
            if ch == '/' && !in_quotes {
                break;
            }
            attrs.push(ch);
            ch = match self.cursor.next() {
                Some(c) => c,
                None => return Err(self.error(ScanErrorKind::UnterminatedTag)),
            };
        }

        if !is_valid_attributes(&attrs) {
            return Err(self.error(ScanErrorKind::InvalidAttributeSyntax));
        }

        match ch {
            '>' => {
                self.stack.push(name);
                Ok(())
            }
            '/' => self.expect_close_angle(),
            // `<` while still inside tag syntax
            _ => Err(self.error(ScanErrorKind::UnexpectedCharacter)),
        }
    }

    /// Handle a closing tag. The `/` after `<` has already been consumed.
    fn close_tag(&mut self) -> Result<(), ScanError> {
        let mut ch = self.next_non_space()?;
        if !ch.is_ascii_alphabetic() {
            return Err(self.error(ScanErrorKind::UnexpectedCharacter));
        }

        let mut name = String::new();
        while ch.is_ascii_alphabetic() {
            name.push(ch);
            ch = match self.cursor.next() {
                Some(c) => c,
                None => return Err(self.error(ScanErrorKind::UnterminatedTag)),
            };
        }

        while ch.is_whitespace() {
            ch = match self.cursor.next() {
                Some(c) => c,
                None => return Err(self.error(ScanErrorKind::UnterminatedTag)),
            };
        }
        if ch != '>' {
            return Err(self.error(ScanErrorKind::UnexpectedCharacter));
        }

        match self.stack.pop() {
            Some(open) if open == name => Ok(()),
            _ => Err(self.error(ScanErrorKind::MismatchedClosingTag)),
        }
    }

    // --- Helpers ---

    /// After an unquoted `/`: optional whitespace, then `>` must end the tag.
    fn expect_close_angle(&mut self) -> Result<(), ScanError> {
        match self.next_non_space()? {
            '>' => Ok(()),
            _ => Err(self.error(ScanErrorKind::UnexpectedCharacter)),
        }
    }

    /// Consume whitespace and return the first non-whitespace character.
    /// End of input here means the document was truncated inside a tag.
    fn next_non_space(&mut self) -> Result<char, ScanError> {
        loop {
            match self.cursor.next() {
                Some(c) if c.is_whitespace() => continue,
                Some(c) => return Ok(c),
                None => return Err(self.error(ScanErrorKind::UnterminatedTag)),
            }
        }
    }

    fn error(&self, kind: ScanErrorKind) -> ScanError {
        ScanError {
            kind,
            line: self.cursor.line(),
        }
    }
}
