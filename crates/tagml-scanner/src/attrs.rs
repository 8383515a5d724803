//! Attribute block grammar.
//!
//! Validates the raw text between a tag name and the tag terminator as a
//! sequence of whitespace-separated `name="value"` or `name='value'` pairs.
//! Values must be quoted and may not contain `<` or `>`. Attribute names are
//! permissive (any run of non-whitespace, non-`=` characters) and duplicates
//! are allowed.

/// Check an attribute block left to right, no backtracking.
pub fn is_valid_attributes(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    loop {
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        if pos == chars.len() {
            return true;
        }

        // Attribute name: maximal run of non-whitespace, non-'=' characters.
        let name_start = pos;
        while pos < chars.len() && !chars[pos].is_whitespace() && chars[pos] != '=' {
            pos += 1;
        }
        if pos == name_start {
            return false;
        }

        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        if pos == chars.len() || chars[pos] != '=' {
            return false;
        }
        pos += 1;

        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        let delim = match chars.get(pos) {
            Some(&c) if c == '"' || c == '\'' => c,
            _ => return false,
        };
        pos += 1;

        // Value runs to the matching delimiter; angle brackets are forbidden.
        while pos < chars.len() && chars[pos] != delim {
            if chars[pos] == '<' || chars[pos] == '>' {
                return false;
            }
            pos += 1;
        }
        if pos == chars.len() {
            return false; // unterminated quote
        }
        pos += 1;
    }
}
