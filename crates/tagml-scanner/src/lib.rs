//! TagML Scanner
//!
//! Validates that a TagML document is syntactically well-formed in a single
//! forward pass: tags properly opened and closed, nesting balanced,
//! attributes matching the strict `name="value"` grammar, and no structural
//! character out of place. The scanner certifies well-formedness only — it
//! builds no tree and returns no partial result.
//!
//! # Example
//!
//! ```
//! use tagml_scanner::Scanner;
//!
//! Scanner::validate("<window><button id=\"ok\"></button></window>").unwrap();
//! assert!(Scanner::validate("<window>").is_err()); // never closed
//! ```

pub mod attrs;
pub mod cursor;
pub mod scanner;
pub mod stack;

pub use cursor::Cursor;
pub use scanner::Scanner;
pub use stack::TagStack;

/// The ways a document can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScanErrorKind {
    /// A character appeared where the grammar forbids it.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// An attribute block violated the `name="value"` grammar.
    #[error("invalid attribute syntax")]
    InvalidAttributeSyntax,

    /// End of input reached while a tag was still being read.
    #[error("unterminated tag")]
    UnterminatedTag,

    /// A closing tag did not match the most recently opened tag,
    /// or no tag was open to close.
    #[error("mismatched closing tag")]
    MismatchedClosingTag,

    /// End of input reached with open tags remaining.
    #[error("unbalanced document")]
    UnbalancedDocument,
}

/// Scan error carrying the 1-based line where the violation was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("syntax error at line {line}: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub line: usize,
}
