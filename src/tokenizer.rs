//! # Tokenizer
//!
//! Splits lines of an HTML-like document into tags, words, numbers, and
//! punctuation, carrying open comments and `<pre>` blocks across lines.
pub mod classify;
pub mod lexer;
pub mod token;

// Re-exports
pub use lexer::{Tokenizer, tokenize};
pub use token::{TokenKind, TokenState};
