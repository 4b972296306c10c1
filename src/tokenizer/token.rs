//! # Tokenizer State and Token Kinds
//!
//! Defines the lexing regime that persists between calls to the tokenizer,
//! and a display-time classification of the strings it emits.
use std::fmt::Display;

use crate::tokenizer::classify::PUNCTUATION;

/// The active lexing regime of a [`Tokenizer`](crate::tokenizer::Tokenizer).
///
/// Carried from one line to the next so that comments and preformatted
/// blocks may straddle line boundaries.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenState {
    /// Ordinary body text and tags
    #[default]
    Normal,

    /// Inside `<!-- ... -->`; nothing is emitted until `-->`
    Comment,

    /// Inside `<pre> ... </pre>`; text is emitted verbatim
    Preformat,
}

impl Display for TokenState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Comment => write!(f, "comment"),
            Self::Preformat => write!(f, "preformat"),
        }
    }
}

/// Coarse kind of an emitted token.
///
/// The tokenizer itself only produces strings; this is recovered from the
/// token text when rendering output.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    /// `<...>`, including the closing `</pre>`
    Tag,

    /// A single punctuation character
    Punctuation,

    /// Begins with a digit, or a minus sign followed by a digit
    Number,

    /// Anything else: words and preformatted chunks
    Word,
}

impl TokenKind {
    /// Classify an emitted token by its text.
    #[must_use]
    pub fn of(token: &str) -> Self {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if PUNCTUATION.contains(c) => Self::Punctuation,
            (Some(d), _) if d.is_ascii_digit() => Self::Number,
            (Some('-'), Some(d)) if d.is_ascii_digit() => Self::Number,
            _ if token.len() > 1
                && token.starts_with('<')
                && token.ends_with('>') =>
            {
                Self::Tag
            }
            _ => Self::Word,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag => write!(f, "tag"),
            Self::Punctuation => write!(f, "punctuation"),
            Self::Number => write!(f, "number"),
            Self::Word => write!(f, "word"),
        }
    }
}
