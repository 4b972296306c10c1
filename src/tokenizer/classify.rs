//! # Character Classifiers
//!
//! Stateless predicates deciding how a character of body text is lexed. Each
//! looks at the character itself and at most one character after it.

/// Characters that can be emitted as standalone punctuation tokens.
pub const PUNCTUATION: &str = ".,;:()?!=~+&-";

/// Returns the character following the one at byte offset `i` in `s`.
fn next_char(c: char, i: usize, s: &str) -> Option<char> {
    s.get(i + c.len_utf8()..).and_then(|rest| rest.chars().next())
}

/// Returns `true` if `c`, found at byte offset `i` of `s`, is a punctuation
/// character.
///
/// A `.` directly before a digit belongs to a number, and a `-` directly
/// before a letter or a digit belongs to the word or number that follows.
#[must_use]
pub fn is_punctuation(c: char, i: usize, s: &str) -> bool {
    match c {
        '.' => !next_char(c, i, s).is_some_and(|n| n.is_ascii_digit()),
        '-' => !next_char(c, i, s)
            .is_some_and(|n| n.is_alphabetic() || n.is_ascii_digit()),
        _ => PUNCTUATION.contains(c),
    }
}

/// Returns `true` if `c`, found at byte offset `i` of `s`, can be part of a
/// number: digits, `.`, `e`, `+`, and a `-` directly before a digit.
#[must_use]
pub fn is_number(c: char, i: usize, s: &str) -> bool {
    match c {
        '-' => next_char(c, i, s).is_some_and(|n| n.is_ascii_digit()),
        '.' | 'e' | '+' => true,
        _ => c.is_ascii_digit(),
    }
}

/// Returns `true` if `c` continues or starts a word: any letter, or a hyphen
/// that binds to the letter after it.
#[must_use]
pub fn is_word_char(c: char, i: usize, s: &str) -> bool {
    c.is_alphabetic()
        || (c == '-' && next_char(c, i, s).is_some_and(char::is_alphabetic))
}
