//! # HTML Line Lexer
//!
//! Splits one line of HTML-like text into tag, word, number, punctuation, and
//! preformatted tokens. The [`Tokenizer`] keeps its [`TokenState`] between
//! lines so that comments and `<pre>` blocks can span several of them.
use log::trace;

use crate::tokenizer::TokenState;
use crate::tokenizer::classify::{is_number, is_punctuation, is_word_char};

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const PRE_OPEN: &str = "<pre>";
const PRE_CLOSE: &str = "</pre>";

/// A line tokenizer for HTML-like documents.
///
/// Feed it the lines of one document in order:
///
/// ```rust
/// use htmlwords::tokenizer::{TokenState, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new();
/// assert!(tokenizer.tokenize("<!-- open").is_empty());
/// assert_eq!(tokenizer.state(), TokenState::Comment);
///
/// assert_eq!(tokenizer.tokenize("still comment --> tail"), vec!["tail"]);
/// assert_eq!(tokenizer.state(), TokenState::Normal);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Tokenizer {
    /// Regime carried over from the previous line
    state: TokenState,
}

impl Tokenizer {
    /// Creates a tokenizer in the [`TokenState::Normal`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TokenState::Normal,
        }
    }

    /// The regime the next call to [`Tokenizer::tokenize`] starts in.
    #[must_use]
    pub const fn state(&self) -> TokenState {
        self.state
    }

    /// Forgets any open comment or preformatted block.
    pub const fn reset(&mut self) {
        self.state = TokenState::Normal;
    }

    /// Tokenizes one line, returning its tokens in order of appearance.
    ///
    /// An unterminated tag is dropped. An unterminated comment or `<pre>`
    /// block leaves the tokenizer in the matching state for the next line.
    pub fn tokenize(&mut self, line: &str) -> Vec<String> {
        let mut lexer = Lexer::new(line, self.state);
        lexer.run();
        self.state = lexer.state;
        lexer.tokens
    }
}

/// Tokenize a single standalone line with a fresh [`Tokenizer`].
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    Tokenizer::new().tokenize(line)
}

/// Working state for a single line. Everything except `state` is discarded
/// when the line is done.
struct Lexer<'a> {
    /// The line being tokenized
    input: &'a str,
    /// Byte offset of the character under examination
    position: usize,
    /// Active regime, written back to the [`Tokenizer`] at the end
    state: TokenState,
    /// Accumulating a `<...>` tag
    in_tag: bool,
    /// Accumulating a word or number
    in_word: bool,
    /// The word being accumulated started out as a number
    in_number: bool,
    /// The last flush was caused by a punctuation character
    after_punct: bool,
    tag_start: usize,
    word_start: usize,
    /// Where the comment handler was entered on this line, if it was
    comment_start: Option<usize>,
    /// Emitted tokens
    tokens: Vec<String>,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str, state: TokenState) -> Self {
        Self {
            input,
            position: 0,
            state,
            in_tag: false,
            in_word: false,
            in_number: false,
            after_punct: false,
            tag_start: 0,
            word_start: 0,
            comment_start: None,
            tokens: Vec::new(),
        }
    }

    fn run(&mut self) {
        while let Some(c) = self.input[self.position..].chars().next() {
            match self.state {
                TokenState::Normal => self.normal(c),
                TokenState::Comment => self.comment(),
                TokenState::Preformat => self.preformat(),
            }
        }

        if self.in_word && !self.after_punct {
            self.emit_span(self.word_start, self.input.len());
        }
    }

    /// Handles one character of ordinary text, switching regime first if a
    /// comment or `<pre>` block opens here.
    fn normal(&mut self, c: char) {
        let i = self.position;

        if self.at(COMMENT_OPEN) {
            self.interrupt(i);
            self.comment_start = Some(i);
            self.switch_to(TokenState::Comment);
            return;
        }

        if self.at(PRE_OPEN) {
            self.interrupt(i);
            self.position += PRE_OPEN.len();
            self.switch_to(TokenState::Preformat);
            return;
        }

        self.body(c, i);
        self.position += c.len_utf8();
    }

    fn body(&mut self, c: char, i: usize) {
        let s = self.input;

        if c == '<' {
            self.end_word(i);
            self.in_tag = true;
            self.tag_start = i;
        } else if c == '>' {
            if self.in_tag {
                self.emit_span(self.tag_start, i + 1);
                self.in_tag = false;
                self.after_punct = false;
            }
        } else if self.in_tag {
            // absorbed into the tag
        } else if is_word_char(c, i, s) || self.is_exponent_sign(c, i) {
            self.begin_word(i, false);
        } else if is_punctuation(c, i, s) {
            if self.in_word {
                self.emit_span(self.word_start, i);
            }
            self.emit_char(c);
            self.in_word = false;
            self.after_punct = true;
        } else if is_number(c, i, s) {
            self.begin_word(i, true);
        } else {
            if self.in_word {
                if self.after_punct {
                    self.emit_char(c);
                } else {
                    self.emit_span(self.word_start, i);
                }
                self.in_word = false;
            }
            self.after_punct = false;
        }
    }

    /// Skips to the end of the comment, or to the end of the line if it does
    /// not close here.
    fn comment(&mut self) {
        let from = self.comment_start.take().unwrap_or(self.position);
        match self.find(from, COMMENT_CLOSE) {
            Some(end) => {
                self.position = end + COMMENT_CLOSE.len();
                self.switch_to(TokenState::Normal);
            }
            None => self.position = self.input.len(),
        }
    }

    /// Emits the preformatted text up to `</pre>` verbatim, or the rest of
    /// the line if the block does not close here.
    fn preformat(&mut self) {
        let start = self.position;
        match self.find(start, PRE_CLOSE) {
            Some(end) => {
                self.emit_span(start, end);
                self.tokens.push(PRE_CLOSE.to_owned());
                self.position = end + PRE_CLOSE.len();
                self.switch_to(TokenState::Normal);
            }
            None => {
                self.emit_span(start, self.input.len());
                self.position = self.input.len();
            }
        }
    }

    fn switch_to(&mut self, state: TokenState) {
        trace!("{} -> {} at byte {}", self.state, state, self.position);
        self.state = state;
    }

    fn begin_word(&mut self, i: usize, numeric: bool) {
        if !self.in_word {
            self.word_start = i;
            self.in_word = true;
            self.in_number = numeric;
        }
    }

    /// Closes the word in progress at byte `i`.
    fn end_word(&mut self, i: usize) {
        if self.in_word {
            if !self.after_punct {
                self.emit_span(self.word_start, i);
            }
            self.in_word = false;
            self.after_punct = false;
        }
    }

    /// Closes the word and drops the tag in progress ahead of a comment or
    /// `<pre>` block. Punctuation before the block no longer affects the
    /// word after it.
    fn interrupt(&mut self, i: usize) {
        self.end_word(i);
        self.in_tag = false;
        self.after_punct = false;
    }

    /// A `+` right after the `e` of a number, as in `6.02e+23`.
    fn is_exponent_sign(&self, c: char, i: usize) -> bool {
        c == '+'
            && self.in_word
            && self.in_number
            && self.input[..i].ends_with('e')
    }

    fn at(&self, pattern: &str) -> bool {
        self.input[self.position..].starts_with(pattern)
    }

    fn find(&self, from: usize, pattern: &str) -> Option<usize> {
        self.input[from..].find(pattern).map(|offset| from + offset)
    }

    fn emit_span(&mut self, start: usize, end: usize) {
        if start < end {
            self.tokens.push(self.input[start..end].to_owned());
        }
    }

    fn emit_char(&mut self, c: char) {
        self.tokens.push(c.to_string());
    }
}
