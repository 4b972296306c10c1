//! Token listing output.

use anyhow::Context as _;
use colored::{ColoredString, Colorize};
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::tokenizer::TokenKind;

/// Number of tokens listed per output row.
const TOKENS_PER_ROW: usize = 5;

/// Print a token listing to STDOUT, five tokens per indented row:
///
/// ```text
///
///   [token 0]: Hello [token 1]: , [token 2]: world [token 3]: .
/// ```
///
/// Passing `None` prints nothing.
pub fn print_tokens(tokens: Option<&[String]>) {
    let Some(tokens) = tokens else {
        return;
    };
    write_tokens(&mut io::stdout().lock(), tokens, false).ok();
}

/// Write the [`print_tokens`] listing of `tokens` to `writer`, colored by
/// [`TokenKind`] when `colored` is set. Silently returns `Ok(())` on broken
/// pipe so that piping to tools like `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_tokens<W: Write>(
    writer: &mut W,
    tokens: &[String],
    colored: bool,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        for (a, token) in tokens.iter().enumerate() {
            if a % TOKENS_PER_ROW == 0 {
                write!(writer, "\n  ")?;
            }
            if colored {
                write!(writer, "[token {a}]: {} ", paint(token))?;
            } else {
                write!(writer, "[token {a}]: {token} ")?;
            }
        }
        writeln!(writer)?;
        Ok(())
    })();

    ignore_broken_pipe(result).context("write token listing")
}

/// Write `tokens` to `writer` as a single-line JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing to `writer` fails.
pub fn write_json_line<W: Write>(
    writer: &mut W,
    tokens: &[String],
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        serde_json::to_writer(&mut *writer, tokens)?;
        writeln!(writer)
    })();

    ignore_broken_pipe(result).context("write JSON token line")
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn paint(token: &str) -> ColoredString {
    match TokenKind::of(token) {
        TokenKind::Tag => token.cyan(),
        TokenKind::Punctuation => token.bold().magenta(),
        TokenKind::Number => token.yellow(),
        TokenKind::Word => token.green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn listing_layout() {
        let tokens = strings(&["Hello", ",", "world", "."]);
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n  [token 0]: Hello [token 1]: , [token 2]: world [token 3]: . \n"
        );
    }

    #[test]
    fn listing_wraps_every_five_tokens() {
        let tokens = strings(&["a", "b", "c", "d", "e", "f"]);
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\n  [token 0]: a [token 1]: b [token 2]: c [token 3]: d \
             [token 4]: e \n  [token 5]: f \n"
        );
    }

    #[test]
    fn empty_listing_is_a_newline() {
        let mut out = Vec::new();
        write_tokens(&mut out, &[], false).unwrap();
        assert_eq!(out, b"\n");
    }

    #[test]
    fn colored_listing_keeps_token_text() {
        colored::control::set_override(true);
        let tokens = strings(&["<p>", "hi"]);
        let mut out = Vec::new();
        write_tokens(&mut out, &tokens, true).unwrap();
        colored::control::unset_override();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("<p>"));
        assert!(text.contains("hi"));
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn json_line() {
        let tokens = strings(&["raw \"text\"", "</pre>"]);
        let mut out = Vec::new();
        write_json_line(&mut out, &tokens).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\"raw \\\"text\\\"\",\"</pre>\"]\n"
        );
    }

    #[test]
    fn broken_pipe_is_not_an_error() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }
        assert!(write_tokens(&mut Closed, &strings(&["x"]), false).is_ok());
        assert!(write_json_line(&mut Closed, &strings(&["x"])).is_ok());
    }

    #[test]
    fn print_tokens_accepts_none() {
        print_tokens(None);
    }
}
