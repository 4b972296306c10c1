//! Drives one [`Tokenizer`] over every line of a document.
use anyhow::{Context, Result};
use log::{debug, warn};
use std::io::{BufRead, Write};

use crate::tokenizer::{TokenState, Tokenizer};
use crate::utils::{write_json_line, write_tokens};

/// How each line's tokens are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The indented `[token N]: ...` listing; lines without tokens are skipped
    #[default]
    Listing,
    /// One JSON array per input line, empty lines included
    Json,
}

/// Options for [`tokenize_document`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Output layout
    pub format: OutputFormat,
    /// Color listing tokens by kind
    pub colored: bool,
    /// Write nothing, only count
    pub quiet: bool,
}

/// Totals gathered while tokenizing a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of input lines read
    pub lines: usize,
    /// Number of tokens produced across all lines
    pub tokens: usize,
    /// State the tokenizer was left in after the last line
    pub state: TokenState,
}

/// Tokenize `reader` line by line with a single [`Tokenizer`], writing each
/// line's tokens to `writer`.
///
/// A comment or `<pre>` block still open after the last line is reported
/// with a warning.
///
/// # Errors
///
/// Returns an error if a line cannot be read (including invalid UTF-8) or
/// the output cannot be written.
pub fn tokenize_document<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: Options,
) -> Result<Summary> {
    let mut tokenizer = Tokenizer::new();
    let mut summary = Summary {
        lines: 0,
        tokens: 0,
        state: TokenState::Normal,
    };

    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {number}"))?;
        let tokens = tokenizer.tokenize(&line);
        debug!(
            "line {number}: {} tokens, state {}",
            tokens.len(),
            tokenizer.state()
        );

        summary.lines += 1;
        summary.tokens += tokens.len();

        if options.quiet {
            continue;
        }
        match options.format {
            OutputFormat::Listing if tokens.is_empty() => {}
            OutputFormat::Listing => {
                write_tokens(writer, &tokens, options.colored)?;
            }
            OutputFormat::Json => write_json_line(writer, &tokens)?,
        }
    }

    summary.state = tokenizer.state();
    if summary.state != TokenState::Normal {
        warn!(
            "input ended inside an unterminated {} block",
            summary.state
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, options: Options) -> (String, Summary) {
        let mut out = Vec::new();
        let summary =
            tokenize_document(Cursor::new(input), &mut out, options).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn listing_skips_empty_lines() {
        let (out, summary) =
            run("<p>hi</p>\n\n<!-- gone -->\nbye\n", Options::default());
        assert_eq!(
            out,
            "\n  [token 0]: <p> [token 1]: hi [token 2]: </p> \n\
             \n  [token 0]: bye \n"
        );
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.tokens, 4);
        assert_eq!(summary.state, TokenState::Normal);
    }

    #[test]
    fn json_lines_follow_input_lines() {
        let options = Options {
            format: OutputFormat::Json,
            ..Options::default()
        };
        let (out, _) = run("<!-- open\nstill --> tail\r\n\nx", options);
        assert_eq!(out, "[]\n[\"tail\"]\n[]\n[\"x\"]\n");
    }

    #[test]
    fn state_carries_across_lines() {
        let options = Options {
            quiet: true,
            ..Options::default()
        };
        let (out, summary) = run("<pre>one\ntwo\n", options);
        assert!(out.is_empty());
        assert_eq!(summary.tokens, 2);
        assert_eq!(summary.state, TokenState::Preformat);
    }

    #[test]
    fn invalid_utf8_names_the_line() {
        let input: &[u8] = b"fine\n\xff\xfe\n";
        let err = tokenize_document(input, &mut Vec::new(), Options::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to read line 2");
    }
}
