/*!
# `htmlwords` Library

Breaks HTML-like text into the tags, words, numbers, and punctuation a
downstream indexer or viewer cares about, one line at a time.

```rust
use htmlwords::tokenize;

assert_eq!(tokenize("<p>Hello, world.</p>"), vec!["<p>", "Hello", ",", "world", ".", "</p>"]);
```
*/

pub mod commands;
pub mod tokenizer;
mod utils;

// Re-exports
pub use tokenizer::{TokenKind, TokenState, Tokenizer, tokenize};
pub use utils::*;
