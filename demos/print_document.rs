//! Tokenizes a small document line by line with one [`Tokenizer`] and prints
//! each line's tokens in the listing format.
use htmlwords::{Tokenizer, print_tokens};

fn main() {
    let document = "\
<html>
<p>Goodnight moon, goodnight stars.</p>
<!-- the comment
     spans lines -->
<pre>
  x = -5.0e+3
</pre>
</html>";

    let mut tokenizer = Tokenizer::new();
    for line in document.lines() {
        let tokens = tokenizer.tokenize(line);
        print_tokens(Some(tokens.as_slice()));
    }
    assert_eq!(tokenizer.state(), htmlwords::TokenState::Normal);
}
