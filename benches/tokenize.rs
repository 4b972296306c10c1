use criterion::{Criterion, criterion_group, criterion_main};
use htmlwords::Tokenizer;
use std::hint::black_box;

/// A document exercising every regime: tags, body text with numbers and
/// punctuation, multi-line comments, and `<pre>` blocks.
fn document() -> Vec<String> {
    let mut lines = Vec::new();
    for n in 0..200 {
        lines.push(format!(
            "<p class=\"row\">Row {n}: well-formed text, -{n}.5 units; 6.02e+23 atoms!</p>"
        ));
        lines.push("<!-- a comment that".to_string());
        lines.push("    runs over two lines --> then text.".to_string());
        lines.push("<pre>  fixed   width".to_string());
        lines.push("  block</pre> done".to_string());
    }
    lines
}

fn bench_tokenize(c: &mut Criterion) {
    let lines = document();
    c.bench_function("tokenize document", |b| {
        b.iter(|| {
            let mut tokenizer = Tokenizer::new();
            let mut count = 0;
            for line in &lines {
                count += tokenizer.tokenize(black_box(line)).len();
            }
            count
        });
    });

    let line = "Goodnight moon, goodnight stars. Goodnight air, 3.14 noises everywhere.";
    c.bench_function("tokenize plain line", |b| {
        b.iter(|| htmlwords::tokenize(black_box(line)));
    });
}

criterion_group!(benches, bench_tokenize);
criterion_main!(benches);
