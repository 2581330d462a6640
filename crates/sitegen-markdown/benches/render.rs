//! Benchmarks for markdown rendering performance.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sitegen_markdown::{markdown_to_html, tokenize};

/// Generate markdown content with specified structure.
fn generate_markdown(headings: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(headings * 50 + headings * paragraphs_per_section * 200);
    md.push_str("# Document Title\n\n");

    for i in 0..headings {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "This is paragraph {j} in section {i}. It contains **bold** and _italic_ text.\n\n"
            ));
        }
    }
    md
}

fn bench_render_simple(c: &mut Criterion) {
    c.bench_function("render_simple_markdown", |b| {
        b.iter(|| markdown_to_html("# Hello\n\nSimple content."));
    });
}

fn bench_tokenize_inline(c: &mut Criterion) {
    let line = "Some **bold** text with an _italic_ word, `code`, an \
                ![image](/img/pic.png) and a [link](https://example.com)";

    c.bench_function("tokenize_mixed_inline", |b| {
        b.iter(|| tokenize(line));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_by_size");

    for (headings, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_markdown(headings, paragraphs);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("markdown", format!("{headings}h_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| markdown_to_html(md)),
        );
    }

    group.finish();
}

fn bench_render_code_blocks(c: &mut Criterion) {
    let markdown = r#"# Code Examples

## Rust

```
fn main() {
    println!("Hello, world!");
    let x = 42;
    for i in 0..10 {
        println!("{}", i * x);
    }
}
```

## Python

```
def greet(name):
    return f"Hello, {name}!"
print(greet("World"))
```
"#;

    c.bench_function("render_code_blocks", |b| {
        b.iter(|| markdown_to_html(markdown));
    });
}

fn bench_render_large_document(c: &mut Criterion) {
    let markdown = generate_markdown(100, 5); // ~100KB document

    let mut group = c.benchmark_group("large_document");
    group.throughput(Throughput::Bytes(markdown.len() as u64));
    group.bench_function("render", |b| {
        b.iter(|| markdown_to_html(&markdown));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_render_simple,
    bench_tokenize_inline,
    bench_render_varying_sizes,
    bench_render_code_blocks,
    bench_render_large_document,
);

criterion_main!(benches);
