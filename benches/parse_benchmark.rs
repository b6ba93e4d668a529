//! Benchmarks for pulpit classification and recognition.
//!
//! Run with: cargo bench
//!
//! These benchmarks run over synthetic sermon outlines of increasing length.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic sermon with the given number of sections.
fn create_test_sermon(sections: usize) -> String {
    let mut content = String::from("# The Hope That Anchors Us\n\n");
    content.push_str("**Speaker:** Pastor Lee\n**Date:** Sabbath morning\n\n");

    for i in 0..sections {
        content.push_str(&format!("## Point {}: Standing Firm\n", i + 1));
        content.push_str("Romans 15:13 - Now the God of hope fill you with all joy\n");
        content.push_str(&format!(
            "In section {} we read Hebrews 6:19 and John 3:16 together, then *pause* to reflect.\n",
            i + 1
        ));
        content.push_str("- Hope is **anchored** in God's promises\n");
        content.push_str("  - See Psalm 46:1-3 for refuge\n");
        content.push_str("1. Read the passage\n2. Pray over it\n3. Share it\n");
        content.push_str("> Faith is the substance of things hoped for\n\n");
    }

    content.push_str("---\nClosing Prayer\n");
    content
}

/// Benchmark classification at various sizes.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    for sections in [1, 10, 100].iter() {
        let text = create_test_sermon(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| pulpit::parse(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark scripture reference recognition over prose.
fn bench_recognition(c: &mut Criterion) {
    let text = create_test_sermon(10);
    let recognizer = pulpit::ScriptureRecognizer::new();
    let pattern_only = pulpit::ScriptureRecognizer::pattern_only();

    c.bench_function("recognize_validated", |b| {
        b.iter(|| recognizer.find(black_box(&text)));
    });

    c.bench_function("recognize_pattern_only", |b| {
        b.iter(|| pattern_only.find(black_box(&text)));
    });
}

/// Benchmark HTML rendering of already classified content.
fn bench_html_rendering(c: &mut Criterion) {
    let parsed = pulpit::parse(&create_test_sermon(10));
    let options = pulpit::RenderOptions::new().with_toc(true);

    c.bench_function("render_html", |b| {
        b.iter(|| pulpit::render::to_html(black_box(&parsed), &options).unwrap());
    });
}

criterion_group!(
    benches,
    bench_classification,
    bench_recognition,
    bench_html_rendering,
);
criterion_main!(benches);
