//! Benchmarks for retoc inference performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks exercise the pipeline with synthetic fragment data.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use retoc::{InferenceConfig, TextFragment};

/// Creates a synthetic document with the given number of pages: a display
/// title, a numbered section and two subsections per page, and a block of
/// body prose below them.
fn create_test_document(page_count: u32) -> Vec<TextFragment> {
    let mut fragments = Vec::new();

    fragments.push(TextFragment::new(
        "Synthetic Benchmark Corpus Volume One",
        1,
        26.0,
        "Helvetica-Bold",
        40.0,
    ));

    for page in 1..=page_count {
        fragments.push(TextFragment::new(
            format!("{}. Chapter Heading", page),
            page,
            18.0,
            "Helvetica-Bold",
            90.0,
        ));
        for sub in 1..=2 {
            fragments.push(TextFragment::new(
                format!("{}.{} Subsection Heading", page, sub),
                page,
                13.0 + (page % 3) as f32 * 0.4,
                "Helvetica",
                120.0 + sub as f32 * 30.0,
            ));
        }
        for line in 0..30 {
            fragments.push(TextFragment::new(
                "body text continues with the usual measurements and observations.",
                page,
                10.5,
                "Helvetica",
                200.0 + line as f32 * 14.0,
            ));
        }
    }

    fragments
}

/// Benchmark single-document inference at various sizes.
fn bench_infer_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_document");

    for page_count in [5, 20, 50].iter() {
        let fragments = create_test_document(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| retoc::infer_outline(black_box(&fragments)));
        });
    }

    group.finish();
}

/// Benchmark the parallel batch path.
fn bench_infer_batch(c: &mut Criterion) {
    let documents: Vec<Vec<TextFragment>> =
        (0..16).map(|_| create_test_document(10)).collect();

    c.bench_function("batch_16_documents", |b| {
        b.iter(|| retoc::infer_batch(black_box(&documents)));
    });
}

/// Benchmark the clustering branch in isolation: many distinct sizes force
/// k-means instead of direct ranking.
fn bench_clustering_branch(c: &mut Criterion) {
    let mut fragments = create_test_document(20);
    for (i, size) in [21.5, 20.0, 19.0, 17.5, 16.5, 15.0, 14.5, 12.5]
        .iter()
        .enumerate()
    {
        fragments.push(TextFragment::new(
            format!("Outlier Heading Number {}", i),
            1 + i as u32 % 20,
            *size,
            "Helvetica-Bold",
            60.0,
        ));
    }
    let config = InferenceConfig::default();

    c.bench_function("kmeans_level_assignment", |b| {
        b.iter(|| retoc::infer_outline_with_config(black_box(&fragments), &config));
    });
}

criterion_group!(
    benches,
    bench_infer_document,
    bench_infer_batch,
    bench_clustering_branch,
);
criterion_main!(benches);
