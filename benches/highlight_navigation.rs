// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the highlight playback hot path.
//!
//! Measures the performance of:
//! - Segment derivation from a large selection
//! - Prev/next/seek target computation
//! - Auto-skip evaluation
//! - Engine position reports (the per-tick cost while playing)

use criterion::{criterion_group, criterion_main, Criterion};
use reelcut::playback::{auto_skip, navigator, HighlightEngine};
use reelcut::transcript::{highlight_segments, ProcessingResult, SelectedSet, Section, Sentence};
use std::hint::black_box;

const SENTENCES: usize = 600;

/// A long transcript: 2s sentences with 0.5s gaps, every third suggested.
fn long_document() -> ProcessingResult {
    let sentences = (0..SENTENCES)
        .map(|i| {
            let start = i as f64 * 2.5;
            Sentence {
                id: format!("s{i}"),
                text: format!("Sentence number {i}."),
                start_time: start,
                end_time: start + 2.0,
                is_suggested_highlight: i % 3 == 0,
            }
        })
        .collect();
    ProcessingResult {
        full_transcript: String::new(),
        sections: vec![Section {
            title: "All".to_string(),
            sentences,
        }],
    }
}

/// Benchmark segment list derivation from document plus selection.
fn bench_segment_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_navigation");

    let document = long_document();
    let selection = SelectedSet::from_suggestions(&document);

    group.bench_function("derive_segments", |b| {
        b.iter(|| {
            let segments = highlight_segments(Some(black_box(&document)), &selection);
            black_box(segments);
        });
    });

    group.finish();
}

/// Benchmark the pure target computations over a long segment list.
fn bench_target_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_navigation");

    let document = long_document();
    let selection = SelectedSet::from_suggestions(&document);
    let segments = highlight_segments(Some(&document), &selection);
    let duration = document.duration_secs();
    let midpoint = duration / 2.0;

    group.bench_function("next_target", |b| {
        b.iter(|| black_box(navigator::next_target(&segments, black_box(midpoint))));
    });

    group.bench_function("prev_target", |b| {
        b.iter(|| black_box(navigator::prev_target(&segments, black_box(midpoint))));
    });

    group.bench_function("seek_target", |b| {
        b.iter(|| {
            black_box(navigator::seek_target(
                &segments,
                duration,
                black_box(midpoint),
            ))
        });
    });

    group.bench_function("auto_skip_evaluate", |b| {
        b.iter(|| black_box(auto_skip::evaluate(&segments, black_box(midpoint))));
    });

    group.finish();
}

/// Benchmark the engine's per-tick position report while playing.
fn bench_engine_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_navigation");

    let mut engine = HighlightEngine::new();
    engine.install_document(long_document());
    engine.played();
    let gap_position = 2.25; // between the first two sentences

    group.bench_function("position_changed_in_gap", |b| {
        b.iter(|| {
            let commands = engine.position_changed(black_box(gap_position));
            black_box(commands);
        });
    });

    group.finish();
}

/// Benchmark a selection flip including the segment rebuild.
fn bench_toggle_sentence(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_navigation");

    let mut engine = HighlightEngine::new();
    engine.install_document(long_document());

    group.bench_function("toggle_sentence", |b| {
        b.iter(|| {
            engine.toggle_sentence(black_box("s1"));
            black_box(engine.segments().len());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_segment_derivation,
    bench_target_computation,
    bench_engine_tick,
    bench_toggle_sentence
);
criterion_main!(benches);
