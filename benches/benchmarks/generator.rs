use std::hint::black_box;
use criterion::{criterion_group, Criterion};

use chordear::prelude::*;

// ---------------------------------------------------------------------------------------------

pub fn generate(c: &mut Criterion) {
    let mut generator = ChordGenerator::new(Some(0x1234));
    c.bench_function("Generate chords", |b| {
        b.iter(|| black_box(generator.generate(&CHORD_QUALITIES, black_box(100))))
    });
    c.bench_function("Generate major chords", |b| {
        b.iter(|| black_box(generator.generate(&[ChordQuality::Major], black_box(100))))
    });
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = generator;
    config = Criterion::default();
    targets = generate
}
