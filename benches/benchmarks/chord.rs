use std::hint::black_box;
use criterion::{criterion_group, Criterion};

use chordear::prelude::*;

// ---------------------------------------------------------------------------------------------

fn all_chord_symbols() -> Vec<String> {
    PITCHES
        .into_iter()
        .flat_map(|root| {
            CHORD_QUALITIES
                .into_iter()
                .map(move |quality| ChordSymbol::new(root, quality).to_string())
        })
        .collect()
}

pub fn chord_to_notes_all(c: &mut Criterion) {
    let symbols = all_chord_symbols();
    c.bench_function("Chord to notes", |b| {
        b.iter(|| {
            for symbol in &symbols {
                black_box(chord_to_notes(black_box(symbol)));
            }
        })
    });
}

pub fn notes_to_chord_all(c: &mut Criterion) {
    let chords = all_chord_symbols()
        .iter()
        .map(|symbol| chord_to_notes(symbol))
        .collect::<Vec<_>>();
    c.bench_function("Notes to chord", |b| {
        b.iter(|| {
            for notes in &chords {
                black_box(notes_to_chord(&notes[0], black_box(notes)));
            }
        })
    });
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = chord;
    config = Criterion::default();
    targets = chord_to_notes_all, notes_to_chord_all
}
