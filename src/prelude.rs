//! The chordear prelude.
//!
//! The purpose of this module is to alleviate imports of common chordear types and functions:
//!
//! ```
//! # #![allow(unused_imports)]
//! use chordear::prelude::*;
//! ```

pub use super::{
    // chord translation
    chord::{
        chord_to_notes, infer_chord, notes_to_chord, CHORD_QUALITIES, PLAYABLE_OCTAVES,
        UNKNOWN_CHORD,
    },
    // chord generation
    generator::{generate_random_chords, generate_random_chords_with, MAX_REPEAT_ATTEMPTS},
    // pitch arithmetic
    note::{chromatic_run, interval, parse_pitch_octave, transpose, Octave},
    pitch::PITCHES,
    // persisted trainer state
    config::{ConfigStore, TrainerConfig},
    mistakes::{Mistakes, MistakesStore},
    store::{KeyValueStore, MemoryStore},
    // all public basic types
    ChordGenerator,
    ChordQuality,
    ChordSymbol,
    Interval,
    Note,
    Pitch,
    Trainer,
};
