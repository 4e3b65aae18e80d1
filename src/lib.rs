//! Music theory engine of a chord ear trainer.
//!
//! Generates random triads, places their notes in a playable octave range and infers a chord's
//! quality from a set of notes. Trainer configuration and mistake tallies are persisted through
//! a simple [`KeyValueStore`](store::KeyValueStore).

pub mod pitch;
pub use pitch::Pitch;

pub mod interval;
pub use interval::Interval;

pub mod note;
pub use note::Note;

pub mod chord;
pub use chord::{ChordQuality, ChordSymbol};

pub mod generator;
pub use generator::ChordGenerator;

pub mod store;
pub mod config;
pub mod mistakes;

pub mod trainer;
pub use trainer::Trainer;

pub mod prelude;
