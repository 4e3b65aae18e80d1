//! Persisted tallies of wrongly answered chords.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    chord::{ChordQuality, CHORD_QUALITIES},
    pitch::{Pitch, PITCHES},
    store::{read_json, write_json, KeyValueStore},
};

// -------------------------------------------------------------------------------------------------

/// Store key of the mistake tallies.
pub const MISTAKES_KEY: &str = "mistakes";

// -------------------------------------------------------------------------------------------------

/// Number of mistakes, counted by the root pitch and by the quality of the missed chords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mistakes {
    pub by_pitch: BTreeMap<Pitch, u32>,
    pub by_quality: BTreeMap<ChordQuality, u32>,
}

impl Mistakes {
    /// Mistake count for the given pitch.
    pub fn pitch_count(&self, pitch: Pitch) -> u32 {
        self.by_pitch.get(&pitch).copied().unwrap_or(0)
    }

    /// Mistake count for the given quality.
    pub fn quality_count(&self, quality: ChordQuality) -> u32 {
        self.by_quality.get(&quality).copied().unwrap_or(0)
    }

    /// Total number of recorded mistakes.
    pub fn total(&self) -> u32 {
        // every mistake is counted once per pitch and once per quality
        self.by_pitch.values().sum()
    }
}

impl Default for Mistakes {
    /// All pitches and qualities with a count of zero.
    fn default() -> Self {
        Self {
            by_pitch: PITCHES.into_iter().map(|p| (p, 0)).collect(),
            by_quality: CHORD_QUALITIES.into_iter().map(|q| (q, 0)).collect(),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Holds the current [`Mistakes`] and writes every change back to a [`KeyValueStore`].
#[derive(Debug)]
pub struct MistakesStore<S: KeyValueStore> {
    store: S,
    mistakes: Mistakes,
}

impl<S: KeyValueStore> MistakesStore<S> {
    /// Load the mistakes from the given store. Missing or unreadable tallies start from zero.
    pub fn new(store: S) -> Self {
        let mistakes = match read_json::<_, Mistakes>(&store, MISTAKES_KEY) {
            Ok(Some(mistakes)) => mistakes,
            Ok(None) => Mistakes::default(),
            Err(err) => {
                log::warn!("Resetting mistakes: {:#}", err);
                Mistakes::default()
            }
        };
        Self { store, mistakes }
    }

    /// Current tallies.
    pub fn get(&self) -> &Mistakes {
        &self.mistakes
    }

    /// Count a mistake for a chord with the given root and quality and persist the new tallies.
    pub fn increment(&mut self, pitch: Pitch, quality: ChordQuality) -> anyhow::Result<()> {
        *self.mistakes.by_pitch.entry(pitch).or_insert(0) += 1;
        *self.mistakes.by_quality.entry(quality).or_insert(0) += 1;
        write_json(&mut self.store, MISTAKES_KEY, &self.mistakes)
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

// -------------------------------------------------------------------------------------------------
