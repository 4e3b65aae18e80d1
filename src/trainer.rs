//! Training rounds: generated chords, answer checking and mistake bookkeeping.

use crate::{
    chord::{infer_chord, ChordSymbol},
    config::ConfigStore,
    generator::ChordGenerator,
    mistakes::MistakesStore,
    note::Note,
    store::KeyValueStore,
};

// -------------------------------------------------------------------------------------------------

/// Ear trainer session state. Generates rounds of chords from the user's config and counts the
/// chords the user failed to identify.
pub struct Trainer<S: KeyValueStore> {
    config: ConfigStore<S>,
    mistakes: MistakesStore<S>,
    generator: ChordGenerator,
}

impl<S: KeyValueStore> Trainer<S> {
    /// Create a new trainer. Config and mistakes may live in the same or in separate stores.
    pub fn new(config_store: S, mistakes_store: S, seed: Option<u64>) -> Self {
        Self {
            config: ConfigStore::new(config_store),
            mistakes: MistakesStore::new(mistakes_store),
            generator: ChordGenerator::new(seed),
        }
    }

    /// Config, as loaded from the config store.
    pub fn config(&self) -> &ConfigStore<S> {
        &self.config
    }

    /// Mutable config access. Changes apply to the next round.
    pub fn config_mut(&mut self) -> &mut ConfigStore<S> {
        &mut self.config
    }

    /// Mistake tallies.
    pub fn mistakes(&self) -> &MistakesStore<S> {
        &self.mistakes
    }

    /// Generate a new round of chords with the configured size and qualities.
    pub fn next_round(&mut self) -> Vec<ChordSymbol> {
        let config = self.config.get();
        let chords = self
            .generator
            .generate(&config.allowed_qualities, config.num_of_chords);
        log::trace!("New round with {} chords", chords.len());
        chords
    }

    /// Check if the selected notes form the solution chord. The first selected note is taken as
    /// the chord's root. A wrong answer gets counted as mistake for the solution's root and
    /// quality.
    pub fn check_answer(&mut self, solution: &ChordSymbol, selected_notes: &[Note]) -> bool {
        let answer = selected_notes
            .first()
            .and_then(|root| infer_chord(root, selected_notes));
        if answer.as_ref() == Some(solution) {
            return true;
        }
        if let Err(err) = self
            .mistakes
            .increment(solution.root(), solution.quality())
        {
            log::warn!("Failed to persist mistakes: {:#}", err);
        }
        false
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        chord::{chord_to_notes, ChordQuality},
        pitch::Pitch,
        store::MemoryStore,
    };

    fn trainer() -> Trainer<MemoryStore> {
        Trainer::new(MemoryStore::new(), MemoryStore::new(), Some(0x5eed))
    }

    #[test]
    fn rounds_follow_config() -> anyhow::Result<()> {
        let mut trainer = trainer();
        assert_eq!(trainer.next_round().len(), 10);

        trainer.config_mut().update(|config| {
            config.num_of_chords = 3;
            config.allowed_qualities = vec![ChordQuality::Dim];
        })?;
        let round = trainer.next_round();
        assert_eq!(round.len(), 3);
        assert!(round.iter().all(|c| c.quality() == ChordQuality::Dim));

        trainer.config_mut().update(|config| config.allowed_qualities.clear())?;
        assert!(trainer.next_round().is_empty());
        Ok(())
    }

    #[test]
    fn answers() -> Result<(), String> {
        let mut trainer = trainer();
        let solution = ChordSymbol::try_from("F#m")?;

        assert!(trainer.check_answer(&solution, &chord_to_notes("F#m")));
        assert_eq!(trainer.mistakes().get().total(), 0);

        assert!(!trainer.check_answer(&solution, &chord_to_notes("F#")));
        assert!(!trainer.check_answer(&solution, &[]));
        assert!(!trainer.check_answer(&solution, &[Note::try_from("F#2")?]));

        let mistakes = trainer.mistakes().get();
        assert_eq!(mistakes.pitch_count(Pitch::Fs), 3);
        assert_eq!(mistakes.quality_count(ChordQuality::Minor), 3);
        assert_eq!(mistakes.quality_count(ChordQuality::Major), 0);
        Ok(())
    }
}
