//! Random chord symbol generation.

use rand::{rng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::{
    chord::{ChordQuality, ChordSymbol},
    pitch::PITCHES,
};

// -------------------------------------------------------------------------------------------------

/// Number of samples drawn per chord before an immediate repeat of the previous chord is accepted.
pub const MAX_REPEAT_ATTEMPTS: usize = 50;

// -------------------------------------------------------------------------------------------------

/// Generates sequences of random chord symbols, avoiding immediate repetitions.
///
/// When created with a seed, the generated sequences are reproducible.
#[derive(Debug, Clone)]
pub struct ChordGenerator {
    rand_gen: Xoshiro256PlusPlus,
    seed: Option<u64>,
}

impl ChordGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rand_seed = seed.unwrap_or_else(|| rng().random());
        let rand_gen = Xoshiro256PlusPlus::seed_from_u64(rand_seed);
        Self { rand_gen, seed }
    }

    /// Generate `count` random chords with qualities from `allowed_qualities`.
    pub fn generate(
        &mut self,
        allowed_qualities: &[ChordQuality],
        count: usize,
    ) -> Vec<ChordSymbol> {
        generate_random_chords_with(&mut self.rand_gen, allowed_qualities, count)
    }

    /// Reset random number generator to its initial state, when the generator is seeded.
    pub fn reset(&mut self) {
        if let Some(seed) = self.seed {
            self.rand_gen = Xoshiro256PlusPlus::seed_from_u64(seed);
        }
    }
}

impl Default for ChordGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

// -------------------------------------------------------------------------------------------------

/// Generate `count` random chords with qualities from `allowed_qualities`, using the thread rng.
///
/// Returns an empty list when `count` is 0 or no qualities are allowed.
pub fn generate_random_chords(
    allowed_qualities: &[ChordQuality],
    count: usize,
) -> Vec<ChordSymbol> {
    generate_random_chords_with(&mut rng(), allowed_qualities, count)
}

/// Generate `count` random chords with qualities from `allowed_qualities` with the given rng.
///
/// Each chord's root and quality are sampled uniformly. A chord equal to its predecessor is
/// resampled up to [`MAX_REPEAT_ATTEMPTS`] times before the repetition is accepted.
pub fn generate_random_chords_with<R: RngCore + ?Sized>(
    rng: &mut R,
    allowed_qualities: &[ChordQuality],
    count: usize,
) -> Vec<ChordSymbol> {
    if count == 0 || allowed_qualities.is_empty() {
        return vec![];
    }
    let mut chords = Vec::with_capacity(count);
    let mut prev_chord: Option<ChordSymbol> = None;
    for _ in 0..count {
        let mut chord = random_chord(rng, allowed_qualities);
        let mut attempts = 1;
        while Some(chord) == prev_chord && attempts < MAX_REPEAT_ATTEMPTS {
            chord = random_chord(rng, allowed_qualities);
            attempts += 1;
        }
        if Some(chord) == prev_chord {
            log::debug!(
                "Accepting repeated chord '{}' after {} attempts",
                chord,
                attempts
            );
        }
        chords.push(chord);
        prev_chord = Some(chord);
    }
    log::trace!(
        "Generated chords: {}",
        chords
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    chords
}

fn random_chord<R: RngCore + ?Sized>(
    rng: &mut R,
    allowed_qualities: &[ChordQuality],
) -> ChordSymbol {
    let root = PITCHES[rng.random_range(0..PITCHES.len())];
    let quality = allowed_qualities[rng.random_range(0..allowed_qualities.len())];
    ChordSymbol::new(root, quality)
}

// -------------------------------------------------------------------------------------------------
