//! Pitch classes: the twelve keys of an octave without octave information.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

// -------------------------------------------------------------------------------------------------

/// One of the twelve pitch classes of the chromatic scale. The subscript 's' means sharp.
///
/// Pitches are ordered cyclically: adding semitones wraps around from `B` to `C`.
#[repr(u8)]
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub enum Pitch {
    C = 0,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

/// All pitches in ascending chromatic order, starting at C.
pub const PITCHES: [Pitch; 12] = [
    Pitch::C,
    Pitch::Cs,
    Pitch::D,
    Pitch::Ds,
    Pitch::E,
    Pitch::F,
    Pitch::Fs,
    Pitch::G,
    Pitch::Gs,
    Pitch::A,
    Pitch::As,
    Pitch::B,
];

const PITCH_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

impl Pitch {
    /// Position of the pitch in the chromatic scale: 0 = C, 1 = C# ...
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Pitch at the given chromatic position. Any integer is accepted and wrapped into [0, 12).
    pub fn from_index(index: i32) -> Self {
        PITCHES[index.rem_euclid(12) as usize]
    }

    /// Pitch name as used in note and chord strings, e.g. "C#".
    pub fn name(&self) -> &'static str {
        PITCH_NAMES[*self as usize]
    }

    /// returns if this is one of the black keys, notated with a '#'.
    pub fn is_sharp(&self) -> bool {
        self.name().len() > 1
    }

    /// return a new pitch, moved by the given amount of semitones (wrapping).
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        Self::from_index(self.index() as i32 + semitones)
    }

    /// Split off the longest known pitch name from the start of the given string.
    /// Returns the pitch and the remaining, unparsed part of the string.
    pub fn parse_prefix(s: &str) -> Option<(Self, &str)> {
        // try two char names (sharps) first, so "C#" does not match as "C"
        [2, 1].into_iter().find_map(|len| {
            let name = s.get(..len)?;
            PITCH_NAMES
                .iter()
                .position(|n| *n == name)
                .map(|index| (PITCHES[index], &s[len..]))
        })
    }
}

impl TryFrom<&str> for Pitch {
    type Error = String;

    /// Try converting the given string to a pitch. Only sharp names are accepted.
    fn try_from(s: &str) -> Result<Self, String> {
        match Self::parse_prefix(s) {
            Some((pitch, rest)) if rest.is_empty() => Ok(pitch),
            _ => Err(format!(
                "invalid pitch str '{}' - expecting one of {}",
                s,
                PITCH_NAMES.join(", ")
            )),
        }
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// -------------------------------------------------------------------------------------------------
