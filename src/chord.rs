//! Chord qualities, chord symbols and the translation between chords and notes.

use std::{collections::HashMap, fmt, ops::RangeInclusive};

use derive_more::{Display, From};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{
    interval::Interval,
    note::{interval, transpose, Note, Octave},
    pitch::Pitch,
};

// --------------------------------------------------------------------------------------------------

/// Marker returned by [`notes_to_chord`] when the notes do not form a known chord.
pub const UNKNOWN_CHORD: &str = "???";

/// Octaves in which chord notes are placed, so they stay in a comfortably playable range.
pub const PLAYABLE_OCTAVES: RangeInclusive<Octave> = 2..=4;

// --------------------------------------------------------------------------------------------------

/// The closed set of triad qualities a chord symbol can have.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash, Serialize, Deserialize,
)]
pub enum ChordQuality {
    #[serde(rename = "")]
    Major,
    #[serde(rename = "m")]
    Minor,
    #[serde(rename = "dim")]
    Dim,
    #[serde(rename = "sus2")]
    Sus2,
    #[serde(rename = "sus4")]
    Sus4,
    #[serde(rename = "aug")]
    Aug,
}

/// All chord qualities, in the order they are presented to the user.
pub const CHORD_QUALITIES: [ChordQuality; 6] = [
    ChordQuality::Major,
    ChordQuality::Minor,
    ChordQuality::Dim,
    ChordQuality::Aug,
    ChordQuality::Sus2,
    ChordQuality::Sus4,
];

impl ChordQuality {
    /// Suffix of the quality in chord symbols. Major chords have no suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Dim => "dim",
            Self::Sus2 => "sus2",
            Self::Sus4 => "sus4",
            Self::Aug => "aug",
        }
    }

    /// Human readable name of the quality.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Dim => "Diminished",
            Self::Sus2 => "Sus2",
            Self::Sus4 => "Sus4",
            Self::Aug => "Augmented",
        }
    }

    /// Intervals of the triad, measured from the root, in ascending order.
    pub fn triad(&self) -> [Interval; 3] {
        use Interval::*;
        match self {
            Self::Major => [Unison, MajorThird, PerfectFifth],
            Self::Minor => [Unison, MinorThird, PerfectFifth],
            Self::Dim => [Unison, MinorThird, Tritone],
            Self::Sus2 => [Unison, MajorSecond, PerfectFifth],
            Self::Sus4 => [Unison, PerfectFourth, PerfectFifth],
            Self::Aug => [Unison, PerfectFifth, MinorSixth],
        }
    }
}

impl TryFrom<&str> for ChordQuality {
    type Error = String;

    /// Try converting the given chord symbol suffix to a quality.
    fn try_from(suffix: &str) -> Result<Self, String> {
        CHORD_QUALITIES
            .into_iter()
            .find(|quality| quality.suffix() == suffix)
            .ok_or_else(|| {
                format!(
                    "invalid chord quality '{}'. Valid qualities are: {}",
                    suffix,
                    CHORD_QUALITIES
                        .iter()
                        .map(|q| format!("'{}'", q.suffix()))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

// --------------------------------------------------------------------------------------------------

fn triad_key(intervals: &[Interval]) -> String {
    intervals
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

// reverse lookup of the quality triads, keyed by their joined intervals, e.g. "0,4,7"
lazy_static! {
    static ref TRIAD_TO_QUALITY: HashMap<String, ChordQuality> = CHORD_QUALITIES
        .into_iter()
        .map(|quality| (triad_key(&quality.triad()), quality))
        .collect();
}

// --------------------------------------------------------------------------------------------------

/// A chord symbol: root pitch plus quality suffix, e.g. `C#m` or `Gsus4`.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Display, From)]
#[display("{root}{quality}")]
pub struct ChordSymbol {
    root: Pitch,
    quality: ChordQuality,
}

impl ChordSymbol {
    /// Create a new chord symbol from the given root and quality.
    pub fn new(root: Pitch, quality: ChordQuality) -> Self {
        Self { root, quality }
    }

    /// Root pitch.
    pub fn root(&self) -> Pitch {
        self.root
    }

    /// Chord quality.
    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// The chord's notes in triad order, placed at the lowest root octave that keeps all notes
    /// within [`PLAYABLE_OCTAVES`]. Returns an empty list when no such placement exists.
    pub fn notes(&self) -> Vec<Note> {
        let triad = self.quality.triad();
        PLAYABLE_OCTAVES
            .clone()
            .find_map(|root_octave| {
                let root = Note::new(self.root, root_octave);
                let notes = triad
                    .iter()
                    .map(|interval| transpose(root, i32::from(*interval)))
                    .collect::<Vec<_>>();
                notes
                    .iter()
                    .all(|note| PLAYABLE_OCTAVES.contains(&note.octave()))
                    .then_some(notes)
            })
            .unwrap_or_default()
    }
}

impl TryFrom<&str> for ChordSymbol {
    type Error = String;

    /// Try converting the given string to a chord symbol in the form `$pitch$quality`, e.g.
    /// "C", "A#m" or "Fsus2".
    fn try_from(s: &str) -> Result<Self, String> {
        let (root, suffix) = Pitch::parse_prefix(s)
            .ok_or_else(|| format!("invalid chord str '{}' - unknown root pitch", s))?;
        let quality = ChordQuality::try_from(suffix)
            .map_err(|err| format!("invalid chord str '{}': {}", s, err))?;
        Ok(Self::new(root, quality))
    }
}

// --------------------------------------------------------------------------------------------------

/// Notes of the given chord symbol string, see [`ChordSymbol::notes`].
///
/// An empty or invalid chord string results in an empty note list.
pub fn chord_to_notes(symbol: &str) -> Vec<Note> {
    if symbol.is_empty() {
        return vec![];
    }
    match ChordSymbol::try_from(symbol) {
        Ok(chord) => chord.notes(),
        Err(err) => {
            log::warn!("Failed to resolve chord notes: {}", err);
            vec![]
        }
    }
}

/// Infer the chord with the given root from a set of notes.
///
/// Only the three smallest pitch class intervals of the notes, relative to the root, are taken
/// into account. Any additional notes are ignored. Returns `None` for less than three notes or
/// when the intervals do not form a known triad.
pub fn infer_chord(root: &Note, notes: &[Note]) -> Option<ChordSymbol> {
    if notes.len() < 3 {
        return None;
    }
    let mut intervals = notes
        .iter()
        .map(|note| interval(root, note))
        .collect::<Vec<_>>();
    intervals.sort();
    intervals.truncate(3);
    TRIAD_TO_QUALITY
        .get(&triad_key(&intervals))
        .map(|quality| ChordSymbol::new(root.pitch(), *quality))
}

/// Infer the chord symbol string with the given root from a set of notes, see [`infer_chord`].
/// Returns [`UNKNOWN_CHORD`] when no chord matches.
pub fn notes_to_chord(root: &Note, notes: &[Note]) -> String {
    infer_chord(root, notes)
        .map(|chord| chord.to_string())
        .unwrap_or_else(|| UNKNOWN_CHORD.to_string())
}

// --------------------------------------------------------------------------------------------------
