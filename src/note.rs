//! Notes: a pitch at a given octave, and the pitch arithmetic on them.

use std::fmt::Display;

use crate::{interval::Interval, pitch::Pitch};

// -------------------------------------------------------------------------------------------------

/// Octave number of a [`Note`]. Negative octaves are valid results of a transposition.
pub type Octave = i32;

// -------------------------------------------------------------------------------------------------

/// A pitch at a specific octave, notated as pitch name followed by the octave number, e.g. `C#3`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Note {
    // NB: field order matters for the derived ordering: octave first
    octave: Octave,
    pitch: Pitch,
}

impl Note {
    /// Create a new note from the given pitch and octave.
    pub fn new(pitch: Pitch, octave: Octave) -> Self {
        Self { octave, pitch }
    }

    /// The note's pitch class.
    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    /// The note's octave.
    pub fn octave(&self) -> Octave {
        self.octave
    }

    /// returns if the note's pitch is notated with a '#'.
    pub fn is_sharp(&self) -> bool {
        self.pitch.is_sharp()
    }

    /// return a new note, `semitones` above (or below, when negative) this one.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        transpose(*self, semitones)
    }

    /// Pitch class distance from this note to the given one. See [`interval`].
    pub fn interval_to(&self, note: &Note) -> Interval {
        interval(self, note)
    }
}

impl TryFrom<&str> for Note {
    type Error = String;

    /// Try converting the given string to a note, e.g. "C4" or "D#2".
    fn try_from(s: &str) -> Result<Self, String> {
        let (pitch, octave) = parse_pitch_octave(s)?;
        Ok(Self::new(pitch, octave))
    }
}

impl From<(Pitch, Octave)> for Note {
    fn from((pitch, octave): (Pitch, Octave)) -> Self {
        Self::new(pitch, octave)
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pitch, self.octave)
    }
}

// -------------------------------------------------------------------------------------------------

/// Split a note string into its pitch and octave parts.
///
/// The pitch is the longest known pitch name prefix, so "C#3" splits into `C#` and `3`, while
/// "C3" splits into `C` and `3`. Everything after the pitch must be an integer.
pub fn parse_pitch_octave(note: &str) -> Result<(Pitch, Octave), String> {
    let (pitch, rest) = Pitch::parse_prefix(note)
        .ok_or_else(|| format!("invalid note str '{}' - unknown pitch name", note))?;
    let octave = rest
        .parse::<Octave>()
        .map_err(|err| format!("invalid note str '{}': {}", note, err))?;
    Ok((pitch, octave))
}

/// Returns the note `semitones` above `root`. Negative offsets move down.
///
/// The octave moves by the floored number of octaves crossed, so the pitch class always stays in
/// [0, 12) and e.g. `C2 - 1` is `B1`, not `B2`.
pub fn transpose(root: Note, semitones: i32) -> Note {
    if semitones == 0 {
        return root;
    }
    let position = root.pitch.index() as i32 + semitones;
    Note::new(
        Pitch::from_index(position.rem_euclid(12)),
        root.octave + position.div_euclid(12),
    )
}

/// Semitone distance from `root`'s pitch class to `note`'s pitch class in [0, 12).
/// Octaves are ignored.
pub fn interval(root: &Note, note: &Note) -> Interval {
    Interval::from_pitch_distance(note.pitch.index() as i32 - root.pitch.index() as i32)
}

/// The `count` chromatic notes starting at, and including, `root`.
pub fn chromatic_run(root: Note, count: usize) -> Vec<Note> {
    (0..count as i32).map(|step| transpose(root, step)).collect()
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::pitch::PITCHES;

    #[test]
    fn note_serialization() {
        assert_eq!(Note::new(Pitch::C, 4).to_string(), "C4");
        assert_eq!(Note::new(Pitch::Cs, 0).to_string(), "C#0");
        assert_eq!(Note::new(Pitch::As, -1).to_string(), "A#-1");
    }

    #[test]
    fn note_deserialization() -> Result<(), String> {
        assert!(Note::try_from("").is_err());
        assert!(Note::try_from("x4").is_err());
        assert!(Note::try_from("C").is_err());
        assert!(Note::try_from("C#").is_err());
        assert!(Note::try_from("c4").is_err());
        assert!(Note::try_from("C.2").is_err());

        assert_eq!(Note::try_from("C4")?, Note::new(Pitch::C, 4));
        assert_eq!(Note::try_from("C#3")?, Note::new(Pitch::Cs, 3));
        assert_eq!(Note::try_from("A#10")?, Note::new(Pitch::As, 10));
        assert_eq!(Note::try_from("G-1")?, Note::new(Pitch::G, -1));

        assert_eq!(parse_pitch_octave("D#2")?, (Pitch::Ds, 2));
        Ok(())
    }

    #[test]
    fn note_order() -> Result<(), String> {
        assert!(Note::try_from("B2")? < Note::try_from("C3")?);
        assert!(Note::try_from("C3")? < Note::try_from("C#3")?);
        Ok(())
    }

    #[test]
    fn transposition() -> Result<(), String> {
        let c2 = Note::try_from("C2")?;
        assert_eq!(transpose(c2, 0), c2);
        assert_eq!(transpose(c2, 4), Note::try_from("E2")?);
        assert_eq!(transpose(c2, 12), Note::try_from("C3")?);
        assert_eq!(transpose(c2, 25), Note::try_from("C#4")?);
        assert_eq!(transpose(c2, -1), Note::try_from("B1")?);
        assert_eq!(transpose(c2, -12), Note::try_from("C1")?);
        assert_eq!(transpose(c2, -13), Note::try_from("B0")?);
        assert_eq!(transpose(c2, -25), Note::try_from("B-1")?);
        assert_eq!(
            Note::try_from("A3")?.transposed(3),
            Note::try_from("C4")?
        );
        assert_eq!(
            Note::try_from("C0")?.transposed(-1),
            Note::try_from("B-1")?
        );
        Ok(())
    }

    #[test]
    fn transposition_round_trip() {
        for pitch in PITCHES {
            let note = Note::new(pitch, 3);
            for n in -40..40 {
                assert_eq!(transpose(transpose(note, n), -n), note);
            }
        }
    }

    #[test]
    fn intervals() -> Result<(), String> {
        let root = Note::try_from("E3")?;
        assert_eq!(interval(&root, &Note::try_from("G#3")?), Interval::MajorThird);
        assert_eq!(interval(&root, &Note::try_from("C3")?), Interval::MinorSixth);
        // octaves are ignored
        assert_eq!(interval(&root, &Note::try_from("E5")?), Interval::Unison);
        assert_eq!(interval(&root, &Note::try_from("B1")?), Interval::PerfectFifth);

        for pitch in PITCHES {
            let root = Note::new(pitch, 2);
            for k in 0..12 {
                assert_eq!(root.interval_to(&transpose(root, k)).semitones() as i32, k);
            }
        }
        Ok(())
    }

    #[test]
    fn chromatic_runs() -> Result<(), String> {
        assert!(chromatic_run(Note::try_from("C2")?, 0).is_empty());
        assert_eq!(
            chromatic_run(Note::try_from("A#2")?, 4)
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>(),
            vec!["A#2", "B2", "C3", "C#3"]
        );
        assert_eq!(chromatic_run(Note::try_from("C2")?, 36).len(), 36);
        Ok(())
    }
}
