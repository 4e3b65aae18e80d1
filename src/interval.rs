//! Named semitone distances from a root.

use std::fmt::Display;

// -------------------------------------------------------------------------------------------------

/// Semitone distance from a reference root in the range [0, 12].
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum Interval {
    Unison = 0,
    MinorSecond = 1,
    MajorSecond = 2,
    MinorThird = 3,
    MajorThird = 4,
    PerfectFourth = 5,
    Tritone = 6,
    PerfectFifth = 7,
    MinorSixth = 8,
    MajorSixth = 9,
    MinorSeventh = 10,
    MajorSeventh = 11,
    Octave = 12,
}

const INTERVALS: [Interval; 13] = [
    Interval::Unison,
    Interval::MinorSecond,
    Interval::MajorSecond,
    Interval::MinorThird,
    Interval::MajorThird,
    Interval::PerfectFourth,
    Interval::Tritone,
    Interval::PerfectFifth,
    Interval::MinorSixth,
    Interval::MajorSixth,
    Interval::MinorSeventh,
    Interval::MajorSeventh,
    Interval::Octave,
];

impl Interval {
    /// Number of semitones.
    pub fn semitones(&self) -> u8 {
        *self as u8
    }

    /// The interval between two pitch classes, always in [0, 12).
    pub(crate) fn from_pitch_distance(distance: i32) -> Self {
        INTERVALS[distance.rem_euclid(12) as usize]
    }
}

impl TryFrom<u8> for Interval {
    type Error = String;

    fn try_from(semitones: u8) -> Result<Self, String> {
        INTERVALS
            .get(semitones as usize)
            .copied()
            .ok_or_else(|| format!("invalid interval '{}' - must be in range [0..12]", semitones))
    }
}

impl From<Interval> for u8 {
    fn from(interval: Interval) -> u8 {
        interval as u8
    }
}

impl From<Interval> for i32 {
    fn from(interval: Interval) -> i32 {
        interval as i32
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.semitones())
    }
}

// -------------------------------------------------------------------------------------------------
