// Pitch-class arithmetic and enharmonic spelling.
//
// A pitch class is a note reduced modulo the octave, stored as 0-11 with
// C = 0. Names come from two fixed 12-entry tables, one sharp-preferring and
// one flat-preferring. Which table a computation uses is decided once from
// the tonic with a simplified circle-of-fifths rule (`prefer_flats_for_tonic`)
// and then threaded through every derived scale, chord and mode, so one
// scale never mixes `C#` and `Db`.
//
// The rule is deliberately the simple one: tonics on the flat side of C spell
// with flats, tonics on the sharp side with sharps, C (and anything else)
// defaults to sharps. It is not key-signature-accurate (no double sharps, no
// E#/Cb spellings), and callers depend on exactly this behavior.
//
// Used by every other module in the crate. `Note` is the unit that flows
// through scales and chords: a pitch class paired with its spelled name, so
// nothing downstream needs to re-parse strings.

use crate::error::{Result, TheoryError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A display name drawn from one of the two spelling tables.
pub type NoteName = &'static str;

/// Sharp-preferring names, indexed by pitch class.
pub const SHARP_NAMES: [NoteName; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat-preferring names, indexed by pitch class.
pub const FLAT_NAMES: [NoteName; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Tonics on the sharp side of C in the circle of fifths.
const SHARP_SIDE: [&str; 7] = ["G", "D", "A", "E", "B", "F#", "C#"];

/// Tonics on the flat side of C in the circle of fifths.
const FLAT_SIDE: [&str; 7] = ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"];

// ---------------------------------------------------------------------------
// PitchClass
// ---------------------------------------------------------------------------

/// A note modulo the octave, always in 0..12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Reduce any integer to a pitch class (negative values wrap upward).
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move by a signed number of semitones, wrapping mod 12.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(i32::from(self.0) + semitones)
    }

    /// Ascending interval in semitones from `self` up to `other` (0-11).
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + 12 - self.0) % 12
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Spelling
// ---------------------------------------------------------------------------

/// Which of the two name tables is active for a computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    Sharps,
    Flats,
}

impl Spelling {
    /// The spelling the circle-of-fifths rule picks for `tonic`.
    pub fn for_tonic(tonic: &str) -> Self {
        if prefer_flats_for_tonic(tonic) {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    pub fn prefers_flats(self) -> bool {
        self == Spelling::Flats
    }

    pub fn name_of(self, pc: PitchClass) -> NoteName {
        index_to_note(i32::from(pc.value()), self.prefers_flats())
    }

    /// A spelled `Note` for the given pitch class.
    pub fn note(self, pc: PitchClass) -> Note {
        Note {
            pc,
            name: self.name_of(pc),
        }
    }
}

/// User-facing spelling choice: follow the tonic, or force one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpellingPreference {
    #[default]
    Auto,
    Sharps,
    Flats,
}

impl SpellingPreference {
    pub fn resolve(self, tonic: &str) -> Spelling {
        match self {
            SpellingPreference::Auto => Spelling::for_tonic(tonic),
            SpellingPreference::Sharps => Spelling::Sharps,
            SpellingPreference::Flats => Spelling::Flats,
        }
    }
}

impl std::str::FromStr for SpellingPreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(SpellingPreference::Auto),
            "sharps" | "sharp" | "#" => Ok(SpellingPreference::Sharps),
            "flats" | "flat" | "b" => Ok(SpellingPreference::Flats),
            other => Err(format!("unknown spelling preference {other:?}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Note
// ---------------------------------------------------------------------------

/// A pitch class together with the name it is displayed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Note {
    pub pc: PitchClass,
    pub name: NoteName,
}

impl Note {
    /// Parse a free-form note name, keeping the table's own spelling of it.
    pub fn parse(name: &str) -> Result<Self> {
        let normalized = normalize_accidentals(name);
        let pc = note_to_index(&normalized)?;
        let spelling = if FLAT_NAMES[pc.value() as usize] == normalized {
            Spelling::Flats
        } else {
            Spelling::Sharps
        };
        Ok(spelling.note(pc))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

/// Replace Unicode sharp/flat glyphs with ASCII `#` / `b` and trim whitespace.
pub fn normalize_accidentals(name: &str) -> String {
    name.trim().replace('♯', "#").replace('♭', "b")
}

/// Resolve a note name to its pitch class, checking both spelling tables.
pub fn note_to_index(name: &str) -> Result<PitchClass> {
    let normalized = normalize_accidentals(name);
    SHARP_NAMES
        .iter()
        .position(|&n| n == normalized)
        .or_else(|| FLAT_NAMES.iter().position(|&n| n == normalized))
        .map(|i| PitchClass::new(i as i32))
        .ok_or_else(|| TheoryError::UnknownNote(name.to_string()))
}

/// Name a pitch class (reduced mod 12) from the selected table.
pub fn index_to_note(pc: i32, prefer_flats: bool) -> NoteName {
    let i = PitchClass::new(pc).value() as usize;
    if prefer_flats {
        FLAT_NAMES[i]
    } else {
        SHARP_NAMES[i]
    }
}

/// The circle-of-fifths spelling rule. Flat-side tonics and anything ending
/// in `b` spell with flats; sharp-side tonics and anything ending in `#`
/// spell with sharps; everything else (C) defaults to sharps.
pub fn prefer_flats_for_tonic(tonic: &str) -> bool {
    let tonic = normalize_accidentals(tonic);
    if SHARP_SIDE.contains(&tonic.as_str()) || tonic.ends_with('#') {
        return false;
    }
    FLAT_SIDE.contains(&tonic.as_str()) || tonic.ends_with('b')
}
