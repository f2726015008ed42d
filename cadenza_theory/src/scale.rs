// Seven-note diatonic scales built from a tonic and a mode.
//
// A scale is constructed by walking a step pattern (semitones between
// successive degrees) from the tonic and naming each pitch class from the
// spelling table chosen once for the tonic. Only six of the seven steps are
// applied; the seventh would land back on the tonic.
//
// Also holds the key-level helpers the pages need: relative major/minor and
// `Key`, a tonic plus mode parsed from strings like "F#m" or "Bb".
//
// See `chord.rs` for stacking thirds on these scales and `mode.rs` for modal
// rotations.

use crate::error::{Result, TheoryError};
use crate::pitch::{
    Note, PitchClass, Spelling, SpellingPreference, normalize_accidentals, note_to_index,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of notes in every scale this crate builds.
pub const SCALE_LEN: usize = 7;

/// The two tonal modes a key can be built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    Major,
    NaturalMinor,
}

impl ScaleMode {
    /// Semitones between successive degrees, degree 1 to the octave.
    pub fn steps(self) -> [u8; 7] {
        match self {
            ScaleMode::Major => [2, 2, 1, 2, 2, 2, 1],
            ScaleMode::NaturalMinor => [2, 1, 2, 2, 1, 2, 2],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScaleMode::Major => "major",
            ScaleMode::NaturalMinor => "minor",
        }
    }
}

impl FromStr for ScaleMode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" | "maj" | "ionian" => Ok(ScaleMode::Major),
            "minor" | "min" | "natural-minor" | "natural_minor" | "aeolian" => {
                Ok(ScaleMode::NaturalMinor)
            }
            _ => Err(TheoryError::UnknownMode(s.to_string())),
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Scale
// ---------------------------------------------------------------------------

/// An immutable seven-note scale, starting at the tonic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub tonic: Note,
    pub mode: ScaleMode,
    pub spelling: Spelling,
    pub notes: [Note; SCALE_LEN],
}

/// Build a scale with the spelling the tonic implies.
pub fn build_scale(tonic: &str, mode: ScaleMode) -> Result<Scale> {
    build_scale_with(tonic, mode, SpellingPreference::Auto)
}

/// Build a scale, optionally forcing one spelling table.
pub fn build_scale_with(
    tonic: &str,
    mode: ScaleMode,
    preference: SpellingPreference,
) -> Result<Scale> {
    let start = note_to_index(tonic)?;
    let spelling = preference.resolve(tonic);
    let steps = mode.steps();

    let mut notes = [spelling.note(start); SCALE_LEN];
    let mut pc = start;
    for (slot, &step) in notes.iter_mut().skip(1).zip(&steps[..SCALE_LEN - 1]) {
        pc = pc.transpose(i32::from(step));
        *slot = spelling.note(pc);
    }

    Ok(Scale {
        tonic: notes[0],
        mode,
        spelling,
        notes,
    })
}

/// Zero-based position of a 1-based degree, wrapping in both directions.
/// Computed in `i64` so the whole `i32` range is valid.
pub fn degree_index(degree: i32) -> usize {
    (i64::from(degree) - 1).rem_euclid(SCALE_LEN as i64) as usize
}

/// Relative major of a minor tonic: three semitones up.
pub fn relative_major_pc(minor_tonic: PitchClass) -> PitchClass {
    minor_tonic.transpose(3)
}

impl Scale {
    /// The note at a 1-based degree; any integer is valid.
    pub fn degree(&self, degree: i32) -> Note {
        self.notes[degree_index(degree)]
    }

    pub fn pitch_classes(&self) -> [PitchClass; SCALE_LEN] {
        self.notes.map(|n| n.pc)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|n| n.name).collect()
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.iter().any(|n| n.pc == pc)
    }

    /// The relative minor tonic of a major scale (degree 6).
    pub fn relative_minor(&self) -> Note {
        self.degree(6)
    }

    /// The tonic of the relative key, in this scale's spelling: degree 6 for
    /// a major scale, three semitones up for a minor one.
    pub fn relative_key(&self) -> Key {
        match self.mode {
            ScaleMode::Major => Key {
                tonic: self.relative_minor().name.to_string(),
                mode: ScaleMode::NaturalMinor,
            },
            ScaleMode::NaturalMinor => Key {
                tonic: self.spelling.name_of(relative_major_pc(self.tonic.pc)).to_string(),
                mode: ScaleMode::Major,
            },
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// A tonic name plus a mode, e.g. `F#m` or `Bb`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub tonic: String,
    pub mode: ScaleMode,
}

impl Key {
    pub fn new(tonic: &str, mode: ScaleMode) -> Result<Self> {
        note_to_index(tonic)?;
        Ok(Key {
            tonic: normalize_accidentals(tonic),
            mode,
        })
    }

    /// Parse a key name. A trailing `m`, `min` or `minor` selects natural
    /// minor; anything else is major. The root must resolve to a note.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = normalize_accidentals(input);
        let mut chars = normalized.chars();
        let text: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        let (root, mode) = ["minor", "min", "m"]
            .iter()
            .find_map(|suffix| text.strip_suffix(suffix))
            .filter(|root| !root.is_empty())
            .map_or((text.as_str(), ScaleMode::Major), |root| {
                (root, ScaleMode::NaturalMinor)
            });
        if note_to_index(root).is_err() {
            return Err(TheoryError::UnknownNote(input.to_string()));
        }
        Ok(Key {
            tonic: root.to_string(),
            mode,
        })
    }

    pub fn scale(&self, preference: SpellingPreference) -> Result<Scale> {
        build_scale_with(&self.tonic, self.mode, preference)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            ScaleMode::Major => write!(f, "{} major", self.tonic),
            ScaleMode::NaturalMinor => write!(f, "{} minor", self.tonic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f_major_spells_with_flats() {
        let scale = build_scale("F", ScaleMode::Major).unwrap();
        assert_eq!(scale.names(), ["F", "G", "A", "Bb", "C", "D", "E"]);
        assert_eq!(scale.spelling, Spelling::Flats);
    }

    #[test]
    fn test_g_major_spells_with_sharps() {
        let scale = build_scale("G", ScaleMode::Major).unwrap();
        assert_eq!(scale.names(), ["G", "A", "B", "C", "D", "E", "F#"]);
    }

    #[test]
    fn test_a_natural_minor() {
        let scale = build_scale("A", ScaleMode::NaturalMinor).unwrap();
        assert_eq!(scale.names(), ["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_unicode_tonic() {
        let scale = build_scale("F♯", ScaleMode::Major).unwrap();
        assert_eq!(scale.names(), ["F#", "G#", "A#", "B", "C#", "D#", "F"]);
    }

    #[test]
    fn test_forced_spelling() {
        let scale = build_scale_with("D", ScaleMode::Major, SpellingPreference::Flats).unwrap();
        assert_eq!(scale.names(), ["D", "E", "Gb", "G", "A", "B", "Db"]);
    }

    #[test]
    fn test_unknown_tonic_does_not_default() {
        assert_eq!(
            build_scale("X", ScaleMode::Major),
            Err(TheoryError::UnknownNote("X".to_string()))
        );
    }

    #[test]
    fn test_degree_wraps() {
        let scale = build_scale("C", ScaleMode::Major).unwrap();
        assert_eq!(scale.degree(1), scale.degree(8));
        assert_eq!(scale.degree(0).name, "B");
        assert_eq!(scale.degree(-6).name, "C");
        assert_eq!(scale.degree(15).name, "C");
    }

    #[test]
    fn test_degree_extremes() {
        let scale = build_scale("C", ScaleMode::Major).unwrap();
        // i32::MAX - 1 = 7 * 306783378, so it lands on degree 1.
        assert_eq!(scale.degree(i32::MAX).name, "C");
        // i32::MIN - 1 = -2147483649, which is 4 mod 7.
        assert_eq!(scale.degree(i32::MIN).name, "G");
        assert_eq!(degree_index(i32::MAX), 0);
        assert_eq!(degree_index(i32::MIN), 4);
    }

    #[test]
    fn test_relative_keys() {
        let c = build_scale("C", ScaleMode::Major).unwrap();
        assert_eq!(c.relative_minor().name, "A");
        let a = build_scale("A", ScaleMode::NaturalMinor).unwrap();
        assert_eq!(a.relative_key().tonic, "C");
        let g_minor = build_scale("G", ScaleMode::NaturalMinor).unwrap();
        assert_eq!(g_minor.relative_key().tonic, "A#");
    }

    #[test]
    fn test_key_parse() {
        assert_eq!(Key::parse("Am").unwrap(), Key { tonic: "A".into(), mode: ScaleMode::NaturalMinor });
        assert_eq!(Key::parse("F#m").unwrap().tonic, "F#");
        assert_eq!(Key::parse("Bbmin").unwrap().mode, ScaleMode::NaturalMinor);
        assert_eq!(Key::parse("E♭minor").unwrap().tonic, "Eb");
        assert_eq!(Key::parse("Bb").unwrap().mode, ScaleMode::Major);
        assert!(Key::parse("m").is_err());
        assert!(Key::parse("Qm").is_err());
        assert_eq!(Key::parse("dm").unwrap().tonic, "D");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Minor".parse::<ScaleMode>(), Ok(ScaleMode::NaturalMinor));
        assert_eq!("major".parse::<ScaleMode>(), Ok(ScaleMode::Major));
        assert!("lydian".parse::<ScaleMode>().is_err());
    }
}
