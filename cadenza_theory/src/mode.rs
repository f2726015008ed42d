// The seven diatonic modes as rotations of a major scale.
//
// Modes are not built from their own step patterns here: mode i of a key is
// the major scale read starting from its (i+1)th note, so all seven share
// one diatonic collection and one spelling. A minor key shows the modes of
// its relative major (minor tonic + 3 semitones), which is the same
// collection its natural-minor scale uses.
//
// This module provides:
// - `ModeName`, the seven mode identities with their interval patterns
// - `modes_from_major_scale`, the raw rotation
// - `modes_for_key`, which routes a minor scale through its relative major
//
// Used by the shell's key page.

use crate::error::Result;
use crate::pitch::Note;
use crate::scale::{SCALE_LEN, Scale, ScaleMode, build_scale, relative_major_pc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven modes, in rotation order from Ionian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModeName {
    /// C D E F G A B: the major scale.
    Ionian,
    /// D E F G A B C: natural minor with a raised 6th.
    Dorian,
    /// E F G A B C D: the half step from 1 to 2.
    Phrygian,
    /// F G A B C D E: raised 4th.
    Lydian,
    /// G A B C D E F: major with a lowered 7th.
    Mixolydian,
    /// A B C D E F G: natural minor.
    Aeolian,
    /// B C D E F G A: diminished fifth above the final.
    Locrian,
}

impl ModeName {
    pub const ALL: [ModeName; 7] = [
        ModeName::Ionian,
        ModeName::Dorian,
        ModeName::Phrygian,
        ModeName::Lydian,
        ModeName::Mixolydian,
        ModeName::Aeolian,
        ModeName::Locrian,
    ];

    /// Rotation index, 0 (Ionian) through 6 (Locrian).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            ModeName::Ionian => "Ionian",
            ModeName::Dorian => "Dorian",
            ModeName::Phrygian => "Phrygian",
            ModeName::Lydian => "Lydian",
            ModeName::Mixolydian => "Mixolydian",
            ModeName::Aeolian => "Aeolian",
            ModeName::Locrian => "Locrian",
        }
    }

    /// Semitone intervals from the final to each of the 7 degrees.
    pub fn intervals(self) -> [u8; 7] {
        match self {
            ModeName::Ionian => [0, 2, 4, 5, 7, 9, 11],
            ModeName::Dorian => [0, 2, 3, 5, 7, 9, 10],
            ModeName::Phrygian => [0, 1, 3, 5, 7, 8, 10],
            ModeName::Lydian => [0, 2, 4, 6, 7, 9, 11],
            ModeName::Mixolydian => [0, 2, 4, 5, 7, 9, 10],
            ModeName::Aeolian => [0, 2, 3, 5, 7, 8, 10],
            ModeName::Locrian => [0, 1, 3, 5, 6, 8, 10],
        }
    }
}

impl fmt::Display for ModeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One rotation of a major scale, keeping that scale's spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mode {
    pub name: ModeName,
    pub notes: [Note; SCALE_LEN],
}

impl Mode {
    /// The final (first note) of the mode.
    pub fn final_note(&self) -> Note {
        self.notes[0]
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|n| n.name).collect()
    }
}

/// All seven rotations: mode i is `scale[(i + j) mod 7]` for j in 0..7.
pub fn modes_from_major_scale(major_scale: &Scale) -> [Mode; 7] {
    ModeName::ALL.map(|name| {
        let i = name.index();
        Mode {
            name,
            notes: std::array::from_fn(|j| major_scale.notes[(i + j) % SCALE_LEN]),
        }
    })
}

/// The modes shown for a key. Major keys rotate their own scale; minor keys
/// rotate the relative major, named in the minor tonic's spelling and then
/// built as a major scale from that name.
pub fn modes_for_key(scale: &Scale) -> Result<[Mode; 7]> {
    match scale.mode {
        ScaleMode::Major => Ok(modes_from_major_scale(scale)),
        ScaleMode::NaturalMinor => {
            let relative = scale.spelling.name_of(relative_major_pc(scale.tonic.pc));
            let major = build_scale(relative, ScaleMode::Major)?;
            Ok(modes_from_major_scale(&major))
        }
    }
}
