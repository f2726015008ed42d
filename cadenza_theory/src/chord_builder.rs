// Chord builder: any chord type on any root, independent of a scale.
//
// Chord types are a fixed table of semitone offsets from the root. Offsets
// above an octave (9ths, 11ths, 13ths) are kept as-is so a voicing can be
// laid out upward; the spelled notes reduce them mod 12. Names use the
// root's own spelling preference, like scales do.

use crate::error::{Result, TheoryError};
use crate::pitch::{Note, Spelling, note_to_index};
use serde::Serialize;

/// A named chord template: semitone offsets from the root, ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordType {
    pub key: &'static str,
    pub name: &'static str,
    pub offsets: &'static [u8],
}

/// Every chord type the builder knows, in display order.
pub const CHORD_TYPES: &[ChordType] = &[
    ChordType { key: "maj", name: "major", offsets: &[0, 4, 7] },
    ChordType { key: "min", name: "minor", offsets: &[0, 3, 7] },
    ChordType { key: "dim", name: "diminished", offsets: &[0, 3, 6] },
    ChordType { key: "aug", name: "augmented", offsets: &[0, 4, 8] },
    ChordType { key: "sus2", name: "suspended second", offsets: &[0, 2, 7] },
    ChordType { key: "sus4", name: "suspended fourth", offsets: &[0, 5, 7] },
    ChordType { key: "6", name: "major sixth", offsets: &[0, 4, 7, 9] },
    ChordType { key: "m6", name: "minor sixth", offsets: &[0, 3, 7, 9] },
    ChordType { key: "7", name: "dominant seventh", offsets: &[0, 4, 7, 10] },
    ChordType { key: "maj7", name: "major seventh", offsets: &[0, 4, 7, 11] },
    ChordType { key: "m7", name: "minor seventh", offsets: &[0, 3, 7, 10] },
    ChordType { key: "m7b5", name: "half-diminished seventh", offsets: &[0, 3, 6, 10] },
    ChordType { key: "dim7", name: "diminished seventh", offsets: &[0, 3, 6, 9] },
    ChordType { key: "9", name: "dominant ninth", offsets: &[0, 4, 7, 10, 14] },
    ChordType { key: "maj9", name: "major ninth", offsets: &[0, 4, 7, 11, 14] },
    ChordType { key: "m9", name: "minor ninth", offsets: &[0, 3, 7, 10, 14] },
    ChordType { key: "11", name: "dominant eleventh", offsets: &[0, 4, 7, 10, 14, 17] },
    ChordType { key: "13", name: "dominant thirteenth", offsets: &[0, 4, 7, 10, 14, 17, 21] },
];

/// Look up a chord type by its table key.
pub fn chord_type(key: &str) -> Result<&'static ChordType> {
    let key = key.trim();
    CHORD_TYPES
        .iter()
        .find(|t| t.key == key)
        .ok_or_else(|| TheoryError::UnsupportedChordType(key.to_string()))
}

/// A chord built from a root and a chord type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltChord {
    pub root: Note,
    pub chord_type: ChordType,
    pub notes: Vec<Note>,
}

impl BuiltChord {
    /// Chord symbol; plain major triads print as the bare root.
    pub fn symbol(&self) -> String {
        match self.chord_type.key {
            "maj" => self.root.name.to_string(),
            "min" => format!("{}m", self.root.name),
            key => format!("{}{key}", self.root.name),
        }
    }

    /// Semitone offsets from the root, for laying out an upward voicing.
    pub fn offsets(&self) -> &'static [u8] {
        self.chord_type.offsets
    }
}

/// Build `kind` on `root`, spelled with the root's preferred table.
pub fn build_chord(root: &str, kind: &str) -> Result<BuiltChord> {
    let root_pc = note_to_index(root)?;
    let chord_type = chord_type(kind)?;
    let spelling = Spelling::for_tonic(root);
    let notes = chord_type
        .offsets
        .iter()
        .map(|&offset| spelling.note(root_pc.transpose(i32::from(offset))))
        .collect();
    Ok(BuiltChord {
        root: spelling.note(root_pc),
        chord_type: *chord_type,
        notes,
    })
}
