// Diatonic chords: stacking scale-relative thirds and naming the result.
//
// A triad on degree d takes scale positions (d-1, d+1, d+3) mod 7, and a
// seventh chord adds (d+5) mod 7. Because every note comes from the scale
// itself, the chord is spelled with the scale's own names and its quality
// (major on I, minor on ii, diminished on vii in a major key, and so on)
// falls out of the scale without any interval table.
//
// Quality is then recovered from interval content:
// - triads from the two stacked thirds: (4,3) maj, (3,4) min, (3,3) dim,
//   anything else unknown. Augmented triads never arise from diatonic
//   stacking so this classifier does not look for them.
// - sevenths from the triad quality plus the root-to-seventh interval, with
//   every unmatched combination defaulting to dominant 7.
//
// The free-standing chord builder (arbitrary root + chord-type template)
// lives in `chord_builder.rs`.

use crate::pitch::Note;
use crate::scale::{SCALE_LEN, Scale, degree_index};
use serde::Serialize;
use std::fmt;

/// Chord quality tags for triads and seventh chords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Dominant7,
    Major7,
    Minor7,
    HalfDiminished7,
    Unknown,
}

impl Quality {
    /// Short tag: maj, min, dim, aug, 7, maj7, m7, m7b5 or unknown.
    pub fn tag(self) -> &'static str {
        match self {
            Quality::Major => "maj",
            Quality::Minor => "min",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::Dominant7 => "7",
            Quality::Major7 => "maj7",
            Quality::Minor7 => "m7",
            Quality::HalfDiminished7 => "m7b5",
            Quality::Unknown => "unknown",
        }
    }

    /// Suffix appended to the root name in a chord symbol.
    pub fn suffix(self) -> &'static str {
        match self {
            Quality::Major => "",
            Quality::Minor => "m",
            Quality::Diminished => "dim",
            Quality::Augmented => "aug",
            Quality::Dominant7 => "7",
            Quality::Major7 => "maj7",
            Quality::Minor7 => "m7",
            Quality::HalfDiminished7 => "m7b5",
            Quality::Unknown => "?",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Quality::Major => "major",
            Quality::Minor => "minor",
            Quality::Diminished => "diminished",
            Quality::Augmented => "augmented",
            Quality::Dominant7 => "dominant seventh",
            Quality::Major7 => "major seventh",
            Quality::Minor7 => "minor seventh",
            Quality::HalfDiminished7 => "half-diminished seventh",
            Quality::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A triad or seventh chord drawn from a scale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Chord {
    /// 1-based degree of the root within its scale (normalized to 1-7).
    pub degree: u8,
    pub notes: Vec<Note>,
    pub quality: Quality,
}

impl Chord {
    pub fn root(&self) -> Note {
        self.notes[0]
    }

    /// Chord symbol such as `Dm`, `G7` or `Bm7b5`.
    pub fn symbol(&self) -> String {
        format!("{}{}", self.root().name, self.quality.suffix())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.notes.iter().map(|n| n.name).collect()
    }

    pub fn is_seventh(&self) -> bool {
        self.notes.len() == 4
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol(), self.names().join(" - "))
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

fn stack_thirds(scale: &Scale, degree: i32, count: usize) -> Vec<Note> {
    let root = degree_index(degree);
    (0..count)
        .map(|k| scale.notes[(root + 2 * k) % SCALE_LEN])
        .collect()
}

fn normalized_degree(degree: i32) -> u8 {
    degree_index(degree) as u8 + 1
}

/// Root, third and fifth above `degree`, spelled from the scale.
pub fn triad(scale: &Scale, degree: i32) -> Chord {
    let notes = stack_thirds(scale, degree, 3);
    let quality = classify_triad(&notes);
    Chord {
        degree: normalized_degree(degree),
        notes,
        quality,
    }
}

/// The triad on `degree` plus the scale's seventh above the root.
pub fn seventh(scale: &Scale, degree: i32) -> Chord {
    let notes = stack_thirds(scale, degree, 4);
    let quality = classify_seventh(&notes, classify_triad(&notes[..3]));
    Chord {
        degree: normalized_degree(degree),
        notes,
        quality,
    }
}

/// Classify a triad from its two stacked intervals.
pub fn classify_triad(notes: &[Note]) -> Quality {
    let [root, third, fifth, ..] = notes else {
        return Quality::Unknown;
    };
    let i1 = root.pc.interval_to(third.pc);
    let i2 = third.pc.interval_to(fifth.pc);
    match (i1, i2) {
        (4, 3) => Quality::Major,
        (3, 4) => Quality::Minor,
        (3, 3) => Quality::Diminished,
        _ => Quality::Unknown,
    }
}

/// Name a seventh chord from its triad quality and root-to-seventh interval.
/// Anything unrecognized is reported as dominant 7.
pub fn classify_seventh(notes: &[Note], triad_quality: Quality) -> Quality {
    let [root, _, _, seventh, ..] = notes else {
        return Quality::Dominant7;
    };
    match (triad_quality, root.pc.interval_to(seventh.pc)) {
        (Quality::Major, 11) => Quality::Major7,
        (Quality::Major, 10) => Quality::Dominant7,
        (Quality::Minor, 10) => Quality::Minor7,
        (Quality::Diminished, 10) => Quality::HalfDiminished7,
        _ => Quality::Dominant7,
    }
}

// ---------------------------------------------------------------------------
// Degree table
// ---------------------------------------------------------------------------

/// One row of the diatonic chord table: a degree with its triad and seventh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiatonicRow {
    pub degree: u8,
    pub numeral: String,
    pub triad: Chord,
    pub seventh: Chord,
}

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Roman numeral for a degree, cased by triad quality: upper case for major
/// and augmented, lower case for minor and diminished, `°` marks diminished.
pub fn roman_numeral(degree: i32, quality: Quality) -> String {
    let base = NUMERALS[degree_index(degree)];
    match quality {
        Quality::Minor => base.to_lowercase(),
        Quality::Diminished => format!("{}°", base.to_lowercase()),
        Quality::Augmented => format!("{base}+"),
        _ => base.to_string(),
    }
}

/// Triads and sevenths on all seven degrees, in degree order.
pub fn diatonic_chords(scale: &Scale) -> Vec<DiatonicRow> {
    (1..=7)
        .map(|degree| {
            let triad = triad(scale, degree);
            let seventh = seventh(scale, degree);
            DiatonicRow {
                degree: triad.degree,
                numeral: roman_numeral(degree, triad.quality),
                triad,
                seventh,
            }
        })
        .collect()
}

/// All 7 triads followed by all 7 sevenths of a scale.
pub fn chord_inventory(scale: &Scale) -> Vec<Chord> {
    let triads = (1..=7).map(|d| triad(scale, d));
    let sevenths = (1..=7).map(|d| seventh(scale, d));
    triads.chain(sevenths).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{ScaleMode, build_scale};

    fn c_major() -> Scale {
        build_scale("C", ScaleMode::Major).unwrap()
    }

    #[test]
    fn test_c_major_triad_qualities() {
        let scale = c_major();
        assert_eq!(triad(&scale, 1).quality, Quality::Major);
        assert_eq!(triad(&scale, 2).quality, Quality::Minor);
        assert_eq!(triad(&scale, 7).quality, Quality::Diminished);
        assert_eq!(triad(&scale, 7).names(), ["B", "D", "F"]);
    }

    #[test]
    fn test_degree_wraparound() {
        let scale = c_major();
        assert_eq!(triad(&scale, 8), triad(&scale, 1));
        assert_eq!(triad(&scale, 0), triad(&scale, 7));
        assert_eq!(seventh(&scale, -5), seventh(&scale, 2));
    }

    #[test]
    fn test_extreme_degrees() {
        let scale = c_major();
        // i32::MAX reduces to degree 1 and i32::MIN to degree 5.
        assert_eq!(triad(&scale, i32::MAX), triad(&scale, 1));
        assert_eq!(seventh(&scale, i32::MAX), seventh(&scale, 1));
        assert_eq!(triad(&scale, i32::MIN), triad(&scale, 5));
        assert_eq!(seventh(&scale, i32::MIN).names(), ["G", "B", "D", "F"]);
        assert_eq!(roman_numeral(i32::MIN, Quality::Major), "V");
        assert_eq!(roman_numeral(i32::MAX, Quality::Major), "I");
    }

    #[test]
    fn test_seventh_naming() {
        let scale = c_major();
        let g7 = seventh(&scale, 5);
        assert_eq!(g7.names(), ["G", "B", "D", "F"]);
        assert_eq!(classify_seventh(&g7.notes, Quality::Major), Quality::Dominant7);
        assert_eq!(g7.symbol(), "G7");
        assert_eq!(seventh(&scale, 1).quality, Quality::Major7);
        assert_eq!(seventh(&scale, 2).quality, Quality::Minor7);
        assert_eq!(seventh(&scale, 7).quality, Quality::HalfDiminished7);
        assert_eq!(seventh(&scale, 7).symbol(), "Bm7b5");
    }

    #[test]
    fn test_ambiguous_seventh_defaults_to_dominant() {
        let scale = c_major();
        let cmaj7 = seventh(&scale, 1);
        // Major triad with a major seventh, but claimed minor.
        assert_eq!(classify_seventh(&cmaj7.notes, Quality::Minor), Quality::Dominant7);
        assert_eq!(classify_seventh(&cmaj7.notes[..3], Quality::Major), Quality::Dominant7);
    }

    #[test]
    fn test_classify_triad_unknown() {
        let scale = c_major();
        // C E G# is augmented: not recognized by the diatonic classifier.
        let aug = [scale.degree(1), scale.degree(3), crate::pitch::Note::parse("G#").unwrap()];
        assert_eq!(classify_triad(&aug), Quality::Unknown);
        assert_eq!(classify_triad(&aug[..2]), Quality::Unknown);
    }

    #[test]
    fn test_minor_scale_qualities() {
        let scale = build_scale("A", ScaleMode::NaturalMinor).unwrap();
        let rows = diatonic_chords(&scale);
        let numerals: Vec<_> = rows.iter().map(|r| r.numeral.as_str()).collect();
        assert_eq!(numerals, ["i", "ii°", "III", "iv", "v", "VI", "VII"]);
    }

    #[test]
    fn test_diatonic_table_major() {
        let rows = diatonic_chords(&c_major());
        let numerals: Vec<_> = rows.iter().map(|r| r.numeral.as_str()).collect();
        assert_eq!(numerals, ["I", "ii", "iii", "IV", "V", "vi", "vii°"]);
        assert_eq!(rows[4].seventh.symbol(), "G7");
    }

    #[test]
    fn test_inventory_has_fourteen_chords() {
        let inventory = chord_inventory(&c_major());
        assert_eq!(inventory.len(), 14);
        assert!(inventory[..7].iter().all(|c| c.notes.len() == 3));
        assert!(inventory[7..].iter().all(Chord::is_seventh));
    }
}
