// Modulation advice between two keys.
//
// Given an origin and a destination tonic this module answers three
// questions:
// - How far apart are the keys? Both tonics are placed on a fixed
//   circle-of-fifths ordering and the signed difference of their positions is
//   classified (same key, very smooth, moderate, distant).
// - Which chords could pivot between them? The 14-chord diatonic inventory
//   (7 triads then 7 sevenths) of each key's major scale is crossed, keeping
//   pairs that share at least `min_common_tones` pitch classes.
// - What chromatic chords lead into the destination? Its secondary dominant
//   (V7 of the new key) and that dominant's tritone substitute.
//
// An empty pivot list is a normal answer, not an error: it tells the caller
// to fall back on the secondary dominant or tritone substitute.
//
// The circle lists both spellings at the seams (Gb/F#, Db/C#), so it has 14
// positions; distances are not wrapped, so callers see e.g. C -> F# as 6.

use crate::chord::{Chord, chord_inventory};
use crate::config::PivotConfig;
use crate::error::Result;
use crate::pitch::{Note, PitchClass, Spelling, normalize_accidentals, note_to_index};
use crate::scale::{ScaleMode, build_scale};
use serde::Serialize;
use std::collections::HashSet;

/// Circle-of-fifths ordering from the flat side through C to the sharp side.
pub const CIRCLE_OF_FIFTHS: [&str; 14] = [
    "Gb", "Db", "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#",
];

/// Index of C in `CIRCLE_OF_FIFTHS`; entries before it are on the flat side.
const CIRCLE_CENTER: usize = 6;

/// Semitones from a key's tonic up to its dominant.
const DOMINANT: i32 = 7;

/// Semitones in a tritone.
const TRITONE: i32 = 6;

// ---------------------------------------------------------------------------
// Circle of fifths
// ---------------------------------------------------------------------------

/// How hard a modulation is, judged by circle-of-fifths distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Smoothness {
    SameKey,
    VerySmooth,
    Moderate,
    Distant,
}

impl Smoothness {
    /// Classify by the magnitude of a signed distance.
    pub fn from_distance(distance: i32) -> Self {
        match distance.unsigned_abs() {
            0 => Smoothness::SameKey,
            1 => Smoothness::VerySmooth,
            2 | 3 => Smoothness::Moderate,
            _ => Smoothness::Distant,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Smoothness::SameKey => "same key",
            Smoothness::VerySmooth => "very smooth",
            Smoothness::Moderate => "moderate",
            Smoothness::Distant => "distant",
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Smoothness::SameKey => "Same key: no modulation needed.",
            Smoothness::VerySmooth => {
                "Neighboring keys share 6 of 7 scale notes; a common chord moves there directly."
            }
            Smoothness::Moderate => "Use a pivot chord or the secondary dominant of the new key.",
            Smoothness::Distant => {
                "Distant keys: chain dominants or use a tritone substitution to get there."
            }
        }
    }
}

/// Position of a tonic on `CIRCLE_OF_FIFTHS`. An exact spelling wins;
/// otherwise the pitch class decides, taking the flat-side entry for
/// flat-spelled tonics where the circle has both.
pub fn circle_position(tonic: &str) -> Result<usize> {
    let pc = note_to_index(tonic)?;
    let name = normalize_accidentals(tonic);
    if let Some(pos) = CIRCLE_OF_FIFTHS.iter().position(|&n| n == name) {
        return Ok(pos);
    }
    let flat_side = Spelling::for_tonic(&name).prefers_flats();
    let candidates: Vec<usize> = CIRCLE_OF_FIFTHS
        .iter()
        .enumerate()
        .filter(|&(_, &n)| note_to_index(n).is_ok_and(|p| p == pc))
        .map(|(i, _)| i)
        .collect();
    let preferred = candidates
        .iter()
        .copied()
        .find(|&i| (i < CIRCLE_CENTER) == flat_side);
    // Every pitch class appears at least once on the circle.
    Ok(preferred.or_else(|| candidates.first().copied()).unwrap_or(CIRCLE_CENTER))
}

/// Signed steps around the circle from `origin` to `destination`.
pub fn circle_distance(origin: &str, destination: &str) -> Result<i32> {
    let from = circle_position(origin)? as i32;
    let to = circle_position(destination)? as i32;
    Ok(to - from)
}

// ---------------------------------------------------------------------------
// Pivot chords
// ---------------------------------------------------------------------------

/// A chord in the origin key paired with one in the destination key that
/// shares enough pitch classes to bridge them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotMatch {
    pub origin: Chord,
    pub destination: Chord,
    /// Shared notes, in origin-chord order and spelling.
    pub common_tones: Vec<Note>,
}

fn common_tones(a: &Chord, b: &Chord) -> Vec<Note> {
    let other: HashSet<PitchClass> = b.notes.iter().map(|n| n.pc).collect();
    a.notes
        .iter()
        .copied()
        .filter(|n| other.contains(&n.pc))
        .collect()
}

/// Pivot pairs with the default policy (2 common tones, at most 10 results).
pub fn find_pivot_chords(origin: &str, destination: &str) -> Result<Vec<PivotMatch>> {
    find_pivot_chords_with(origin, destination, &PivotConfig::default())
}

/// Cross the diatonic inventories of both keys' major scales. Results are in
/// origin-inventory order, then destination-inventory order (triads before
/// sevenths), without duplicate note tuples, and capped at
/// `PivotConfig::result_cap` (never more than ten).
pub fn find_pivot_chords_with(
    origin: &str,
    destination: &str,
    config: &PivotConfig,
) -> Result<Vec<PivotMatch>> {
    let origin_chords = chord_inventory(&build_scale(origin, ScaleMode::Major)?);
    let destination_chords = chord_inventory(&build_scale(destination, ScaleMode::Major)?);

    let mut seen: HashSet<(Vec<&str>, Vec<&str>)> = HashSet::new();
    let mut matches = Vec::new();
    for a in &origin_chords {
        for b in &destination_chords {
            if matches.len() >= config.result_cap() {
                return Ok(matches);
            }
            let shared = common_tones(a, b);
            if shared.len() < config.min_common_tones {
                continue;
            }
            if !seen.insert((a.names(), b.names())) {
                continue;
            }
            matches.push(PivotMatch {
                origin: a.clone(),
                destination: b.clone(),
                common_tones: shared,
            });
        }
    }
    Ok(matches)
}

// ---------------------------------------------------------------------------
// Chromatic approaches
// ---------------------------------------------------------------------------

/// Root of the destination's dominant, spelled per the destination.
fn dominant_root(destination: &str) -> Result<(Note, Spelling)> {
    let pc = note_to_index(destination)?;
    let spelling = Spelling::for_tonic(destination);
    Ok((spelling.note(pc.transpose(DOMINANT)), spelling))
}

/// V7 of the destination key, e.g. `G7` for C.
pub fn secondary_dominant(destination: &str) -> Result<String> {
    let (root, _) = dominant_root(destination)?;
    Ok(format!("{}7", root.name))
}

/// Dominant seventh a tritone above `tonic`, spelled per `tonic`.
pub fn tritone_substitute(tonic: &str) -> Result<String> {
    let pc = note_to_index(tonic)?;
    Ok(tritone_substitute_of(pc, Spelling::for_tonic(tonic)))
}

fn tritone_substitute_of(root: PitchClass, spelling: Spelling) -> String {
    format!("{}7", spelling.name_of(root.transpose(TRITONE)))
}

/// Number of pitch classes two major scales have in common.
pub fn shared_scale_tones(origin: &str, destination: &str) -> Result<usize> {
    let a = build_scale(origin, ScaleMode::Major)?;
    let b = build_scale(destination, ScaleMode::Major)?;
    Ok(a.notes.iter().filter(|n| b.contains(n.pc)).count())
}

// ---------------------------------------------------------------------------
// Full analysis
// ---------------------------------------------------------------------------

/// Everything the advisor knows about moving from one key to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulationPair {
    pub origin: String,
    pub destination: String,
    pub distance: i32,
    pub smoothness: Smoothness,
    pub shared_scale_tones: usize,
    pub pivots: Vec<PivotMatch>,
    /// V7 of the destination.
    pub secondary_dominant: String,
    /// Tritone substitute for that V7, spelled per the destination.
    pub tritone_substitute: String,
}

impl ModulationPair {
    pub fn analyze(origin: &str, destination: &str, config: &PivotConfig) -> Result<Self> {
        let distance = circle_distance(origin, destination)?;
        let (dominant, spelling) = dominant_root(destination)?;
        Ok(ModulationPair {
            origin: normalize_accidentals(origin),
            destination: normalize_accidentals(destination),
            distance,
            smoothness: Smoothness::from_distance(distance),
            shared_scale_tones: shared_scale_tones(origin, destination)?,
            pivots: find_pivot_chords_with(origin, destination, config)?,
            secondary_dominant: format!("{}7", dominant.name),
            tritone_substitute: tritone_substitute_of(dominant.pc, spelling),
        })
    }

    /// True when no diatonic chord bridges the keys and the chromatic
    /// approaches are the only suggestion.
    pub fn needs_chromatic_approach(&self) -> bool {
        self.pivots.is_empty()
    }
}
