// Pages: the shell's adapters over the theory core.
//
// Each page gathers the core results one screen needs and knows how to turn
// them into MIDI. Pages hold no state between calls; building the same page
// twice gives equal values.
//
// - `KeyPage`: scale, relative key, diatonic triads/sevenths, seven modes.
// - `ModulationPage`: distance, smoothness, pivot pairs and chromatic
//   approaches between two keys.
// - `ChordPage`: one chord from the chord-type table.
//
// Rendering lives in `render.rs`; the MIDI byte layout in `midi.rs`.

use crate::config::ExportConfig;
use crate::error::Result;
use crate::midi::{
    note_names_to_keys, offsets_to_keys, progression_to_smf, sequence_to_smf, voice_upward,
};
use cadenza_theory::{
    BuiltChord, DiatonicRow, Key, Mode, ModulationPair, PivotConfig, Scale, ScaleMode,
    TheoryConfig, build_chord, build_scale, diatonic_chords, index_to_note, modes_for_key,
    note_to_index, prefer_flats_for_tonic, triad,
};
use midly::Smf;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Key page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyPage {
    pub key: Key,
    pub scale: Scale,
    pub relative: Key,
    pub rows: Vec<DiatonicRow>,
    pub modes: [Mode; 7],
}

impl KeyPage {
    pub fn build(key: &Key, config: &TheoryConfig) -> Result<Self> {
        let scale = key.scale(config.spelling)?;
        let modes = modes_for_key(&scale)?;
        tracing::debug!(%key, spelling = ?scale.spelling, "built key page");
        Ok(KeyPage {
            key: key.clone(),
            relative: scale.relative_key(),
            rows: diatonic_chords(&scale),
            modes,
            scale,
        })
    }

    /// The scale as a flat note list in the configured octave.
    pub fn midi(&self, export: &ExportConfig) -> Result<Smf<'static>> {
        let keys = note_names_to_keys(&self.scale.names(), export.octave)?;
        Ok(sequence_to_smf(&keys, export))
    }
}

// ---------------------------------------------------------------------------
// Modulation page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModulationPage {
    pub pair: ModulationPair,
    pub advice: &'static str,
}

impl ModulationPage {
    pub fn build(origin: &str, destination: &str, pivot: &PivotConfig) -> Result<Self> {
        let pair = ModulationPair::analyze(origin, destination, pivot)?;
        tracing::debug!(
            origin,
            destination,
            distance = pair.distance,
            pivots = pair.pivots.len(),
            "built modulation page"
        );
        if pair.needs_chromatic_approach() {
            tracing::info!(origin, destination, "no pivot chords; suggesting chromatic approach");
        }
        Ok(ModulationPage {
            advice: pair.smoothness.advice(),
            pair,
        })
    }

    /// Chord blocks to audition the modulation. With pivots: each pivot pair
    /// (origin chord, then its destination reading) followed by the
    /// destination tonic. Without: the secondary dominant resolving to the
    /// destination tonic.
    pub fn progression(&self, octave: u8) -> Result<Vec<Vec<u8>>> {
        let destination = build_scale(&self.pair.destination, ScaleMode::Major)?;
        let tonic = voice_upward(&triad(&destination, 1).notes, octave)?;

        let mut blocks = Vec::new();
        if self.pair.pivots.is_empty() {
            let dest_pc = note_to_index(&self.pair.destination)?;
            let root = index_to_note(
                i32::from(dest_pc.value()) + 7,
                prefer_flats_for_tonic(&self.pair.destination),
            );
            let dominant = build_chord(root, "7")?;
            blocks.push(offsets_to_keys(dominant.root, dominant.offsets(), octave)?);
        } else {
            for pivot in &self.pair.pivots {
                blocks.push(voice_upward(&pivot.origin.notes, octave)?);
                blocks.push(voice_upward(&pivot.destination.notes, octave)?);
            }
        }
        blocks.push(tonic);
        Ok(blocks)
    }

    pub fn midi(&self, export: &ExportConfig) -> Result<Smf<'static>> {
        Ok(progression_to_smf(&self.progression(export.octave)?, export))
    }
}

// ---------------------------------------------------------------------------
// Chord page
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChordPage {
    pub chord: BuiltChord,
    pub symbol: String,
}

impl ChordPage {
    pub fn build(root: &str, kind: &str) -> Result<Self> {
        let chord = build_chord(root, kind)?;
        tracing::debug!(root, kind, "built chord page");
        Ok(ChordPage {
            symbol: chord.symbol(),
            chord,
        })
    }

    pub fn midi(&self, export: &ExportConfig) -> Result<Smf<'static>> {
        let keys = offsets_to_keys(self.chord.root, self.chord.offsets(), export.octave)?;
        Ok(progression_to_smf(&[keys], export))
    }
}
