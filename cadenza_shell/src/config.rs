// Shell configuration file.
//
// One JSON document carries both the theory settings (`TheoryConfig` from the
// core: spelling preference, pivot-search policy) and the MIDI export
// settings below. Every field is optional; anything missing takes its
// default, so `{}` is a valid config file.
//
// Loaded once by the CLI from `--config <path>` and never mutated afterward.

use crate::error::Result;
use cadenza_theory::TheoryConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// MIDI export parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Octave the first note of each block is placed in (4 = middle C's octave).
    pub octave: u8,
    pub tempo_bpm: u16,
    /// Note-on velocity, clamped to 127.
    pub velocity: u8,
    /// General MIDI program (0 = acoustic grand piano), clamped to 127.
    pub program: u8,
    pub ticks_per_quarter: u16,
    /// Length of each note in a flat note sequence.
    pub note_ticks: u32,
    /// Length of each block in a chord progression.
    pub chord_ticks: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            octave: 4,
            tempo_bpm: 90,
            velocity: 80,
            program: 0,
            ticks_per_quarter: 480,
            note_ticks: 480,
            chord_ticks: 960,
        }
    }
}

/// Everything the CLI reads from its config file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub theory: TheoryConfig,
    pub export: ExportConfig,
}

impl ShellConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_json(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
