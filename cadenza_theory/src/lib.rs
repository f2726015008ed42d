// Cadenza theory core.
//
// Pure Western tonal-theory computations: pitch-class arithmetic, major and
// natural-minor scales, diatonic triads and sevenths with quality naming,
// modal rotations, and modulation advice between two keys. Everything here is
// a stateless function of its inputs (tonic, mode, degree), so it is safe to
// call from any number of threads without synchronization. There is no I/O.
//
// Architecture (leaf first):
// - pitch.rs: PitchClass, the two spelling tables, note-name conversion and
//   the circle-of-fifths spelling rule
// - scale.rs: major/natural-minor step patterns, relative keys, `Key` parsing
// - chord.rs: triads/sevenths by stacking scale thirds, quality classification,
//   the diatonic degree table
// - chord_builder.rs: fixed chord-type table on an arbitrary root
// - mode.rs: the seven modal rotations of a major scale
// - modulation.rs: circle-of-fifths distance, pivot-chord search, secondary
//   dominants and tritone substitutes
// - config.rs: spelling and pivot-search settings (JSON)
// - error.rs: `TheoryError`
//
// Rendering, MIDI export and the CLI live in `cadenza_shell`.

pub mod chord;
pub mod chord_builder;
pub mod config;
pub mod error;
pub mod mode;
pub mod modulation;
pub mod pitch;
pub mod scale;

pub use chord::{
    Chord, DiatonicRow, Quality, classify_seventh, classify_triad, diatonic_chords, seventh, triad,
};
pub use chord_builder::{BuiltChord, CHORD_TYPES, ChordType, build_chord};
pub use config::{MAX_PIVOT_RESULTS, PivotConfig, TheoryConfig};
pub use error::{Result, TheoryError};
pub use mode::{Mode, ModeName, modes_for_key, modes_from_major_scale};
pub use modulation::{
    ModulationPair, PivotMatch, Smoothness, circle_distance, find_pivot_chords,
    find_pivot_chords_with, secondary_dominant, tritone_substitute,
};
pub use pitch::{
    Note, NoteName, PitchClass, Spelling, SpellingPreference, index_to_note, note_to_index,
    prefer_flats_for_tonic,
};
pub use scale::{Key, Scale, ScaleMode, build_scale, build_scale_with};
