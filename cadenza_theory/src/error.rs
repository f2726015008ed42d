// Error taxonomy for the theory core.
//
// Every failure here is a validation failure on caller input: the core never
// guesses a replacement (a malformed tonic is not silently treated as C), so
// the shell can prompt for a correction. An empty pivot search is NOT an
// error; see `modulation.rs`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The note name matched neither spelling table after normalizing
    /// Unicode accidentals.
    #[error("unknown note: {0:?}")]
    UnknownNote(String),
    /// A chord-builder template key that is not in the chord-type table.
    #[error("unsupported chord type: {0:?}")]
    UnsupportedChordType(String),
    /// A mode selector other than major / minor.
    #[error("unknown mode: {0:?} (expected major or minor)")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, TheoryError>;
