// Errors surfaced by the shell: theory validation failures passed through
// unchanged, plus file, JSON and command-line problems.

use cadenza_theory::TheoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Theory(#[from] TheoryError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A note that lands outside the MIDI key range at the requested octave.
    #[error("note {name} at octave {octave} is outside the MIDI key range")]
    NoteOutOfRange { name: String, octave: u8 },
    #[error("usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, ShellError>;
