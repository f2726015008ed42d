// MIDI export of note sequences and chord progressions.
//
// The theory core hands over spelled notes without register. This module
// places them at a MIDI octave (octave 4 by default, so C = key 60) and
// writes a Standard MIDI File. Everything is expressed as a list of blocks:
// each block is a set of keys that start together and stop together after a
// fixed number of ticks. A flat note sequence is a list of one-key blocks; a
// chord progression (e.g. a pivot pair) is a list of chord blocks.
//
// Output is SMF format 0: one track holding a tempo meta event, a program
// change, then the note-on/note-off pairs on channel 0.
//
// Uses the `midly` crate for MIDI writing.

use crate::config::ExportConfig;
use crate::error::{Result, ShellError};
use cadenza_theory::{Note, note_to_index};
use midly::{
    Format, Header, MetaMessage, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use std::path::Path;

/// Highest valid MIDI key number.
const MAX_KEY: u32 = 127;

/// Lowest tempo whose microseconds-per-quarter still fits in 24 bits.
const MIN_TEMPO_BPM: u16 = 4;

/// Largest delta a track event can carry (28-bit variable-length quantity).
const MAX_DELTA_TICKS: u32 = 0x0FFF_FFFF;

const CHANNEL: u8 = 0;

// ---------------------------------------------------------------------------
// Placing notes in a register
// ---------------------------------------------------------------------------

fn key_at(name: &str, pc: u8, octave: u8) -> Result<u8> {
    let key = (u32::from(octave) + 1) * 12 + u32::from(pc);
    if key > MAX_KEY {
        return Err(ShellError::NoteOutOfRange {
            name: name.to_string(),
            octave,
        });
    }
    Ok(key as u8)
}

/// Key numbers for a flat list of note names, all in the same octave.
pub fn note_names_to_keys(names: &[&str], octave: u8) -> Result<Vec<u8>> {
    names
        .iter()
        .map(|name| {
            let pc = note_to_index(name)?;
            key_at(name, pc.value(), octave)
        })
        .collect()
}

/// Close upward voicing: the first note sits in `octave`, each following
/// note is the nearest key strictly above the previous one.
pub fn voice_upward(notes: &[Note], octave: u8) -> Result<Vec<u8>> {
    let mut keys: Vec<u8> = Vec::with_capacity(notes.len());
    for note in notes {
        let key = match keys.last() {
            None => u32::from(key_at(note.name, note.pc.value(), octave)?),
            Some(&prev) => {
                let prev = u32::from(prev);
                let mut key = prev - prev % 12 + u32::from(note.pc.value());
                if key <= prev {
                    key += 12;
                }
                key
            }
        };
        if key > MAX_KEY {
            return Err(ShellError::NoteOutOfRange {
                name: note.name.to_string(),
                octave,
            });
        }
        keys.push(key as u8);
    }
    Ok(keys)
}

/// Keys for a root plus semitone offsets (chord-builder voicings, where
/// extensions above the octave keep their register).
pub fn offsets_to_keys(root: Note, offsets: &[u8], octave: u8) -> Result<Vec<u8>> {
    let base = key_at(root.name, root.pc.value(), octave)?;
    offsets
        .iter()
        .map(|&offset| {
            let key = u32::from(base) + u32::from(offset);
            if key > MAX_KEY {
                return Err(ShellError::NoteOutOfRange {
                    name: root.name.to_string(),
                    octave,
                });
            }
            Ok(key as u8)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// SMF construction
// ---------------------------------------------------------------------------

fn midi_event(delta: u32, message: MidiMessage) -> TrackEvent<'static> {
    TrackEvent {
        delta: u28::new(delta),
        kind: TrackEventKind::Midi {
            channel: u4::new(CHANNEL),
            message,
        },
    }
}

fn blocks_to_smf(blocks: &[Vec<u8>], block_ticks: u32, config: &ExportConfig) -> Smf<'static> {
    let block_ticks = block_ticks.min(MAX_DELTA_TICKS);
    let mut smf = Smf::new(Header::new(
        Format::SingleTrack,
        Timing::Metrical(u15::new(config.ticks_per_quarter.clamp(1, 0x7FFF))),
    ));

    let mut track: Track<'static> = Vec::new();
    let tempo_microseconds = 60_000_000 / u32::from(config.tempo_bpm.max(MIN_TEMPO_BPM));
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::Tempo(u24::new(tempo_microseconds))),
    });
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::TrackName(b"cadenza")),
    });
    track.push(midi_event(
        0,
        MidiMessage::ProgramChange {
            program: u7::new(config.program.min(127)),
        },
    ));

    let velocity = u7::new(config.velocity.min(127));
    for block in blocks {
        for &key in block {
            track.push(midi_event(
                0,
                MidiMessage::NoteOn {
                    key: u7::new(key.min(127)),
                    vel: velocity,
                },
            ));
        }
        // The first note-off carries the block duration; the rest follow at once.
        for (i, &key) in block.iter().enumerate() {
            let delta = if i == 0 { block_ticks } else { 0 };
            track.push(midi_event(
                delta,
                MidiMessage::NoteOff {
                    key: u7::new(key.min(127)),
                    vel: u7::new(0),
                },
            ));
        }
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(MetaMessage::EndOfTrack),
    });
    smf.tracks.push(track);
    smf
}

/// One note after another, each `note_ticks` long.
pub fn sequence_to_smf(keys: &[u8], config: &ExportConfig) -> Smf<'static> {
    let blocks: Vec<Vec<u8>> = keys.iter().map(|&k| vec![k]).collect();
    blocks_to_smf(&blocks, config.note_ticks, config)
}

/// One chord after another, each `chord_ticks` long.
pub fn progression_to_smf(chords: &[Vec<u8>], config: &ExportConfig) -> Smf<'static> {
    blocks_to_smf(chords, config.chord_ticks, config)
}

/// Serialize an SMF to bytes.
pub fn to_bytes(smf: &Smf<'_>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    smf.write_std(&mut buf)?;
    Ok(buf)
}

/// Write an SMF to a file.
pub fn write_midi(smf: &Smf<'_>, path: &Path) -> Result<()> {
    let buf = to_bytes(smf)?;
    std::fs::write(path, &buf)?;
    tracing::info!(path = %path.display(), bytes = buf.len(), "wrote MIDI file");
    Ok(())
}
