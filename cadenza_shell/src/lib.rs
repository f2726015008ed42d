// Cadenza shell: presentation and export over the theory core.
//
// The core (`cadenza_theory`) computes scales, chords, modes and modulation
// advice. This crate turns those results into things a user sees or hears:
// pages for a terminal or JSON consumer, Standard MIDI Files, and the
// `cadenza` command line. All logging happens here; the core is silent.
//
// - config.rs: JSON config file (theory settings plus MIDI export settings)
// - pages.rs: KeyPage, ModulationPage, ChordPage
// - render.rs: text tables and JSON output for pages
// - midi.rs: note placement and SMF writing via `midly`
// - cli.rs: argument parsing and command dispatch
// - error.rs: `ShellError`

pub mod cli;
pub mod config;
pub mod error;
pub mod midi;
pub mod pages;
pub mod render;
