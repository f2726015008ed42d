// Command-line parsing and dispatch for the `cadenza` binary.
//
// Uses simple `std::env::args()` matching, no clap. Parsing produces a
// `CliArgs` value; `run` turns it into page output (text or JSON) and, when
// `--midi` is given, writes the page's MIDI rendition. Both are plain
// functions over their inputs so they can be tested without a process.
//
// Usage:
//   cadenza key <KEY> [--mode major|minor] [--spelling auto|sharps|flats]
//   cadenza modulate <FROM> <TO> [--min-common N] [--max N]
//   cadenza chord <ROOT> <TYPE>
// Global options: --json, --config <PATH>, --midi <PATH>

use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::midi::write_midi;
use crate::pages::{ChordPage, KeyPage, ModulationPage};
use crate::render::{render_chord_page, render_key_page, render_modulation_page, to_json};
use cadenza_theory::{CHORD_TYPES, Key, ScaleMode, SpellingPreference};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Key(String),
    Modulate { origin: String, destination: String },
    Chord { root: String, kind: String },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub json: bool,
    pub config_path: Option<PathBuf>,
    pub midi_path: Option<PathBuf>,
    pub mode: Option<ScaleMode>,
    pub spelling: Option<SpellingPreference>,
    pub min_common_tones: Option<usize>,
    pub max_results: Option<usize>,
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ShellError::Usage(format!("{flag} requires a value")))
}

fn parse_number(value: &str, flag: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| ShellError::Usage(format!("{flag} requires a number, got {value:?}")))
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut positional: Vec<&str> = Vec::new();
    let mut parsed = CliArgs {
        command: Command::Help,
        json: false,
        config_path: None,
        midi_path: None,
        mode: None,
        spelling: None,
        min_common_tones: None,
        max_results: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => parsed.json = true,
            "--config" => parsed.config_path = Some(flag_value(args, &mut i, "--config")?.into()),
            "--midi" => parsed.midi_path = Some(flag_value(args, &mut i, "--midi")?.into()),
            "--mode" => parsed.mode = Some(flag_value(args, &mut i, "--mode")?.parse()?),
            "--spelling" => {
                let value = flag_value(args, &mut i, "--spelling")?;
                parsed.spelling = Some(value.parse().map_err(ShellError::Usage)?);
            }
            "--min-common" => {
                let value = flag_value(args, &mut i, "--min-common")?;
                parsed.min_common_tones = Some(parse_number(value, "--min-common")?);
            }
            "--max" => {
                let value = flag_value(args, &mut i, "--max")?;
                parsed.max_results = Some(parse_number(value, "--max")?);
            }
            "--help" | "-h" => return Ok(parsed),
            flag if flag.starts_with("--") => {
                return Err(ShellError::Usage(format!("unknown option {flag}")));
            }
            value => positional.push(value),
        }
        i += 1;
    }

    parsed.command = match positional.as_slice() {
        [] | ["help"] => Command::Help,
        ["key", key] => Command::Key(key.to_string()),
        ["modulate", origin, destination] => Command::Modulate {
            origin: origin.to_string(),
            destination: destination.to_string(),
        },
        ["chord", root, kind] => Command::Chord {
            root: root.to_string(),
            kind: kind.to_string(),
        },
        other => {
            return Err(ShellError::Usage(format!(
                "unrecognized command {:?}",
                other.join(" ")
            )));
        }
    };
    Ok(parsed)
}

pub fn usage() -> String {
    let kinds: Vec<&str> = CHORD_TYPES.iter().map(|t| t.key).collect();
    format!(
        "Usage:
  cadenza key <KEY> [--mode major|minor] [--spelling auto|sharps|flats]
  cadenza modulate <FROM> <TO> [--min-common N] [--max N]
  cadenza chord <ROOT> <TYPE>

Options:
  --json            Print the page as JSON
  --config <PATH>   Load settings from a JSON config file
  --midi <PATH>     Also write the page as a MIDI file
  --help, -h        Show this help

Keys: C, F#, Bb, E♭, Am, C#m, Bbmin ...
Chord types: {}",
        kinds.join(", ")
    )
}

/// Execute a parsed command and return what should be printed.
pub fn run(args: &CliArgs) -> Result<String> {
    let mut config = match &args.config_path {
        Some(path) => ShellConfig::load(path)?,
        None => ShellConfig::default(),
    };
    if let Some(spelling) = args.spelling {
        config.theory.spelling = spelling;
    }
    if let Some(n) = args.min_common_tones {
        config.theory.pivot.min_common_tones = n;
    }
    if let Some(n) = args.max_results {
        config.theory.pivot.max_results = n;
    }

    match &args.command {
        Command::Help => Ok(format!("{}\n", usage())),
        Command::Key(name) => {
            let mut key = Key::parse(name)?;
            if let Some(mode) = args.mode {
                key.mode = mode;
            }
            let page = KeyPage::build(&key, &config.theory)?;
            if let Some(path) = &args.midi_path {
                write_midi(&page.midi(&config.export)?, path)?;
            }
            if args.json { to_json(&page) } else { Ok(render_key_page(&page)) }
        }
        Command::Modulate {
            origin,
            destination,
        } => {
            let page = ModulationPage::build(origin, destination, &config.theory.pivot)?;
            if let Some(path) = &args.midi_path {
                write_midi(&page.midi(&config.export)?, path)?;
            }
            if args.json { to_json(&page) } else { Ok(render_modulation_page(&page)) }
        }
        Command::Chord { root, kind } => {
            let page = ChordPage::build(root, kind)?;
            if let Some(path) = &args.midi_path {
                write_midi(&page.midi(&config.export)?, path)?;
            }
            if args.json { to_json(&page) } else { Ok(render_chord_page(&page)) }
        }
    }
}
