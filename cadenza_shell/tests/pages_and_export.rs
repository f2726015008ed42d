// End-to-end checks of the `cadenza` command surface: argument parsing,
// config files, page output, and MIDI files on disk.

use cadenza_shell::cli::{parse_args, run};
use cadenza_shell::error::ShellError;
use midly::{MidiMessage, Smf, TrackEventKind};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn note_on_keys(smf: &Smf<'_>) -> Vec<u8> {
    smf.tracks[0]
        .iter()
        .filter_map(|event| match event.kind {
            TrackEventKind::Midi {
                message: MidiMessage::NoteOn { key, .. },
                ..
            } => Some(key.as_int()),
            _ => None,
        })
        .collect()
}

#[test]
fn key_command_writes_scale_midi() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("d_major.mid");
    let path_str = path.to_str().unwrap();
    let parsed = parse_args(&args(&["key", "D", "--midi", path_str])).unwrap();
    let out = run(&parsed).unwrap();
    assert!(out.contains("Scale: D, E, F#, G, A, B, C#"));

    let bytes = std::fs::read(&path).unwrap();
    let smf = Smf::parse(&bytes).unwrap();
    // C# is spelled in the same octave as D, so it sits below the tonic.
    assert_eq!(note_on_keys(&smf), [62, 64, 66, 67, 69, 71, 61]);
}

#[test]
fn modulate_json_lists_pivots() {
    let parsed = parse_args(&args(&["modulate", "C", "G", "--json"])).unwrap();
    let out = run(&parsed).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["pair"]["origin"], "C");
    assert_eq!(value["pair"]["destination"], "G");
    assert_eq!(value["pair"]["distance"], 1);
    let pivots = value["pair"]["pivots"].as_array().unwrap();
    assert!(!pivots.is_empty());
    assert!(pivots.len() <= 10);
}

#[test]
fn modulate_cap_from_command_line() {
    let parsed = parse_args(&args(&["modulate", "C", "G", "--max", "2", "--json"])).unwrap();
    let out = run(&parsed).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["pair"]["pivots"].as_array().unwrap().len(), 2);
}

#[test]
fn config_file_changes_spelling_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("cadenza.json");
    std::fs::write(
        &config_path,
        r#"{ "theory": { "spelling": "sharps" }, "export": { "octave": 3 } }"#,
    )
    .unwrap();
    let midi_path = dir.path().join("f.mid");

    let parsed = parse_args(&args(&[
        "key",
        "F",
        "--config",
        config_path.to_str().unwrap(),
        "--midi",
        midi_path.to_str().unwrap(),
    ]))
    .unwrap();
    let out = run(&parsed).unwrap();
    assert!(out.contains("A#"));

    let bytes = std::fs::read(&midi_path).unwrap();
    let smf = Smf::parse(&bytes).unwrap();
    assert_eq!(note_on_keys(&smf)[0], 53);
}

#[test]
fn chord_command_writes_one_block() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("g9.mid");
    let parsed = parse_args(&args(&["chord", "G", "9", "--midi", path.to_str().unwrap()])).unwrap();
    let out = run(&parsed).unwrap();
    assert!(out.starts_with("G9"));

    let bytes = std::fs::read(&path).unwrap();
    let smf = Smf::parse(&bytes).unwrap();
    assert_eq!(note_on_keys(&smf), [67, 71, 74, 77, 81]);
}

#[test]
fn errors_surface_as_shell_errors() {
    let parsed = parse_args(&args(&["chord", "G", "power"])).unwrap();
    assert!(matches!(run(&parsed), Err(ShellError::Theory(_))));

    let parsed = parse_args(&args(&["key", "C", "--config", "/nonexistent/cadenza.json"])).unwrap();
    assert!(matches!(run(&parsed), Err(ShellError::Io(_))));

    assert!(matches!(
        parse_args(&args(&["transpose", "C"])),
        Err(ShellError::Usage(_))
    ));
}
