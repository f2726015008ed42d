// Plain-text and JSON rendering of pages.
//
// Text output is a set of aligned tables meant for a terminal. JSON output is
// the serde serialization of the page itself, so every field the text view
// shows (and a few it does not, such as pitch classes) is available to other
// tools.

use crate::error::Result;
use crate::pages::{ChordPage, KeyPage, ModulationPage};
use cadenza_theory::{Chord, Spelling};
use serde::Serialize;

/// Pretty-printed JSON for any page.
pub fn to_json<T: Serialize>(page: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(page)?)
}

fn spelling_label(spelling: Spelling) -> &'static str {
    match spelling {
        Spelling::Sharps => "sharps (#)",
        Spelling::Flats => "flats (b)",
    }
}

fn chord_notes(chord: &Chord) -> String {
    chord.names().join(" - ")
}

pub fn render_key_page(page: &KeyPage) -> String {
    let mut out = String::new();
    out.push_str(&format!("Key: {}\n", page.key));
    out.push_str(&format!("Relative key: {}\n", page.relative));
    out.push_str(&format!("Spelling: {}\n", spelling_label(page.scale.spelling)));
    out.push('\n');
    out.push_str(&format!("Scale: {}\n", page.scale));
    out.push('\n');

    out.push_str("Degree Triad            Quality      Seventh\n");
    for row in &page.rows {
        out.push_str(&format!(
            "{:<6} {:<16} {:<12} {} ({})\n",
            row.numeral,
            chord_notes(&row.triad),
            row.triad.quality.display_name(),
            chord_notes(&row.seventh),
            row.seventh.quality,
        ));
    }
    out.push('\n');

    out.push_str("Modes:\n");
    for mode in &page.modes {
        let steps: Vec<String> = mode.name.intervals().iter().map(u8::to_string).collect();
        out.push_str(&format!(
            "  {:<11} {:<28} [{}]\n",
            mode.name.label(),
            mode.names().join(", "),
            steps.join(" ")
        ));
    }
    out
}

pub fn render_modulation_page(page: &ModulationPage) -> String {
    let pair = &page.pair;
    let mut out = String::new();
    out.push_str(&format!("Modulation: {} -> {}\n", pair.origin, pair.destination));
    out.push_str(&format!(
        "Circle-of-fifths distance: {:+} ({})\n",
        pair.distance,
        pair.smoothness.label()
    ));
    out.push_str(&format!("Shared scale notes: {} of 7\n", pair.shared_scale_tones));
    out.push_str(&format!("{}\n", page.advice));
    out.push('\n');

    if pair.pivots.is_empty() {
        out.push_str("No shared diatonic chords.\n");
    } else {
        out.push_str("Pivot chords:\n");
        for pivot in &pair.pivots {
            let common: Vec<&str> = pivot.common_tones.iter().map(|n| n.name).collect();
            out.push_str(&format!(
                "  {:<8} ({:<16}) = {:<8} in {}  [common: {}]\n",
                pivot.origin.symbol(),
                chord_notes(&pivot.origin),
                pivot.destination.symbol(),
                pair.destination,
                common.join(", "),
            ));
        }
    }
    out.push('\n');
    out.push_str(&format!("Secondary dominant: {}\n", pair.secondary_dominant));
    out.push_str(&format!("Tritone substitute: {}\n", pair.tritone_substitute));
    out
}

pub fn render_chord_page(page: &ChordPage) -> String {
    let chord = &page.chord;
    let names: Vec<&str> = chord.notes.iter().map(|n| n.name).collect();
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", page.symbol, chord.chord_type.name));
    out.push_str(&format!("Notes: {}\n", names.join(" - ")));
    let offsets: Vec<String> = chord.offsets().iter().map(u8::to_string).collect();
    out.push_str(&format!("Semitones from root: {}\n", offsets.join(", ")));
    out
}
