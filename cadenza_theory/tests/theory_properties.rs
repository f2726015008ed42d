// Property checks over every tonic the pitch tables can name.
//
// These exercise the public API end to end: scale construction for every
// spelling of every pitch class in both modes, degree wraparound, spelling
// consistency, relative-key round trips, pivot-search bounds and the purity
// of every builder (same input, deep-equal output).

use std::collections::HashSet;

use cadenza_theory::pitch::{FLAT_NAMES, SHARP_NAMES};
use cadenza_theory::{
    PivotConfig, Quality, ScaleMode, Smoothness, Spelling, build_scale, circle_distance,
    classify_seventh, classify_triad, find_pivot_chords, find_pivot_chords_with, modes_for_key,
    note_to_index, seventh, triad,
};

fn all_tonics() -> Vec<&'static str> {
    let mut tonics: Vec<&'static str> = SHARP_NAMES.to_vec();
    for name in FLAT_NAMES {
        if !tonics.contains(&name) {
            tonics.push(name);
        }
    }
    tonics
}

const MODES: [ScaleMode; 2] = [ScaleMode::Major, ScaleMode::NaturalMinor];

#[test]
fn every_scale_has_seven_distinct_pitch_classes() {
    for tonic in all_tonics() {
        for mode in MODES {
            let scale = build_scale(tonic, mode).unwrap();
            let pcs: HashSet<_> = scale.notes.iter().map(|n| n.pc).collect();
            assert_eq!(pcs.len(), 7, "{tonic} {mode}");
            assert_eq!(scale.notes[0].pc, note_to_index(tonic).unwrap());
        }
    }
}

#[test]
fn every_scale_uses_one_spelling_table() {
    for tonic in all_tonics() {
        for mode in MODES {
            let scale = build_scale(tonic, mode).unwrap();
            let table = match scale.spelling {
                Spelling::Sharps => SHARP_NAMES,
                Spelling::Flats => FLAT_NAMES,
            };
            for note in &scale.notes {
                assert_eq!(note.name, table[note.pc.value() as usize], "{tonic} {mode}");
            }
            let has_sharp = scale.notes.iter().any(|n| n.name.contains('#'));
            let has_flat = scale.notes.iter().any(|n| n.name.ends_with('b'));
            assert!(!(has_sharp && has_flat), "{tonic} {mode} mixes spellings");
        }
    }
}

#[test]
fn triads_wrap_by_octave_for_every_scale() {
    for tonic in all_tonics() {
        for mode in MODES {
            let scale = build_scale(tonic, mode).unwrap();
            for degree in 1..=7 {
                assert_eq!(triad(&scale, degree), triad(&scale, degree + 7));
                assert_eq!(seventh(&scale, degree), seventh(&scale, degree - 7));
            }
        }
    }
}

#[test]
fn major_keys_follow_the_diatonic_quality_pattern() {
    let expected = [
        Quality::Major,
        Quality::Minor,
        Quality::Minor,
        Quality::Major,
        Quality::Major,
        Quality::Minor,
        Quality::Diminished,
    ];
    let expected_sevenths = [
        Quality::Major7,
        Quality::Minor7,
        Quality::Minor7,
        Quality::Major7,
        Quality::Dominant7,
        Quality::Minor7,
        Quality::HalfDiminished7,
    ];
    for tonic in all_tonics() {
        let scale = build_scale(tonic, ScaleMode::Major).unwrap();
        for (i, (&q, &q7)) in expected.iter().zip(&expected_sevenths).enumerate() {
            let degree = i as i32 + 1;
            let chord = triad(&scale, degree);
            assert_eq!(classify_triad(&chord.notes), q, "{tonic} degree {degree}");
            let sev = seventh(&scale, degree);
            assert_eq!(classify_seventh(&sev.notes, q), q7, "{tonic} degree {degree}");
        }
    }
}

#[test]
fn relative_keys_round_trip() {
    for tonic in all_tonics() {
        let major = build_scale(tonic, ScaleMode::Major).unwrap();
        let minor_tonic = major.relative_minor();
        let minor = build_scale(minor_tonic.name, ScaleMode::NaturalMinor).unwrap();
        let back = minor.relative_key();
        assert_eq!(back.mode, ScaleMode::Major);
        assert_eq!(note_to_index(&back.tonic).unwrap(), major.tonic.pc, "{tonic}");
    }
}

#[test]
fn minor_modes_share_the_minor_collection() {
    for tonic in all_tonics() {
        let minor = build_scale(tonic, ScaleMode::NaturalMinor).unwrap();
        let modes = modes_for_key(&minor).unwrap();
        let aeolian: HashSet<_> = modes[5].notes.iter().map(|n| n.pc).collect();
        let scale: HashSet<_> = minor.notes.iter().map(|n| n.pc).collect();
        assert_eq!(aeolian, scale, "{tonic}");
        assert_eq!(modes[5].final_note().pc, minor.tonic.pc);
    }
}

#[test]
fn pivot_search_respects_threshold_everywhere() {
    let config = PivotConfig {
        min_common_tones: 3,
        max_results: 8,
    };
    for origin in SHARP_NAMES {
        for destination in FLAT_NAMES {
            let pivots = find_pivot_chords_with(origin, destination, &config).unwrap();
            assert!(pivots.len() <= 8);
            for pivot in &pivots {
                let shared: HashSet<_> = pivot.origin.notes.iter().map(|n| n.pc).collect();
                let count = pivot
                    .destination
                    .notes
                    .iter()
                    .filter(|n| shared.contains(&n.pc))
                    .count();
                assert!(count >= 3, "{origin} -> {destination}");
            }
        }
    }
}

#[test]
fn distance_classification_examples() {
    let near = circle_distance("C", "G").unwrap();
    assert_eq!(Smoothness::from_distance(near), Smoothness::VerySmooth);
    let far = circle_distance("C", "F#").unwrap();
    assert!(far.abs() >= 4);
    assert_eq!(Smoothness::from_distance(far), Smoothness::Distant);
}

#[test]
fn builders_are_idempotent() {
    for tonic in ["C", "F#", "Bb", "E♭"] {
        assert_eq!(
            build_scale(tonic, ScaleMode::Major),
            build_scale(tonic, ScaleMode::Major)
        );
        let scale = build_scale(tonic, ScaleMode::NaturalMinor).unwrap();
        assert_eq!(modes_for_key(&scale), modes_for_key(&scale));
        assert_eq!(find_pivot_chords(tonic, "D"), find_pivot_chords(tonic, "D"));
    }
}
