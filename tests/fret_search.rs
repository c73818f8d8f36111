//! Integration tests for the fret-window search, its cost ordering, and the
//! rendered fretboard diagram.

use std::collections::BTreeSet;

use lazy_static::lazy_static;
use uke_tabs::{Chord, FretCost, Note, Tab, TabError, ALL_NOTES, QUALITIES, UKULELE_STRINGS};

fn set(notes: &[Note]) -> BTreeSet<Note> {
    notes.iter().copied().collect()
}

lazy_static! {
    /// (written name, expected ukulele fretting) for well-known shapes.
    static ref KNOWN_SHAPES: Vec<(&'static str, Vec<u8>)> = vec![
        ("C", vec![0, 0, 0, 3]),
        ("G", vec![0, 2, 3, 2]),
        ("F", vec![2, 0, 1, 0]),
        ("Cmin", vec![0, 3, 3, 3]),
    ];
}

#[test]
fn covering_more_notes_beats_any_fret_height() {
    // Open GCEA sounds four distinct notes; 0003 doubles the C.
    let more = FretCost::of(&UKULELE_STRINGS, &[0, 0, 0, 0]);
    let fewer = FretCost::of(&UKULELE_STRINGS, &[0, 0, 0, 3]);
    assert!(more < fewer);

    // Still preferred when every fret is higher.
    let high = FretCost::of(&UKULELE_STRINGS, &[5, 5, 5, 5]);
    assert!(high < fewer);
}

#[test]
fn equal_coverage_prefers_the_lower_mean_fret() {
    let low = FretCost::of(&UKULELE_STRINGS, &[1, 1, 1, 1]);
    let high = FretCost::of(&UKULELE_STRINGS, &[2, 2, 2, 2]);
    assert!(low < high);
}

#[test]
fn open_strings_do_not_count_as_spread() {
    // Both cover four notes with mean fret 1.5; the open string is counted
    // at the mean, so 0222 has the smaller spread than 1221.
    let with_open = FretCost::of(&UKULELE_STRINGS, &[0, 2, 2, 2]);
    let without = FretCost::of(&UKULELE_STRINGS, &[1, 2, 2, 1]);
    assert!(with_open < without);
}

#[test]
fn known_ukulele_shapes_are_found() {
    for (name, frets) in KNOWN_SHAPES.iter() {
        let chord = Chord::from_name(name).unwrap();
        let tab = chord.ukulele_tab().unwrap();
        assert_eq!(tab.frets(), frets.as_slice(), "{name}");
    }
}

#[test]
fn exact_cost_ties_take_the_lowest_frets() {
    // Two identical strings make 0,2 and 2,0 cost the same; the
    // lexicographically smaller sequence wins.
    let notes = set(&[Note::C, Note::D]);
    let tab = Tab::find(&notes, &[Note::C, Note::C]).unwrap();
    assert_eq!(tab.frets(), [0u8, 2].as_slice());
}

#[test]
fn every_catalogued_chord_is_fully_playable_on_a_ukulele() {
    for root in ALL_NOTES {
        for quality in QUALITIES {
            let chord = Chord::new(root, quality);
            let tab = Tab::find(&chord.notes(), &UKULELE_STRINGS)
                .unwrap_or_else(|e| panic!("{chord}: {e}"));
            assert_eq!(tab.notes(), chord.notes(), "{chord}");
        }
    }
}

#[test]
fn tab_notes_are_the_sounded_pitch_classes() {
    let tab = Tab::new(vec![0, 0, 0, 3], UKULELE_STRINGS.to_vec()).unwrap();
    assert_eq!(tab.notes(), set(&[Note::C, Note::E, Note::G]));
}

#[test]
fn fret_count_must_match_the_tuning() {
    match Tab::new(vec![0, 0, 0], UKULELE_STRINGS.to_vec()) {
        Err(TabError::WrongStringCount { expected, got }) => {
            assert_eq!(expected, 4);
            assert_eq!(got, 3);
        }
        other => panic!("expected WrongStringCount, got {other:?}"),
    }
}

#[test]
fn unreachable_notes_fail_instead_of_degrading() {
    // A lone C string reaches C..F inside the window; F# is not playable.
    let notes = set(&[Note::Fs]);
    match Tab::find(&notes, &[Note::C]) {
        Err(TabError::NoPlayableFret { string, window, .. }) => {
            assert_eq!(string, Note::C);
            assert_eq!(window, 6);
        }
        other => panic!("expected NoPlayableFret, got {other:?}"),
    }
}

#[test]
fn diagrams_mark_opens_the_nut_and_pressed_frets() {
    let tab = Tab::new(vec![0, 0, 0, 3], UKULELE_STRINGS.to_vec()).unwrap();
    let rendered = tab.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], " 0 0 0 3 ");
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], " ○ ○ ○   ");
    assert_eq!(lines[3], "=========");
    assert_eq!(lines[4], " │ │ │ │ ");
    assert_eq!(lines[5], "—————————");
    assert_eq!(lines[8], " │ │ │ ● ");
    // One marker row and one separator per fret position 1..6.
    assert_eq!(lines.len(), 14);
}
