//! Chords
//!
//! The chord-quality catalog, the rotation-based root finder, and the
//! `Chord` type built on both.

use std::collections::BTreeSet;
use std::fmt::{self, Display};
use thiserror::Error;

use crate::note::{join_notes, Note};
use crate::tab::{Tab, TabError, UKULELE_STRINGS};

/// Number of chord qualities in the catalog.
pub const NUM_QUALITIES: usize = 10;

/// Chord qualities in match order.
///
/// Order is a tie-break: when a name or a note set fits more than one
/// quality, the earlier entry wins.
pub const QUALITIES: [Quality; NUM_QUALITIES] = [
    Quality::Diminished,
    Quality::DiminishedSeventh,
    Quality::MinorSeventh,
    Quality::Minor,
    Quality::Augmented,
    Quality::DominantSeventh,
    Quality::MajorSeventh,
    Quality::Major,
    Quality::SuspendedFourth,
    Quality::SuspendedSecond,
];

/// Supported chord qualities.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Quality {
    /// Diminished triad (e.g. C-Eb-Gb)
    Diminished,
    /// Diminished seventh chord (e.g. C-Eb-Gb-A)
    DiminishedSeventh,
    /// Minor seventh chord (e.g. C-Eb-G-Bb)
    MinorSeventh,
    /// Minor triad (e.g. C-Eb-G)
    Minor,
    /// Augmented triad (e.g. C-E-G#)
    Augmented,
    /// Dominant seventh chord (e.g. C-E-G-Bb)
    DominantSeventh,
    /// Major seventh chord (e.g. C-E-G-B)
    MajorSeventh,
    /// Major triad (e.g. C-E-G)
    Major,
    /// Suspended fourth chord (e.g. C-F-G)
    SuspendedFourth,
    /// Suspended second chord (e.g. C-D-G), a rotation of sus4
    SuspendedSecond,
}

impl Quality {
    /// Semitone steps between successive chord tones, the last step wrapping
    /// back up to the root. Every pattern sums to 12.
    pub const fn steps(self) -> &'static [u8] {
        match self {
            Quality::Diminished => &[3, 3, 6],
            Quality::DiminishedSeventh => &[3, 3, 3, 3],
            Quality::MinorSeventh => &[3, 4, 3, 2],
            Quality::Minor => &[3, 4, 5],
            Quality::Augmented => &[4, 4, 4],
            Quality::DominantSeventh => &[4, 3, 3, 2],
            Quality::MajorSeventh => &[4, 3, 4, 1],
            Quality::Major => &[4, 3, 5],
            Quality::SuspendedFourth => &[5, 2, 5],
            Quality::SuspendedSecond => &[2, 5, 5],
        }
    }

    /// Suffix appended to the root in the chord's written name. Empty for
    /// major, which is unmarked.
    pub const fn suffix(self) -> &'static str {
        match self {
            Quality::Diminished => "dim",
            Quality::DiminishedSeventh => "dim7",
            Quality::MinorSeventh => "min7",
            Quality::Minor => "min",
            Quality::Augmented => "aug",
            Quality::DominantSeventh => "dom7",
            Quality::MajorSeventh => "maj7",
            Quality::Major => "",
            Quality::SuspendedFourth => "sus4",
            Quality::SuspendedSecond => "sus2",
        }
    }
}

// Every quality's steps must close the octave exactly.
const _: () = {
    let mut i = 0;
    while i < NUM_QUALITIES {
        let steps = QUALITIES[i].steps();
        let mut sum = 0u32;
        let mut j = 0;
        while j < steps.len() {
            sum += steps[j] as u32;
            j += 1;
        }
        assert!(sum == 12);
        i += 1;
    }
};

/// Errors when resolving chords.
#[derive(Debug, Error)]
pub enum ChordError {
    /// No (root, quality) pair explains the name.
    #[error("no chord matches the name `{0}`")]
    UnknownName(String),

    /// No (root, quality) pair produces exactly the note set.
    #[error("no chord matches the notes `{0}`")]
    UnmatchedNotes(String),
}

/// Every cyclic rotation of the canonically ordered note set.
///
/// Input notes are deduplicated and sorted first. Each rotation has length
/// n + 1: the n notes starting at a different offset, then the first of them
/// again, so the wrap-around interval back to the start is present.
pub fn rotations<I>(notes: I) -> Vec<Vec<Note>>
where
    I: IntoIterator<Item = Note>,
{
    let sorted: Vec<Note> = notes
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let n = sorted.len();
    (0..n)
        .map(|start| {
            sorted
                .iter()
                .cycle()
                .skip(start)
                .take(n + 1)
                .copied()
                .collect()
        })
        .collect()
}

/// Upward semitone steps between consecutive notes of a rotation.
///
/// For a rotation produced by [`rotations`] the result always sums to 12.
pub fn intervals_of(rotation: &[Note]) -> Vec<u8> {
    rotation.windows(2).map(|pair| pair[1].sub(pair[0])).collect()
}

/// Every root for which `quality` built on that root yields exactly `notes`.
///
/// One candidate per rotation whose interval sequence equals the quality's
/// steps, in ascending note order. Empty for most non-matching sets; more
/// than one entry only for rotationally symmetric patterns such as the
/// diminished seventh.
pub fn find_roots(quality: Quality, notes: &BTreeSet<Note>) -> Vec<Note> {
    let mut roots = Vec::new();
    for rotation in rotations(notes.iter().copied()) {
        if intervals_of(&rotation) == quality.steps() {
            roots.push(rotation[0]);
        }
    }
    roots
}

/// A chord: a root pitch class plus a quality.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    /// The root note the chord is named relative to.
    pub root: Note,
    /// The intervallic pattern built on the root.
    pub quality: Quality,
}

impl Chord {
    /// Pair a root with a quality.
    pub const fn new(root: Note, quality: Quality) -> Chord {
        Chord { root, quality }
    }

    /// Resolve a written chord name such as `"C"`, `"Gmin7"`, or `"Asus4"`.
    ///
    /// Qualities are tried in catalog order: the suffix is stripped (the
    /// unmarked major quality consumes nothing) and the remainder must
    /// resolve as a note name. The first quality that fits wins.
    pub fn from_name(name: &str) -> Result<Chord, ChordError> {
        for quality in QUALITIES {
            let root_text = match quality.suffix() {
                "" => name,
                suffix => match name.strip_suffix(suffix) {
                    Some(rest) if !rest.is_empty() => rest,
                    _ => continue,
                },
            };
            if let Ok(root) = root_text.parse::<Note>() {
                return Ok(Chord::new(root, quality));
            }
        }
        Err(ChordError::UnknownName(name.to_string()))
    }

    /// The chord's pitch classes: cumulative sums of the quality's steps
    /// starting from the root. The final step lands back on the root, so the
    /// root is always a member.
    pub fn notes(&self) -> BTreeSet<Note> {
        let mut notes = BTreeSet::new();
        let mut offset = 0i32;
        for &step in self.quality.steps() {
            offset += i32::from(step);
            notes.insert(self.root.add(offset));
        }
        notes
    }

    /// Every (root, quality) pair whose note set is exactly `notes`.
    ///
    /// Ordered by catalog order, then ascending root. Usually zero or one
    /// entry; suspended chords and symmetric patterns yield several.
    pub fn all_from_notes(notes: &BTreeSet<Note>) -> Vec<Chord> {
        let mut chords = Vec::new();
        for quality in QUALITIES {
            for root in find_roots(quality, notes) {
                chords.push(Chord::new(root, quality));
            }
        }
        chords
    }

    /// The first match from [`Chord::all_from_notes`].
    pub fn from_notes(notes: &BTreeSet<Note>) -> Result<Chord, ChordError> {
        Chord::all_from_notes(notes)
            .into_iter()
            .next()
            .ok_or_else(|| ChordError::UnmatchedNotes(join_notes(notes)))
    }

    /// The cheapest ukulele fretting that sounds this chord.
    pub fn ukulele_tab(&self) -> Result<Tab, TabError> {
        Tab::find(&self.notes(), &UKULELE_STRINGS)
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.quality.suffix())
    }
}
