//! Pitch Classes
//!
//! The twelve-tone pitch-class model: a cyclic ordering of the chromatic
//! scale with wrapping semitone arithmetic.

use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// Number of pitch classes in the chromatic scale.
pub const SEMITONES: usize = 12;

/// Errors when resolving note names.
#[derive(Debug, Error)]
pub enum NoteError {
    /// The text did not name any pitch class.
    #[error("unrecognized note name `{0}`")]
    UnknownName(String),
}

/// Twelve chromatic pitch classes.
///
/// Discriminants 0..=11 define the canonical order, starting at C. This is
/// the order used for sorting note sets and for enumerating candidate roots,
/// not a circle-of-fifths ordering.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Note {
    /// C
    C,
    /// C sharp / D flat
    Cs,
    /// D
    D,
    /// D sharp / E flat
    Ds,
    /// E
    E,
    /// F
    F,
    /// F sharp / G flat
    Fs,
    /// G
    G,
    /// G sharp / A flat
    Gs,
    /// A
    A,
    /// A sharp / B flat
    As,
    /// B
    B,
}

/// All pitch classes in canonical order.
pub const ALL_NOTES: [Note; SEMITONES] = [
    Note::C,
    Note::Cs,
    Note::D,
    Note::Ds,
    Note::E,
    Note::F,
    Note::Fs,
    Note::G,
    Note::Gs,
    Note::A,
    Note::As,
    Note::B,
];

impl Note {
    /// Pitch class at `idx`, wrapping modulo 12.
    pub const fn from_index(idx: usize) -> Note {
        ALL_NOTES[idx % SEMITONES]
    }

    /// The pitch class `semitones` higher, wrapping modulo 12.
    ///
    /// Negative offsets wrap downward: `Note::C.add(-1) == Note::B`.
    pub const fn add(self, semitones: i32) -> Note {
        let idx = (self as i32 + semitones % 12 + 12) % 12;
        Note::from_index(idx as usize)
    }

    /// Upward semitone distance from `other` to `self`, in `[0, 12)`.
    ///
    /// Not symmetric: `a.sub(b) != b.sub(a)` unless the notes are equal.
    pub const fn sub(self, other: Note) -> u8 {
        ((self as i8 - other as i8 + 12) % 12) as u8
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Note::C => "C",
            Note::Cs => "C♯|D♭",
            Note::D => "D",
            Note::Ds => "D♯|E♭",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F♯|G♭",
            Note::G => "G",
            Note::Gs => "G♯|A♭",
            Note::A => "A",
            Note::As => "A♯|B♭",
            Note::B => "B",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Note {
    type Err = NoteError;

    /// Parse a note name: a bare letter (`"G"`), the paired-letter form for
    /// the dual-named classes (`"CD"` for C♯/D♭), or an accidental form in
    /// ASCII or Unicode (`"C#"`, `"C♯"`, `"Db"`, `"D♭"`). Case-sensitive.
    fn from_str(s: &str) -> Result<Note, NoteError> {
        let note = match s {
            "C" => Note::C,
            "CD" | "C#" | "C♯" | "Db" | "D♭" => Note::Cs,
            "D" => Note::D,
            "DE" | "D#" | "D♯" | "Eb" | "E♭" => Note::Ds,
            "E" => Note::E,
            "F" => Note::F,
            "FG" | "F#" | "F♯" | "Gb" | "G♭" => Note::Fs,
            "G" => Note::G,
            "GA" | "G#" | "G♯" | "Ab" | "A♭" => Note::Gs,
            "A" => Note::A,
            "AB" | "A#" | "A♯" | "Bb" | "B♭" => Note::As,
            "B" => Note::B,
            _ => return Err(NoteError::UnknownName(s.to_string())),
        };
        Ok(note)
    }
}

/// Space-separated rendering of a note collection, for error messages.
pub(crate) fn join_notes<'a, I>(notes: I) -> String
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .map(|note| note.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
