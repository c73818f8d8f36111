//! # uke_tabs
//!
//! Identify chords from pitch classes or frettings and draw fretboard
//! diagrams for four-string instruments.
//!
//! ## Example
//! ```rust
//! use uke_tabs::Chord;
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // Resolve a written chord name...
//!     let chord = Chord::from_name("Cmin7")?;
//!
//!     // ...and find its cheapest ukulele fretting.
//!     let tab = chord.ukulele_tab()?;
//!     println!("{chord}");
//!     println!("{tab}");
//!
//!     // The fretting sounds exactly the chord's pitch classes.
//!     assert_eq!(tab.notes(), chord.notes());
//!     Ok(())
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Chord naming and identification API.
pub use chord::{
    find_roots, intervals_of, rotations, Chord, ChordError, Quality, NUM_QUALITIES, QUALITIES,
};

/// Pitch-class model.
pub use note::{Note, NoteError, ALL_NOTES, SEMITONES};

/// Fret search and tab rendering.
pub use tab::{FretCost, Tab, TabError, HIGHEST_FRET, UKULELE_STRINGS};

/// Pitch-class module.
pub mod note;

/// Chord identification module.
pub mod chord;

/// Fret search and diagram module.
pub mod tab;
