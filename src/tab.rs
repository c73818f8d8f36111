//! Tabs
//!
//! The bounded fret-window search, its lexicographic cost model, and the
//! textual fretboard diagram.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt::{self, Display};
use thiserror::Error;

use crate::note::{join_notes, Note};

/// One past the highest fret considered by the search window.
pub const HIGHEST_FRET: u8 = 6;

/// Standard ukulele tuning, lowest string first.
pub const UKULELE_STRINGS: [Note; 4] = [Note::G, Note::C, Note::E, Note::A];

/// Errors when building or searching for tabs.
#[derive(Debug, Error)]
pub enum TabError {
    /// A fret sequence did not match the number of strings.
    #[error("expected {expected} frets, got {got}")]
    WrongStringCount {
        /// Number of strings in the tuning.
        expected: usize,
        /// Number of frets supplied.
        got: usize,
    },

    /// A string cannot sound any requested note inside the fret window.
    #[error("the {string} string sounds none of `{notes}` within frets 0..{window}")]
    NoPlayableFret {
        /// The open-string pitch class with no usable fret.
        string: Note,
        /// The requested note set.
        notes: String,
        /// One past the highest fret searched.
        window: u8,
    },
}

/// Lexicographic cost of one candidate fretting.
///
/// Lower is better. Candidates are ordered by most distinct notes covered,
/// then lowest mean fret, then lowest spread, where spread is the sample
/// variance of the frets with every open string counted at the mean fret so
/// that opens never register as stretch.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FretCost {
    covered: usize,
    mean: f64,
    spread: f64,
}

impl FretCost {
    /// Score the fret chosen for each open string.
    pub fn of(strings: &[Note], frets: &[u8]) -> FretCost {
        let covered = strings
            .iter()
            .zip(frets)
            .map(|(&string, &fret)| string.add(i32::from(fret)))
            .collect::<BTreeSet<_>>()
            .len();

        let n = frets.len() as f64;
        let mean = frets.iter().map(|&fret| f64::from(fret)).sum::<f64>() / n;

        // Open strings are counted at the mean before the spread is taken.
        let adjusted: Vec<f64> = frets
            .iter()
            .map(|&fret| if fret == 0 { mean } else { f64::from(fret) })
            .collect();
        let center = adjusted.iter().sum::<f64>() / n;
        let spread = if frets.len() < 2 {
            0.0
        } else {
            adjusted.iter().map(|v| (v - center) * (v - center)).sum::<f64>() / (n - 1.0)
        };

        FretCost {
            covered,
            mean,
            spread,
        }
    }
}

impl PartialOrd for FretCost {
    fn partial_cmp(&self, other: &FretCost) -> Option<Ordering> {
        Some(
            other
                .covered
                .cmp(&self.covered)
                .then(self.mean.total_cmp(&other.mean))
                .then(self.spread.total_cmp(&other.spread)),
        )
    }
}

/// A fretting: one fret per string of a tuning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    frets: Vec<u8>,
    strings: Vec<Note>,
}

impl Tab {
    /// Pair explicit frets with an open-string tuning.
    pub fn new(frets: Vec<u8>, strings: Vec<Note>) -> Result<Tab, TabError> {
        if frets.len() != strings.len() {
            return Err(TabError::WrongStringCount {
                expected: strings.len(),
                got: frets.len(),
            });
        }
        Ok(Tab { frets, strings })
    }

    /// Frets, one per string.
    pub fn frets(&self) -> &[u8] {
        &self.frets
    }

    /// Open-string tuning.
    pub fn strings(&self) -> &[Note] {
        &self.strings
    }

    /// The pitch classes this fretting sounds.
    pub fn notes(&self) -> BTreeSet<Note> {
        self.strings
            .iter()
            .zip(&self.frets)
            .map(|(&string, &fret)| string.add(i32::from(fret)))
            .collect()
    }

    /// The cheapest fretting of `notes` on `strings`.
    ///
    /// Per string, candidate frets are those in `0..HIGHEST_FRET` whose
    /// sounded note belongs to `notes`; a string with no candidate fails
    /// with [`TabError::NoPlayableFret`]. The cross-product of candidates is
    /// searched exhaustively for the minimum [`FretCost`]. Exact cost ties
    /// go to the lexicographically smallest fret sequence.
    pub fn find(notes: &BTreeSet<Note>, strings: &[Note]) -> Result<Tab, TabError> {
        let mut candidates: Vec<Vec<u8>> = Vec::with_capacity(strings.len());
        for &string in strings {
            let frets: Vec<u8> = (0..HIGHEST_FRET)
                .filter(|&fret| notes.contains(&string.add(i32::from(fret))))
                .collect();
            if frets.is_empty() {
                return Err(TabError::NoPlayableFret {
                    string,
                    notes: join_notes(notes),
                    window: HIGHEST_FRET,
                });
            }
            candidates.push(frets);
        }
        if candidates.is_empty() {
            return Tab::new(Vec::new(), Vec::new());
        }

        // Odometer over the candidate lists. Candidates are ascending per
        // string and the last string advances fastest, so fret sequences are
        // visited in lexicographic order; only a strictly lower cost
        // displaces the incumbent, which makes the tie-break the
        // lexicographically smallest sequence.
        let mut best_frets: Vec<u8> = candidates.iter().map(|frets| frets[0]).collect();
        let mut best_cost = FretCost::of(strings, &best_frets);
        let mut indices = vec![0usize; candidates.len()];
        'search: loop {
            let mut pos = candidates.len() - 1;
            loop {
                indices[pos] += 1;
                if indices[pos] < candidates[pos].len() {
                    break;
                }
                indices[pos] = 0;
                if pos == 0 {
                    break 'search;
                }
                pos -= 1;
            }

            let frets: Vec<u8> = indices
                .iter()
                .zip(&candidates)
                .map(|(&i, frets)| frets[i])
                .collect();
            let cost = FretCost::of(strings, &frets);
            if cost < best_cost {
                best_cost = cost;
                best_frets = frets;
            }
        }

        Tab::new(best_frets, strings.to_vec())
    }
}

/// Join items with `delimiter` on both ends and between entries.
fn padded<I>(delimiter: &str, items: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let joined = items.into_iter().collect::<Vec<_>>().join(delimiter);
    format!("{delimiter}{joined}{delimiter}")
}

impl Display for Tab {
    /// Render the fretboard grid: fret numbers, an open-string marker row,
    /// the nut, then one marker row per fret position inside the window.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.strings.len();

        writeln!(
            f,
            "{}",
            padded(" ", self.frets.iter().map(|fret| fret.to_string()))
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{}",
            padded(
                " ",
                self.frets
                    .iter()
                    .map(|&fret| (if fret == 0 { "○" } else { " " }).to_string())
            )
        )?;
        writeln!(f, "{}", padded("=", vec!["=".to_string(); width]))?;
        for position in 1..HIGHEST_FRET {
            writeln!(
                f,
                "{}",
                padded(
                    " ",
                    self.frets
                        .iter()
                        .map(|&fret| (if fret == position { "●" } else { "│" }).to_string())
                )
            )?;
            writeln!(f, "{}", padded("—", vec!["—".to_string(); width]))?;
        }
        Ok(())
    }
}
