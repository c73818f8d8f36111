use std::collections::BTreeSet;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use uke_tabs::{Chord, Note, Tab, UKULELE_STRINGS};

#[derive(Parser)]
#[command(version, about = "Name chords and draw ukulele tabs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve chord names and print their tabs
    Chords {
        /// Chord names such as C, Gmin7, Asus4
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Name the chords a fretting sounds
    Frets {
        /// One digit per string, e.g. 0003
        #[arg(required = true)]
        frets: Vec<String>,
        /// Print at most this many matching chords per fretting
        #[arg(long, default_value_t = 1)]
        maximum_count: usize,
    },
    /// Identify chords from note names and print their tabs
    Notes {
        /// Whitespace-separated note-name groups, e.g. "C E G"
        #[arg(required = true)]
        notes: Vec<String>,
        /// Print at most this many matching chords per group
        #[arg(long, default_value_t = 1)]
        maximum_count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Chords { names } => {
            for name in names {
                let chord = Chord::from_name(&name)?;
                let tab = chord.ukulele_tab()?;
                println!("{chord}");
                println!("{tab}");
            }
        }
        Command::Frets {
            frets,
            maximum_count,
        } => {
            for arg in frets {
                let tab = parse_frets(&arg)?;
                let matches = Chord::all_from_notes(&tab.notes());
                if matches.is_empty() {
                    bail!("no chord matches the fretting `{arg}`");
                }
                for chord in matches.into_iter().take(maximum_count) {
                    println!("{chord}");
                }
                println!("{tab}");
            }
        }
        Command::Notes {
            notes,
            maximum_count,
        } => {
            for group in notes {
                let set = parse_notes(&group)?;
                let matches = Chord::all_from_notes(&set);
                if matches.is_empty() {
                    bail!("no chord matches the notes `{group}`");
                }
                for chord in matches.into_iter().take(maximum_count) {
                    println!("{chord}");
                    println!("{}", chord.ukulele_tab()?);
                }
            }
        }
    }
    Ok(())
}

/// Turn a digit string like `0003` into a ukulele fretting.
fn parse_frets(arg: &str) -> Result<Tab> {
    let digits: Option<Vec<u8>> = arg
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect();
    let frets = digits.with_context(|| format!("fret sequence `{arg}` must be digits only"))?;
    Tab::new(frets, UKULELE_STRINGS.to_vec()).with_context(|| {
        format!(
            "fret sequence `{arg}` does not fit a {}-string ukulele",
            UKULELE_STRINGS.len()
        )
    })
}

/// Parse a whitespace-separated group of note names into a note set.
fn parse_notes(group: &str) -> Result<BTreeSet<Note>> {
    group
        .split_whitespace()
        .map(|word| {
            word.parse::<Note>()
                .with_context(|| format!("in note group `{group}`"))
        })
        .collect()
}
