//! The osu! beatmap (`.osu`) format parser.
//!
//! Raw text lines pass through three phases:
//!
//! 1. [`normalize`] drops blank lines and lowercases and space-trims the
//!    rest.
//! 2. [`classify`] buckets the survivors under their `[Section]`
//!    headers, skipping comments and lines that fail each section's
//!    shape filter.
//! 3. The section parsers in [`model`], [`events`], [`timing`], and
//!    [`hit_objects`] turn the buffered lines into a [`Beatmap`].
//!
//! In detail, the parsing policies are:
//!
//! - Parsing is total. The format is externally authored and carries no
//!   version or schema contract, so there is no error type for a
//!   malformed line: fields that fail coercion take their documented
//!   defaults and records with unknown discriminators are dropped.
//! - Input order is preserved for events, timing points, and hit
//!   objects; nothing is sorted or deduplicated.
//! - Only the seven sections named by [`ParseOptions`] are modeled.
//!   Colour records and storyboard script commands are not.
//! - Writing beatmaps back to text is out of scope.

use std::path::Path;

use fraction::GenericDecimal;
use num::BigUint;
use thiserror::Error;

pub mod classify;
pub mod coerce;
pub mod events;
pub mod hit_objects;
pub mod model;
pub mod normalize;
pub mod path;
pub mod prelude;
pub mod timing;
pub mod value;

pub use model::{Beatmap, ParseOptions};

/// Decimal type used for beatmap fields that carry fractional values.
///
/// Exact decimal arithmetic avoids drift on values such as a 0.7 stack
/// leniency, which binary floats cannot represent.
pub type Decimal = GenericDecimal<BigUint, usize>;

/// Parses a whole file's text with every section enabled.
///
/// # Examples
///
/// ```
/// use osumap_rs::osu::{parse_beatmap, value::GameMode};
///
/// let beatmap = parse_beatmap("[General]\nMode: 3\n");
/// assert_eq!(beatmap.general.mode, GameMode::Mania);
/// ```
#[must_use]
pub fn parse_beatmap(source: &str) -> Beatmap {
    parse_beatmap_with(source, ParseOptions::all())
}

/// Parses a whole file's text with the given per-section switches.
///
/// # Examples
///
/// ```
/// use osumap_rs::osu::{ParseOptions, parse_beatmap_with};
///
/// let source = "[Metadata]\nTitle:Skipped\n[Events]\n2,1000,2500\n";
/// let options = ParseOptions { events: true, ..ParseOptions::none() };
/// let beatmap = parse_beatmap_with(source, options);
/// assert_eq!(beatmap.events.len(), 1);
/// assert_eq!(beatmap.metadata.title, "");
/// ```
#[must_use]
pub fn parse_beatmap_with(source: &str, options: ParseOptions) -> Beatmap {
    Beatmap::from_lines(source.lines(), options)
}

/// An error from reading a beatmap file, before any parsing happens.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BeatmapFileError {
    /// The file could not be read as UTF-8 text.
    #[error("failed to read beatmap file: {0}")]
    Io(#[from] std::io::Error),
}

/// Reads a beatmap file from disk and parses it.
///
/// This is the only entry point that touches the filesystem. The error
/// covers the read alone: once the text is in memory, parsing cannot
/// fail.
///
/// # Errors
///
/// Returns [`BeatmapFileError::Io`] when the file cannot be read as
/// UTF-8 text.
pub fn parse_beatmap_file(path: &Path, options: ParseOptions) -> Result<Beatmap, BeatmapFileError> {
    let source = std::fs::read_to_string(path)?;
    Ok(parse_beatmap_with(&source, options))
}
