//! The beatmap aggregate assembled from all seven sections.

pub mod difficulty;
pub mod editor;
pub mod general;
pub mod metadata;

pub use difficulty::Difficulty;
pub use editor::Editor;
pub use general::General;
pub use metadata::Metadata;

use super::classify::classify_lines;
use super::events::{Event, parse_event};
use super::hit_objects::{HitObject, parse_hit_object};
use super::normalize::normalize_lines;
use super::timing::{TimingPoint, parse_timing_point};

/// Splits buffered key/value lines at the first occurrence of
/// `delimiter`. Neither side is trimmed; with the compact `":"` delimiter
/// a conventional `key: value` line keeps the leading space in its value.
pub(crate) fn key_values<'a>(
    lines: &'a [String],
    delimiter: &'static str,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    lines.iter().filter_map(move |line| line.split_once(delimiter))
}

/// Per-section switches for parsing.
///
/// A disabled section buffers no lines: its fields keep their defaults
/// and its sequences stay empty. This saves real work when only one
/// section matters, such as replacing backgrounds from the events alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Parse `[General]`.
    pub general: bool,
    /// Parse `[Editor]`.
    pub editor: bool,
    /// Parse `[Metadata]`.
    pub metadata: bool,
    /// Parse `[Difficulty]`.
    pub difficulty: bool,
    /// Parse `[Events]`.
    pub events: bool,
    /// Parse `[TimingPoints]`.
    pub timing_points: bool,
    /// Parse `[HitObjects]`.
    pub hit_objects: bool,
}

impl ParseOptions {
    /// Enables every section.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            general: true,
            editor: true,
            metadata: true,
            difficulty: true,
            events: true,
            timing_points: true,
            hit_objects: true,
        }
    }

    /// Disables every section. Combine with struct update syntax to opt
    /// back in:
    ///
    /// ```
    /// use osumap_rs::osu::ParseOptions;
    ///
    /// let options = ParseOptions { events: true, ..ParseOptions::none() };
    /// assert!(options.events && !options.general);
    /// ```
    #[must_use]
    pub const fn none() -> Self {
        Self {
            general: false,
            editor: false,
            metadata: false,
            difficulty: false,
            events: false,
            timing_points: false,
            hit_objects: false,
        }
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::all()
    }
}

/// A parsed beatmap.
///
/// Every field has a documented default, so a beatmap built from empty
/// input (or with sections disabled) is still fully populated. Values are
/// immutable in the sense that nothing in this crate mutates them after
/// [`Beatmap::from_lines`] returns.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Beatmap {
    /// `[General]` fields.
    pub general: General,
    /// `[Editor]` fields.
    pub editor: Editor,
    /// `[Metadata]` fields.
    pub metadata: Metadata,
    /// `[Difficulty]` fields.
    pub difficulty: Difficulty,
    /// `[Events]` records in input order; unrecognized kinds are absent.
    pub events: Vec<Event>,
    /// `[TimingPoints]` records in input order, kept exactly as written.
    pub timing_points: Vec<TimingPoint>,
    /// `[HitObjects]` records in input order; unrecognized type codes
    /// are absent.
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Parses beatmap lines into the aggregate.
    ///
    /// Parsing is total: any line sequence yields a beatmap. Malformed
    /// fields fall back to their defaults and unrecognized records are
    /// dropped, but no input is an error.
    #[must_use]
    pub fn from_lines<I>(lines: I, options: ParseOptions) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let buffers = classify_lines(normalize_lines(lines), options);
        Self {
            general: General::from_lines(&buffers.general),
            editor: Editor::from_lines(&buffers.editor),
            metadata: Metadata::from_lines(&buffers.metadata),
            difficulty: Difficulty::from_lines(&buffers.difficulty),
            events: buffers.events.iter().map(String::as_str).filter_map(parse_event).collect(),
            timing_points: buffers
                .timing_points
                .iter()
                .map(String::as_str)
                .map(parse_timing_point)
                .collect(),
            hit_objects: buffers
                .hit_objects
                .iter()
                .map(String::as_str)
                .filter_map(parse_hit_object)
                .collect(),
        }
    }
}
