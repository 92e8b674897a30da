//! Section classification, the second phase of the parsing pipeline.
//!
//! A single forward pass walks the normalized lines, tracks the current
//! `[section]`, and buffers each line that passes its section's shape
//! filter. Content before any header, inside an unrecognized section, or
//! inside a section disabled by [`ParseOptions`] is discarded.

use super::model::ParseOptions;

/// The seven sections the parser recognizes. Any other header name turns
/// the classifier off until a recognized header appears again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `[general]` after normalization.
    General,
    /// `[editor]` after normalization.
    Editor,
    /// `[metadata]` after normalization.
    Metadata,
    /// `[difficulty]` after normalization.
    Difficulty,
    /// `[events]` after normalization.
    Events,
    /// `[timingpoints]` after normalization.
    TimingPoints,
    /// `[hitobjects]` after normalization.
    HitObjects,
}

impl Section {
    /// Returns the section for a normalized (lowercase) header name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "general" => Some(Self::General),
            "editor" => Some(Self::Editor),
            "metadata" => Some(Self::Metadata),
            "difficulty" => Some(Self::Difficulty),
            "events" => Some(Self::Events),
            "timingpoints" => Some(Self::TimingPoints),
            "hitobjects" => Some(Self::HitObjects),
            _ => None,
        }
    }

    /// The substring a line must contain to be buffered into this
    /// section: `": "` for the spaced key/value sections, `":"` for the
    /// compact ones, and `","` for the positional-record sections.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::General | Self::Editor => ": ",
            Self::Metadata | Self::Difficulty => ":",
            Self::Events | Self::TimingPoints | Self::HitObjects => ",",
        }
    }
}

/// Per-section line buffers produced by [`classify_lines`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionBuffers {
    /// Lines buffered for `[General]`.
    pub general: Vec<String>,
    /// Lines buffered for `[Editor]`.
    pub editor: Vec<String>,
    /// Lines buffered for `[Metadata]`.
    pub metadata: Vec<String>,
    /// Lines buffered for `[Difficulty]`.
    pub difficulty: Vec<String>,
    /// Lines buffered for `[Events]`.
    pub events: Vec<String>,
    /// Lines buffered for `[TimingPoints]`.
    pub timing_points: Vec<String>,
    /// Lines buffered for `[HitObjects]`.
    pub hit_objects: Vec<String>,
}

impl SectionBuffers {
    fn buffer_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::General => &mut self.general,
            Section::Editor => &mut self.editor,
            Section::Metadata => &mut self.metadata,
            Section::Difficulty => &mut self.difficulty,
            Section::Events => &mut self.events,
            Section::TimingPoints => &mut self.timing_points,
            Section::HitObjects => &mut self.hit_objects,
        }
    }
}

const fn enabled(section: Section, options: ParseOptions) -> bool {
    match section {
        Section::General => options.general,
        Section::Editor => options.editor,
        Section::Metadata => options.metadata,
        Section::Difficulty => options.difficulty,
        Section::Events => options.events,
        Section::TimingPoints => options.timing_points,
        Section::HitObjects => options.hit_objects,
    }
}

/// Buckets normalized lines into per-section buffers.
///
/// Comment lines, recognized by `//` after ignoring leading spaces, are
/// skipped; a tab-indented `//` is content, not a comment. A `[name]`
/// line switches the current section and is never buffered itself. A
/// section may appear more than once, in which case its buffer keeps
/// accumulating.
pub fn classify_lines<I>(lines: I, options: ParseOptions) -> SectionBuffers
where
    I: IntoIterator<Item = String>,
{
    let mut buffers = SectionBuffers::default();
    let mut current = None;
    for line in lines {
        if line.trim_start_matches(' ').starts_with("//") {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            current = Section::from_name(name);
            continue;
        }
        let Some(section) = current else { continue };
        if enabled(section, options) && line.contains(section.delimiter()) {
            buffers.buffer_mut(section).push(line);
        }
    }
    buffers
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn classify(lines: &[&str]) -> SectionBuffers {
        classify_lines(lines.iter().map(ToString::to_string), ParseOptions::all())
    }

    #[test]
    fn buckets_lines_under_their_headers() {
        let buffers = classify(&[
            "[general]",
            "audioleadin: 0",
            "[hitobjects]",
            "256,192,1000,1,0",
        ]);
        assert_eq!(buffers.general, vec!["audioleadin: 0"]);
        assert_eq!(buffers.hit_objects, vec!["256,192,1000,1,0"]);
        assert_eq!(buffers.events, Vec::<String>::new());
    }

    #[test]
    fn discards_preamble_and_unknown_sections() {
        let buffers = classify(&[
            "osu file format v14",
            "[colours]",
            "combo1 : 255,128,0",
            "[general]",
            "mode: 3",
        ]);
        assert_eq!(buffers.general, vec!["mode: 3"]);
        assert_eq!(buffers.timing_points, Vec::<String>::new());
    }

    #[test]
    fn unknown_header_switches_away_from_a_recognized_section() {
        let buffers = classify(&["[general]", "mode: 1", "[custom]", "mode: 2"]);
        assert_eq!(buffers.general, vec!["mode: 1"]);
    }

    #[test]
    fn shape_filters_apply_per_section() {
        let buffers = classify(&[
            "[general]",
            "plainline",
            "compact:pair",
            "spaced: pair",
            "[metadata]",
            "title:compact",
            "[events]",
            "no delimiter here",
            "0,0,\"bg.jpg\"",
        ]);
        assert_eq!(buffers.general, vec!["spaced: pair"]);
        assert_eq!(buffers.metadata, vec!["title:compact"]);
        assert_eq!(buffers.events, vec!["0,0,\"bg.jpg\""]);
    }

    #[test]
    fn skips_space_indented_comments_only() {
        let buffers = classify(&[
            "[events]",
            "// storyboard below",
            "  // indented comment",
            "\t//tab indented so not a comment; dropped by the shape filter",
            "0,0,\"bg.jpg\",0,0",
        ]);
        assert_eq!(buffers.events, vec!["0,0,\"bg.jpg\",0,0"]);
    }

    #[test]
    fn tab_indented_comment_with_delimiter_is_buffered() {
        let buffers = classify(&["[events]", "\t// 0,0"]);
        assert_eq!(buffers.events, vec!["\t// 0,0"]);
    }

    #[test]
    fn sections_accumulate_across_repeats() {
        let buffers = classify(&[
            "[timingpoints]",
            "0,300,4,1,0,100,1,0",
            "[events]",
            "2,1000,2000",
            "[timingpoints]",
            "4000,-50,4,1,0,100,0,1",
        ]);
        assert_eq!(
            buffers.timing_points,
            vec!["0,300,4,1,0,100,1,0", "4000,-50,4,1,0,100,0,1"]
        );
    }

    #[test]
    fn disabled_sections_buffer_nothing() {
        let options = ParseOptions {
            events: true,
            ..ParseOptions::none()
        };
        let buffers = classify_lines(
            ["[general]", "mode: 3", "[events]", "2,1000,2000"]
                .iter()
                .map(ToString::to_string),
            options,
        );
        assert_eq!(buffers.general, Vec::<String>::new());
        assert_eq!(buffers.events, vec!["2,1000,2000"]);
    }

    #[test]
    fn bare_bracket_line_is_not_a_header() {
        let buffers = classify(&["[general]", "[", "mode: 2"]);
        // "[" is not a header, but it also fails the shape filter, so the
        // general section stays current and keeps the next line.
        assert_eq!(buffers.general, vec!["mode: 2"]);
    }
}
