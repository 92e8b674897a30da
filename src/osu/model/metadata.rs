//! `[Metadata]` section fields.

use crate::osu::coerce::{int_or, split_spaces};

use super::key_values;

/// Fields from the `[Metadata]` section.
///
/// The section uses the compact `":"` delimiter, so a conventionally
/// written `title: night sky` keeps the leading space in its value. Text
/// fields carry the value exactly as buffered (already lowercased by
/// normalization).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Romanised song title.
    pub title: String,
    /// Song title as originally written.
    pub title_unicode: String,
    /// Romanised artist.
    pub artist: String,
    /// Artist as originally written.
    pub artist_unicode: String,
    /// Mapper of the beatmap.
    pub creator: String,
    /// Difficulty name of this beatmap.
    pub version: String,
    /// Where the song comes from.
    pub source: String,
    /// Search keywords.
    pub tags: Vec<String>,
    /// Online id of this difficulty; 0 when unsubmitted.
    pub beatmap_id: i32,
    /// Online id of the containing set; 0 when unsubmitted.
    pub beatmap_set_id: i32,
}

impl Metadata {
    /// Parses the buffered `[Metadata]` lines on top of the defaults.
    pub(crate) fn from_lines(lines: &[String]) -> Self {
        let mut metadata = Self::default();
        for (key, value) in key_values(lines, ":") {
            match key {
                "title" => metadata.title = value.to_owned(),
                "titleunicode" => metadata.title_unicode = value.to_owned(),
                "artist" => metadata.artist = value.to_owned(),
                "artistunicode" => metadata.artist_unicode = value.to_owned(),
                "creator" => metadata.creator = value.to_owned(),
                "version" => metadata.version = value.to_owned(),
                "source" => metadata.source = value.to_owned(),
                "tags" => {
                    metadata.tags = split_spaces(value).into_iter().map(ToOwned::to_owned).collect();
                }
                "beatmapid" => metadata.beatmap_id = int_or(value, 0),
                "beatmapsetid" => metadata.beatmap_set_id = int_or(value, 0),
                _ => {}
            }
        }
        metadata
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parsed(lines: &[&str]) -> Metadata {
        let lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
        Metadata::from_lines(&lines)
    }

    #[test]
    fn compact_delimiter_keeps_the_leading_space() {
        let metadata = parsed(&["title: night sky", "creator:someone"]);
        assert_eq!(metadata.title, " night sky");
        assert_eq!(metadata.creator, "someone");
    }

    #[test]
    fn tags_split_on_spaces() {
        let metadata = parsed(&["tags:electronic  vocal jp"]);
        assert_eq!(metadata.tags, vec!["electronic", "vocal", "jp"]);
    }

    #[test]
    fn ids_parse_with_zero_defaults() {
        let metadata = parsed(&["beatmapid:129891", "beatmapsetid:pending"]);
        assert_eq!(metadata.beatmap_id, 129_891);
        assert_eq!(metadata.beatmap_set_id, 0);
    }

    #[test]
    fn empty_section_is_all_empty() {
        assert_eq!(parsed(&[]), Metadata::default());
    }
}
