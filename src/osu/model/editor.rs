//! `[Editor]` section fields.

use fraction::Zero;

use crate::osu::Decimal;
use crate::osu::coerce::{decimal_or, int_or, split_list};

use super::key_values;

/// Fields from the `[Editor]` section. These only matter to the in-game
/// editor, not to gameplay.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Editor {
    /// Bookmarked times in milliseconds. Entries that fail to parse are
    /// skipped rather than defaulted.
    pub bookmarks: Vec<i32>,
    /// Distance snap multiplier.
    pub distance_spacing: Decimal,
    /// Beat snap divisor.
    pub beat_divisor: Decimal,
    /// Grid size for object snapping.
    pub grid_size: i32,
    /// Timeline zoom factor.
    pub timeline_zoom: Decimal,
}

impl Editor {
    /// Parses the buffered `[Editor]` lines on top of the defaults.
    pub(crate) fn from_lines(lines: &[String]) -> Self {
        let mut editor = Self::default();
        for (key, value) in key_values(lines, ": ") {
            match key {
                "bookmarks" => {
                    editor.bookmarks = split_list(value, ',')
                        .into_iter()
                        .filter_map(|entry| entry.trim().parse().ok())
                        .collect();
                }
                "distancespacing" => editor.distance_spacing = decimal_or(value, Decimal::zero()),
                "beatdivisor" => editor.beat_divisor = decimal_or(value, Decimal::zero()),
                "gridsize" => editor.grid_size = int_or(value, 0),
                "timelinezoom" => editor.timeline_zoom = decimal_or(value, Decimal::zero()),
                _ => {}
            }
        }
        editor
    }
}
