//! Prelude module re-exporting the public surface of the beatmap parser.
//!
//! Import everything at once with:
//!
//! ```
//! use osumap_rs::osu::prelude::*;
//! ```

pub use super::{
    Beatmap, BeatmapFileError, Decimal, ParseOptions,
    classify::{Section, SectionBuffers, classify_lines},
    coerce::{bool_value, decimal_or, enum_or, enum_or_default, int_or, split_list, split_spaces},
    events::{BackgroundEvent, BreakEvent, Event},
    hit_objects::{HitObject, HitObjectKind, HitSample, Slider},
    model::{Difficulty, Editor, General, Metadata},
    normalize::normalize_lines,
    parse_beatmap, parse_beatmap_file, parse_beatmap_with,
    path::RelativePath,
    timing::TimingPoint,
    value::{Countdown, CurveType, DrawPosition, Effects, GameMode, HitSound, SampleSet},
};
