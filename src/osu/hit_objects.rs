//! Hit object records from the `[HitObjects]` section.
//!
//! The record starts with five fixed slots (x, y, time, type flags, hit
//! sound) and ends with a variable tail: the final tail slot is a
//! colon-delimited hit sample, everything between is an object param
//! consumed by the slider, spinner, and hold constructors.

use fraction::One;
use itertools::Itertools;

use super::Decimal;
use super::coerce::{decimal_or, enum_or_default, int_or, split_list};
use super::path::RelativePath;
use super::value::{CurveType, HitSound, SampleSet};

/// Type codes the dispatcher recognizes, matched exactly. The type slot
/// nominally holds bit flags, but combined values (such as a new-combo
/// bit alongside a slider bit) match no code and drop the record.
const TYPE_CIRCLE: i32 = 1;
const TYPE_SLIDER: i32 = 2;
const TYPE_SPINNER: i32 = 8;
const TYPE_MANIA_HOLD: i32 = 128;

/// Custom sample addressing from the final slot of a hit object record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitSample {
    /// Bank for the normal sound; 0 defers to the timing point.
    pub normal_set: i32,
    /// Bank for the whistle, finish, and clap sounds; 0 defers to the
    /// normal sound's bank.
    pub addition_set: i32,
    /// Custom sample index; 0 selects the default samples.
    pub index: i32,
    /// Volume percentage; 0 defers to the timing point's volume.
    pub volume: i32,
    /// Custom addition sound file, overriding the bank addressing.
    pub file_name: Option<RelativePath>,
}

impl Default for HitSample {
    fn default() -> Self {
        Self {
            normal_set: 0,
            addition_set: 0,
            index: 0,
            volume: 100,
            file_name: None,
        }
    }
}

/// Slider state: curve geometry and per-edge sounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slider {
    /// How the body is built from the control points.
    pub curve_type: CurveType,
    /// Control points as `(x, y)` osu! pixel pairs, head excluded.
    pub curve_points: Vec<(i32, i32)>,
    /// How many times the body is traversed; 1 means no repeats.
    pub slides: i32,
    /// Visual length in osu! pixels.
    pub length: Decimal,
    /// Hit sound per edge; the first plays on the head, the last on the
    /// tail.
    pub edge_sounds: Vec<HitSound>,
    /// Sample bank per edge sound.
    pub edge_sets: Vec<SampleSet>,
}

impl Default for Slider {
    fn default() -> Self {
        Self {
            curve_type: CurveType::default(),
            curve_points: Vec::new(),
            slides: 1,
            length: Decimal::one(),
            edge_sounds: Vec::new(),
            edge_sets: Vec::new(),
        }
    }
}

impl Slider {
    /// Hit sound of the head edge, or the default when the record wrote
    /// no edge sounds.
    #[must_use]
    pub fn first_edge_sound(&self) -> HitSound {
        self.edge_sounds.first().copied().unwrap_or_default()
    }

    /// Hit sound of the tail edge, or the default when the record wrote
    /// no edge sounds.
    #[must_use]
    pub fn last_edge_sound(&self) -> HitSound {
        self.edge_sounds.last().copied().unwrap_or_default()
    }

    /// Sample bank of the head edge, or the default when the record
    /// wrote no edge sets.
    #[must_use]
    pub fn first_edge_set(&self) -> SampleSet {
        self.edge_sets.first().copied().unwrap_or_default()
    }

    /// Sample bank of the tail edge, or the default when the record
    /// wrote no edge sets.
    #[must_use]
    pub fn last_edge_set(&self) -> SampleSet {
        self.edge_sets.last().copied().unwrap_or_default()
    }
}

/// Kind-specific hit object state selected by the type slot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitObjectKind {
    /// A tap circle (type code 1).
    Circle,
    /// A slider (type code 2).
    Slider(Slider),
    /// A spinner (type code 8).
    Spinner {
        /// Spin end in milliseconds.
        end_time: i32,
    },
    /// An osu!mania hold note (type code 128).
    ManiaHold {
        /// Hold release in milliseconds.
        end_time: i32,
    },
}

/// One playable object from the `[HitObjects]` section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitObject {
    /// Horizontal position in osu! pixels (0..=512 in-field).
    pub x: i32,
    /// Vertical position in osu! pixels (0..=384 in-field).
    pub y: i32,
    /// Hit time in milliseconds.
    pub time: i32,
    /// The raw value of the type slot the dispatcher matched.
    pub type_flags: i32,
    /// Hit sound layered over the object.
    pub hit_sound: HitSound,
    /// Raw object params between the fixed slots and the sample slot.
    pub object_params: Vec<String>,
    /// Custom sample addressing, present when the record had a tail.
    pub hit_sample: Option<HitSample>,
    /// Kind-specific state.
    pub kind: HitObjectKind,
}

impl HitObject {
    /// The osu!mania column this object occupies in a layout of
    /// `column_count` keys: `floor(x * column_count / 512)`, clamped into
    /// range. Returns 0 when `column_count` is not positive.
    #[must_use]
    pub fn mania_column(&self, column_count: i32) -> i32 {
        if column_count <= 0 {
            return 0;
        }
        let column = (i64::from(self.x) * i64::from(column_count)).div_euclid(512);
        column.clamp(0, i64::from(column_count - 1)) as i32
    }
}

/// Parses one comma-record from the hit object buffer. Records whose
/// type slot matches none of the four recognized codes are dropped.
pub(crate) fn parse_hit_object(line: &str) -> Option<HitObject> {
    let slots = split_list(line, ',');
    let x = slots.first().map_or(0, |slot| int_or(slot, 0));
    let y = slots.get(1).map_or(0, |slot| int_or(slot, 0));
    let time = slots.get(2).map_or(0, |slot| int_or(slot, 0));
    let type_flags = slots.get(3).map_or(0, |slot| int_or(slot, 0));
    let hit_sound = slots.get(4).map_or_else(HitSound::default, |slot| enum_or_default(slot));

    let tail = slots.get(5..).unwrap_or(&[]);
    let (param_slots, sample_slot) = tail
        .split_last()
        .map_or((tail, None), |(last, rest)| (rest, Some(*last)));

    let kind = match type_flags {
        TYPE_CIRCLE => HitObjectKind::Circle,
        TYPE_SLIDER => HitObjectKind::Slider(slider_kind(param_slots)),
        TYPE_SPINNER => HitObjectKind::Spinner { end_time: end_time_param(param_slots) },
        TYPE_MANIA_HOLD => HitObjectKind::ManiaHold { end_time: end_time_param(param_slots) },
        _ => return None,
    };

    Some(HitObject {
        x,
        y,
        time,
        type_flags,
        hit_sound,
        object_params: param_slots.iter().map(|slot| (*slot).to_owned()).collect(),
        hit_sample: sample_slot.map(parse_hit_sample),
        kind,
    })
}

fn slider_kind(params: &[&str]) -> Slider {
    let mut slider = Slider::default();
    for (index, param) in params.iter().enumerate() {
        match index {
            0 => {
                let mut entries = split_list(param, '|').into_iter();
                slider.curve_type = entries
                    .next()
                    .map_or_else(CurveType::default, |letter| {
                        CurveType::try_from(letter).unwrap_or_default()
                    });
                slider.curve_points = entries.map(curve_point).collect();
            }
            1 => slider.slides = int_or(param, 1),
            2 => slider.length = decimal_or(param, Decimal::one()),
            3 => {
                slider.edge_sounds = split_list(param, '|')
                    .into_iter()
                    .map(enum_or_default)
                    .collect();
            }
            4 => {
                slider.edge_sets = split_list(param, '|')
                    .into_iter()
                    .map(enum_or_default)
                    .collect();
            }
            _ => {}
        }
    }
    slider
}

/// An `x:y` control point; a missing or garbled coordinate reads as 0
/// and coordinates past the second are ignored.
fn curve_point(entry: &str) -> (i32, i32) {
    split_list(entry, ':')
        .into_iter()
        .take(2)
        .pad_using(2, |_| "")
        .map(|coordinate| int_or(coordinate, 0))
        .collect_tuple()
        .unwrap_or((0, 0))
}

fn end_time_param(params: &[&str]) -> i32 {
    params.first().map_or(1, |slot| int_or(slot, 1))
}

fn parse_hit_sample(value: &str) -> HitSample {
    let mut sample = HitSample::default();
    for (index, slot) in split_list(value, ':').into_iter().enumerate() {
        match index {
            0 => sample.normal_set = int_or(slot, 0),
            1 => sample.addition_set = int_or(slot, 0),
            2 => sample.index = int_or(slot, 0),
            3 => sample.volume = int_or(slot, 100),
            4 => sample.file_name = Some(RelativePath::new(slot)),
            _ => {}
        }
    }
    sample
}
