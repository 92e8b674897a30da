//! Timing point records from the `[TimingPoints]` section.

use fraction::Zero;

use super::Decimal;
use super::coerce::{bool_value, decimal_or, enum_or_default, int_or, split_list};
use super::value::{Effects, SampleSet};

/// One timing interval, effective from its start time until the next
/// point.
///
/// Records are kept exactly as written: nothing is dropped, reordered,
/// or deduplicated, so consumers can rely on input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimingPoint {
    /// Interval start in milliseconds.
    pub time: i32,
    /// For uninherited points, the duration of one beat in milliseconds.
    /// For inherited points, a negative percentage acting as a slider
    /// velocity multiplier. Branch on [`uninherited`](Self::uninherited)
    /// to pick the interpretation.
    pub beat_length: Decimal,
    /// Beats per measure. Inherited points ignore it.
    pub meter: i32,
    /// Default sample bank for objects in the interval.
    pub sample_set: SampleSet,
    /// Custom sample index; 0 selects the default samples.
    pub sample_index: i32,
    /// Hit sample volume percentage.
    pub volume: i32,
    /// Whether the point defines an absolute beat duration rather than
    /// inheriting one.
    pub uninherited: bool,
    /// Extra toggle active in the interval.
    pub effects: Effects,
}

impl Default for TimingPoint {
    fn default() -> Self {
        Self {
            time: 0,
            beat_length: Decimal::zero(),
            meter: 0,
            sample_set: SampleSet::NoCustom,
            sample_index: 0,
            volume: 100,
            uninherited: false,
            effects: Effects::KiaiTime,
        }
    }
}

/// Parses one comma-record from the timing point buffer. Missing trailing
/// slots keep the defaults; a present-but-unparsable volume slot falls to
/// 0, not to the starting 100.
pub(crate) fn parse_timing_point(line: &str) -> TimingPoint {
    let mut point = TimingPoint::default();
    for (index, slot) in split_list(line, ',').into_iter().enumerate() {
        match index {
            0 => point.time = int_or(slot, 0),
            1 => point.beat_length = decimal_or(slot, Decimal::zero()),
            2 => point.meter = int_or(slot, 0),
            3 => point.sample_set = enum_or_default(slot),
            4 => point.sample_index = int_or(slot, 0),
            5 => point.volume = int_or(slot, 0),
            6 => point.uninherited = bool_value(slot),
            // Every slot past the uninherited flag re-reads the effects,
            // so the last one wins.
            _ => point.effects = enum_or_default(slot),
        }
    }
    point
}
