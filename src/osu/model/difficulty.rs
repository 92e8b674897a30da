//! `[Difficulty]` section fields.

use crate::osu::Decimal;
use crate::osu::coerce::decimal_or;

use super::key_values;

/// Fields from the `[Difficulty]` section. Every field holds a value in
/// the 0..=10 range by convention and defaults to 5, matching what the
/// game assumes for an unspecified difficulty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Difficulty {
    /// How fast health drains.
    pub hp_drain_rate: Decimal,
    /// Hit circle radius, or the key count in osu!mania.
    pub circle_size: Decimal,
    /// Judgement strictness.
    pub overall_difficulty: Decimal,
    /// How early hit objects fade in.
    pub approach_rate: Decimal,
    /// Base slider velocity in hundreds of osu! pixels per beat.
    pub slider_multiplier: Decimal,
    /// Slider ticks per beat.
    pub slider_tick_rate: Decimal,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            hp_drain_rate: Decimal::from(5),
            circle_size: Decimal::from(5),
            overall_difficulty: Decimal::from(5),
            approach_rate: Decimal::from(5),
            slider_multiplier: Decimal::from(5),
            slider_tick_rate: Decimal::from(5),
        }
    }
}

impl Difficulty {
    /// Parses the buffered `[Difficulty]` lines on top of the defaults.
    pub(crate) fn from_lines(lines: &[String]) -> Self {
        let mut difficulty = Self::default();
        for (key, value) in key_values(lines, ":") {
            match key {
                "hpdrainrate" => difficulty.hp_drain_rate = decimal_or(value, Decimal::from(5)),
                "circlesize" => difficulty.circle_size = decimal_or(value, Decimal::from(5)),
                "overalldifficulty" => {
                    difficulty.overall_difficulty = decimal_or(value, Decimal::from(5));
                }
                "approachrate" => difficulty.approach_rate = decimal_or(value, Decimal::from(5)),
                "slidermultiplier" => {
                    difficulty.slider_multiplier = decimal_or(value, Decimal::from(5));
                }
                "slidertickrate" => {
                    difficulty.slider_tick_rate = decimal_or(value, Decimal::from(5));
                }
                _ => {}
            }
        }
        difficulty
    }
}
