//! `[General]` section fields.

use crate::osu::Decimal;
use crate::osu::coerce::{bool_value, decimal_or, enum_or_default, int_or};
use crate::osu::path::RelativePath;
use crate::osu::value::{Countdown, DrawPosition, GameMode, SampleSet};

use super::key_values;

/// Fields from the `[General]` section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct General {
    /// Audio file relative to the beatmap directory; `None` when the key
    /// never appeared.
    pub audio_file_name: Option<RelativePath>,
    /// Milliseconds of silence before the audio starts.
    pub audio_lead_in: i32,
    /// Time in milliseconds where the song preview starts; -1 lets the
    /// game pick.
    pub preview_time: i32,
    /// Countdown speed before the first hit object.
    pub countdown: Countdown,
    /// Sample bank used when timing points specify none.
    pub sample_set: SampleSet,
    /// How leniently hit objects stack (0..=1).
    pub stack_leniency: Decimal,
    /// Game mode the map is authored for.
    pub mode: GameMode,
    /// Whether breaks are letterboxed.
    pub letterbox_in_breaks: bool,
    /// Whether the storyboard fire layer draws in front (legacy key).
    pub story_fire_in_front: bool,
    /// Whether the storyboard may use skin sprites.
    pub use_skin_sprites: bool,
    /// Legacy visibility toggle (never read by the game).
    pub always_show_playfield: bool,
    /// Where hit circle overlays draw relative to hit numbers.
    pub overlay_position: DrawPosition,
    /// Preferred skin during gameplay.
    pub skin_preference: String,
    /// Whether an epilepsy warning shows before the map starts.
    pub epilepsy_warning: bool,
    /// Countdown start offset in beats.
    pub countdown_offset: i32,
    /// Whether osu!mania uses the N+1 special key style.
    pub special_style: bool,
    /// Whether the storyboard targets a widescreen viewport.
    pub widescreen_storyboard: bool,
    /// Whether sample playback rate follows speed-changing mods.
    pub samples_match_playback_rate: bool,
}

impl Default for General {
    fn default() -> Self {
        Self {
            audio_file_name: None,
            audio_lead_in: 0,
            preview_time: -1,
            countdown: Countdown::Normal,
            sample_set: SampleSet::Normal,
            stack_leniency: Decimal::from(7) / Decimal::from(10),
            mode: GameMode::Osu,
            letterbox_in_breaks: false,
            story_fire_in_front: true,
            use_skin_sprites: true,
            always_show_playfield: false,
            overlay_position: DrawPosition::NoChange,
            skin_preference: String::new(),
            epilepsy_warning: false,
            countdown_offset: 0,
            special_style: false,
            widescreen_storyboard: false,
            samples_match_playback_rate: false,
        }
    }
}

impl General {
    /// Parses the buffered `[General]` lines on top of the defaults.
    pub(crate) fn from_lines(lines: &[String]) -> Self {
        let mut general = Self::default();
        for (key, value) in key_values(lines, ": ") {
            match key {
                "audiofilename" => general.audio_file_name = Some(RelativePath::new(value)),
                "audioleadin" => general.audio_lead_in = int_or(value, 0),
                // Legacy checksum key: recognized so it is not treated as
                // an unknown key, but its value is discarded.
                "audiohash" => {}
                "previewtime" => general.preview_time = int_or(value, -1),
                "countdown" => general.countdown = enum_or_default(value),
                "sampleset" => general.sample_set = enum_or_default(value),
                "stackleniency" => {
                    general.stack_leniency =
                        decimal_or(value, Decimal::from(7) / Decimal::from(10));
                }
                "mode" => general.mode = enum_or_default(value),
                "letterboxinbreaks" => general.letterbox_in_breaks = bool_value(value),
                "storyfireinfront" => general.story_fire_in_front = bool_value(value),
                "useskinsprites" => general.use_skin_sprites = bool_value(value),
                "alwaysshowplayfield" => general.always_show_playfield = bool_value(value),
                "overlayposition" => general.overlay_position = enum_or_default(value),
                "skinpreference" => general.skin_preference = value.to_owned(),
                "epilepsywarning" => general.epilepsy_warning = bool_value(value),
                "countdownoffset" => general.countdown_offset = int_or(value, 0),
                "specialstyle" => general.special_style = bool_value(value),
                "widescreenstoryboard" => general.widescreen_storyboard = bool_value(value),
                "samplesmatchplaybackrate" => {
                    general.samples_match_playback_rate = bool_value(value);
                }
                _ => {}
            }
        }
        general
    }
}
