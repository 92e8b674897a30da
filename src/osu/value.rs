//! Coded vocabulary values used by beatmap fields.
//!
//! Each enum pairs the declared integer codes of the format with the
//! lowercase names mappers may write instead. Unknown codes and names are
//! rejected by the `TryFrom` impls; the coercion helpers in
//! [`coerce`](super::coerce) turn that rejection into the field's default.

use std::fmt;

/// Countdown speed played before the first hit object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Countdown {
    /// No countdown (code 0).
    #[default]
    NoCountdown,
    /// The normal countdown (code 1).
    Normal,
    /// Half speed (code 2).
    Half,
    /// Double speed (code 3).
    Double,
}

impl TryFrom<i32> for Countdown {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::NoCountdown),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Half),
            3 => Ok(Self::Double),
            _ => Err(code),
        }
    }
}

impl<'a> TryFrom<&'a str> for Countdown {
    type Error = &'a str;

    fn try_from(name: &'a str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "nocountdown" => Ok(Self::NoCountdown),
            "normal" => Ok(Self::Normal),
            "half" => Ok(Self::Half),
            "double" => Ok(Self::Double),
            _ => Err(name),
        }
    }
}

impl From<Countdown> for i32 {
    fn from(value: Countdown) -> Self {
        match value {
            Countdown::NoCountdown => 0,
            Countdown::Normal => 1,
            Countdown::Half => 2,
            Countdown::Double => 3,
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// A bank that hit sounds are sampled from.
///
/// Code 0 selects no custom bank, deferring to whatever surrounds the
/// value (the active timing point, or the normal sound's bank for
/// additions).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SampleSet {
    /// No custom bank (code 0).
    #[default]
    NoCustom,
    /// The normal bank (code 1).
    Normal,
    /// The soft bank (code 2).
    Soft,
    /// The drum bank (code 3).
    Drum,
}

impl TryFrom<i32> for SampleSet {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::NoCustom),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Soft),
            3 => Ok(Self::Drum),
            _ => Err(code),
        }
    }
}

impl<'a> TryFrom<&'a str> for SampleSet {
    type Error = &'a str;

    fn try_from(name: &'a str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "soft" => Ok(Self::Soft),
            "drum" => Ok(Self::Drum),
            _ => Err(name),
        }
    }
}

impl From<SampleSet> for i32 {
    fn from(value: SampleSet) -> Self {
        match value {
            SampleSet::NoCustom => 0,
            SampleSet::Normal => 1,
            SampleSet::Soft => 2,
            SampleSet::Drum => 3,
        }
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// The game mode a beatmap is authored for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMode {
    /// osu!standard (code 0).
    #[default]
    Osu,
    /// osu!taiko (code 1).
    Taiko,
    /// osu!catch (code 2).
    Catch,
    /// osu!mania (code 3).
    Mania,
}

impl TryFrom<i32> for GameMode {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Osu),
            1 => Ok(Self::Taiko),
            2 => Ok(Self::Catch),
            3 => Ok(Self::Mania),
            _ => Err(code),
        }
    }
}

impl<'a> TryFrom<&'a str> for GameMode {
    type Error = &'a str;

    fn try_from(name: &'a str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "osu" => Ok(Self::Osu),
            "taiko" => Ok(Self::Taiko),
            "catch" => Ok(Self::Catch),
            "mania" => Ok(Self::Mania),
            _ => Err(name),
        }
    }
}

impl From<GameMode> for i32 {
    fn from(value: GameMode) -> Self {
        match value {
            GameMode::Osu => 0,
            GameMode::Taiko => 1,
            GameMode::Catch => 2,
            GameMode::Mania => 3,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// Where hit circle overlays draw relative to hit numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawPosition {
    /// Use the skin's own layering (code 0).
    #[default]
    NoChange,
    /// Draw overlays under the numbers (code 1).
    Below,
    /// Draw overlays over the numbers (code 2).
    Above,
}

impl TryFrom<i32> for DrawPosition {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::NoChange),
            1 => Ok(Self::Below),
            2 => Ok(Self::Above),
            _ => Err(code),
        }
    }
}

impl<'a> TryFrom<&'a str> for DrawPosition {
    type Error = &'a str;

    fn try_from(name: &'a str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "nochange" => Ok(Self::NoChange),
            "below" => Ok(Self::Below),
            "above" => Ok(Self::Above),
            _ => Err(name),
        }
    }
}

impl From<DrawPosition> for i32 {
    fn from(value: DrawPosition) -> Self {
        match value {
            DrawPosition::NoChange => 0,
            DrawPosition::Below => 1,
            DrawPosition::Above => 2,
        }
    }
}

impl fmt::Display for DrawPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// A hit sound layered over an object's hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitSound {
    /// The normal hit sound (code 0), always played.
    #[default]
    Normal,
    /// A whistle (code 1).
    Whistle,
    /// A finisher (code 2).
    Finish,
    /// A clap (code 3).
    Clap,
}

impl TryFrom<i32> for HitSound {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Whistle),
            2 => Ok(Self::Finish),
            3 => Ok(Self::Clap),
            _ => Err(code),
        }
    }
}

impl<'a> TryFrom<&'a str> for HitSound {
    type Error = &'a str;

    fn try_from(name: &'a str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "whistle" => Ok(Self::Whistle),
            "finish" => Ok(Self::Finish),
            "clap" => Ok(Self::Clap),
            _ => Err(name),
        }
    }
}

impl From<HitSound> for i32 {
    fn from(value: HitSound) -> Self {
        match value {
            HitSound::Normal => 0,
            HitSound::Whistle => 1,
            HitSound::Finish => 2,
            HitSound::Clap => 3,
        }
    }
}

impl fmt::Display for HitSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// Extra toggles a timing point can turn on for its interval.
///
/// Codes 1 and 2 are declared in the format's table but carry no
/// behavior; they are kept so those values round-trip through the code
/// lookup instead of collapsing to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effects {
    /// Kiai time is active (code 0).
    #[default]
    KiaiTime,
    /// Declared but unused (code 1).
    Unused1,
    /// Declared but unused (code 2).
    Unused2,
    /// The first barline is omitted in taiko and mania (code 3).
    BarlineOmission,
}

impl TryFrom<i32> for Effects {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::KiaiTime),
            1 => Ok(Self::Unused1),
            2 => Ok(Self::Unused2),
            3 => Ok(Self::BarlineOmission),
            _ => Err(code),
        }
    }
}

impl<'a> TryFrom<&'a str> for Effects {
    type Error = &'a str;

    fn try_from(name: &'a str) -> Result<Self, Self::Error> {
        match name.to_ascii_lowercase().as_str() {
            "kiaitime" => Ok(Self::KiaiTime),
            "barlineomission" => Ok(Self::BarlineOmission),
            _ => Err(name),
        }
    }
}

impl From<Effects> for i32 {
    fn from(value: Effects) -> Self {
        match value {
            Effects::KiaiTime => 0,
            Effects::Unused1 => 1,
            Effects::Unused2 => 2,
            Effects::BarlineOmission => 3,
        }
    }
}

impl fmt::Display for Effects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", i32::from(*self))
    }
}

/// How a slider body is built from its control points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveType {
    /// A bezier curve (letter `b`).
    #[default]
    Bezier,
    /// A centripetal catmull-rom spline (letter `c`).
    CentripetalCatmullRom,
    /// Straight line segments (letter `l`).
    Linear,
    /// A circular arc through three points (letter `p`).
    PerfectCircle,
}

impl<'a> TryFrom<&'a str> for CurveType {
    type Error = &'a str;

    fn try_from(letter: &'a str) -> Result<Self, Self::Error> {
        match letter.to_ascii_lowercase().as_str() {
            "b" => Ok(Self::Bezier),
            "c" => Ok(Self::CentripetalCatmullRom),
            "l" => Ok(Self::Linear),
            "p" => Ok(Self::PerfectCircle),
            _ => Err(letter),
        }
    }
}

impl From<CurveType> for char {
    fn from(value: CurveType) -> Self {
        match value {
            CurveType::Bezier => 'b',
            CurveType::CentripetalCatmullRom => 'c',
            CurveType::Linear => 'l',
            CurveType::PerfectCircle => 'p',
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}
