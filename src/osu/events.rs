//! Event records from the `[Events]` section.
//!
//! Only backgrounds, videos, and breaks are modeled. Colour records and
//! storyboard script commands share the section but are dropped during
//! parsing, as is any record whose discriminator is unknown.

use super::coerce::{int_or, split_list};
use super::path::RelativePath;

/// Payload shared by background and video events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackgroundEvent {
    /// Start time in milliseconds. Backgrounds conventionally write 0.
    pub start_time: i32,
    /// Media file relative to the beatmap directory, with any double
    /// quotes around the name stripped.
    pub file_name: RelativePath,
    /// Horizontal offset of the media in osu! pixels from screen centre.
    pub x_offset: i32,
    /// Vertical offset of the media in osu! pixels from screen centre.
    pub y_offset: i32,
}

/// A gameplay break.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakEvent {
    /// Break start in milliseconds.
    pub start_time: i32,
    /// Break end in milliseconds. When the record omits it or it does
    /// not parse, this is the start time plus one.
    pub end_time: i32,
}

/// One parsed `[Events]` record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A background image (code 0).
    Background(BackgroundEvent),
    /// A background video (code 1), carrying the same payload shape.
    Video(BackgroundEvent),
    /// A gameplay break (code 2).
    Break(BreakEvent),
}

impl Event {
    /// The event's start time in milliseconds.
    #[must_use]
    pub const fn start_time(&self) -> i32 {
        match self {
            Self::Background(event) | Self::Video(event) => event.start_time,
            Self::Break(event) => event.start_time,
        }
    }
}

/// Parses one comma-record from the events buffer. Records whose
/// discriminator is not a background, video, or break are dropped.
pub(crate) fn parse_event(line: &str) -> Option<Event> {
    let slots = split_list(line, ',');
    let discriminator = slots.first().copied().unwrap_or("").trim();
    let start_time = slots.get(1).map_or(0, |slot| int_or(slot, 0));
    let params = slots.get(2..).unwrap_or(&[]);

    let code = match discriminator.parse::<i32>() {
        Ok(code) => code,
        Err(_) => match discriminator {
            "background" => 0,
            "video" => 1,
            "break" => 2,
            _ => return None,
        },
    };
    match code {
        0 => Some(Event::Background(background_payload(start_time, params))),
        1 => Some(Event::Video(background_payload(start_time, params))),
        2 => {
            let fallback = start_time.saturating_add(1);
            let end_time = params.first().map_or(fallback, |slot| int_or(slot, fallback));
            Some(Event::Break(BreakEvent { start_time, end_time }))
        }
        _ => None,
    }
}

fn background_payload(start_time: i32, params: &[&str]) -> BackgroundEvent {
    BackgroundEvent {
        start_time,
        file_name: params.first().map(|slot| RelativePath::new(slot)).unwrap_or_default(),
        x_offset: params.get(1).map_or(0, |slot| int_or(slot, 0)),
        y_offset: params.get(2).map_or(0, |slot| int_or(slot, 0)),
    }
}
