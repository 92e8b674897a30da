//! A lenient parser for the osu! beatmap (`.osu`) text format.
//!
//! Beatmap files are written by mappers and rewritten by many tools over
//! many format versions, so files in the wild carry stray whitespace,
//! missing fields, and half-finished records. This crate parses them
//! anyway: every field has a documented default, every malformed value
//! falls back to it, and no input text is an error.
//!
//! The parser lives in the [`osu`] module; start at [`osu::parse_beatmap`]
//! or, for a single section, [`osu::parse_beatmap_with`]:
//!
//! ```
//! use osumap_rs::osu::prelude::*;
//!
//! let source = "[Events]\n0,0,\"bg.jpg\",0,0\n2,1000,2500\n";
//! let options = ParseOptions { events: true, ..ParseOptions::none() };
//! let beatmap = parse_beatmap_with(source, options);
//!
//! assert_eq!(beatmap.events.len(), 2);
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize`/`Deserialize` on every model type.

pub mod osu;
