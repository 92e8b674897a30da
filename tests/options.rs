//! Per-section parse switches: a disabled section keeps its defaults no
//! matter what the input holds, while enabled sections parse normally.

use std::path::Path;

use pretty_assertions::assert_eq;

use osumap_rs::osu::prelude::*;

const SOURCE: &str = "\
[General]
AudioFilename: drive.mp3
Mode: 3

[Editor]
Bookmarks: 400,800

[Metadata]
Title:Switchboard
BeatmapSetID:771020

[Difficulty]
ApproachRate:9.6

[Events]
0,0,\"board.png\",0,0
2,12000,15000

[TimingPoints]
0,400,4,1,0,100,1,0

[HitObjects]
256,192,400,1,0,0:0:0:0:
";

#[test]
fn all_and_none_cover_every_switch() {
    assert_eq!(ParseOptions::default(), ParseOptions::all());
    let none = ParseOptions::none();
    assert!(
        !(none.general
            || none.editor
            || none.metadata
            || none.difficulty
            || none.events
            || none.timing_points
            || none.hit_objects)
    );
}

#[test]
fn disabled_sections_keep_defaults_for_any_input() {
    let beatmap = parse_beatmap_with(SOURCE, ParseOptions::none());
    assert_eq!(beatmap, Beatmap::default());
}

#[test]
fn each_disabled_section_leaves_the_others_untouched() {
    let full = parse_beatmap(SOURCE);

    let beatmap = parse_beatmap_with(SOURCE, ParseOptions { general: false, ..ParseOptions::all() });
    assert_eq!(beatmap.general, General::default());
    assert_eq!(beatmap.metadata, full.metadata);
    assert_eq!(beatmap.hit_objects, full.hit_objects);

    let beatmap = parse_beatmap_with(SOURCE, ParseOptions { editor: false, ..ParseOptions::all() });
    assert_eq!(beatmap.editor, Editor::default());
    assert_eq!(beatmap.general, full.general);

    let beatmap = parse_beatmap_with(SOURCE, ParseOptions { metadata: false, ..ParseOptions::all() });
    assert_eq!(beatmap.metadata, Metadata::default());
    assert_eq!(beatmap.difficulty, full.difficulty);

    let beatmap =
        parse_beatmap_with(SOURCE, ParseOptions { difficulty: false, ..ParseOptions::all() });
    assert_eq!(beatmap.difficulty, Difficulty::default());
    assert_eq!(beatmap.editor, full.editor);

    let beatmap = parse_beatmap_with(SOURCE, ParseOptions { events: false, ..ParseOptions::all() });
    assert_eq!(beatmap.events, vec![]);
    assert_eq!(beatmap.timing_points, full.timing_points);

    let beatmap =
        parse_beatmap_with(SOURCE, ParseOptions { timing_points: false, ..ParseOptions::all() });
    assert_eq!(beatmap.timing_points, vec![]);
    assert_eq!(beatmap.events, full.events);

    let beatmap =
        parse_beatmap_with(SOURCE, ParseOptions { hit_objects: false, ..ParseOptions::all() });
    assert_eq!(beatmap.hit_objects, vec![]);
    assert_eq!(beatmap.events, full.events);
}

#[test]
fn events_only_parse_supports_the_background_workflow() {
    // Replacing backgrounds needs nothing but the events, so the other
    // six sections can be skipped wholesale.
    let options = ParseOptions { events: true, ..ParseOptions::none() };
    let beatmap = parse_beatmap_with(SOURCE, options);

    assert_eq!(beatmap.general, General::default());
    assert_eq!(beatmap.hit_objects, vec![]);

    let backgrounds: Vec<_> = beatmap
        .events
        .iter()
        .filter_map(|event| match event {
            Event::Background(background) => {
                background.file_name.resolve(Path::new("/songs/771020 switchboard"))
            }
            _ => None,
        })
        .collect();
    assert_eq!(backgrounds, vec![Path::new("/songs/771020 switchboard/board.png")]);
}

#[test]
fn disabling_a_section_is_equivalent_to_emptying_it() {
    const WITHOUT_RECORDS: &str = "\
[General]
AudioFilename: drive.mp3
Mode: 3

[Editor]
Bookmarks: 400,800

[Metadata]
Title:Switchboard
BeatmapSetID:771020

[Difficulty]
ApproachRate:9.6

[Events]

[TimingPoints]

[HitObjects]
";
    let disabled = parse_beatmap_with(SOURCE, ParseOptions {
        events: false,
        timing_points: false,
        hit_objects: false,
        ..ParseOptions::all()
    });
    assert_eq!(disabled, parse_beatmap(WITHOUT_RECORDS));
}
