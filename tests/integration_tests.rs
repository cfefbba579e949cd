//! Integration tests for songline
//!
//! Load timelines the way the editor receives them and check the derived layout.

use std::io::Write;

use songline::{
    beat_to_seconds, compute_last_occupied_beat, derive_section_beats, derive_section_chord_slices,
    load_checked, load_config, load_timeline, load_timeline_str, seconds_to_beat, validate, LayoutConfig,
    SongTimeline, TimelineError, TimelineLayout,
};

const BACKEND_JSON: &str = r#"{
    "bpmDefault": 90,
    "tempoMap": [{"atSec": 0, "bpm": 120}],
    "sections": [
        {"startSec": 0, "endSec": 10, "name": "Verse"},
        {"startSec": 10, "endSec": 20, "name": "Chorus"}
    ],
    "chords": [
        {"atSec": 0, "durationBeats": 16, "symbol": "C"},
        {"atSec": 8, "endSec": 12, "symbol": "Am"},
        {"atSec": 12, "symbol": "F"},
        {"atSec": 40, "endSec": 44, "symbol": "G"}
    ],
    "lyrics": [
        {"atSec": 1, "text": "Hold"},
        {"atSec": 11, "atBeat": 22, "text": "on"}
    ]
}"#;

fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_backend_timeline_layout() {
    let timeline = load_timeline_str(BACKEND_JSON).unwrap();
    assert!(validate(&timeline).is_ok());

    // Tempo map wins over bpmDefault
    assert_eq!(seconds_to_beat(30.0, &timeline), 60.0);
    assert_eq!(beat_to_seconds(60.0, &timeline), 30.0);

    let sections = derive_section_beats(&timeline);
    let extents: Vec<(f64, f64)> = sections.iter().map(|s| (s.start_beat, s.length_beats)).collect();
    assert_eq!(extents, vec![(0.0, 20.0), (20.0, 20.0)]);

    let slices = derive_section_chord_slices(&timeline);
    let verse: Vec<&str> = slices[0].chords.iter().map(|s| s.chord.symbol.as_str()).collect();
    let chorus: Vec<&str> = slices[1].chords.iter().map(|s| s.chord.symbol.as_str()).collect();
    // F has no end; G is past every section
    assert_eq!(verse, vec!["C", "Am"]);
    assert_eq!(chorus, vec!["Am"]);

    let am_in_verse = &slices[0].chords[1];
    assert_eq!(am_in_verse.clip_end_beat, 20.0);
    assert!(am_in_verse.carry_out);
    assert!(!am_in_verse.carry_in);

    // G chord at 40s (beat 80) is the furthest thing on the timeline
    assert_eq!(compute_last_occupied_beat(&timeline), 80.0);
}

#[test]
fn test_layout_report_serializes() {
    let timeline = load_timeline_str(BACKEND_JSON).unwrap();
    let layout = TimelineLayout::new(&timeline);
    let json = serde_json::to_value(&layout).unwrap();

    assert_eq!(json["bpm"], 120.0);
    assert_eq!(json["sections"][1]["section"]["name"], "Chorus");
    assert_eq!(json["chordSlices"][1]["chords"][0]["carryIn"], true);
    assert_eq!(json["lyricSlices"][1]["lyrics"][0]["lyric"]["text"], "on");
    assert_eq!(json["lyricSlices"][1]["lyrics"][0]["offsetBeats"], 2.0);
}

#[test]
fn test_load_yaml_file() {
    let file = write_temp(
        ".yaml",
        r#"
tempoMap:
  - atSec: 0
    bpm: 60
sections:
  - startSec: 0
  - startSec: 8
lyrics:
  - atSec: 3
    text: la
"#,
    );

    let timeline = load_checked(file.path()).unwrap();
    let sections = derive_section_beats(&timeline);
    assert_eq!(sections[0].length_beats, 8.0);
    assert_eq!(sections[1].length_beats, 4.0);
}

#[test]
fn test_load_checked_rejects_zero_bpm() {
    let file = write_temp(".json", r#"{"tempoMap": [{"atSec": 0, "bpm": 0}]}"#);

    let result = load_checked(file.path());
    assert!(matches!(result, Err(TimelineError::InvalidTempo { index: Some(0), .. })));

    // Unchecked loading still works; the math is left unguarded
    let timeline = load_timeline(file.path()).unwrap();
    assert!(beat_to_seconds(1.0, &timeline).is_infinite());
}

#[test]
fn test_sniffs_format_without_extension() {
    let file = write_temp("", r#"{"bpmDefault": 140}"#);
    let timeline = load_timeline(file.path()).unwrap();
    assert_eq!(timeline.bpm_default, Some(140.0));
}

#[test]
fn test_config_file_changes_layout() {
    let config_file = write_temp(".yml", "defaultSectionBeats: 16\nminTimelineBeats: 8\n");
    let config = load_config(config_file.path()).unwrap();
    assert_eq!(
        config,
        LayoutConfig {
            default_section_beats: 16.0,
            min_timeline_beats: 8.0,
            ..Default::default()
        }
    );

    let timeline = SongTimeline {
        sections: vec![songline::Section::new(0.0, None)],
        ..SongTimeline::with_bpm(120.0)
    };
    let layout = TimelineLayout::build(&timeline, &config);
    assert_eq!(layout.sections[0].length_beats, 16.0);
    assert_eq!(layout.last_occupied_beat, 8.0);
}

#[test]
fn test_invalid_yaml_reports_format() {
    let file = write_temp(".yaml", "sections: [startSec: oops");
    let err = load_timeline(file.path()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid yaml input"), "{}", err);
}

#[test]
fn test_load_checked_rejects_non_finite_yaml_positions() {
    let file = write_temp(
        ".yaml",
        r#"
sections:
  - startSec: 0
    endSec: 10
chords:
  - atSec: .nan
    endSec: 4
    symbol: C
"#,
    );
    let result = load_checked(file.path());
    assert!(matches!(result, Err(TimelineError::InvalidChord { index: 0, .. })), "{:?}", result);

    let file = write_temp(
        ".yaml",
        r#"
chords:
  - atSec: 1
    endSec: .inf
    symbol: G
lyrics:
  - atSec: 1
    text: ok
"#,
    );
    assert!(matches!(load_checked(file.path()), Err(TimelineError::InvalidChord { .. })));

    let file = write_temp(".yaml", "lyrics:\n  - atSec: -.inf\n    text: gone\n");
    assert!(matches!(load_checked(file.path()), Err(TimelineError::InvalidLyric { index: 0, .. })));
}
