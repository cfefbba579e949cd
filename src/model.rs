//! # Song Timeline Model
//!
//! The immutable snapshot every timeline function reads from.
//!
//! ## Type Hierarchy
//! ```text
//! SongTimeline
//!   ├── bpm_default: Option<f64>
//!   ├── Vec<TempoPoint>   (only the first entry is used)
//!   ├── Vec<Section>      (start, optional end, optional name)
//!   ├── Vec<ChordEvent>   (start, optional beat/duration/end, symbol)
//!   └── Vec<LyricEvent>   (start, optional beat, text)
//! ```
//!
//! ## Wire Format
//! Field names are camelCase on the wire (`bpmDefault`, `tempoMap`, `startSec`,
//! `durationBeats`, ...) so the same JSON the backend serves for the editor can be
//! deserialized directly. Every sequence defaults to empty when absent.
//!
//! ## Optional Positions
//! - A section without `end_sec` extends to the next section's start, or is open-ended.
//! - A chord without `at_beat` (or a lyric without `at_beat`) is placed by converting
//!   `at_sec` at the song tempo ([`ChordEvent::start_beat`], [`LyricEvent::beat`]).
//! - A chord with neither `end_sec` nor `duration_beats` has no known end.

use serde::{Deserialize, Serialize};

use crate::tempo::beat_at_bpm;

/// A tempo change. Only the first point of a tempo map is honored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TempoPoint {
    pub at_sec: f64,
    pub bpm: f64,
}

/// A labeled time range of the song (verse, chorus, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub start_sec: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_sec: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Section {
    pub fn new(start_sec: f64, end_sec: Option<f64>) -> Self {
        Self {
            start_sec,
            end_sec,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// A chord symbol on the chord rail
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordEvent {
    pub at_sec: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_beat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_beats: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_sec: Option<f64>,
    pub symbol: String,
}

impl ChordEvent {
    pub fn new(symbol: impl Into<String>, at_sec: f64) -> Self {
        Self {
            at_sec,
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn with_duration_beats(mut self, beats: f64) -> Self {
        self.duration_beats = Some(beats);
        self
    }

    pub fn with_end_sec(mut self, end_sec: f64) -> Self {
        self.end_sec = Some(end_sec);
        self
    }

    /// Beat position of the chord at the resolved song tempo.
    ///
    /// A stored `at_beat` wins; otherwise `at_sec` is converted.
    pub fn start_beat(&self, bpm: f64) -> f64 {
        self.at_beat.unwrap_or_else(|| beat_at_bpm(self.at_sec, bpm))
    }
}

/// A lyric syllable or word on the lyric rail
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricEvent {
    pub at_sec: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at_beat: Option<f64>,
    pub text: String,
}

impl LyricEvent {
    pub fn new(text: impl Into<String>, at_sec: f64) -> Self {
        Self {
            at_sec,
            at_beat: None,
            text: text.into(),
        }
    }

    /// Beat position of the lyric at the resolved song tempo.
    pub fn beat(&self, bpm: f64) -> f64 {
        self.at_beat.unwrap_or_else(|| beat_at_bpm(self.at_sec, bpm))
    }
}

/// Top-level timeline snapshot
///
/// Constructed and owned by the caller; timeline functions only borrow it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongTimeline {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm_default: Option<f64>,
    #[serde(default)]
    pub tempo_map: Vec<TempoPoint>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub chords: Vec<ChordEvent>,
    #[serde(default)]
    pub lyrics: Vec<LyricEvent>,
}

impl SongTimeline {
    /// Empty timeline at a fixed tempo
    pub fn with_bpm(bpm: f64) -> Self {
        Self {
            tempo_map: vec![TempoPoint { at_sec: 0.0, bpm }],
            ..Default::default()
        }
    }

    /// Explicit or implicit end of the section at `index`.
    ///
    /// Falls back to the next section's start when the section has no `end_sec`.
    /// Returns `None` for an open-ended last section.
    pub fn section_end_sec(&self, index: usize) -> Option<f64> {
        let section = self.sections.get(index)?;
        section
            .end_sec
            .or_else(|| self.sections.get(index + 1).map(|next| next.start_sec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "bpmDefault": 96,
            "tempoMap": [{"atSec": 0, "bpm": 120}],
            "sections": [{"startSec": 0, "endSec": 8, "name": "Verse"}, {"startSec": 8}],
            "chords": [{"atSec": 0, "durationBeats": 4, "symbol": "Am"}],
            "lyrics": [{"atSec": 0.5, "text": "hel-"}]
        }"#;
        let timeline: SongTimeline = serde_json::from_str(json).unwrap();

        assert_eq!(timeline.bpm_default, Some(96.0));
        assert_eq!(timeline.tempo_map[0].bpm, 120.0);
        assert_eq!(timeline.sections[0].name.as_deref(), Some("Verse"));
        assert_eq!(timeline.sections[1].end_sec, None);
        assert_eq!(timeline.chords[0].duration_beats, Some(4.0));
        assert_eq!(timeline.lyrics[0].text, "hel-");
    }

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let timeline: SongTimeline = serde_json::from_str("{}").unwrap();
        assert_eq!(timeline, SongTimeline::default());
    }

    #[test]
    fn test_section_end_resolution() {
        let timeline = SongTimeline {
            sections: vec![
                Section::new(0.0, None),
                Section::new(10.0, Some(15.0)),
                Section::new(20.0, None),
            ],
            ..SongTimeline::with_bpm(120.0)
        };

        assert_eq!(timeline.section_end_sec(0), Some(10.0));
        assert_eq!(timeline.section_end_sec(1), Some(15.0));
        assert_eq!(timeline.section_end_sec(2), None);
        assert_eq!(timeline.section_end_sec(3), None);
    }

    #[test]
    fn test_derived_beats() {
        let mut timeline = SongTimeline::with_bpm(120.0);
        timeline.chords.push(ChordEvent::new("C", 3.0));
        timeline.lyrics.push(LyricEvent {
            at_sec: 3.0,
            at_beat: Some(7.0),
            text: "la".to_string(),
        });

        // 3 seconds at 120 BPM
        assert_eq!(timeline.chords[0].start_beat(120.0), 6.0);
        assert_eq!(timeline.chords[0].start_beat(60.0), 3.0);
        // Stored beat wins over at_sec
        assert_eq!(timeline.lyrics[0].beat(120.0), 7.0);
    }
}
