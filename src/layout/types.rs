//! Layout output types
//!
//! All types borrow the sections, chords and lyrics of the timeline they were
//! derived from, and serialize to camelCase JSON for the rendering layer.

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::model::{ChordEvent, LyricEvent, Section, SongTimeline};
use crate::tempo::resolve_bpm_or;

use super::engine::{
    compute_last_occupied_beat_with, derive_section_beats_with, derive_section_chord_slices_with,
    derive_section_lyrics_with,
};

/// A section placed on the beat axis
///
/// `length_beats` is at least the configured minimum (1 beat by default), and the
/// default section length (4 beats) when the section end is unknown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBeats<'a> {
    pub section: &'a Section,
    pub start_beat: f64,
    pub length_beats: f64,
}

/// A chord clipped to the window of one section
///
/// # Fields
/// - `clip_start_sec`/`clip_end_sec`: the chord span intersected with the section window
/// - `clip_start_beat`/`clip_end_beat`: the same bounds on the beat axis
/// - `carry_in`: the chord started before the section
/// - `carry_out`: the chord continues past the section end
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSlice<'a> {
    pub chord: &'a ChordEvent,
    pub clip_start_sec: f64,
    pub clip_end_sec: f64,
    pub clip_start_beat: f64,
    pub clip_end_beat: f64,
    pub carry_in: bool,
    pub carry_out: bool,
}

/// The chord progression of one section, in chord input order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionChords<'a> {
    pub section: &'a Section,
    pub chords: Vec<ChordSlice<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LyricPlacement<'a> {
    pub lyric: &'a LyricEvent,
    pub beat: f64,
    /// Distance from the section start
    pub offset_beats: f64,
}

/// The lyrics that fall inside one section, in lyric input order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionLyrics<'a> {
    pub section: &'a Section,
    pub lyrics: Vec<LyricPlacement<'a>>,
}

/// Everything the editor needs to draw one timeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout<'a> {
    pub bpm: f64,
    pub last_occupied_beat: f64,
    pub sections: Vec<SectionBeats<'a>>,
    pub chord_slices: Vec<SectionChords<'a>>,
    pub lyric_slices: Vec<SectionLyrics<'a>>,
}

impl<'a> TimelineLayout<'a> {
    /// Build the layout with the default configuration
    pub fn new(timeline: &'a SongTimeline) -> Self {
        Self::build(timeline, &LayoutConfig::default())
    }

    pub fn build(timeline: &'a SongTimeline, config: &LayoutConfig) -> Self {
        Self {
            bpm: resolve_bpm_or(timeline, config.fallback_bpm),
            last_occupied_beat: compute_last_occupied_beat_with(timeline, config),
            sections: derive_section_beats_with(timeline, config),
            chord_slices: derive_section_chord_slices_with(timeline, config),
            lyric_slices: derive_section_lyrics_with(timeline, config),
        }
    }
}
