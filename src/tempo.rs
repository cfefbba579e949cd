//! Seconds <-> beats conversion
//!
//! The song tempo is a single global BPM: the first tempo map entry, else
//! `bpm_default`, else [`DEFAULT_BPM`]. Tempo changes later in the map are not
//! interpreted.
//!
//! A zero or negative BPM is not corrected here. Conversions then produce
//! `inf`, `NaN` or negative values; run [`crate::validate`] first to reject such input.

use crate::model::SongTimeline;

/// Tempo used when the timeline carries none
pub const DEFAULT_BPM: f64 = 120.0;

/// Resolve the single global tempo of a timeline.
pub fn resolve_bpm(timeline: &SongTimeline) -> f64 {
    resolve_bpm_or(timeline, DEFAULT_BPM)
}

pub(crate) fn resolve_bpm_or(timeline: &SongTimeline, fallback: f64) -> f64 {
    timeline
        .tempo_map
        .first()
        .map(|point| point.bpm)
        .or(timeline.bpm_default)
        .unwrap_or(fallback)
}

/// Convert a time in seconds to a beat position.
///
/// # Example
/// ```
/// use songline::{seconds_to_beat, SongTimeline};
///
/// let timeline = SongTimeline::with_bpm(120.0);
/// assert_eq!(seconds_to_beat(30.0, &timeline), 60.0);
/// ```
pub fn seconds_to_beat(sec: f64, timeline: &SongTimeline) -> f64 {
    beat_at_bpm(sec, resolve_bpm(timeline))
}

/// Convert a beat position to a time in seconds.
///
/// # Example
/// ```
/// use songline::{beat_to_seconds, SongTimeline};
///
/// let timeline = SongTimeline::with_bpm(120.0);
/// assert_eq!(beat_to_seconds(60.0, &timeline), 30.0);
/// ```
pub fn beat_to_seconds(beat: f64, timeline: &SongTimeline) -> f64 {
    seconds_at_bpm(beat, resolve_bpm(timeline))
}

/// Beat position of `sec` at an already resolved tempo.
pub fn beat_at_bpm(sec: f64, bpm: f64) -> f64 {
    sec * bpm / 60.0
}

/// Time in seconds of `beat` at an already resolved tempo.
pub fn seconds_at_bpm(beat: f64, bpm: f64) -> f64 {
    beat * 60.0 / bpm
}
