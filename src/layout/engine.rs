//! Layout derivation engine
//!
//! Stateless functions turning a timeline snapshot into beat-axis views. None of
//! them mutate the timeline; output borrows from it.

use crate::config::LayoutConfig;
use crate::model::{ChordEvent, SongTimeline};
use crate::tempo::{beat_at_bpm, resolve_bpm_or, seconds_at_bpm};

use super::types::{ChordSlice, LyricPlacement, SectionBeats, SectionChords, SectionLyrics};

/// Tempo resolved once per call.
///
/// Conversions are not guarded against a zero or negative BPM.
struct Clock {
    bpm: f64,
}

impl Clock {
    fn new(timeline: &SongTimeline, config: &LayoutConfig) -> Self {
        let bpm = resolve_bpm_or(timeline, config.fallback_bpm);
        if bpm.is_nan() || bpm <= 0.0 {
            log::warn!("Timeline tempo is {} BPM; beat positions will not be meaningful", bpm);
        }
        Self { bpm }
    }

    fn beat(&self, sec: f64) -> f64 {
        beat_at_bpm(sec, self.bpm)
    }

    fn seconds(&self, beat: f64) -> f64 {
        seconds_at_bpm(beat, self.bpm)
    }
}

/// Start and drawn length of the section at `index`, in beats.
///
/// The length is floored to the minimum section length, or the default length
/// when the section end cannot be determined.
fn section_extent(timeline: &SongTimeline, index: usize, clock: &Clock, config: &LayoutConfig) -> (f64, f64) {
    let start_beat = clock.beat(timeline.sections[index].start_sec);
    let length_beats = match timeline.section_end_sec(index) {
        Some(end) => (clock.beat(end) - start_beat).max(config.min_section_beats),
        None => config.default_section_beats,
    };
    (start_beat, length_beats)
}

/// Section window `[start_sec, end_sec)`.
///
/// An open-ended section spans the default section length.
fn section_window(timeline: &SongTimeline, index: usize, clock: &Clock, config: &LayoutConfig) -> (f64, f64) {
    let start = timeline.sections[index].start_sec;
    let end = timeline
        .section_end_sec(index)
        .unwrap_or_else(|| start + clock.seconds(config.default_section_beats));
    (start, end)
}

/// Chord span `[at_sec, end)`, or `None` when the chord has no end information.
fn chord_span(chord: &ChordEvent, clock: &Clock) -> Option<(f64, f64)> {
    let start = chord.at_sec;
    let end = chord
        .end_sec
        .or_else(|| chord.duration_beats.map(|beats| start + clock.seconds(beats)))?;
    Some((start, end))
}

/// Furthest beat occupied by any chord, lyric or section.
///
/// Floored to 32 beats and rounded up to the quarter-beat grid.
///
/// # Example
/// ```
/// use songline::{compute_last_occupied_beat, SongTimeline};
///
/// assert_eq!(compute_last_occupied_beat(&SongTimeline::default()), 32.0);
/// ```
pub fn compute_last_occupied_beat(timeline: &SongTimeline) -> f64 {
    compute_last_occupied_beat_with(timeline, &LayoutConfig::default())
}

pub fn compute_last_occupied_beat_with(timeline: &SongTimeline, config: &LayoutConfig) -> f64 {
    let clock = Clock::new(timeline, config);
    let mut last = 0.0_f64;

    for chord in &timeline.chords {
        last = last.max(chord.start_beat(clock.bpm) + chord.duration_beats.unwrap_or(0.0));
    }

    for lyric in &timeline.lyrics {
        last = last.max(lyric.beat(clock.bpm));
    }

    for (i, section) in timeline.sections.iter().enumerate() {
        last = last.max(clock.beat(section.start_sec));
        if let Some(end) = timeline.section_end_sec(i) {
            last = last.max(clock.beat(end));
        }
    }

    let floored = last.max(config.min_timeline_beats);
    if config.grid_beats > 0.0 {
        (floored / config.grid_beats).ceil() * config.grid_beats
    } else {
        floored
    }
}

/// Place every section on the beat axis, in section order.
///
/// # Example
/// ```
/// use songline::{derive_section_beats, Section, SongTimeline};
///
/// let timeline = SongTimeline {
///     sections: vec![Section::new(0.0, Some(10.0)), Section::new(10.0, Some(20.0))],
///     ..SongTimeline::with_bpm(120.0)
/// };
/// let beats = derive_section_beats(&timeline);
/// assert_eq!((beats[1].start_beat, beats[1].length_beats), (20.0, 20.0));
/// ```
pub fn derive_section_beats(timeline: &SongTimeline) -> Vec<SectionBeats<'_>> {
    derive_section_beats_with(timeline, &LayoutConfig::default())
}

pub fn derive_section_beats_with<'a>(timeline: &'a SongTimeline, config: &LayoutConfig) -> Vec<SectionBeats<'a>> {
    let clock = Clock::new(timeline, config);

    timeline
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let (start_beat, length_beats) = section_extent(timeline, i, &clock, config);
            SectionBeats {
                section,
                start_beat,
                length_beats,
            }
        })
        .collect()
}

/// Slice the chord rail by section.
///
/// Every section gets an entry, possibly with no chords. A chord appears in each
/// section its span overlaps, clipped to the section window. Chords with neither
/// `end_sec` nor `duration_beats` are left out.
pub fn derive_section_chord_slices(timeline: &SongTimeline) -> Vec<SectionChords<'_>> {
    derive_section_chord_slices_with(timeline, &LayoutConfig::default())
}

pub fn derive_section_chord_slices_with<'a>(
    timeline: &'a SongTimeline,
    config: &LayoutConfig,
) -> Vec<SectionChords<'a>> {
    let clock = Clock::new(timeline, config);

    let spans: Vec<(&ChordEvent, f64, f64)> = timeline
        .chords
        .iter()
        .filter_map(|chord| match chord_span(chord, &clock) {
            Some((start, end)) => Some((chord, start, end)),
            None => {
                log::debug!("Chord '{}' at {}s has no end; left off the chord rail", chord.symbol, chord.at_sec);
                None
            }
        })
        .collect();

    timeline
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let (section_start, section_end) = section_window(timeline, i, &clock, config);

            let chords = spans
                .iter()
                .filter(|(_, start, end)| *start < section_end && *end > section_start)
                .map(|&(chord, start, end)| {
                    let clip_start = start.max(section_start);
                    let clip_end = end.min(section_end);
                    ChordSlice {
                        chord,
                        clip_start_sec: clip_start,
                        clip_end_sec: clip_end,
                        clip_start_beat: clock.beat(clip_start),
                        clip_end_beat: clock.beat(clip_end),
                        carry_in: start < section_start,
                        carry_out: end > section_end,
                    }
                })
                .collect();

            SectionChords { section, chords }
        })
        .collect()
}

/// Group the lyric rail by section.
///
/// A lyric belongs to a section when its beat lies in `[start_beat, start_beat + length_beats)`
/// of the section as drawn on the section rail, so a section shorter than the
/// minimum length still collects the lyrics inside its box. Lyrics outside every
/// section are left out.
pub fn derive_section_lyrics(timeline: &SongTimeline) -> Vec<SectionLyrics<'_>> {
    derive_section_lyrics_with(timeline, &LayoutConfig::default())
}

pub fn derive_section_lyrics_with<'a>(timeline: &'a SongTimeline, config: &LayoutConfig) -> Vec<SectionLyrics<'a>> {
    let clock = Clock::new(timeline, config);

    timeline
        .sections
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let (start_beat, length_beats) = section_extent(timeline, i, &clock, config);
            let end_beat = start_beat + length_beats;

            let lyrics = timeline
                .lyrics
                .iter()
                .filter_map(|lyric| {
                    let beat = lyric.beat(clock.bpm);
                    (beat >= start_beat && beat < end_beat).then(|| LyricPlacement {
                        lyric,
                        beat,
                        offset_beats: beat - start_beat,
                    })
                })
                .collect();

            SectionLyrics { section, lyrics }
        })
        .collect()
}
