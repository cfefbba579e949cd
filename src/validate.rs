//! # Timeline Validation
//!
//! The conversion and layout functions accept any numbers and never fail. This
//! module holds the checks a caller runs before trusting their output.
//!
//! ## Validation Rules
//!
//! ### Tempo
//! - `bpmDefault` and every tempo map entry must be finite and greater than zero
//! - A zero BPM would make `beat_to_seconds` divide by zero; there is no fallback
//!
//! ### Sections
//! - `startSec` must be finite
//! - `endSec`, when present, must be finite and not before `startSec`
//!
//! ### Chords
//! - `atSec` and `atBeat` (when present) must be finite
//! - `durationBeats`, when present, must be finite and not negative
//! - `endSec`, when present, must be finite and not before `atSec`
//!
//! ### Lyrics
//! - `atSec` and `atBeat` (when present) must be finite
//!
//! ## Entry Point
//! `validate(timeline: &SongTimeline) -> Result<(), TimelineError>`

use crate::error::TimelineError;
use crate::model::SongTimeline;

/// Validate a timeline. Returns the first problem found.
pub fn validate(timeline: &SongTimeline) -> Result<(), TimelineError> {
    validate_tempo(timeline)?;
    validate_sections(timeline)?;
    validate_chords(timeline)?;
    validate_lyrics(timeline)?;
    Ok(())
}

fn is_usable_bpm(bpm: f64) -> bool {
    bpm.is_finite() && bpm > 0.0
}

fn validate_tempo(timeline: &SongTimeline) -> Result<(), TimelineError> {
    if let Some(bpm) = timeline.bpm_default {
        if !is_usable_bpm(bpm) {
            return Err(TimelineError::InvalidTempo { index: None, bpm });
        }
    }
    for (i, point) in timeline.tempo_map.iter().enumerate() {
        if !is_usable_bpm(point.bpm) {
            return Err(TimelineError::InvalidTempo {
                index: Some(i),
                bpm: point.bpm,
            });
        }
    }
    Ok(())
}

fn validate_sections(timeline: &SongTimeline) -> Result<(), TimelineError> {
    for (i, section) in timeline.sections.iter().enumerate() {
        if !section.start_sec.is_finite() {
            return Err(TimelineError::InvalidSection {
                index: i,
                message: format!("start {} is not a finite number", section.start_sec),
            });
        }
        if let Some(end) = section.end_sec {
            if !end.is_finite() || end < section.start_sec {
                return Err(TimelineError::InvalidSection {
                    index: i,
                    message: format!("end {} must be a finite time at or after start {}", end, section.start_sec),
                });
            }
        }
    }
    Ok(())
}

fn validate_chords(timeline: &SongTimeline) -> Result<(), TimelineError> {
    for (i, chord) in timeline.chords.iter().enumerate() {
        if !chord.at_sec.is_finite() || !chord.at_beat.map_or(true, f64::is_finite) {
            return Err(TimelineError::InvalidChord {
                index: i,
                message: format!("'{}' has no finite position", chord.symbol),
            });
        }
        if let Some(beats) = chord.duration_beats {
            if !beats.is_finite() || beats < 0.0 {
                return Err(TimelineError::InvalidChord {
                    index: i,
                    message: format!("'{}' has duration {} beats", chord.symbol, beats),
                });
            }
        }
        if let Some(end) = chord.end_sec {
            if !end.is_finite() {
                return Err(TimelineError::InvalidChord {
                    index: i,
                    message: format!("'{}' has end {} which is not a finite time", chord.symbol, end),
                });
            }
            if end < chord.at_sec {
                return Err(TimelineError::InvalidChord {
                    index: i,
                    message: format!("'{}' ends at {}s before it starts at {}s", chord.symbol, end, chord.at_sec),
                });
            }
        }
    }
    Ok(())
}

fn validate_lyrics(timeline: &SongTimeline) -> Result<(), TimelineError> {
    for (i, lyric) in timeline.lyrics.iter().enumerate() {
        if !lyric.at_sec.is_finite() || !lyric.at_beat.map_or(true, f64::is_finite) {
            return Err(TimelineError::InvalidLyric {
                index: i,
                message: format!("'{}' has no finite position", lyric.text),
            });
        }
    }
    Ok(())
}
