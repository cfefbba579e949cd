//! songline: beat/second timeline math for song arrangement editors.
//!
//! Pure functions over an immutable [`SongTimeline`] snapshot: convert between
//! seconds and beats, find how far the beat grid must extend, and derive the
//! section, chord and lyric rails the editor draws.

pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod model;
pub mod tempo;
pub mod validate;

pub use config::LayoutConfig;
pub use error::*;
pub use layout::*;
pub use loader::{load_config, load_config_str, load_timeline, load_timeline_str};
pub use model::*;
pub use tempo::{beat_at_bpm, beat_to_seconds, resolve_bpm, seconds_at_bpm, seconds_to_beat, DEFAULT_BPM};
pub use validate::validate;

/// Load a timeline file and validate it.
/// This is the main entry point for reading untrusted timelines.
pub fn load_checked(path: impl AsRef<std::path::Path>) -> Result<SongTimeline, TimelineError> {
    let timeline = load_timeline(path)?;
    validate(&timeline)?;
    Ok(timeline)
}
