//! # Layout Module
//!
//! Derive the beat-axis views the arrangement editor draws from a [`SongTimeline`](crate::SongTimeline).
//!
//! ## Purpose
//! The editor positions everything along a pixels-per-beat axis:
//! 1. **Timeline width** - how far the beat grid must extend
//! 2. **Section rail** - where each section starts and how long it is, in beats
//! 3. **Chord rail** - which chords fall inside each section, clipped to it
//! 4. **Lyric rail** - which lyrics fall inside each section
//!
//! ## Sub-modules
//! - `types` - SectionBeats, ChordSlice, SectionChords, SectionLyrics, TimelineLayout
//! - `engine` - The derivation functions
//!
//! ## Entry Points
//! - [`compute_last_occupied_beat()`] - Width of the beat grid
//! - [`derive_section_beats()`] - Section extents in beats
//! - [`derive_section_chord_slices()`] - Per-section chord progression with carry flags
//! - [`derive_section_lyrics()`] - Per-section lyric placement
//! - [`TimelineLayout::build()`] - All of the above in one report
//!
//! Each has a `*_with` form taking a [`LayoutConfig`](crate::LayoutConfig).
//!
//! ## Example
//! ```rust
//! use songline::{derive_section_chord_slices, ChordEvent, Section, SongTimeline};
//!
//! let timeline = SongTimeline {
//!     sections: vec![Section::new(0.0, Some(10.0))],
//!     chords: vec![ChordEvent::new("Am", 8.0).with_end_sec(12.0)],
//!     ..SongTimeline::with_bpm(120.0)
//! };
//!
//! let slices = derive_section_chord_slices(&timeline);
//! let am = &slices[0].chords[0];
//! assert_eq!(am.clip_end_beat, 20.0);
//! assert!(am.carry_out);
//! assert!(!am.carry_in);
//! ```
//!
//! ## Section End Resolution
//! A section ends at its own `endSec`, else at the next section's `startSec`.
//! The last section without `endSec` is open-ended and gets the default length
//! (4 beats) both on the section rail and as its chord/lyric window.
//!
//! ## Carry Flags
//! A chord that starts before a section is drawn with a carry-in marker; one that
//! runs past the section's end is drawn with a carry-out marker. The slice itself is
//! clipped to the section window.

mod engine;
mod types;


pub use engine::{
    compute_last_occupied_beat, compute_last_occupied_beat_with, derive_section_beats,
    derive_section_beats_with, derive_section_chord_slices, derive_section_chord_slices_with,
    derive_section_lyrics, derive_section_lyrics_with,
};
pub use types::{ChordSlice, LyricPlacement, SectionBeats, SectionChords, SectionLyrics, TimelineLayout};
