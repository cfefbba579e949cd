//! Layout configuration
//!
//! The constants the layout functions use to keep the rendered timeline sane.
//! Defaults match what the editor has always drawn; a YAML or JSON file can
//! override any subset of them (see [`crate::load_config`]).
//!
//! ```yaml
//! minTimelineBeats: 64
//! gridBeats: 1
//! ```

use serde::{Deserialize, Serialize};

use crate::tempo::DEFAULT_BPM;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// Tempo used when the timeline has neither a tempo map nor `bpmDefault`
    pub fallback_bpm: f64,
    /// Lower bound for the last occupied beat
    pub min_timeline_beats: f64,
    /// The last occupied beat is rounded up to a multiple of this
    pub grid_beats: f64,
    /// Length of a section whose end cannot be determined
    pub default_section_beats: f64,
    /// Shortest length a section is drawn with
    pub min_section_beats: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fallback_bpm: DEFAULT_BPM,
            min_timeline_beats: 32.0,
            grid_beats: 0.25,
            default_section_beats: 4.0,
            min_section_beats: 1.0,
        }
    }
}
