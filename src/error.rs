//! # Error Types
//!
//! Errors for loading and validating song timelines.
//!
//! The timeline math itself never fails: missing optional fields are replaced by
//! defaults and numeric edge cases (like a zero tempo) flow through as `inf`/`NaN`.
//! Errors only come from the edges of the crate:
//! - `ParseError` / `Io` - reading a timeline or layout config
//! - `InvalidTempo`, `InvalidSection`, `InvalidChord`, `InvalidLyric` - [`crate::validate`] checks
//!
//! ## Usage
//! ```rust
//! use songline::{load_timeline_str, validate, TimelineError};
//!
//! let timeline = load_timeline_str(r#"{"tempoMap": [{"atSec": 0, "bpm": 0}]}"#).unwrap();
//! match validate(&timeline) {
//!     Err(TimelineError::InvalidTempo { index, bpm }) => {
//!         eprintln!("tempo {:?} is {}", index, bpm);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//!     Ok(()) => unreachable!(),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimelineError {
    /// The input could not be decoded.
    ///
    /// # Example
    /// ```
    /// # use songline::TimelineError;
    /// let err = TimelineError::ParseError {
    ///     format: "json",
    ///     message: "expected value at line 1 column 1".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid json input: expected value at line 1 column 1");
    /// ```
    #[error("Invalid {format} input: {message}")]
    ParseError {
        format: &'static str,
        message: String,
    },

    #[error("Could not read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A tempo that cannot be used to convert between seconds and beats.
    ///
    /// `index` is `None` when the offending value is `bpmDefault`.
    #[error("Invalid tempo{}: {bpm} BPM (must be a positive number)", .index.map(|i| format!(" at tempo map entry {}", i)).unwrap_or_default())]
    InvalidTempo { index: Option<usize>, bpm: f64 },

    #[error("Invalid section {index}: {message}")]
    InvalidSection { index: usize, message: String },

    #[error("Invalid chord {index}: {message}")]
    InvalidChord { index: usize, message: String },

    #[error("Invalid lyric {index}: {message}")]
    InvalidLyric { index: usize, message: String },
}
