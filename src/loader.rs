//! Reading timelines and layout configs from JSON or YAML
//!
//! The backend serves timelines as JSON; hand-written fixtures are usually YAML.
//! The format is taken from the file extension, or sniffed from the first
//! non-blank character when there is none (`{` means JSON).

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::LayoutConfig;
use crate::error::TimelineError;
use crate::model::SongTimeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn sniff(text: &str) -> Self {
        if text.trim_start().starts_with('{') {
            Format::Json
        } else {
            Format::Yaml
        }
    }

    fn name(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }
}

fn decode<T: DeserializeOwned>(text: &str, format: Format) -> Result<T, TimelineError> {
    let parsed = match format {
        Format::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| TimelineError::ParseError {
        format: format.name(),
        message,
    })
}

fn read(path: &Path) -> Result<(String, Format), TimelineError> {
    let text = fs::read_to_string(path).map_err(|source| TimelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let format = Format::from_path(path).unwrap_or_else(|| Format::sniff(&text));
    log::debug!("Reading {} as {}", path.display(), format.name());
    Ok((text, format))
}

/// Parse a timeline from JSON or YAML text.
pub fn load_timeline_str(text: &str) -> Result<SongTimeline, TimelineError> {
    decode(text, Format::sniff(text))
}

pub fn load_timeline(path: impl AsRef<Path>) -> Result<SongTimeline, TimelineError> {
    let (text, format) = read(path.as_ref())?;
    decode(&text, format)
}

/// Parse a layout config from JSON or YAML text. Missing fields keep their defaults.
pub fn load_config_str(text: &str) -> Result<LayoutConfig, TimelineError> {
    decode(text, Format::sniff(text))
}

pub fn load_config(path: impl AsRef<Path>) -> Result<LayoutConfig, TimelineError> {
    let (text, format) = read(path.as_ref())?;
    decode(&text, format)
}
