use std::path::PathBuf;

use thiserror::Error;

/// Every way an atlas generation run can fail.
///
/// All variants except [`AtlasError::UnsupportedCharacters`] abort the run
/// immediately. Unsupported characters are collected over the whole pass and
/// reported once, after the atlas and index have been written.
#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("configuration error ({charset_option}): {reason}")]
    Config {
        charset_option: String,
        reason: String,
    },

    #[error("no {} found", .0.display())]
    MissingResource(PathBuf),

    #[error("{source_name} mode is {actual} instead of required RGB")]
    Format {
        source_name: &'static str,
        actual: String,
    },

    #[error("failed to process {what}: {source}")]
    Image {
        what: String,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode glyph map: {0}")]
    GlyphMap(#[from] serde_json::Error),

    #[error("{} unsupported character(s): {}", .0.len(), format_chars(.0))]
    UnsupportedCharacters(Vec<char>),
}

impl AtlasError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

fn format_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|ch| format!("\"{ch}\" (U+{:04X})", *ch as u32))
        .collect::<Vec<_>>()
        .join(", ")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
