use std::collections::BTreeSet;
use std::path::Path;

use crate::config::AtlasConfig;
use crate::error::AtlasError;

/// Sorted, duplicate-free set of characters to pack.
///
/// The order is the packing order: the i-th character lands in the i-th
/// atlas cell and on the i-th line of the index file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Build a set from whitespace-separated text.
    ///
    /// Whitespace splitting drops the space character, so it is added back
    /// explicitly. Returns `None` when the text holds no characters at all.
    pub fn parse(text: &str) -> Option<Self> {
        let mut set: BTreeSet<char> = text.split_whitespace().flat_map(str::chars).collect();
        if set.is_empty() {
            return None;
        }
        set.insert(' ');
        Some(Self { chars: set.into_iter().collect() })
    }

    /// Read the required-character list named by `config`.
    pub fn load(config: &AtlasConfig) -> Result<Self, AtlasError> {
        let path: &Path = &config.required_chars_path;
        let text = std::fs::read_to_string(path).map_err(|e| {
            config.config_error(format!("unable to open {}: {e}", path.display()))
        })?;
        Self::parse(&text).ok_or_else(|| {
            config.config_error(format!("{} lists no characters", path.display()))
        })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a set returned by [`load`](Self::load).
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
