use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::packer::PlacedGlyph;

/// Pixel rectangle of one glyph inside the packed atlas.
///
/// Serialised as `{ "x": 0, "y": 0, "w": 8, "h": 12, "index": 0 }`, keyed by
/// the character itself, the same shape char-keyed atlas font loaders read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasEntry {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub index: u32,
}

/// Char-keyed glyph map; `BTreeMap` keeps the JSON output stable.
pub type GlyphMap = BTreeMap<String, AtlasEntry>;

/// Build the map from resolved placements.
pub fn build(placed: &[PlacedGlyph], tile_w: u32, tile_h: u32) -> GlyphMap {
    placed
        .iter()
        .map(|p| {
            (p.ch.to_string(), AtlasEntry {
                x: p.atlas_x,
                y: p.atlas_y,
                w: tile_w,
                h: tile_h,
                index: p.index,
            })
        })
        .collect()
}

pub fn to_json(map: &GlyphMap) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(map)
}

pub fn from_json(json: &str) -> Result<GlyphMap, serde_json::Error> {
    serde_json::from_str(json)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packer::pack;

    #[test]
    fn build_uses_packed_rectangles() {
        let (placed, _, _) = pack(&[' ', 'A'], 8, 12).unwrap();
        let map = build(&placed, 8, 12);
        assert_eq!(map[" "], AtlasEntry { x: 0, y: 0, w: 8, h: 12, index: 0 });
        assert_eq!(map["A"], AtlasEntry { x: 8, y: 0, w: 8, h: 12, index: 1 });
    }

    #[test]
    fn json_keys_are_single_characters() {
        let (placed, _, _) = pack(&['Ж'], 4, 4).unwrap();
        let json = to_json(&build(&placed, 4, 4)).unwrap();
        assert!(json.contains("\"Ж\""));
        assert!(from_json("not json").is_err());
    }
}
