use std::ops::RangeInclusive;

use crate::config::COLUMNS_PER_ROW;
use crate::source::{Script, SourceAtlases};

/// Code points of the Cyrillic block, laid out in block order.
pub const CYRILLIC_BLOCK: RangeInclusive<u32> = 0x0400..=0x04FF;

/// Code points of the Katakana block, laid out in block order.
pub const KATAKANA_BLOCK: RangeInclusive<u32> = 0x30A0..=0x30FF;

/// Code point of the first tile of the Latin sheet (the space character).
pub const LATIN_FIRST: u32 = 0x20;

/// Hand-placed cells on the Katakana sheet, checked before the block layout.
///
/// The two ideographic punctuation marks live outside the Katakana block, so
/// they are appended after it at row 6.
pub const KATAKANA_OVERRIDES: &[(char, u32, u32)] = &[
    ('、', 6, 0),
    ('。', 6, 1),
];

/// A source tile that supplies one character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlyphTile {
    pub script: Script,
    pub row: u32,
    pub col: u32,
}

impl GlyphTile {
    fn from_index(script: Script, index: u32) -> Self {
        Self {
            script,
            row: index / COLUMNS_PER_ROW,
            col: index % COLUMNS_PER_ROW,
        }
    }
}

/// Pick the source sheet and tile for `ch` without looking at any image.
///
/// Returns `None` only for code points below the start of the Latin sheet;
/// sheet bounds are checked by [`resolve`].
pub fn route(ch: char) -> Option<GlyphTile> {
    let cp = ch as u32;

    if CYRILLIC_BLOCK.contains(&cp) {
        return Some(GlyphTile::from_index(Script::Cyrillic, cp - CYRILLIC_BLOCK.start()));
    }

    if let Some(&(_, row, col)) = KATAKANA_OVERRIDES.iter().find(|(c, _, _)| *c == ch) {
        return Some(GlyphTile { script: Script::Katakana, row, col });
    }
    if KATAKANA_BLOCK.contains(&cp) {
        return Some(GlyphTile::from_index(Script::Katakana, cp - KATAKANA_BLOCK.start()));
    }

    cp.checked_sub(LATIN_FIRST)
        .map(|index| GlyphTile::from_index(Script::Latin, index))
}

/// Route `ch` and confirm its tile fits inside the owning sheet.
pub fn resolve(ch: char, sources: &SourceAtlases) -> Option<GlyphTile> {
    route(ch).filter(|tile| sources.get(tile.script).contains_tile(tile.row, tile.col))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
