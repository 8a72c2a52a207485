use std::io::Write;

use image::{RgbImage, imageops};

use crate::charset::CharacterSet;
use crate::config::{AtlasConfig, BACKGROUND};
use crate::error::AtlasError;
use crate::index::IndexWriter;
use crate::packer::{PlacedGlyph, pack};
use crate::router;
use crate::source::SourceAtlases;

/// Result of one compositing pass.
pub struct Composition {
    /// The packed atlas, before colorkey cleanup.
    pub image: RgbImage,
    /// Cells whose glyph was found and pasted.
    pub resolved: Vec<PlacedGlyph>,
    /// Characters no source sheet could supply, in packing order.
    pub failures: Vec<char>,
}

/// Crop every character's tile from its source sheet and paste it into a
/// fresh atlas, writing one index line per cell along the way.
///
/// Unsupported characters do not stop the pass: their cell is left as
/// background, their index line is still written, and they are collected in
/// [`Composition::failures`].
///
/// Tile sizes come from `config`; write failures on `index` are reported
/// against `config.index_path`.
pub fn compose<W: Write>(
    charset: &CharacterSet,
    sources: &SourceAtlases,
    config: &AtlasConfig,
    index: &mut IndexWriter<W>,
) -> Result<Composition, AtlasError> {
    let (placements, atlas_w, atlas_h) = pack(charset.chars(), config.tile_width, config.tile_height)
        .ok_or_else(|| config.atlas_too_large(charset.len()))?;
    let mut image = RgbImage::from_pixel(atlas_w, atlas_h, BACKGROUND);

    let mut resolved = Vec::with_capacity(placements.len());
    let mut failures = Vec::new();

    for p in placements {
        match router::resolve(p.ch, sources) {
            Some(tile) => {
                let glyph = sources.get(tile.script).tile(tile.row, tile.col).to_image();
                imageops::replace(&mut image, &glyph, i64::from(p.atlas_x), i64::from(p.atlas_y));
                log::debug!(
                    "{:?} U+{:04X}: {} ({}, {}) -> cell {} ({}, {})",
                    p.ch,
                    p.ch as u32,
                    tile.script.name(),
                    tile.row,
                    tile.col,
                    p.index,
                    p.row,
                    p.col
                );
                resolved.push(p);
            }
            None => {
                log::error!("Unsupported character found: \"{}\" (U+{:04X})", p.ch, p.ch as u32);
                failures.push(p.ch);
            }
        }
        index
            .write_entry(p.ch)
            .map_err(|e| AtlasError::io(&config.index_path, e))?;
    }

    Ok(Composition { image, resolved, failures })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceAtlas;
    use image::Rgb;

    /// Sheet whose tile `i` is filled with gray level `i + 1`.
    fn numbered_sheet(rows: u32, tile: u32) -> SourceAtlas {
        let img = RgbImage::from_fn(16 * tile, rows * tile, |x, y| {
            let i = (y / tile) * 16 + x / tile;
            let v = (i + 1) as u8;
            Rgb([v, v, v])
        });
        SourceAtlas::new(img, tile, tile)
    }

    fn config() -> AtlasConfig {
        AtlasConfig {
            charset_option: "full".into(),
            required_chars_path: "chars.txt".into(),
            latin_path: "latin.png".into(),
            katakana_path: "katakana.png".into(),
            cyrillic_path: "cyrillic.png".into(),
            tile_width: 4,
            tile_height: 4,
            atlas_path: "font.png".into(),
            index_path: "font.ipp".into(),
            glyph_map_path: None,
        }
    }

    fn sources() -> SourceAtlases {
        SourceAtlases {
            latin: numbered_sheet(6, 4),
            katakana: numbered_sheet(7, 4),
            cyrillic: numbered_sheet(16, 4),
        }
    }

    #[test]
    fn glyphs_land_in_sequential_cells() {
        let set = CharacterSet::parse("A B").unwrap();
        let mut index = IndexWriter::new(Vec::new());
        let out = compose(&set, &sources(), &config(), &mut index).unwrap();

        assert_eq!(out.image.dimensions(), (64, 4));
        assert!(out.failures.is_empty());
        // space is latin tile 0, 'A' is tile 33, 'B' is tile 34
        assert_eq!(*out.image.get_pixel(1, 1), Rgb([1, 1, 1]));
        assert_eq!(*out.image.get_pixel(5, 1), Rgb([34, 34, 34]));
        assert_eq!(*out.image.get_pixel(9, 1), Rgb([35, 35, 35]));
        assert_eq!(*out.image.get_pixel(13, 1), BACKGROUND);
    }

    #[test]
    fn unsupported_character_keeps_its_cell_and_index_line() {
        let set = CharacterSet::parse("A \u{1F600} B").unwrap();
        let mut index = IndexWriter::new(Vec::new());
        let out = compose(&set, &sources(), &config(), &mut index).unwrap();

        assert_eq!(out.failures, vec!['\u{1F600}']);
        assert_eq!(index.entries(), 4);
        // sorted: ' ', 'A', 'B', U+1F600 -> cell 3 stays blank
        assert!(imageops::crop_imm(&out.image, 12, 0, 4, 4)
            .to_image()
            .pixels()
            .all(|p| *p == BACKGROUND));
        assert_eq!(out.resolved.len(), 3);
    }

    #[test]
    fn scripts_are_taken_from_their_own_sheets() {
        let mut srcs = sources();
        srcs.cyrillic = SourceAtlas::new(RgbImage::from_pixel(64, 64, Rgb([9, 8, 7])), 4, 4);
        let set = CharacterSet::parse("Ж").unwrap();
        let mut index = IndexWriter::new(Vec::new());
        let out = compose(&set, &srcs, &config(), &mut index).unwrap();
        assert_eq!(*out.image.get_pixel(4, 0), Rgb([9, 8, 7]));
    }

    #[test]
    fn oversized_tiles_are_rejected_before_any_index_line() {
        let set = CharacterSet::parse("A").unwrap();
        let mut cfg = config();
        cfg.tile_width = u32::MAX;
        let mut index = IndexWriter::new(Vec::new());
        let err = compose(&set, &sources(), &cfg, &mut index).err().unwrap();
        assert!(matches!(err, AtlasError::Config { .. }));
        assert_eq!(index.entries(), 0);
    }
}
