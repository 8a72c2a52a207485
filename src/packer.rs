use crate::config::COLUMNS_PER_ROW;

/// One character's cell inside the packed atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub ch: char,
    /// Row-major cell number; equals the character's line in the index file.
    pub index: u32,
    pub col: u32,
    pub row: u32,
    /// Top-left pixel coordinate inside the atlas.
    pub atlas_x: u32,
    pub atlas_y: u32,
}

/// Number of grid rows needed for `count` glyphs.
pub fn rows_for(count: usize) -> u32 {
    (count as u32).div_ceil(COLUMNS_PER_ROW)
}

/// Pixel size of an atlas holding `count` tiles of `tile_w`×`tile_h`.
///
/// Returns `None` when either side does not fit in a `u32`.
pub fn atlas_dimensions(count: usize, tile_w: u32, tile_h: u32) -> Option<(u32, u32)> {
    let count = u32::try_from(count).ok()?;
    let width = COLUMNS_PER_ROW.checked_mul(tile_w)?;
    let height = count.div_ceil(COLUMNS_PER_ROW).checked_mul(tile_h)?;
    Some((width, height))
}

/// Sequential grid packing — no I/O, no images.
///
/// Every character gets the next cell in row-major order, whether or not a
/// glyph is later found for it, so cell numbers and index lines stay aligned.
///
/// Returns `(placements, atlas_pixel_width, atlas_pixel_height)`, or `None`
/// when the atlas would be too large to address.
pub fn pack(chars: &[char], tile_w: u32, tile_h: u32) -> Option<(Vec<PlacedGlyph>, u32, u32)> {
    let (atlas_w, atlas_h) = atlas_dimensions(chars.len(), tile_w, tile_h)?;
    let placements = chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let index = i as u32;
            let col = index % COLUMNS_PER_ROW;
            let row = index / COLUMNS_PER_ROW;
            PlacedGlyph {
                ch,
                index,
                col,
                row,
                atlas_x: col * tile_w,
                atlas_y: row * tile_h,
            }
        })
        .collect();

    Some((placements, atlas_w, atlas_h))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
