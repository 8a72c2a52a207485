use std::fs::File;
use std::io::BufWriter;

use crate::charset::CharacterSet;
use crate::colorkey::remove_colorkey;
use crate::compositor::compose;
use crate::config::{AtlasConfig, BACKGROUND, COLORKEY};
use crate::error::AtlasError;
use crate::glyph_map;
use crate::index::IndexWriter;
use crate::packer::rows_for;
use crate::source::SourceAtlases;

/// Summary of a fully successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub glyphs: usize,
    pub rows: u32,
    pub atlas_width: u32,
    pub atlas_height: u32,
}

/// Run one complete generation pass.
///
/// The atlas, index and optional glyph map are written before unsupported
/// characters are reported, so a failed run still leaves its output on disk
/// for inspection.
pub fn generate(config: &AtlasConfig) -> Result<GenerationReport, AtlasError> {
    config.validate()?;
    let charset = CharacterSet::load(config)?;
    config.atlas_dimensions(charset.len())?;
    let sources = SourceAtlases::open(config)?;

    log::info!(
        "charset {}: {} glyphs from {}",
        config.charset_option,
        charset.len(),
        config.required_chars_path.display()
    );
    log::info!("IPP: {}", config.index_path.display());

    let index_path = &config.index_path;
    let file = File::create(index_path).map_err(|e| AtlasError::io(index_path, e))?;
    let mut index = IndexWriter::new(BufWriter::new(file));

    let mut composition = compose(&charset, &sources, config, &mut index)?;
    index.finish().map_err(|e| AtlasError::io(index_path, e))?;
    drop(sources);

    let cleaned = remove_colorkey(&mut composition.image, COLORKEY, BACKGROUND);
    log::debug!("replaced {cleaned} colorkey pixels");

    composition.image.save(&config.atlas_path).map_err(|source| AtlasError::Image {
        what: format!("atlas {}", config.atlas_path.display()),
        source,
    })?;
    let (atlas_width, atlas_height) = composition.image.dimensions();
    log::info!(
        "wrote {}x{} atlas to {}",
        atlas_width,
        atlas_height,
        config.atlas_path.display()
    );

    if let Some(map_path) = &config.glyph_map_path {
        let map = glyph_map::build(&composition.resolved, config.tile_width, config.tile_height);
        let json = glyph_map::to_json(&map)?;
        std::fs::write(map_path, json).map_err(|e| AtlasError::io(map_path, e))?;
    }

    if !composition.failures.is_empty() {
        log::error!(
            "Remove / replace the unsupported characters in the required character list \
             (or add them to the source sheets) and regenerate the font"
        );
        return Err(AtlasError::UnsupportedCharacters(composition.failures));
    }

    Ok(GenerationReport {
        glyphs: charset.len(),
        rows: rows_for(charset.len()),
        atlas_width,
        atlas_height,
    })
}
