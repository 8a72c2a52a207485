use std::path::Path;

use image::{DynamicImage, ExtendedColorType, ImageDecoder, ImageReader, RgbImage, SubImage, imageops};

use crate::config::AtlasConfig;
use crate::error::AtlasError;

// ── Script ────────────────────────────────────────────────────────────────────

/// Script family that owns a source sheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Script {
    Latin,
    Katakana,
    Cyrillic,
}

impl Script {
    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Script::Latin => "LATIN",
            Script::Katakana => "KATAKANA",
            Script::Cyrillic => "CYRILLIC",
        }
    }
}

// ── SourceAtlas ───────────────────────────────────────────────────────────────

/// One script's glyph sheet: an RGB image cut into a grid of equal tiles.
pub struct SourceAtlas {
    image: RgbImage,
    pub tile_w: u32,
    pub tile_h: u32,
}

impl SourceAtlas {
    pub fn new(image: RgbImage, tile_w: u32, tile_h: u32) -> Self {
        Self { image, tile_w, tile_h }
    }

    /// Decode `path` and make sure it is plain 8-bit RGB.
    ///
    /// The color type is read from the file header, before the decoder
    /// expands palettes, so an indexed sheet is rejected even though it would
    /// decode to RGB.
    pub fn open(path: &Path, script: Script, tile_w: u32, tile_h: u32) -> Result<Self, AtlasError> {
        let image_error = |source: image::ImageError| AtlasError::Image {
            what: format!("{} source {}", script.name(), path.display()),
            source,
        };
        let decoder = ImageReader::open(path)
            .and_then(ImageReader::with_guessed_format)
            .map_err(|e| AtlasError::io(path, e))?
            .into_decoder()
            .map_err(image_error)?;

        let color = decoder.original_color_type();
        if color != ExtendedColorType::Rgb8 {
            return Err(AtlasError::Format {
                source_name: script.name(),
                actual: format!("{color:?}"),
            });
        }

        let img = DynamicImage::from_decoder(decoder).map_err(image_error)?;
        log::debug!(
            "{} source {}: {}x{} px",
            script.name(),
            path.display(),
            img.width(),
            img.height()
        );
        Ok(Self::new(img.into_rgb8(), tile_w, tile_h))
    }

    /// Whether tile (`row`, `col`) lies entirely inside the sheet.
    pub fn contains_tile(&self, row: u32, col: u32) -> bool {
        let (w, h) = self.image.dimensions();
        let bottom = (u64::from(row) + 1) * u64::from(self.tile_h);
        let right = (u64::from(col) + 1) * u64::from(self.tile_w);
        bottom <= u64::from(h) && right <= u64::from(w)
    }

    /// Borrow the pixels of tile (`row`, `col`).
    ///
    /// Callers check [`contains_tile`](Self::contains_tile) first; out-of-range
    /// tiles are clamped to the sheet.
    pub fn tile(&self, row: u32, col: u32) -> SubImage<&RgbImage> {
        imageops::crop_imm(&self.image, col * self.tile_w, row * self.tile_h, self.tile_w, self.tile_h)
    }
}

// ── SourceAtlases ─────────────────────────────────────────────────────────────

/// The three script sheets used for one run.
pub struct SourceAtlases {
    pub latin: SourceAtlas,
    pub katakana: SourceAtlas,
    pub cyrillic: SourceAtlas,
}

impl SourceAtlases {
    /// Open and validate all three sheets named by `config`.
    ///
    /// Every path is checked for existence before any image is decoded, so a
    /// missing file is reported even when another sheet is malformed.
    pub fn open(config: &AtlasConfig) -> Result<Self, AtlasError> {
        let sources = [
            (Script::Latin, config.latin_path.as_path()),
            (Script::Katakana, config.katakana_path.as_path()),
            (Script::Cyrillic, config.cyrillic_path.as_path()),
        ];
        for (_, path) in &sources {
            if !path.exists() {
                return Err(AtlasError::MissingResource(path.to_path_buf()));
            }
        }

        let (tw, th) = (config.tile_width, config.tile_height);
        let [latin, katakana, cyrillic] =
            sources.map(|(script, path)| SourceAtlas::open(path, script, tw, th));
        Ok(Self {
            latin: latin?,
            katakana: katakana?,
            cyrillic: cyrillic?,
        })
    }

    pub fn get(&self, script: Script) -> &SourceAtlas {
        match script {
            Script::Latin => &self.latin,
            Script::Katakana => &self.katakana,
            Script::Cyrillic => &self.cyrillic,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
