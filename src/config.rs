use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use image::Rgb;

use crate::error::AtlasError;
use crate::packer;

/// Number of tiles per row, both in the source atlases and in the output.
pub const COLUMNS_PER_ROW: u32 = 16;

/// Marker color used in source art for "no glyph content here".
pub const COLORKEY: Rgb<u8> = Rgb([255, 0, 0]);

/// Fill color of the output atlas and replacement for [`COLORKEY`].
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

// ── Cli ───────────────────────────────────────────────────────────────────────

/// Command line of the `fontpack` binary.
#[derive(Parser, Debug)]
#[command(version, about = "Pack Latin, Katakana and Cyrillic glyph sheets into one font atlas")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Latin source sheet, ASCII order starting at the space character
    #[arg(value_name = "SRC_PNG")]
    pub src_png: PathBuf,

    /// Katakana source sheet with 、 and 。 appended at row 6
    #[arg(value_name = "SRC_PNG_JAP")]
    pub src_png_jap: PathBuf,

    /// Cyrillic source sheet, U+0400 block order
    #[arg(value_name = "SRC_PNG_UKR")]
    pub src_png_ukr: PathBuf,

    /// Character set label (full, digits, latin, ...); informational only
    #[arg(value_name = "CHARSET_OPTION")]
    pub charset_option: String,

    /// Whitespace separated list of required characters
    #[arg(value_name = "REQUIRED_CHARS_PATH")]
    pub required_chars_path: PathBuf,

    /// Glyph tile width in pixels
    #[arg(value_name = "CHAR_WIDTH")]
    pub char_width: u32,

    /// Glyph tile height in pixels
    #[arg(value_name = "CHAR_HEIGHT")]
    pub char_height: u32,

    /// Output atlas image path
    #[arg(value_name = "DST_PNG")]
    pub dst_png: PathBuf,

    /// Output glyph index path
    #[arg(value_name = "IPP_PATH")]
    pub ipp_path: PathBuf,

    /// Optional JSON glyph map describing every packed glyph rectangle
    #[arg(long, value_name = "PATH")]
    pub glyph_map: Option<PathBuf>,
}

impl Cli {
    /// Log level selected by the `-v` count.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    /// Exit status for a failed parse: help and version output succeed, any
    /// rejected argument is an ordinary failure.
    pub fn exit_code_for(err: &clap::Error) -> ExitCode {
        if err.use_stderr() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

// ── AtlasConfig ───────────────────────────────────────────────────────────────

/// Everything one generation run needs to know.
#[derive(Clone, Debug, PartialEq)]
pub struct AtlasConfig {
    pub charset_option: String,
    pub required_chars_path: PathBuf,
    pub latin_path: PathBuf,
    pub katakana_path: PathBuf,
    pub cyrillic_path: PathBuf,
    pub tile_width: u32,
    pub tile_height: u32,
    pub atlas_path: PathBuf,
    pub index_path: PathBuf,
    pub glyph_map_path: Option<PathBuf>,
}

impl AtlasConfig {
    /// Reject tile sizes that cannot describe a grid.
    pub fn validate(&self) -> Result<(), AtlasError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(self.config_error(format!(
                "tile size {}x{} must be non-zero",
                self.tile_width, self.tile_height
            )));
        }
        // one full row must be addressable before any glyph count is known
        self.atlas_dimensions(1).map(|_| ())
    }

    /// Pixel size of the atlas for `glyphs` characters, or a config error when
    /// it does not fit in `u32` pixels.
    pub fn atlas_dimensions(&self, glyphs: usize) -> Result<(u32, u32), AtlasError> {
        packer::atlas_dimensions(glyphs, self.tile_width, self.tile_height)
            .ok_or_else(|| self.atlas_too_large(glyphs))
    }

    pub(crate) fn atlas_too_large(&self, glyphs: usize) -> AtlasError {
        self.config_error(format!(
            "{glyphs} glyphs of {}x{} px do not fit in one atlas image",
            self.tile_width, self.tile_height
        ))
    }

    pub(crate) fn config_error(&self, reason: impl Into<String>) -> AtlasError {
        AtlasError::Config {
            charset_option: self.charset_option.clone(),
            reason: reason.into(),
        }
    }
}

impl From<Cli> for AtlasConfig {
    fn from(cli: Cli) -> Self {
        Self {
            charset_option: cli.charset_option,
            required_chars_path: cli.required_chars_path,
            latin_path: cli.src_png,
            katakana_path: cli.src_png_jap,
            cyrillic_path: cli.src_png_ukr,
            tile_width: cli.char_width,
            tile_height: cli.char_height,
            atlas_path: cli.dst_png,
            index_path: cli.ipp_path,
            glyph_map_path: cli.glyph_map,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
