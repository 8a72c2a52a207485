pub mod charset;
pub mod colorkey;
pub mod compositor;
pub mod config;
pub mod error;
pub mod glyph_map;
pub mod index;
pub mod packer;
pub mod pipeline;
pub mod router;
pub mod source;

pub use config::{AtlasConfig, Cli};
pub use error::AtlasError;
pub use pipeline::{GenerationReport, generate};
