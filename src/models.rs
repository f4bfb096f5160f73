use std::path::PathBuf;

use thiserror::Error;

/// Settings for one icon run. Everything is fixed at compile time; see `Default`.
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub sizes: Vec<u32>,          // processed in order
    pub candidates: Vec<PathBuf>, // first existing one wins
    pub output_dir: PathBuf,      // relative to the working directory
    pub zoom_factor: f64,
    pub radius_factor: f64,
    pub background: [u8; 4],
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: crate::config::ICON_SIZES.to_vec(),
            candidates: crate::config::SOURCE_CANDIDATES
                .iter()
                .map(PathBuf::from)
                .collect(),
            output_dir: PathBuf::from(crate::config::OUTPUT_DIR),
            zoom_factor: crate::config::ZOOM_FACTOR,
            radius_factor: crate::config::RADIUS_FACTOR,
            background: crate::config::BACKGROUND,
        }
    }
}

#[derive(Debug, Error)]
pub enum IconError {
    #[error("Could not find strict logo file. Please save it as 'icons/logo.png'.")]
    SourceNotFound,
    #[error("{}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
