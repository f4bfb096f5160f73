use std::path::{Path, PathBuf};

use crate::models::IconConfig;

pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];
pub const SOURCE_CANDIDATES: [&str; 3] = ["icons/logo.png", "logo.png", "dev-memory-logo.png"];
pub const OUTPUT_DIR: &str = "icons";
// Extra margin so the centre crop never runs out of pixels
pub const ZOOM_FACTOR: f64 = 1.25;
pub const RADIUS_FACTOR: f64 = 0.22;
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];

/// Where the icon for `size` ends up, e.g. `icons/icon16.png`.
pub fn output_path(base: &Path, cfg: &IconConfig, size: u32) -> PathBuf {
    base.join(&cfg.output_dir).join(format!("icon{}.png", size))
}

/// Path as printed on the console, relative to the working directory.
pub fn display_path(cfg: &IconConfig, size: u32) -> String {
    output_path(Path::new(""), cfg, size).display().to_string()
}
