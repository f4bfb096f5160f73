use std::fs;
use std::path::{Path, PathBuf};

use image::GenericImageView;

use crate::config::{display_path, output_path};
use crate::icon::build_icon;
use crate::locator::locate_source;
use crate::logger::log_line;
use crate::models::{IconConfig, IconError};

/// Locate the logo under `base`, then write one rounded icon per configured
/// size. Stops at the first failure; files already written stay on disk.
pub fn generate_icons(base: &Path, cfg: &IconConfig) -> Result<Vec<PathBuf>, IconError> {
    let src = locate_source(base, &cfg.candidates)?;
    let img = image::open(&src).map_err(|source| IconError::Image {
        path: src.clone(),
        source,
    })?;
    let shown = src.strip_prefix(base).unwrap_or(&src);
    log_line(&format!("Opened {} {:?}", shown.display(), img.dimensions()));

    let out_dir = base.join(&cfg.output_dir);
    fs::create_dir_all(&out_dir).map_err(|source| IconError::Io {
        path: out_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(cfg.sizes.len());
    for &s in &cfg.sizes {
        let out = output_path(base, cfg, s);
        let icon = build_icon(&img, s, cfg);
        icon.save(&out).map_err(|source| IconError::Image {
            path: out.clone(),
            source,
        })?;
        log_line(&format!(
            "Generated {} (Zoomed {}% + Masked)",
            display_path(cfg, s),
            (cfg.zoom_factor * 100.0).round()
        ));
        written.push(out);
    }

    log_line("Success! Icons generated.");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_logo(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        crate::fixtures::disc_on_transparent(256, [20, 120, 230, 255]).save(path).unwrap();
    }

    #[test]
    fn test_generates_all_sizes() {
        let dir = tempfile::tempdir().unwrap();
        write_logo(&dir.path().join("icons/logo.png"));

        let cfg = IconConfig::default();
        let written = generate_icons(dir.path(), &cfg).unwrap();
        assert_eq!(written.len(), 4);
        for &s in &cfg.sizes {
            let out = dir.path().join(format!("icons/icon{}.png", s));
            let img = image::open(&out).unwrap();
            assert_eq!(img.dimensions(), (s, s));
            assert!(matches!(img, image::DynamicImage::ImageRgba8(_)));
        }
    }

    #[test]
    fn test_creates_output_dir_for_root_logo() {
        let dir = tempfile::tempdir().unwrap();
        write_logo(&dir.path().join("logo.png"));

        let cfg = IconConfig::default();
        generate_icons(dir.path(), &cfg).unwrap();
        assert!(dir.path().join("icons/icon128.png").exists());
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig::default();
        let err = generate_icons(dir.path(), &cfg).unwrap_err();
        assert!(matches!(err, IconError::SourceNotFound));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_undecodable_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("logo.png"), b"not a png").unwrap();
        let cfg = IconConfig::default();
        let err = generate_icons(dir.path(), &cfg).unwrap_err();
        assert!(matches!(err, IconError::Image { .. }));
        assert!(!dir.path().join("icons").exists());
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        write_logo(&dir.path().join("icons/logo.png"));
        let cfg = IconConfig::default();

        generate_icons(dir.path(), &cfg).unwrap();
        let first: Vec<Vec<u8>> = cfg
            .sizes
            .iter()
            .map(|&s| fs::read(output_path(dir.path(), &cfg, s)).unwrap())
            .collect();

        generate_icons(dir.path(), &cfg).unwrap();
        for (i, &s) in cfg.sizes.iter().enumerate() {
            assert_eq!(fs::read(output_path(dir.path(), &cfg, s)).unwrap(), first[i]);
        }
    }
}
