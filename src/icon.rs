use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, GrayImage, Luma, Rgba, RgbaImage};

use crate::models::IconConfig;

/// Side of the zoomed square the crop is taken from: `floor(size * zoom)`.
pub fn zoom_size(size: u32, zoom_factor: f64) -> u32 {
    (size as f64 * zoom_factor) as u32
}

/// Left/top offset of the centre crop. Floor division, so an odd margin puts
/// the extra pixel on the right/bottom.
pub fn crop_offset(zoomed: u32, size: u32) -> u32 {
    zoomed.saturating_sub(size) / 2
}

pub fn corner_radius(size: u32, radius_factor: f64) -> u32 {
    (size as f64 * radius_factor) as u32
}

/// Stretch the whole source to a `side x side` square (no letterboxing).
/// Sources with alpha are resampled premultiplied, so the colour of fully
/// transparent pixels never bleeds into visible edges.
pub fn zoom_resize(src: &DynamicImage, side: u32) -> DynamicImage {
    if !src.color().has_alpha() {
        return src.resize_exact(side, side, FilterType::Lanczos3);
    }
    let mut rgba = src.to_rgba8();
    rgba.pixels_mut().for_each(premultiply);
    let mut resized = imageops::resize(&rgba, side, side, FilterType::Lanczos3);
    resized.pixels_mut().for_each(unpremultiply);
    DynamicImage::ImageRgba8(resized)
}

#[inline]
fn mul_div_255(a: u8, b: u8) -> u8 {
    let tmp = a as u32 * b as u32 + 128;
    ((tmp + (tmp >> 8)) >> 8) as u8
}

fn premultiply(px: &mut Rgba<u8>) {
    let a = px[3];
    for c in 0..3 {
        px[c] = mul_div_255(px[c], a);
    }
}

fn unpremultiply(px: &mut Rgba<u8>) {
    let a = px[3] as u32;
    if a == 0 {
        *px = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        px[c] = (px[c] as u32 * 255 / a).min(255) as u8;
    }
}

pub fn center_crop(zoomed: &DynamicImage, size: u32) -> DynamicImage {
    let off = crop_offset(zoomed.width(), size);
    zoomed.crop_imm(off, off, size, size)
}

// Same rounding as the usual 8-bit "paste through mask" blend.
#[inline]
fn blend(dst: u8, src: u8, mask: u8) -> u8 {
    let m = mask as u32;
    let tmp = dst as u32 * (255 - m) + src as u32 * m + 128;
    ((tmp + (tmp >> 8)) >> 8) as u8
}

/// Paste `src` over `dst` using `mask_at(x, y)` as the per-pixel weight.
/// All four channels are blended, alpha included.
fn paste_with_mask<F>(dst: &mut RgbaImage, src: &RgbaImage, mask_at: F)
where
    F: Fn(u32, u32) -> u8,
{
    for (x, y, px) in dst.enumerate_pixels_mut() {
        let s = src.get_pixel(x, y);
        let m = mask_at(x, y);
        for c in 0..4 {
            px[c] = blend(px[c], s[c], m);
        }
    }
}

/// Put the crop on an opaque background, using the crop's own alpha as mask.
/// Fully transparent source pixels come out as the background colour.
pub fn composite_on_background(cropped: &DynamicImage, background: [u8; 4]) -> RgbaImage {
    let top = cropped.to_rgba8();
    let mut base = RgbaImage::from_pixel(top.width(), top.height(), Rgba(background));
    paste_with_mask(&mut base, &top, |x, y| top.get_pixel(x, y)[3]);
    base
}

/// Single-channel stencil: 255 inside the rounded rectangle spanning
/// `(0,0)..=(size-1,size-1)`, 0 outside. Hard edges, no anti-aliasing.
pub fn rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::from_pixel(size, size, Luma([0]));
    if size == 0 {
        return mask;
    }
    let last = size - 1;
    let r = radius.min(last / 2) as i64;
    let (lo, hi) = (r, last as i64 - r);
    // (r + 1/2)^2 in integers, so the straight edges run right up to the arcs
    let limit = r * r + r;

    for (x, y, px) in mask.enumerate_pixels_mut() {
        let (x, y) = (x as i64, y as i64);
        let cx = x.clamp(lo, hi);
        let cy = y.clamp(lo, hi);
        let (dx, dy) = (x - cx, y - cy);
        if dx == 0 || dy == 0 || dx * dx + dy * dy <= limit {
            px[0] = 255;
        }
    }
    mask
}

/// Clip `base` to the stencil on top of a fully transparent canvas.
pub fn apply_mask(base: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(base.width(), base.height(), Rgba([0, 0, 0, 0]));
    paste_with_mask(&mut out, base, |x, y| mask.get_pixel(x, y)[0]);
    out
}

/// Full per-size pipeline: zoom, centre crop, composite, round the corners.
pub fn build_icon(src: &DynamicImage, size: u32, cfg: &IconConfig) -> RgbaImage {
    let zoomed = zoom_resize(src, zoom_size(size, cfg.zoom_factor));
    let cropped = center_crop(&zoomed, size);
    let base = composite_on_background(&cropped, cfg.background);
    let mask = rounded_rect_mask(size, corner_radius(size, cfg.radius_factor));
    apply_mask(&base, &mask)
}
