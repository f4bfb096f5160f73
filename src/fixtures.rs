use image::{Rgba, RgbaImage};

/// Opaque disc of `colour` (radius 0.45 of the side) on a fully transparent square.
pub fn disc_on_transparent(side: u32, colour: [u8; 4]) -> RgbaImage {
    let c = side as f32 * 0.5;
    let radius = side as f32 * 0.45;
    RgbaImage::from_fn(side, side, |x, y| {
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;
        if dx * dx + dy * dy <= radius * radius {
            Rgba(colour)
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
