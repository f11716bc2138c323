// iconsmith - core/mask.rs
//
// Circular mask for the round launcher variant and masked compositing.

use crate::core::raster;
use crate::util::constants;
use crate::util::error::RenderError;
use image::{GrayImage, Luma, RgbaImage};

/// Single-channel mask: 255 where the pixel centre lies strictly inside the
/// circle inscribed in the `size` x `size` square, 0 elsewhere.
///
/// Hard-edged; no anti-aliasing on the rim.
pub fn circle_mask(size: u32) -> Result<GrayImage, RenderError> {
    raster::validate_size(size)?;

    let c = f64::from(size) / 2.0;
    let r2 = c * c;
    Ok(GrayImage::from_fn(size, size, |x, y| {
        let dx = f64::from(x) + 0.5 - c;
        let dy = f64::from(y) + 0.5 - c;
        if dx * dx + dy * dy < r2 {
            Luma([255])
        } else {
            Luma([0])
        }
    }))
}

/// Paste `src` onto a fully transparent canvas through `mask`.
///
/// Every channel, alpha included, moves from the transparent backdrop
/// towards `src` in proportion to the mask value.
pub fn composite_masked(src: &RgbaImage, mask: &GrayImage) -> Result<RgbaImage, RenderError> {
    if src.dimensions() != mask.dimensions() {
        return Err(RenderError::MaskMismatch {
            image: src.dimensions(),
            mask: mask.dimensions(),
        });
    }

    let (width, height) = src.dimensions();
    let mut out = RgbaImage::from_pixel(width, height, image::Rgba(constants::TRANSPARENT));

    for (x, y, px) in out.enumerate_pixels_mut() {
        let m = u32::from(mask.get_pixel(x, y).0[0]);
        if m == 0 {
            continue;
        }
        let s = src.get_pixel(x, y).0;
        for i in 0..4 {
            let d = u32::from(px.0[i]);
            let v = u32::from(s[i]);
            // d + (v - d) * m / 255 without signed arithmetic.
            px.0[i] = ((d * (255 - m) + v * m + 127) / 255) as u8;
        }
    }

    Ok(out)
}
