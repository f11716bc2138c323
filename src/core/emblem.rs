// iconsmith - core/emblem.rs
//
// The shield-and-flame emblem and the two launcher variants derived from it.
// Pure in-memory rendering; persisting the result is the app layer's job.

use crate::core::geometry::{scale_all, FracRect};
use crate::core::mask;
use crate::core::model::{Density, IconSet};
use crate::core::raster::{self, PaintMode};
use crate::util::constants;
use crate::util::error::RenderError;
use image::RgbaImage;

/// Draw the emblem onto a fresh `size` x `size` RGBA canvas.
///
/// Layer order matters: the cutout is painted over the shield, the accent
/// bar replaces whatever lies beneath it, and the flame is blended last so
/// its translucency shows the shield and cutout through it.
pub fn render_emblem(size: u32) -> Result<RgbaImage, RenderError> {
    let mut canvas = raster::new_canvas(size, constants::BACKGROUND)?;

    let shield = scale_all(constants::SHIELD_OUTLINE, size);
    raster::fill_polygon(&mut canvas, &shield, constants::FOREGROUND, PaintMode::Replace);

    let cutout = scale_all(constants::INNER_CUTOUT, size);
    raster::fill_polygon(&mut canvas, &cutout, constants::BACKGROUND, PaintMode::Replace);

    let bar = FracRect::from(constants::ACCENT_BAR).scale(size);
    raster::fill_rect(&mut canvas, bar, constants::ACCENT, PaintMode::Replace);

    let flame = scale_all(constants::FLAME, size);
    raster::fill_polygon(&mut canvas, &flame, constants::HIGHLIGHT, PaintMode::Blend);

    Ok(canvas)
}

/// Render both opaque launcher variants for one density.
pub fn render_icon_set(density: Density) -> Result<IconSet, RenderError> {
    let canvas = render_emblem(density.size)?;
    let square = raster::flatten(&canvas);

    let circle = mask::circle_mask(density.size)?;
    let round = raster::flatten(&mask::composite_masked(&canvas, &circle)?);

    tracing::debug!(
        folder = density.folder,
        size = density.size,
        "Rendered icon set"
    );

    Ok(IconSet {
        density,
        square,
        round,
    })
}
