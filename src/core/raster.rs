// iconsmith - core/raster.rs
//
// Canvas primitives: allocation, polygon and rectangle fills, source-over
// blending, and alpha flattening.
//
// Coverage rule: a pixel is painted when its centre (x + 0.5, y + 0.5) lies
// inside the shape. Edges are half-open (left/top inclusive, right/bottom
// exclusive), so two shapes sharing an edge never paint a pixel twice.
// No anti-aliasing; output is bit-for-bit reproducible.

use crate::core::geometry::{Point, Rect};
use crate::util::constants;
use crate::util::error::RenderError;
use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// How a fill combines with the pixels already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Overwrite the pixel, alpha included.
    Replace,
    /// Composite the colour over the pixel (Porter-Duff source-over).
    Blend,
}

/// Reject sizes the renderer cannot draw into.
pub fn validate_size(size: u32) -> Result<(), RenderError> {
    if (constants::MIN_ICON_SIZE..=constants::MAX_ICON_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(RenderError::InvalidSize {
            size,
            min: constants::MIN_ICON_SIZE,
            max: constants::MAX_ICON_SIZE,
        })
    }
}

/// Allocate a `size` x `size` RGBA canvas filled with `colour`.
pub fn new_canvas(size: u32, colour: [u8; 4]) -> Result<RgbaImage, RenderError> {
    validate_size(size)?;
    Ok(RgbaImage::from_pixel(size, size, Rgba(colour)))
}

/// Source-over composite of `src` onto `dst`, straight (non-premultiplied)
/// alpha, integer arithmetic with round-half-up.
pub fn blend_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let a = u32::from(src[3]);
    let da = u32::from(dst[3]);
    let out_a = a + (da * (255 - a) + 127) / 255;
    if out_a == 0 {
        return [0, 0, 0, 0];
    }

    let denom = out_a * 255;
    let mut out = [0u8; 4];
    for i in 0..3 {
        let n = u32::from(src[i]) * a * 255 + u32::from(dst[i]) * da * (255 - a);
        out[i] = ((n + denom / 2) / denom).min(255) as u8;
    }
    out[3] = out_a as u8;
    out
}

#[inline]
fn paint(px: &mut Rgba<u8>, colour: [u8; 4], mode: PaintMode) {
    px.0 = match mode {
        PaintMode::Replace => colour,
        PaintMode::Blend => blend_over(px.0, colour),
    };
}

/// Index of the first pixel whose centre is at or right of `edge`,
/// clamped to `[0, limit]`.
#[inline]
fn first_covered(edge: f64, limit: u32) -> u32 {
    let c = (edge - 0.5).ceil();
    if c <= 0.0 {
        0
    } else if c >= f64::from(limit) {
        limit
    } else {
        c as u32
    }
}

/// Fill a closed polygon using the even-odd rule.
///
/// Vertices are in pixel space and are not rounded. Fewer than three
/// vertices is a degenerate shape and paints nothing.
pub fn fill_polygon(canvas: &mut RgbaImage, vertices: &[Point], colour: [u8; 4], mode: PaintMode) {
    if vertices.len() < 3 {
        return;
    }

    let (width, height) = canvas.dimensions();
    let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());

    for y in 0..height {
        let sy = f64::from(y) + 0.5;

        crossings.clear();
        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            // Half-open in y: horizontal edges never cross, shared vertices count once.
            if (a.y <= sy) != (b.y <= sy) {
                crossings.push(a.x + (sy - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(|l, r| l.total_cmp(r));

        for span in crossings.chunks_exact(2) {
            let x0 = first_covered(span[0], width);
            let x1 = first_covered(span[1], width);
            for x in x0..x1 {
                paint(canvas.get_pixel_mut(x, y), colour, mode);
            }
        }
    }
}

/// Fill an axis-aligned rectangle.
pub fn fill_rect(canvas: &mut RgbaImage, rect: Rect, colour: [u8; 4], mode: PaintMode) {
    let (width, height) = canvas.dimensions();
    let (x0, x1) = (first_covered(rect.left, width), first_covered(rect.right, width));
    let (y0, y1) = (first_covered(rect.top, height), first_covered(rect.bottom, height));

    for y in y0..y1 {
        for x in x0..x1 {
            paint(canvas.get_pixel_mut(x, y), colour, mode);
        }
    }
}

/// Drop the alpha channel without premultiplying.
///
/// Fully transparent pixels keep their stored colour, which is black for a
/// canvas created from [`constants::TRANSPARENT`].
pub fn flatten(canvas: &RgbaImage) -> RgbImage {
    let (width, height) = canvas.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b, _] = canvas.get_pixel(x, y).0;
        Rgb([r, g, b])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: [u8; 4] = [0, 0, 0, 255];
    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn count(canvas: &RgbaImage, colour: [u8; 4]) -> usize {
        canvas.pixels().filter(|p| p.0 == colour).count()
    }

    #[test]
    fn test_new_canvas_rejects_zero_size() {
        let result = new_canvas(0, BLACK);
        assert!(
            matches!(result, Err(RenderError::InvalidSize { size: 0, .. })),
            "expected InvalidSize, got {result:?}"
        );
    }

    #[test]
    fn test_new_canvas_rejects_oversized() {
        assert!(new_canvas(constants::MAX_ICON_SIZE + 1, BLACK).is_err());
    }

    #[test]
    fn test_blend_over_opaque_background() {
        // Flame highlight over the white shield.
        assert_eq!(
            blend_over(WHITE, constants::HIGHLIGHT),
            [255, 243, 207, 255]
        );
    }

    #[test]
    fn test_blend_extremes() {
        assert_eq!(blend_over(WHITE, [10, 20, 30, 255]), [10, 20, 30, 255]);
        assert_eq!(blend_over(WHITE, [10, 20, 30, 0]), WHITE);
        assert_eq!(blend_over([0, 0, 0, 0], [0, 0, 0, 0]), [0, 0, 0, 0]);
        assert_eq!(blend_over([0, 0, 0, 0], [9, 8, 7, 100]), [9, 8, 7, 100]);
    }

    #[test]
    fn test_fill_polygon_square_covers_interior() {
        let mut canvas = new_canvas(8, BLACK).unwrap();
        let square = [
            Point::new(2.0, 2.0),
            Point::new(6.0, 2.0),
            Point::new(6.0, 6.0),
            Point::new(2.0, 6.0),
        ];
        fill_polygon(&mut canvas, &square, WHITE, PaintMode::Replace);

        assert_eq!(count(&canvas, WHITE), 16);
        assert_eq!(canvas.get_pixel(2, 2).0, WHITE);
        assert_eq!(canvas.get_pixel(5, 5).0, WHITE);
        assert_eq!(canvas.get_pixel(6, 6).0, BLACK);
        assert_eq!(canvas.get_pixel(1, 3).0, BLACK);
    }

    #[test]
    fn test_fill_polygon_shared_edge_painted_once() {
        let mut canvas = new_canvas(4, BLACK).unwrap();
        let upper = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
        ];
        let lower = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        let half_white = [255, 255, 255, 128];
        fill_polygon(&mut canvas, &upper, half_white, PaintMode::Blend);
        fill_polygon(&mut canvas, &lower, half_white, PaintMode::Blend);

        let expected = blend_over(BLACK, half_white);
        assert_eq!(count(&canvas, expected), 16, "every pixel blended exactly once");
    }

    #[test]
    fn test_fill_polygon_clips_to_canvas() {
        let mut canvas = new_canvas(4, BLACK).unwrap();
        let big = [
            Point::new(-10.0, -10.0),
            Point::new(20.0, -10.0),
            Point::new(20.0, 20.0),
            Point::new(-10.0, 20.0),
        ];
        fill_polygon(&mut canvas, &big, WHITE, PaintMode::Replace);
        assert_eq!(count(&canvas, WHITE), 16);
    }

    #[test]
    fn test_degenerate_polygon_paints_nothing() {
        let mut canvas = new_canvas(4, BLACK).unwrap();
        fill_polygon(
            &mut canvas,
            &[Point::new(0.0, 0.0), Point::new(4.0, 4.0)],
            WHITE,
            PaintMode::Replace,
        );
        assert_eq!(count(&canvas, WHITE), 0);
    }

    #[test]
    fn test_fill_rect_uses_pixel_centres() {
        let mut canvas = new_canvas(10, BLACK).unwrap();
        let rect = Rect {
            left: 1.4,
            top: 2.6,
            right: 4.5,
            bottom: 5.0,
        };
        fill_rect(&mut canvas, rect, WHITE, PaintMode::Replace);

        // Columns 1..4 (centres 1.5, 2.5, 3.5), rows 3..5 (centres 3.5, 4.5).
        assert_eq!(count(&canvas, WHITE), 6);
        assert_eq!(canvas.get_pixel(1, 3).0, WHITE);
        assert_eq!(canvas.get_pixel(4, 3).0, BLACK);
        assert_eq!(canvas.get_pixel(1, 2).0, BLACK);
    }

    #[test]
    fn test_flatten_drops_alpha() {
        let mut canvas = new_canvas(2, constants::TRANSPARENT).unwrap();
        canvas.put_pixel(1, 1, Rgba([25, 28, 47, 255]));
        let flat = flatten(&canvas);
        assert_eq!(flat.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(flat.get_pixel(1, 1).0, [25, 28, 47]);
    }
}
