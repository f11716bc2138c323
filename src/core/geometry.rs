// iconsmith - core/geometry.rs
//
// Resolution-independent shapes. Every emblem coordinate is stored as a
// fraction of the canvas side and scaled to pixels per render. Scaled
// coordinates stay fractional; the rasteriser decides pixel coverage.

/// A point in absolute pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point expressed as fractions of the canvas side (unit square).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fraction(pub f64, pub f64);

impl Fraction {
    /// Scale into pixel space for a `size` x `size` canvas.
    pub fn scale(self, size: u32) -> Point {
        let s = f64::from(size);
        Point::new(self.0 * s, self.1 * s)
    }
}

impl From<(f64, f64)> for Fraction {
    fn from((x, y): (f64, f64)) -> Self {
        Self(x, y)
    }
}

/// Scale a fractional outline into pixel space, preserving vertex order.
pub fn scale_all(points: &[(f64, f64)], size: u32) -> Vec<Point> {
    points
        .iter()
        .map(|&p| Fraction::from(p).scale(size))
        .collect()
}

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Axis-aligned rectangle expressed as fractions of the canvas side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FracRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl FracRect {
    pub fn scale(self, size: u32) -> Rect {
        let s = f64::from(size);
        Rect {
            left: self.left * s,
            top: self.top * s,
            right: self.right * s,
            bottom: self.bottom * s,
        }
    }
}

impl From<(f64, f64, f64, f64)> for FracRect {
    fn from((left, top, right, bottom): (f64, f64, f64, f64)) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_scales_without_rounding() {
        let p = Fraction(0.36, 0.63).scale(144);
        assert!((p.x - 51.84).abs() < 1e-9);
        assert!((p.y - 90.72).abs() < 1e-9);
    }

    #[test]
    fn test_scale_all_keeps_vertex_order() {
        let pts = scale_all(&[(0.5, 0.18), (0.82, 0.85), (0.18, 0.85)], 100);
        assert_eq!(pts.len(), 3);
        assert!((pts[0].x - 50.0).abs() < 1e-9);
        assert!((pts[1].x - 82.0).abs() < 1e-9);
        assert!((pts[2].y - 85.0).abs() < 1e-9);
    }

    #[test]
    fn test_frac_rect_scale() {
        let r = FracRect::from((0.25, 0.5, 0.75, 1.0)).scale(48);
        assert_eq!(
            r,
            Rect {
                left: 12.0,
                top: 24.0,
                right: 36.0,
                bottom: 48.0
            }
        );
    }
}
