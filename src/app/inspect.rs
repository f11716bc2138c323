// iconsmith - app/inspect.rs
//
// Spot-check an existing icon: report its dimensions and the colour at a
// handful of coordinates, in the image's native channel layout.
//
// The default coordinates were picked against a 144 px render. They are
// a manual aid for that size only, not a general verification routine.

use crate::platform::fs;
use crate::util::constants;
use crate::util::error::InspectError;
use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Colour found at one coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub x: u32,
    pub y: u32,
    /// One value per native channel (3 for an RGB PNG, 1 for greyscale...).
    pub channels: Vec<u16>,
}

/// Everything the inspector learned about one image.
#[derive(Debug, Clone, Serialize)]
pub struct InspectionReport {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Native colour type, e.g. `Rgb8`.
    pub color_type: String,
    pub samples: Vec<Sample>,
}

impl InspectionReport {
    /// Plain-text rendering: size line, then one line per sample.
    pub fn render_text(&self) -> String {
        let mut out = format!("size ({}, {})\n", self.width, self.height);
        for s in &self.samples {
            let values: Vec<String> = s.channels.iter().map(u16::to_string).collect();
            let _ = writeln!(out, "({}, {}) ({})", s.x, s.y, values.join(", "));
        }
        out
    }
}

/// Parse a `X,Y` coordinate.
pub fn parse_point(raw: &str) -> Result<(u32, u32), InspectError> {
    let invalid = || InspectError::InvalidPoint {
        raw: raw.to_string(),
    };
    let (x, y) = raw.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<u32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<u32>().map_err(|_| invalid())?;
    Ok((x, y))
}

/// Turn `--point` arguments into coordinates, falling back to the defaults.
pub fn resolve_points(raw: &[String]) -> Result<Vec<(u32, u32)>, InspectError> {
    if raw.is_empty() {
        return Ok(constants::DEFAULT_SAMPLE_POINTS.to_vec());
    }
    if raw.len() > constants::MAX_SAMPLE_POINTS {
        return Err(InspectError::TooManyPoints {
            count: raw.len(),
            max: constants::MAX_SAMPLE_POINTS,
        });
    }
    raw.iter().map(|r| parse_point(r)).collect()
}

/// Channel values of one pixel, without converting the colour type.
fn native_channels(img: &DynamicImage, x: u32, y: u32) -> Vec<u16> {
    match img {
        DynamicImage::ImageLuma8(i) => i.get_pixel(x, y).0.iter().map(|&c| u16::from(c)).collect(),
        DynamicImage::ImageLumaA8(i) => i.get_pixel(x, y).0.iter().map(|&c| u16::from(c)).collect(),
        DynamicImage::ImageRgb8(i) => i.get_pixel(x, y).0.iter().map(|&c| u16::from(c)).collect(),
        DynamicImage::ImageRgba8(i) => i.get_pixel(x, y).0.iter().map(|&c| u16::from(c)).collect(),
        DynamicImage::ImageLuma16(i) => i.get_pixel(x, y).0.to_vec(),
        DynamicImage::ImageLumaA16(i) => i.get_pixel(x, y).0.to_vec(),
        DynamicImage::ImageRgb16(i) => i.get_pixel(x, y).0.to_vec(),
        DynamicImage::ImageRgba16(i) => i.get_pixel(x, y).0.to_vec(),
        // Float and future layouts: report as 8-bit RGBA.
        other => other.get_pixel(x, y).0.iter().map(|&c| u16::from(c)).collect(),
    }
}

/// Open `path` and sample `points`.
///
/// Every point must lie inside `[0, width) x [0, height)`; the first one
/// that does not fails the whole call. Nothing is clamped or wrapped.
pub fn inspect(path: &Path, points: &[(u32, u32)]) -> Result<InspectionReport, InspectError> {
    let img = fs::read_image(path)?;
    let (width, height) = img.dimensions();

    tracing::info!(
        path = %path.display(),
        width,
        height,
        color = ?img.color(),
        "Inspecting image"
    );

    if points == constants::DEFAULT_SAMPLE_POINTS
        && (width, height) != (constants::REFERENCE_SAMPLE_SIZE, constants::REFERENCE_SAMPLE_SIZE)
    {
        tracing::warn!(
            width,
            height,
            reference = constants::REFERENCE_SAMPLE_SIZE,
            "Default sample points were chosen for a different icon size"
        );
    }

    let mut samples = Vec::with_capacity(points.len());
    for &(x, y) in points {
        if x >= width || y >= height {
            return Err(InspectError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        samples.push(Sample {
            x,
            y,
            channels: native_channels(&img, x, y),
        });
    }

    Ok(InspectionReport {
        path: path.to_path_buf(),
        width,
        height,
        color_type: format!("{:?}", img.color()),
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use tempfile::TempDir;

    fn save_rgb(dir: &TempDir, img: &RgbImage) -> PathBuf {
        let path = dir.path().join("probe.png");
        fs::write_png(&path, img).unwrap();
        path
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10,70").unwrap(), (10, 70));
        assert_eq!(parse_point(" 3 , 4 ").unwrap(), (3, 4));
        assert!(matches!(
            parse_point("10"),
            Err(InspectError::InvalidPoint { .. })
        ));
        assert!(parse_point("-1,4").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_resolve_points_defaults_and_limits() {
        assert_eq!(
            resolve_points(&[]).unwrap(),
            constants::DEFAULT_SAMPLE_POINTS.to_vec()
        );
        let many = vec!["1,1".to_string(); constants::MAX_SAMPLE_POINTS + 1];
        assert!(matches!(
            resolve_points(&many),
            Err(InspectError::TooManyPoints { .. })
        ));
    }

    #[test]
    fn test_samples_native_rgb() {
        let dir = TempDir::new().unwrap();
        let img = RgbImage::from_fn(8, 8, |x, y| Rgb([x as u8, y as u8, 200]));
        let path = save_rgb(&dir, &img);

        let report = inspect(&path, &[(2, 5), (7, 7)]).unwrap();
        assert_eq!((report.width, report.height), (8, 8));
        assert_eq!(report.color_type, "Rgb8");
        assert_eq!(report.samples[0].channels, vec![2, 5, 200]);
        assert_eq!(report.samples[1].channels, vec![7, 7, 200]);
    }

    #[test]
    fn test_samples_native_greyscale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("grey.png");
        GrayImage::from_pixel(4, 4, Luma([99])).save(&path).unwrap();

        let report = inspect(&path, &[(0, 0)]).unwrap();
        assert_eq!(report.samples[0].channels, vec![99]);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = save_rgb(&dir, &RgbImage::new(8, 8));

        for point in [(8, 0), (0, 8), (100, 100)] {
            let result = inspect(&path, &[(0, 0), point]);
            assert!(
                matches!(result, Err(InspectError::OutOfBounds { width: 8, height: 8, .. })),
                "expected OutOfBounds for {point:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn test_render_text_format() {
        let report = InspectionReport {
            path: PathBuf::from("x.png"),
            width: 144,
            height: 144,
            color_type: "Rgb8".to_string(),
            samples: vec![Sample {
                x: 10,
                y: 70,
                channels: vec![25, 28, 47],
            }],
        };
        assert_eq!(report.render_text(), "size (144, 144)\n(10, 70) (25, 28, 47)\n");
    }
}
