// iconsmith - platform/fs.rs
//
// PNG persistence and loading.
//
// Writes never create directories: a missing density folder means the tool
// is pointed at the wrong project, and that is reported, not papered over.

use crate::util::error::{InspectError, RenderError};
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbImage};
use std::path::Path;

/// Encode `image` as PNG and write it to `path`, replacing any existing file.
///
/// The bytes go to a sibling temp file which is then renamed over the
/// target, so an interrupted run never leaves a truncated PNG behind.
pub fn write_png(path: &Path, image: &RgbImage) -> Result<(), RenderError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    if !parent.is_dir() {
        return Err(RenderError::DestinationMissing {
            path: parent.to_path_buf(),
        });
    }

    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(image.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(|e| RenderError::Encode {
            path: path.to_path_buf(),
            source: e,
        })?;

    let tmp = path.with_extension("png.tmp");
    std::fs::write(&tmp, &bytes).map_err(|e| RenderError::Write {
        path: tmp.clone(),
        source: e,
    })?;

    std::fs::rename(&tmp, path).map_err(|e| {
        // Clean up the temp file on failure; ignore any secondary error.
        let _ = std::fs::remove_file(&tmp);
        RenderError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "PNG written");
    Ok(())
}

/// Open and decode an image, keeping its native colour type.
pub fn read_image(path: &Path) -> Result<DynamicImage, InspectError> {
    if !path.exists() {
        return Err(InspectError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| InspectError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

    reader.decode().map_err(|e| InspectError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}
