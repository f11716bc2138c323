// iconsmith - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use image::RgbImage;

// =============================================================================
// Densities
// =============================================================================

/// One Android mipmap density bucket and the launcher icon size it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Density {
    /// Resource folder name, e.g. `mipmap-xxhdpi`.
    pub folder: &'static str,

    /// Side length of the square icon in pixels.
    pub size: u32,
}

impl Density {
    /// All standard launcher densities, smallest first.
    pub fn standard() -> Vec<Density> {
        constants::DENSITY_TABLE
            .iter()
            .map(|&(folder, size)| Density { folder, size })
            .collect()
    }
}

// =============================================================================
// Variants
// =============================================================================

/// The two launcher icon shapes written for every density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Square,
    Round,
}

impl IconVariant {
    /// Both variants in write order.
    pub fn all() -> &'static [IconVariant] {
        &[IconVariant::Square, IconVariant::Round]
    }

    /// File name inside the density folder.
    pub fn file_name(&self) -> &'static str {
        match self {
            IconVariant::Square => constants::SQUARE_ICON_FILE,
            IconVariant::Round => constants::ROUND_ICON_FILE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IconVariant::Square => "square",
            IconVariant::Round => "round",
        }
    }
}

impl std::fmt::Display for IconVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Rendered output
// =============================================================================

/// Both flattened (opaque RGB) icons for one density, ready to encode.
#[derive(Debug, Clone)]
pub struct IconSet {
    pub density: Density,
    pub square: RgbImage,
    pub round: RgbImage,
}

impl IconSet {
    /// The image for a given variant.
    pub fn image(&self, variant: IconVariant) -> &RgbImage {
        match variant {
            IconVariant::Square => &self.square,
            IconVariant::Round => &self.round,
        }
    }
}
