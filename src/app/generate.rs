// iconsmith - app/generate.rs
//
// Regenerates every launcher icon under an Android resource root.
//
// Rendering is pure and runs on the rayon pool; writes happen afterwards on
// the calling thread, one density at a time, in table order. The first
// failure aborts the run. Densities already written stay on disk: there is
// no rollback across densities.

use crate::core::emblem;
use crate::core::model::{Density, IconSet, IconVariant};
use crate::platform::fs;
use crate::util::error::{RenderError, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Files produced by a successful run, in write order.
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    pub written: Vec<PathBuf>,
}

/// Where a variant of a density is stored under `res_dir`.
pub fn output_path(res_dir: &Path, density: Density, variant: IconVariant) -> PathBuf {
    res_dir.join(density.folder).join(variant.file_name())
}

/// Render and write both variants for every density.
///
/// The density folders must already exist; they are never created.
pub fn generate_all(res_dir: &Path, densities: &[Density]) -> Result<GenerateSummary> {
    tracing::info!(
        res_dir = %res_dir.display(),
        densities = densities.len(),
        "Generating launcher icons"
    );

    let rendered: Vec<std::result::Result<IconSet, RenderError>> = densities
        .par_iter()
        .map(|&density| emblem::render_icon_set(density))
        .collect();

    let mut summary = GenerateSummary::default();
    for set in rendered {
        let set = set?;
        for &variant in IconVariant::all() {
            let path = output_path(res_dir, set.density, variant);
            fs::write_png(&path, set.image(variant))?;
            tracing::info!(
                folder = set.density.folder,
                size = set.density.size,
                variant = %variant,
                path = %path.display(),
                "Icon written"
            );
            summary.written.push(path);
        }
    }

    tracing::info!(files = summary.written.len(), "Icon generation complete");
    Ok(summary)
}
