// iconsmith - core/mod.rs
//
// Core rendering logic: geometry, raster primitives, masks, the emblem.
// Dependencies: util, image buffers.
// Must NOT depend on: platform, app, or touch the filesystem.

pub mod emblem;
pub mod geometry;
pub mod mask;
pub mod model;
pub mod raster;
