// iconsmith - platform/mod.rs
//
// Platform abstraction layer: filesystem I/O and configuration.
// Dependencies: util, directories, image codecs.
// Must NOT depend on: core, app.

pub mod config;
pub mod fs;
