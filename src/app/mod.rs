// iconsmith - app/mod.rs
//
// Application layer: the two user-facing operations.
// Dependencies: core, platform, util.

pub mod generate;
pub mod inspect;
