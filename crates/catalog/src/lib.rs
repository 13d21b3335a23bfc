//! Sauna build catalog: the configurable dimensions and their price deltas.
//!
//! Everything here is static, deterministic domain data (no IO, no state).
//! Wire names match the persisted order records (`"wood_burning"`, `"2x3"`,
//! `"LED Lighting"`, ...), so snapshots taken by older builds keep
//! deserializing.

pub mod options;
pub mod pricing;

pub use options::{Accessory, HeatingSystem, PackageType, SaunaSize, WoodType};
