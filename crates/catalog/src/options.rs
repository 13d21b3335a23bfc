//! The configurable dimensions of a sauna build.
//!
//! Each enum carries a trailing `Unknown` variant marked `#[serde(other)]`:
//! a record holding a value outside the current catalog still deserializes,
//! and prices at zero (see [`crate::pricing`]). Selection surfaces list from
//! the `ALL`/`CATALOG` constants, which exclude `Unknown`.

use serde::{Deserialize, Serialize};

/// Named starting bundle setting the base price.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Essential,
    Premium,
    Luxury,
    Custom,
    #[serde(other)]
    Unknown,
}

impl PackageType {
    /// Packages offered by the configurator, in display order.
    pub const ALL: [PackageType; 4] = [
        PackageType::Essential,
        PackageType::Premium,
        PackageType::Luxury,
        PackageType::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PackageType::Essential => "essential",
            PackageType::Premium => "premium",
            PackageType::Luxury => "luxury",
            PackageType::Custom => "custom",
            PackageType::Unknown => "unknown",
        }
    }

    /// Marketing name shown on the package cards.
    pub fn label(self) -> &'static str {
        match self {
            PackageType::Essential => "Essential Collection",
            PackageType::Premium => "Premium Collection",
            PackageType::Luxury => "Luxury Collection",
            PackageType::Custom => "Bespoke Build",
            PackageType::Unknown => "Unknown",
        }
    }
}

impl core::fmt::Display for PackageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Footprint in meters. `Custom` covers anything off the standard grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaunaSize {
    #[serde(rename = "2x2")]
    TwoByTwo,
    #[serde(rename = "2x3")]
    TwoByThree,
    #[serde(rename = "3x3")]
    ThreeByThree,
    #[serde(rename = "3x4")]
    ThreeByFour,
    #[serde(rename = "4x4")]
    FourByFour,
    #[serde(rename = "custom")]
    Custom,
    #[serde(other)]
    Unknown,
}

impl SaunaSize {
    pub const ALL: [SaunaSize; 6] = [
        SaunaSize::TwoByTwo,
        SaunaSize::TwoByThree,
        SaunaSize::ThreeByThree,
        SaunaSize::ThreeByFour,
        SaunaSize::FourByFour,
        SaunaSize::Custom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SaunaSize::TwoByTwo => "2x2",
            SaunaSize::TwoByThree => "2x3",
            SaunaSize::ThreeByThree => "3x3",
            SaunaSize::ThreeByFour => "3x4",
            SaunaSize::FourByFour => "4x4",
            SaunaSize::Custom => "custom",
            SaunaSize::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for SaunaSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wood species for walls and benches. Cedar is the baseline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    Cedar,
    Pine,
    Hemlock,
    Aspen,
    Birch,
    #[serde(other)]
    Unknown,
}

impl WoodType {
    pub const ALL: [WoodType; 5] = [
        WoodType::Cedar,
        WoodType::Pine,
        WoodType::Hemlock,
        WoodType::Aspen,
        WoodType::Birch,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WoodType::Cedar => "cedar",
            WoodType::Pine => "pine",
            WoodType::Hemlock => "hemlock",
            WoodType::Aspen => "aspen",
            WoodType::Birch => "birch",
            WoodType::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for WoodType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heat source. Electric is the baseline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingSystem {
    Electric,
    WoodBurning,
    Infrared,
    Steam,
    #[serde(other)]
    Unknown,
}

impl HeatingSystem {
    pub const ALL: [HeatingSystem; 4] = [
        HeatingSystem::Electric,
        HeatingSystem::WoodBurning,
        HeatingSystem::Infrared,
        HeatingSystem::Steam,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HeatingSystem::Electric => "electric",
            HeatingSystem::WoodBurning => "wood_burning",
            HeatingSystem::Infrared => "infrared",
            HeatingSystem::Steam => "steam",
            HeatingSystem::Unknown => "unknown",
        }
    }

    /// Human-readable form (underscores spelled out).
    pub fn label(self) -> &'static str {
        match self {
            HeatingSystem::Electric => "electric",
            HeatingSystem::WoodBurning => "wood burning",
            HeatingSystem::Infrared => "infrared",
            HeatingSystem::Steam => "steam",
            HeatingSystem::Unknown => "unknown",
        }
    }
}

impl core::fmt::Display for HeatingSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional add-on feature, multiple selectable.
///
/// Wire names are the catalog display names (with spaces), exactly as the
/// order records store them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accessory {
    #[serde(rename = "LED Lighting")]
    LedLighting,
    #[serde(rename = "Sound System")]
    SoundSystem,
    #[serde(rename = "Aromatherapy")]
    Aromatherapy,
    #[serde(rename = "Temperature Control")]
    TemperatureControl,
    #[serde(rename = "Premium Benches")]
    PremiumBenches,
    #[serde(rename = "Glass Door")]
    GlassDoor,
    #[serde(rename = "Ventilation System")]
    VentilationSystem,
    #[serde(other)]
    Unknown,
}

impl Accessory {
    /// The fixed accessory catalog, in display order.
    pub const CATALOG: [Accessory; 7] = [
        Accessory::LedLighting,
        Accessory::SoundSystem,
        Accessory::Aromatherapy,
        Accessory::TemperatureControl,
        Accessory::PremiumBenches,
        Accessory::GlassDoor,
        Accessory::VentilationSystem,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Accessory::LedLighting => "LED Lighting",
            Accessory::SoundSystem => "Sound System",
            Accessory::Aromatherapy => "Aromatherapy",
            Accessory::TemperatureControl => "Temperature Control",
            Accessory::PremiumBenches => "Premium Benches",
            Accessory::GlassDoor => "Glass Door",
            Accessory::VentilationSystem => "Ventilation System",
            Accessory::Unknown => "Unknown",
        }
    }
}

impl core::fmt::Display for Accessory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
