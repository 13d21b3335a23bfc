//! The pricing rule table.
//!
//! Prices are whole currency units (no cents), signed: a delta can discount
//! (pine) as well as add. `Unknown` values price at zero so a partially
//! initialized or out-of-catalog configuration never fails to price.

use crate::options::{Accessory, HeatingSystem, PackageType, SaunaSize, WoodType};

impl PackageType {
    /// Base price set by the selected package.
    pub fn base_price(self) -> i64 {
        match self {
            PackageType::Essential => 8500,
            PackageType::Premium => 12500,
            PackageType::Luxury => 18500,
            PackageType::Custom => 6500,
            PackageType::Unknown => 0,
        }
    }
}

impl SaunaSize {
    pub fn price_delta(self) -> i64 {
        match self {
            SaunaSize::TwoByTwo => 0,
            SaunaSize::TwoByThree => 1500,
            SaunaSize::ThreeByThree => 2500,
            SaunaSize::ThreeByFour => 4000,
            SaunaSize::FourByFour => 6000,
            SaunaSize::Custom => 3000,
            SaunaSize::Unknown => 0,
        }
    }
}

impl WoodType {
    pub fn price_delta(self) -> i64 {
        match self {
            WoodType::Cedar => 0,
            WoodType::Pine => -800,
            WoodType::Hemlock => 400,
            WoodType::Aspen => 600,
            WoodType::Birch => 800,
            WoodType::Unknown => 0,
        }
    }
}

impl HeatingSystem {
    pub fn price_delta(self) -> i64 {
        match self {
            HeatingSystem::Electric => 0,
            HeatingSystem::WoodBurning => 800,
            HeatingSystem::Infrared => 1200,
            HeatingSystem::Steam => 1500,
            HeatingSystem::Unknown => 0,
        }
    }
}

impl Accessory {
    pub fn price_delta(self) -> i64 {
        match self {
            Accessory::LedLighting => 450,
            Accessory::SoundSystem => 650,
            Accessory::Aromatherapy => 200,
            Accessory::TemperatureControl => 350,
            Accessory::PremiumBenches => 800,
            Accessory::GlassDoor => 1200,
            Accessory::VentilationSystem => 550,
            Accessory::Unknown => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_base_prices() {
        assert_eq!(PackageType::Essential.base_price(), 8500);
        assert_eq!(PackageType::Premium.base_price(), 12500);
        assert_eq!(PackageType::Luxury.base_price(), 18500);
        assert_eq!(PackageType::Custom.base_price(), 6500);
    }

    #[test]
    fn pine_is_the_only_discount() {
        let discounted: Vec<_> = WoodType::ALL
            .into_iter()
            .filter(|w| w.price_delta() < 0)
            .collect();
        assert_eq!(discounted, vec![WoodType::Pine]);
        assert_eq!(WoodType::Pine.price_delta(), -800);
    }

    #[test]
    fn baseline_options_cost_nothing() {
        assert_eq!(SaunaSize::TwoByTwo.price_delta(), 0);
        assert_eq!(WoodType::Cedar.price_delta(), 0);
        assert_eq!(HeatingSystem::Electric.price_delta(), 0);
    }

    #[test]
    fn unknown_values_price_at_zero() {
        assert_eq!(PackageType::Unknown.base_price(), 0);
        assert_eq!(SaunaSize::Unknown.price_delta(), 0);
        assert_eq!(WoodType::Unknown.price_delta(), 0);
        assert_eq!(HeatingSystem::Unknown.price_delta(), 0);
        assert_eq!(Accessory::Unknown.price_delta(), 0);
    }

    #[test]
    fn accessory_catalog_prices() {
        let expected = [
            (Accessory::LedLighting, 450),
            (Accessory::SoundSystem, 650),
            (Accessory::Aromatherapy, 200),
            (Accessory::TemperatureControl, 350),
            (Accessory::PremiumBenches, 800),
            (Accessory::GlassDoor, 1200),
            (Accessory::VentilationSystem, 550),
        ];
        for (accessory, delta) in expected {
            assert_eq!(accessory.price_delta(), delta, "{accessory}");
        }
    }
}
