//! The pricing engine.
//!
//! A single pure function over [`Configuration`] and the catalog's rule
//! table. Deterministic, side-effect free, order-independent: the total is a
//! plain sum of the per-dimension deltas, with unset and unknown values
//! contributing zero.

use saunaforge_catalog::PackageType;

use crate::configuration::Configuration;

/// Compute the total price for a configuration.
///
/// `base(package) + sizeDelta + woodDelta + heatingDelta + Σ accessoryDelta`.
/// An unset package contributes zero, tolerating configurations still in
/// progress during the wizard's early steps.
pub fn total_price(config: &Configuration) -> i64 {
    let base = config.package_type().map_or(0, PackageType::base_price);

    let accessories: i64 = config
        .accessories()
        .iter()
        .map(|a| a.price_delta())
        .sum();

    base + config.size().price_delta()
        + config.wood_type().price_delta()
        + config.heating_system().price_delta()
        + accessories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::ConfigurationUpdate;
    use saunaforge_catalog::{Accessory, HeatingSystem, SaunaSize, WoodType};

    fn configured(updates: impl IntoIterator<Item = ConfigurationUpdate>) -> Configuration {
        let mut config = Configuration::default();
        for update in updates {
            config.apply(update);
        }
        config
    }

    #[test]
    fn premium_showcase_scenario_totals_20450() {
        let config = configured([
            ConfigurationUpdate::SelectPackage(PackageType::Premium),
            ConfigurationUpdate::SetSize(SaunaSize::ThreeByFour),
            ConfigurationUpdate::SetWoodType(WoodType::Birch),
            ConfigurationUpdate::SetHeatingSystem(HeatingSystem::Steam),
            ConfigurationUpdate::ToggleAccessory(Accessory::LedLighting),
            ConfigurationUpdate::ToggleAccessory(Accessory::GlassDoor),
        ]);
        // 12500 + 4000 + 800 + 1500 + 450 + 1200
        assert_eq!(config.total_price(), 20450);
        assert_eq!(total_price(&config), 20450);
    }

    #[test]
    fn bespoke_pine_scenario_totals_8700() {
        let config = configured([
            ConfigurationUpdate::SelectPackage(PackageType::Custom),
            ConfigurationUpdate::SetSize(SaunaSize::Custom),
            ConfigurationUpdate::SetWoodType(WoodType::Pine),
            ConfigurationUpdate::SetHeatingSystem(HeatingSystem::Electric),
        ]);
        // 6500 + 3000 - 800 + 0
        assert_eq!(config.total_price(), 8700);
    }

    #[test]
    fn unset_package_contributes_zero() {
        let config = configured([
            ConfigurationUpdate::SetSize(SaunaSize::TwoByTwo),
            ConfigurationUpdate::ToggleAccessory(Accessory::Aromatherapy),
        ]);
        // No base price: 0 + 0 + 0 + 0 + 200
        assert_eq!(config.total_price(), 200);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use proptest::sample::{select, subsequence};

        fn any_package() -> impl Strategy<Value = Option<PackageType>> {
            proptest::option::of(select(&PackageType::ALL[..]))
        }

        fn any_size() -> impl Strategy<Value = SaunaSize> {
            select(&SaunaSize::ALL[..])
        }

        fn any_wood() -> impl Strategy<Value = WoodType> {
            select(&WoodType::ALL[..])
        }

        fn any_heating() -> impl Strategy<Value = HeatingSystem> {
            select(&HeatingSystem::ALL[..])
        }

        fn any_accessories() -> impl Strategy<Value = Vec<Accessory>> {
            subsequence(Accessory::CATALOG.to_vec(), 0..=Accessory::CATALOG.len())
                .prop_shuffle()
        }

        proptest! {
            /// Property: the engine equals the rule-table sum, always.
            #[test]
            fn total_is_the_rule_table_sum(
                package in any_package(),
                size in any_size(),
                wood in any_wood(),
                heating in any_heating(),
                accessories in any_accessories(),
            ) {
                let mut config = Configuration::default();
                if let Some(pkg) = package {
                    config.apply(ConfigurationUpdate::SelectPackage(pkg));
                }
                config.apply(ConfigurationUpdate::SetSize(size));
                config.apply(ConfigurationUpdate::SetWoodType(wood));
                config.apply(ConfigurationUpdate::SetHeatingSystem(heating));
                for accessory in &accessories {
                    config.apply(ConfigurationUpdate::ToggleAccessory(*accessory));
                }

                let expected = package.map_or(0, PackageType::base_price)
                    + size.price_delta()
                    + wood.price_delta()
                    + heating.price_delta()
                    + accessories.iter().map(|a| a.price_delta()).sum::<i64>();

                prop_assert_eq!(config.total_price(), expected);
            }

            /// Property: accessory selection order never changes the total.
            #[test]
            fn total_is_invariant_under_accessory_reordering(
                accessories in any_accessories(),
                reordered_seed in any::<u64>(),
            ) {
                let mut reordered = accessories.clone();
                // Deterministic rotation is enough to permute the order.
                if !reordered.is_empty() {
                    let by = (reordered_seed as usize) % reordered.len();
                    reordered.rotate_left(by);
                }

                let mut first = Configuration::default();
                for accessory in &accessories {
                    first.apply(ConfigurationUpdate::ToggleAccessory(*accessory));
                }

                let mut second = Configuration::default();
                for accessory in &reordered {
                    second.apply(ConfigurationUpdate::ToggleAccessory(*accessory));
                }

                prop_assert_eq!(first.total_price(), second.total_price());
            }

            /// Property: the engine itself is pure (same input, same output).
            #[test]
            fn total_price_is_deterministic(
                size in any_size(),
                wood in any_wood(),
            ) {
                let mut config = Configuration::default();
                config.apply(ConfigurationUpdate::SetSize(size));
                config.apply(ConfigurationUpdate::SetWoodType(wood));

                prop_assert_eq!(total_price(&config), total_price(&config));
            }
        }
    }
}
