use serde::{Deserialize, Serialize};

use saunaforge_catalog::{Accessory, HeatingSystem, PackageType, SaunaSize, WoodType};

use crate::pricing;

/// The in-progress sauna build being priced and eventually ordered.
///
/// There is exactly one writer context: the active wizard session. All
/// mutation goes through [`Configuration::apply`], which recomputes
/// `total_price` as an explicit pipeline step, so the cached total is always
/// consistent with the current selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    package_type: Option<PackageType>,
    size: SaunaSize,
    wood_type: WoodType,
    heating_system: HeatingSystem,
    accessories: Vec<Accessory>,
    consultation_notes: String,
    /// Derived cache. Never set independently; recomputed on every mutation.
    total_price: i64,
}

impl Default for Configuration {
    /// The documented wizard-start (and post-submission reset) state.
    ///
    /// The total cache starts at 0; the pricing invariant is (re)established
    /// by the first mutation.
    fn default() -> Self {
        Self {
            package_type: None,
            size: SaunaSize::ThreeByThree,
            wood_type: WoodType::Cedar,
            heating_system: HeatingSystem::Electric,
            accessories: Vec::new(),
            consultation_notes: String::new(),
            total_price: 0,
        }
    }
}

/// One field mutation, as a tagged command.
///
/// Field values are already typed against the catalog domains, so applying an
/// update cannot fail; unknown values are a pricing concern (they price at
/// zero), not a validation one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigurationUpdate {
    SelectPackage(PackageType),
    SetSize(SaunaSize),
    SetWoodType(WoodType),
    SetHeatingSystem(HeatingSystem),
    /// Adds the accessory if absent, removes it if present.
    ToggleAccessory(Accessory),
    SetConsultationNotes(String),
}

impl Configuration {
    pub fn package_type(&self) -> Option<PackageType> {
        self.package_type
    }

    pub fn size(&self) -> SaunaSize {
        self.size
    }

    pub fn wood_type(&self) -> WoodType {
        self.wood_type
    }

    pub fn heating_system(&self) -> HeatingSystem {
        self.heating_system
    }

    /// Selected accessories in insertion order (pricing is order-independent).
    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    pub fn consultation_notes(&self) -> &str {
        &self.consultation_notes
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    /// Apply a single field update, then reprice.
    ///
    /// Returns the recomputed total.
    pub fn apply(&mut self, update: ConfigurationUpdate) -> i64 {
        match update {
            ConfigurationUpdate::SelectPackage(package) => {
                self.package_type = Some(package);
            }
            ConfigurationUpdate::SetSize(size) => {
                self.size = size;
            }
            ConfigurationUpdate::SetWoodType(wood) => {
                self.wood_type = wood;
            }
            ConfigurationUpdate::SetHeatingSystem(heating) => {
                self.heating_system = heating;
            }
            ConfigurationUpdate::ToggleAccessory(accessory) => {
                if let Some(pos) = self.accessories.iter().position(|a| *a == accessory) {
                    self.accessories.remove(pos);
                } else {
                    self.accessories.push(accessory);
                }
            }
            ConfigurationUpdate::SetConsultationNotes(notes) => {
                self.consultation_notes = notes;
            }
        }

        // On mutate, recompute: the displayed total never goes stale.
        self.total_price = pricing::total_price(self);
        self.total_price
    }

    /// Restore the documented default state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_documented_reset_state() {
        let config = Configuration::default();
        assert_eq!(config.package_type(), None);
        assert_eq!(config.size(), SaunaSize::ThreeByThree);
        assert_eq!(config.wood_type(), WoodType::Cedar);
        assert_eq!(config.heating_system(), HeatingSystem::Electric);
        assert!(config.accessories().is_empty());
        assert_eq!(config.consultation_notes(), "");
        assert_eq!(config.total_price(), 0);
    }

    #[test]
    fn every_mutation_reprices() {
        let mut config = Configuration::default();

        // No package yet: only the size/wood/heating deltas count.
        let total = config.apply(ConfigurationUpdate::SetWoodType(WoodType::Cedar));
        assert_eq!(total, 2500); // 3x3 delta

        let total = config.apply(ConfigurationUpdate::SelectPackage(PackageType::Essential));
        assert_eq!(total, 8500 + 2500);

        let total = config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::GlassDoor));
        assert_eq!(total, 8500 + 2500 + 1200);
        assert_eq!(config.total_price(), total);
    }

    #[test]
    fn toggling_an_accessory_twice_removes_it() {
        let mut config = Configuration::default();
        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::SoundSystem));
        assert_eq!(config.accessories(), [Accessory::SoundSystem]);

        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::SoundSystem));
        assert!(config.accessories().is_empty());
    }

    #[test]
    fn accessories_keep_insertion_order_for_display() {
        let mut config = Configuration::default();
        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::GlassDoor));
        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::LedLighting));
        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::Aromatherapy));
        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::LedLighting));
        assert_eq!(
            config.accessories(),
            [Accessory::GlassDoor, Accessory::Aromatherapy]
        );
    }

    #[test]
    fn notes_do_not_affect_the_total() {
        let mut config = Configuration::default();
        config.apply(ConfigurationUpdate::SelectPackage(PackageType::Premium));
        let before = config.total_price();
        config.apply(ConfigurationUpdate::SetConsultationNotes(
            "north-facing garden, 230V available".to_string(),
        ));
        assert_eq!(config.total_price(), before);
        assert_eq!(
            config.consultation_notes(),
            "north-facing garden, 230V available"
        );
    }

    #[test]
    fn reset_restores_the_default() {
        let mut config = Configuration::default();
        config.apply(ConfigurationUpdate::SelectPackage(PackageType::Luxury));
        config.apply(ConfigurationUpdate::SetSize(SaunaSize::FourByFour));
        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::PremiumBenches));

        config.reset();
        assert_eq!(config, Configuration::default());
        assert_eq!(config.total_price(), 0);
    }

    #[test]
    fn configuration_round_trips_through_json() {
        let mut config = Configuration::default();
        config.apply(ConfigurationUpdate::SelectPackage(PackageType::Custom));
        config.apply(ConfigurationUpdate::SetHeatingSystem(HeatingSystem::WoodBurning));
        config.apply(ConfigurationUpdate::ToggleAccessory(Accessory::TemperatureControl));

        let json = serde_json::to_string(&config).unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
