//! Designer flow domain module.
//!
//! This crate contains the configurator's business rules, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage): the mutable
//! [`Configuration`], the pricing engine recomputing its total on every
//! mutation, and the [`Wizard`] step sequencer gating navigation.

pub mod configuration;
pub mod pricing;
pub mod wizard;

pub use configuration::{Configuration, ConfigurationUpdate};
pub use wizard::{Wizard, WizardStep};
