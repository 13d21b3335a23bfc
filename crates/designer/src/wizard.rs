use serde::{Deserialize, Serialize};

use saunaforge_core::{DomainError, DomainResult};

use crate::configuration::Configuration;

/// Wizard position: package → customize → review → checkout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Package,
    Customize,
    Review,
    Checkout,
}

impl WizardStep {
    /// 1-based position, used for the "jump backward only" rule.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::Package => 1,
            WizardStep::Customize => 2,
            WizardStep::Review => 3,
            WizardStep::Checkout => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Package => "Package",
            WizardStep::Customize => "Customize",
            WizardStep::Review => "Review",
            WizardStep::Checkout => "Checkout",
        }
    }
}

/// Step sequencer for the designer flow.
///
/// Holds no configuration itself: guards are evaluated against the
/// [`Configuration`] passed in, so the wizard stays a pure state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wizard {
    step: WizardStep,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Package,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Guard for the forward controls: a package must be selected.
    ///
    /// UIs query this to disable the continue/finalize control proactively,
    /// so a refused [`Wizard::advance`] is a defensive backstop rather than a
    /// normal path.
    pub fn can_advance(&self, config: &Configuration) -> bool {
        config.package_type().is_some() && self.step != WizardStep::Checkout
    }

    /// Move to the next step ("continue", or "finalize order" from review).
    pub fn advance(&mut self, config: &Configuration) -> DomainResult<WizardStep> {
        if self.step == WizardStep::Checkout {
            return Err(DomainError::invariant("already at checkout"));
        }
        if config.package_type().is_none() {
            return Err(DomainError::validation(
                "a package must be selected before continuing",
            ));
        }

        self.step = match self.step {
            WizardStep::Package => WizardStep::Customize,
            WizardStep::Customize => WizardStep::Review,
            WizardStep::Review | WizardStep::Checkout => WizardStep::Checkout,
        };
        Ok(self.step)
    }

    /// Move one step back. Unconditional; a no-op on the first step.
    pub fn back(&mut self) -> WizardStep {
        self.step = match self.step {
            WizardStep::Package => WizardStep::Package,
            WizardStep::Customize => WizardStep::Package,
            WizardStep::Review => WizardStep::Customize,
            WizardStep::Checkout => WizardStep::Review,
        };
        self.step
    }

    /// Jump directly to a step at or before the current one (clickable step
    /// indicator). Requires a selected package, like every other navigation
    /// away from the default state.
    pub fn jump_to(&mut self, target: WizardStep, config: &Configuration) -> DomainResult<WizardStep> {
        if config.package_type().is_none() {
            return Err(DomainError::validation(
                "a package must be selected before navigating",
            ));
        }
        if target.number() > self.step.number() {
            return Err(DomainError::invariant(format!(
                "cannot jump forward from {} to {}",
                self.step.label(),
                target.label()
            )));
        }
        self.step = target;
        Ok(self.step)
    }

    /// Abandon checkout and return to the first step.
    ///
    /// The configuration is untouched: cancelling loses nothing.
    pub fn cancel_checkout(&mut self) -> DomainResult<WizardStep> {
        if self.step != WizardStep::Checkout {
            return Err(DomainError::invariant("not at checkout"));
        }
        self.step = WizardStep::Package;
        Ok(self.step)
    }

    /// Return to the first step (after a successful submission).
    pub fn reset(&mut self) {
        self.step = WizardStep::Package;
    }
}
