use chrono::Utc;
use thiserror::Error;

use saunaforge_core::{DomainError, DomainResult, SessionId};
use saunaforge_designer::{Configuration, ConfigurationUpdate, Wizard, WizardStep};

use crate::order::{CustomerContact, Order, OrderDraft};
use crate::store::{OrderStore, OrderStoreError};

/// Order submission error.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The submit control must be disabled while a submission is in flight;
    /// this is the backstop if it is not.
    #[error("a submission is already in flight")]
    InFlight,

    #[error("the wizard has not reached checkout")]
    NotAtCheckout,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] OrderStoreError),
}

/// One designer wizard session: the single writer context for a
/// [`Configuration`].
///
/// All interaction flows through here: field updates reprice immediately,
/// navigation is gated by the [`Wizard`], and checkout snapshots the
/// configuration into an order via the [`OrderStore`] collaborator. Only one
/// submission is ever in flight by construction (`&mut self` + the
/// `submitting` flag).
#[derive(Debug)]
pub struct DesignSession<S> {
    id: SessionId,
    store: S,
    config: Configuration,
    wizard: Wizard,
    submitting: bool,
}

impl<S: OrderStore> DesignSession<S> {
    /// Start a fresh session at the package step with default selections.
    pub fn new(store: S) -> Self {
        Self {
            id: SessionId::new(),
            store,
            config: Configuration::default(),
            wizard: Wizard::new(),
            submitting: false,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.step()
    }

    /// True while an order submission awaits the external service. The UI
    /// disables the submit control for the duration.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the continue/finalize control should be enabled.
    pub fn can_advance(&self) -> bool {
        self.wizard.can_advance(&self.config)
    }

    /// Apply one field update and reprice. Returns the new total.
    pub fn update(&mut self, update: ConfigurationUpdate) -> i64 {
        let total = self.config.apply(update);
        tracing::debug!(session = %self.id, total, "configuration updated");
        total
    }

    /// Continue to the next step (or finalize from review).
    pub fn advance(&mut self) -> DomainResult<WizardStep> {
        let step = self.wizard.advance(&self.config)?;
        tracing::debug!(session = %self.id, step = step.label(), "wizard advanced");
        Ok(step)
    }

    /// Go back one step. Unconditional.
    pub fn back(&mut self) -> WizardStep {
        self.wizard.back()
    }

    /// Jump to an earlier (or the current) step via the step indicator.
    pub fn jump_to(&mut self, target: WizardStep) -> DomainResult<WizardStep> {
        self.wizard.jump_to(target, &self.config)
    }

    /// Abandon checkout. The configuration is preserved for later edits.
    pub fn cancel_checkout(&mut self) -> DomainResult<WizardStep> {
        self.wizard.cancel_checkout()
    }

    /// Submit the finalized configuration as an order.
    ///
    /// Makes exactly one `create` call on the store. On success the session
    /// returns to the package step with a fresh default configuration; on
    /// failure both the configuration and the wizard position are left
    /// untouched so the user can retry without re-entering anything.
    pub async fn submit(&mut self, customer: CustomerContact) -> Result<Order, SubmissionError> {
        if self.wizard.step() != WizardStep::Checkout {
            return Err(SubmissionError::NotAtCheckout);
        }
        if self.submitting {
            return Err(SubmissionError::InFlight);
        }

        let draft = OrderDraft::from_configuration(&self.config, customer, Utc::now())?;

        self.submitting = true;
        let result = self.store.create(draft).await;
        self.submitting = false;

        match result {
            Ok(order) => {
                tracing::info!(
                    session = %self.id,
                    order = %order.id_typed(),
                    total = order.total_price(),
                    "order submitted"
                );
                self.config.reset();
                self.wizard.reset();
                Ok(order)
            }
            Err(err) => {
                tracing::warn!(session = %self.id, error = %err, "order submission failed");
                Err(err.into())
            }
        }
    }
}
