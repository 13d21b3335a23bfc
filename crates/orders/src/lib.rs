//! Order records, the persistence collaborator boundary, and the design
//! session tying the configurator together.
//!
//! The [`OrderStore`] trait models the external order persistence service
//! (create + list); [`DesignSession`] owns the wizard's configuration and
//! step, and drives mutation → repricing → gating → submission → reset.

pub mod order;
pub mod session;
pub mod store;

pub use order::{CustomerContact, Order, OrderDraft, OrderStatus, ESTIMATED_LEAD_TIME_DAYS};
pub use session::{DesignSession, SubmissionError};
pub use store::{InMemoryOrderStore, OrderSort, OrderStore, OrderStoreError};
