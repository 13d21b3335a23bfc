use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;

use saunaforge_core::OrderId;

use crate::order::{Order, OrderDraft};

/// Order persistence operation error.
///
/// These are **infrastructure errors** (storage, transport, availability) as
/// opposed to domain errors. A failed create leaves nothing behind: the
/// caller's configuration is retained so the user can retry.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

/// Sort order for listings. The order-tracking view reads newest-first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OrderSort {
    #[default]
    CreatedDesc,
    CreatedAsc,
}

/// The external order persistence collaborator.
///
/// Implementations must:
/// - assign a unique identifier and creation timestamp on `create`
/// - persist exactly the record handed to them (no enrichment)
/// - return listings sorted by creation date per the requested sort
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a draft as a new order. Called exactly once per successful
    /// checkout; deduplication of concurrent submissions is the caller's
    /// responsibility.
    async fn create(&self, draft: OrderDraft) -> Result<Order, OrderStoreError>;

    /// Page through previously created orders.
    async fn list(&self, sort: OrderSort) -> Result<Vec<Order>, OrderStoreError>;
}

#[async_trait]
impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    async fn create(&self, draft: OrderDraft) -> Result<Order, OrderStoreError> {
        (**self).create(draft).await
    }

    async fn list(&self, sort: OrderSort) -> Result<Vec<Order>, OrderStoreError> {
        (**self).list(sort).await
    }
}

/// In-memory order store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, draft: OrderDraft) -> Result<Order, OrderStoreError> {
        let order = Order::from_draft(OrderId::new(), draft, Utc::now());

        let mut orders = self
            .orders
            .write()
            .map_err(|_| OrderStoreError::Storage("lock poisoned".to_string()))?;
        orders.push(order.clone());

        Ok(order)
    }

    async fn list(&self, sort: OrderSort) -> Result<Vec<Order>, OrderStoreError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| OrderStoreError::Storage("lock poisoned".to_string()))?;

        let mut listed = orders.clone();
        // UUIDv7 ids break creation-timestamp ties deterministically.
        listed.sort_by_key(|o| (o.created_at(), o.id_typed()));
        if sort == OrderSort::CreatedDesc {
            listed.reverse();
        }

        Ok(listed)
    }
}
