use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use saunaforge_catalog::{Accessory, HeatingSystem, PackageType, SaunaSize, WoodType};
use saunaforge_core::{DomainError, DomainResult, Entity, OrderId, ValueObject};
use saunaforge_designer::Configuration;

/// Days between submission and the estimated delivery date (8 weeks).
pub const ESTIMATED_LEAD_TIME_DAYS: i64 = 56;

/// Customer contact fields collected at checkout.
///
/// Name, email, phone, and shipping address are required; special
/// instructions may be blank. Construct through [`CustomerContact::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerContact {
    customer_name: String,
    customer_email: String,
    customer_phone: String,
    shipping_address: String,
    special_instructions: String,
}

impl CustomerContact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        shipping_address: impl Into<String>,
        special_instructions: impl Into<String>,
    ) -> DomainResult<Self> {
        let contact = Self {
            customer_name: name.into(),
            customer_email: email.into(),
            customer_phone: phone.into(),
            shipping_address: shipping_address.into(),
            special_instructions: special_instructions.into(),
        };

        if contact.customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if contact.customer_email.trim().is_empty() {
            return Err(DomainError::validation("customer email cannot be empty"));
        }
        if !contact.customer_email.contains('@') {
            return Err(DomainError::validation("customer email must contain '@'"));
        }
        if contact.customer_phone.trim().is_empty() {
            return Err(DomainError::validation("customer phone cannot be empty"));
        }
        if contact.shipping_address.trim().is_empty() {
            return Err(DomainError::validation("shipping address cannot be empty"));
        }

        Ok(contact)
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    pub fn shipping_address(&self) -> &str {
        &self.shipping_address
    }

    pub fn special_instructions(&self) -> &str {
        &self.special_instructions
    }
}

impl ValueObject for CustomerContact {}

/// Order lifecycle. Advanced by the fulfilment side, not by this core:
/// orders leave here as `Pending` and are read-only afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    InProduction,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::InProduction => "in_production",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl core::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The estimated delivery calendar date for a given submission instant.
pub fn estimated_delivery(submitted_at: DateTime<Utc>) -> NaiveDate {
    (submitted_at + Duration::days(ESTIMATED_LEAD_TIME_DAYS)).date_naive()
}

/// An order ready to be persisted (no identifier or creation timestamp yet;
/// the store assigns both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub package_type: PackageType,
    pub size: SaunaSize,
    pub wood_type: WoodType,
    pub heating_system: HeatingSystem,
    pub accessories: Vec<Accessory>,
    pub consultation_notes: String,
    pub total_price: i64,
    #[serde(flatten)]
    pub customer: CustomerContact,
    pub estimated_delivery: NaiveDate,
}

impl OrderDraft {
    /// Snapshot a finalized configuration together with the checkout form.
    ///
    /// The configuration is read, never consumed: on submission failure the
    /// caller keeps it untouched for retry.
    pub fn from_configuration(
        config: &Configuration,
        customer: CustomerContact,
        submitted_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let Some(package_type) = config.package_type() else {
            return Err(DomainError::invariant(
                "cannot place an order without a selected package",
            ));
        };

        Ok(Self {
            package_type,
            size: config.size(),
            wood_type: config.wood_type(),
            heating_system: config.heating_system(),
            accessories: config.accessories().to_vec(),
            consultation_notes: config.consultation_notes().to_string(),
            total_price: config.total_price(),
            customer,
            estimated_delivery: estimated_delivery(submitted_at),
        })
    }
}

/// A persisted order record. Immutable to this core after creation; the
/// fulfilment system owns the status from here on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    package_type: PackageType,
    size: SaunaSize,
    wood_type: WoodType,
    heating_system: HeatingSystem,
    accessories: Vec<Accessory>,
    consultation_notes: String,
    total_price: i64,
    #[serde(flatten)]
    customer: CustomerContact,
    estimated_delivery: NaiveDate,
    order_status: OrderStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Materialize a draft with its store-assigned identity. New orders are
    /// always `Pending`.
    pub fn from_draft(id: OrderId, draft: OrderDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            package_type: draft.package_type,
            size: draft.size,
            wood_type: draft.wood_type,
            heating_system: draft.heating_system,
            accessories: draft.accessories,
            consultation_notes: draft.consultation_notes,
            total_price: draft.total_price,
            customer: draft.customer,
            estimated_delivery: draft.estimated_delivery,
            order_status: OrderStatus::Pending,
            created_at,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn package_type(&self) -> PackageType {
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

    pub fn accessories(&self) -> &[Accessory] {
        &self.accessories
    }

    pub fn consultation_notes(&self) -> &str {
        &self.consultation_notes
    }

    pub fn total_price(&self) -> i64 {
        self.total_price
    }

    pub fn customer(&self) -> &CustomerContact {
        &self.customer
    }

    pub fn estimated_delivery(&self) -> NaiveDate {
        self.estimated_delivery
    }

    pub fn order_status(&self) -> OrderStatus {
        self.order_status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
