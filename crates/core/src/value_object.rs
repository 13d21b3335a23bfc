//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. Two value
/// objects with the same attribute values are the same value; identity never
/// enters into it. To "modify" one, build a new one.
///
/// Example: `CustomerContact` is a value object — any two contacts with the
/// same name/email/phone/address are interchangeable. An `Order` is not: it
/// has an `OrderId` and continuity across status changes.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
