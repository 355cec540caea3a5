//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal. They are immutable; to "modify" one, build a new one.
///
/// - **Value object**: `Money(2999)` equals any other `Money(2999)`
/// - **Entity**: a `LineItem` with id 1 is the same line whatever its quantity
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
