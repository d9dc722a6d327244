//! Entity trait for records that are edited in place rather than event-sourced.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether the record is live. Soft-deleted records return `false`.
    fn is_active(&self) -> bool;
}
