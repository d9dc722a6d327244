//! `stockyard-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the warehouse
//! crates (no infrastructure concerns): errors, identifiers, aggregate and
//! entity traits, value objects and the valuation engine.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod event;
pub mod id;
pub mod serde_ext;
pub mod valuation;
pub mod value_object;

pub use aggregate::{Aggregate, AggregateRoot};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use event::Event;
pub use id::{ItemId, OrderId, ProfileId, WorkerId};
pub use valuation::{inventory_value, order_value, round_currency};
pub use value_object::{Money, Percentage, ValueObject};
