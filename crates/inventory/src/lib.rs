//! Inventory domain module (event-sourced).
//!
//! Business rules for warehouse stock: the item aggregate, the stock-status
//! classifier, list filters and request bodies. Pure domain logic (no IO, no
//! HTTP, no storage).

pub mod input;
pub mod item;
pub mod query;
pub mod stock;

pub use input::{CreateItemInput, UpdateItemInput};
pub use item::{
    AdjustStock, CreateItem, InventoryCommand, InventoryEvent, InventoryItem, ItemChanges,
    ItemCreated, ItemRetired, ItemUpdated, RetireItem, StockAdjusted, StockMethod, UpdateItem,
};
pub use query::InventoryQuery;
pub use stock::{StockStatus, classify, is_low_stock};
