//! Dashboard and list-header figures derived from the warehouse records.
//!
//! Everything here is a pure function over already materialized
//! collections: no IO, no caching, deterministic for a given input.

pub mod statistics;
pub mod summary;

#[cfg(test)]
pub(crate) mod fixtures;

pub use statistics::{
    InventoryStatistics, OrderStatistics, StatusBreakdown, StatusCounts, TierCounts, TypeCounts,
    WorkforceStatistics, inventory_statistics, order_statistics, workforce_statistics,
};
pub use summary::{WarehouseSummary, summarize};
