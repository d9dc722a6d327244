//! List-header statistics for inventory, orders and the workforce.

use rust_decimal::Decimal;
use serde::Serialize;

use stockyard_core::{DomainError, DomainResult, Entity, inventory_value, round_currency};
use stockyard_inventory::{InventoryItem, StockStatus};
use stockyard_orders::{Order, OrderStatus, OrderType};
use stockyard_workforce::{PerformanceTier, Worker};

/// Items per stock badge. Items with a zero minimum level have no badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub critical: usize,
    pub low: usize,
    pub good: usize,
    pub unclassified: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStatistics {
    pub total_items: usize,
    /// `currentStock <= minStockLevel`.
    pub low_stock_items: usize,
    /// Rounded to cents.
    pub total_value: Decimal,
    pub by_status: StatusBreakdown,
}

pub fn inventory_statistics(items: &[InventoryItem]) -> DomainResult<InventoryStatistics> {
    let mut by_status = StatusBreakdown::default();
    for item in items {
        match item.stock_status() {
            Ok(StockStatus::Critical) => by_status.critical += 1,
            Ok(StockStatus::Low) => by_status.low += 1,
            Ok(StockStatus::Good) => by_status.good += 1,
            Err(_) => by_status.unclassified += 1,
        }
    }

    let total_value = inventory_value(items.iter().map(InventoryItem::valuation_input))?;

    Ok(InventoryStatistics {
        total_items: items.len(),
        low_stock_items: items.iter().filter(|item| item.is_low_stock()).count(),
        total_value: round_currency(total_value),
        by_status,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Processing => self.processing,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    fn record(&mut self, status: OrderStatus) {
        match status {
            OrderStatus::Pending => self.pending += 1,
            OrderStatus::Processing => self.processing += 1,
            OrderStatus::Completed => self.completed += 1,
            OrderStatus::Cancelled => self.cancelled += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCounts {
    pub inbound: usize,
    pub outbound: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatistics {
    pub total_orders: usize,
    pub by_status: StatusCounts,
    pub by_type: TypeCounts,
    /// Sum of captured order values, rounded to cents.
    pub total_value: Decimal,
}

pub fn order_statistics(orders: &[Order]) -> DomainResult<OrderStatistics> {
    let mut by_status = StatusCounts::default();
    let mut by_type = TypeCounts::default();
    let mut total_value = Decimal::ZERO;

    for order in orders {
        by_status.record(order.status());
        match order.order_type() {
            OrderType::Inbound => by_type.inbound += 1,
            OrderType::Outbound => by_type.outbound += 1,
        }
        // Order values are unrounded; round once over the sum.
        total_value = total_value
            .checked_add(order.value()?)
            .ok_or_else(|| DomainError::invalid_argument("order value total overflowed"))?;
    }

    Ok(OrderStatistics {
        total_orders: orders.len(),
        by_status,
        by_type,
        total_value: round_currency(total_value),
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    pub excellent: usize,
    pub good: usize,
    pub average: usize,
    pub needs_improvement: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkforceStatistics {
    pub total_workers: usize,
    pub active_workers: usize,
    /// Mean composite score over all workers; zero when there are none.
    pub average_performance: Decimal,
    pub total_orders_processed: i64,
    pub by_tier: TierCounts,
}

pub fn workforce_statistics(workers: &[Worker]) -> DomainResult<WorkforceStatistics> {
    let mut by_tier = TierCounts::default();
    let mut composite_sum = Decimal::ZERO;
    let mut total_orders_processed: i64 = 0;

    for worker in workers {
        total_orders_processed = total_orders_processed
            .checked_add(worker.orders_processed())
            .ok_or_else(|| DomainError::invalid_argument("orders processed total overflowed"))?;

        // Composites are at most 100 each.
        let performance = worker.performance();
        composite_sum += performance.composite_score;
        match performance.tier {
            PerformanceTier::Excellent => by_tier.excellent += 1,
            PerformanceTier::Good => by_tier.good += 1,
            PerformanceTier::Average => by_tier.average += 1,
            PerformanceTier::NeedsImprovement => by_tier.needs_improvement += 1,
        }
    }

    let average_performance = if workers.is_empty() {
        Decimal::ZERO
    } else {
        (composite_sum / Decimal::from(workers.len())).normalize()
    };

    Ok(WorkforceStatistics {
        total_workers: workers.len(),
        active_workers: workers.iter().filter(|w| w.is_active()).count(),
        average_performance,
        total_orders_processed,
        by_tier,
    })
}
