//! The warehouse dashboard summary.

use rust_decimal::Decimal;
use serde::Serialize;

use stockyard_core::DomainResult;
use stockyard_inventory::InventoryItem;
use stockyard_orders::{Order, OrderStatus};
use stockyard_workforce::Worker;

use crate::statistics::{inventory_statistics, workforce_statistics};

/// Dashboard figures across the whole warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseSummary {
    pub total_items: usize,
    pub low_stock_count: usize,
    /// Rounded to cents.
    pub total_inventory_value: Decimal,
    pub active_worker_count: usize,
    pub average_performance: Decimal,
    pub total_orders_processed: i64,
    pub pending_orders: usize,
}

/// Compose the stock classifier, valuation engine and performance scorer
/// over every record passed in.
///
/// Callers decide which records count (e.g. whether retired items are
/// included); nothing is filtered here.
pub fn summarize(items: &[InventoryItem], orders: &[Order], workers: &[Worker]) -> DomainResult<WarehouseSummary> {
    let inventory = inventory_statistics(items)?;
    let workforce = workforce_statistics(workers)?;
    let pending_orders = orders
        .iter()
        .filter(|order| order.status() == OrderStatus::Pending)
        .count();

    let summary = WarehouseSummary {
        total_items: inventory.total_items,
        low_stock_count: inventory.low_stock_items,
        total_inventory_value: inventory.total_value,
        active_worker_count: workforce.active_workers,
        average_performance: workforce.average_performance,
        total_orders_processed: workforce.total_orders_processed,
        pending_orders,
    };

    tracing::debug!(
        total_items = summary.total_items,
        low_stock = summary.low_stock_count,
        inventory_value = %summary.total_inventory_value,
        active_workers = summary.active_worker_count,
        pending_orders = summary.pending_orders,
        "warehouse summary computed"
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{item, order, worker};
    use rust_decimal_macros::dec;
    use stockyard_orders::OrderType;

    #[test]
    fn empty_warehouse_summarizes_to_zero() {
        let summary = summarize(&[], &[], &[]).unwrap();
        assert_eq!(
            summary,
            WarehouseSummary {
                total_items: 0,
                low_stock_count: 0,
                total_inventory_value: Decimal::ZERO,
                active_worker_count: 0,
                average_performance: Decimal::ZERO,
                total_orders_processed: 0,
                pending_orders: 0,
            }
        );
    }

    #[test]
    fn two_item_scenario() {
        let items = vec![
            item("WH-001", 5, 20, dec!(45.99)),
            item("WH-002", 150, 100, dec!(0.85)),
        ];
        let summary = summarize(&items, &[], &[]).unwrap();
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.low_stock_count, 1);
        assert_eq!(summary.total_inventory_value, dec!(357.45));
    }

    #[test]
    fn boundary_item_counts_as_low() {
        let items = vec![item("WH-003", 20, 20, dec!(1))];
        assert_eq!(summarize(&items, &[], &[]).unwrap().low_stock_count, 1);
    }

    #[test]
    fn workers_and_orders_feed_the_dashboard_cards() {
        let orders = vec![
            order("ORD-100", OrderType::Outbound, OrderStatus::Pending, &[(2, dec!(3.50))]),
            order("ORD-101", OrderType::Inbound, OrderStatus::Pending, &[]),
            order("ORD-102", OrderType::Outbound, OrderStatus::Completed, &[(1, dec!(9.99))]),
        ];
        let workers = vec![
            worker("John Smith", dec!(98.5), dec!(95.2), 1247, true),
            worker("Sarah Johnson", dec!(96.8), dec!(88.7), 982, false),
        ];

        let summary = summarize(&[], &orders, &workers).unwrap();
        assert_eq!(summary.pending_orders, 2);
        assert_eq!(summary.active_worker_count, 1);
        // Inactive workers still count toward averages and totals.
        assert_eq!(summary.average_performance, dec!(94.8));
        assert_eq!(summary.total_orders_processed, 2229);
    }

    #[test]
    fn overflowing_worker_totals_are_reported_not_panicked() {
        let workers = vec![
            worker("John Smith", dec!(98.5), dec!(95.2), i64::MAX, true),
            worker("Sarah Johnson", dec!(96.8), dec!(88.7), 1, true),
        ];
        let err = summarize(&[], &[], &workers).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn summary_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(summarize(&[], &[], &[]).unwrap()).unwrap();
        for key in [
            "totalItems",
            "lowStockCount",
            "totalInventoryValue",
            "activeWorkerCount",
            "averagePerformance",
            "totalOrdersProcessed",
            "pendingOrders",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_item() -> impl Strategy<Value = (i64, i64, i64)> {
            (0i64..10_000, 0i64..500, 0i64..100_000)
        }

        fn arb_worker() -> impl Strategy<Value = (i64, i64, i64, bool)> {
            (0i64..=1000, 0i64..=1000, 0i64..5000, any::<bool>())
        }

        proptest! {
            #[test]
            fn summarize_is_idempotent(
                raw_items in prop::collection::vec(arb_item(), 0..20),
                raw_workers in prop::collection::vec(arb_worker(), 0..10),
            ) {
                let items: Vec<_> = raw_items
                    .iter()
                    .enumerate()
                    .map(|(i, &(stock, min, cents))| item(&format!("P-{i}"), stock, min, Decimal::new(cents, 2)))
                    .collect();
                let workers: Vec<_> = raw_workers
                    .iter()
                    .enumerate()
                    .map(|(i, &(acc, prod, done, active))| {
                        worker(&format!("W {i}"), Decimal::new(acc, 1), Decimal::new(prod, 1), done, active)
                    })
                    .collect();

                let first = summarize(&items, &[], &workers).unwrap();
                let second = summarize(&items, &[], &workers).unwrap();
                prop_assert_eq!(&first, &second);

                prop_assert_eq!(first.total_items, items.len());
                prop_assert!(first.low_stock_count <= first.total_items);
                prop_assert!(first.average_performance >= Decimal::ZERO);
                prop_assert!(first.average_performance <= Decimal::ONE_HUNDRED);
                prop_assert_eq!(first.total_inventory_value, first.total_inventory_value.round_dp(2));
            }
        }
    }
}
