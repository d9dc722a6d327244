//! Record builders shared by the reporting tests.

use chrono::Utc;
use rust_decimal::Decimal;

use stockyard_core::{Aggregate, ItemId, Money, OrderId, Percentage, WorkerId};
use stockyard_inventory::{CreateItem, InventoryCommand, InventoryItem, StockMethod};
use stockyard_orders::{ChangeStatus, CreateOrder, NewOrderLine, Order, OrderCommand, OrderStatus, OrderType};
use stockyard_workforce::{RegisterWorker, Worker};

pub fn item(code: &str, current_stock: i64, min_stock_level: i64, unit_price: Decimal) -> InventoryItem {
    let item_id = ItemId::new();
    let mut item = InventoryItem::empty(item_id);
    item.execute(&InventoryCommand::CreateItem(CreateItem {
        item_id,
        item_code: code.to_string(),
        name: format!("Item {code}"),
        description: None,
        category: "General".to_string(),
        location: "A-01-01".to_string(),
        current_stock,
        min_stock_level,
        unit_price: Money::new(unit_price).unwrap(),
        method: StockMethod::Fifo,
        occurred_at: Utc::now(),
    }))
    .unwrap();
    item
}

/// Builds an order and walks it to `status` through legal transitions.
pub fn order(number: &str, order_type: OrderType, status: OrderStatus, lines: &[(i64, Decimal)]) -> Order {
    let order_id = OrderId::new();
    let mut order = Order::empty(order_id);
    order
        .execute(&OrderCommand::CreateOrder(CreateOrder {
            order_id,
            order_number: number.to_string(),
            order_type,
            status: OrderStatus::Pending,
            assigned_worker: None,
            lines: lines
                .iter()
                .map(|&(quantity, price)| NewOrderLine {
                    item_id: ItemId::new(),
                    quantity,
                    unit_price: Money::new(price).unwrap(),
                })
                .collect(),
            occurred_at: Utc::now(),
        }))
        .unwrap();

    let path: &[OrderStatus] = match status {
        OrderStatus::Pending => &[],
        OrderStatus::Processing => &[OrderStatus::Processing],
        OrderStatus::Completed => &[OrderStatus::Processing, OrderStatus::Completed],
        OrderStatus::Cancelled => &[OrderStatus::Cancelled],
    };
    for &next in path {
        order
            .execute(&OrderCommand::ChangeStatus(ChangeStatus {
                order_id,
                status: next,
                occurred_at: Utc::now(),
            }))
            .unwrap();
    }
    order
}

pub fn worker(name: &str, accuracy: Decimal, productivity: Decimal, orders_processed: i64, is_active: bool) -> Worker {
    Worker::register(
        WorkerId::new(),
        RegisterWorker {
            name: name.to_string(),
            email: format!("{}@warehouse.example", name.to_lowercase().replace(' ', ".")),
            position: "Picker".to_string(),
            shift: None,
            orders_processed,
            accuracy: Percentage::new(accuracy).unwrap(),
            productivity: Percentage::new(productivity).unwrap(),
            is_active,
        },
        Utc::now(),
    )
    .unwrap()
}
