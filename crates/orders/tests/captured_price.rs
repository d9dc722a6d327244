//! An order's value is fixed by the prices captured on its lines.

use chrono::Utc;
use rust_decimal_macros::dec;

use stockyard_core::{Aggregate, ItemId, Money, OrderId};
use stockyard_inventory::{CreateItem, InventoryCommand, InventoryItem, ItemChanges, StockMethod, UpdateItem};
use stockyard_orders::{CreateOrder, NewOrderLine, Order, OrderCommand, OrderStatus, OrderType};

fn catalog_item(code: &str, price: Money) -> InventoryItem {
    let id = ItemId::new();
    let mut item = InventoryItem::empty(id);
    item.execute(&InventoryCommand::CreateItem(CreateItem {
        item_id: id,
        item_code: code.to_string(),
        name: code.to_string(),
        description: None,
        category: "Hardware".to_string(),
        location: "A-01".to_string(),
        current_stock: 500,
        min_stock_level: 100,
        unit_price: price,
        method: StockMethod::Fifo,
        occurred_at: Utc::now(),
    }))
    .unwrap();
    item
}

fn reprice(item: &mut InventoryItem, price: Money) {
    let item_id = item.id_typed();
    item.execute(&InventoryCommand::UpdateItem(UpdateItem {
        item_id,
        changes: ItemChanges {
            unit_price: Some(price),
            ..ItemChanges::default()
        },
        occurred_at: Utc::now(),
    }))
    .unwrap();
}

#[test]
fn catalog_price_changes_do_not_move_order_value() {
    let mut bearings = catalog_item("BRG-001", Money::new(dec!(45.99)).unwrap());
    let mut bolts = catalog_item("BLT-M12", Money::new(dec!(0.85)).unwrap());

    let order_id = OrderId::new();
    let mut order = Order::empty(order_id);
    order
        .execute(&OrderCommand::CreateOrder(CreateOrder {
            order_id,
            order_number: "ORD-001".to_string(),
            order_type: OrderType::Outbound,
            status: OrderStatus::Pending,
            assigned_worker: None,
            lines: vec![
                NewOrderLine {
                    item_id: bearings.id_typed(),
                    quantity: 20,
                    unit_price: bearings.unit_price(),
                },
                NewOrderLine {
                    item_id: bolts.id_typed(),
                    quantity: 100,
                    unit_price: bolts.unit_price(),
                },
            ],
            occurred_at: Utc::now(),
        }))
        .unwrap();

    assert_eq!(order.value().unwrap(), dec!(1004.80));

    reprice(&mut bearings, Money::new(dec!(99.00)).unwrap());
    reprice(&mut bolts, Money::new(dec!(1.25)).unwrap());

    assert_eq!(bearings.unit_price().amount(), dec!(99.00));
    assert_eq!(order.value().unwrap(), dec!(1004.80));
}
