//! Request bodies for order endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use stockyard_core::{DomainResult, ItemId, Money, OrderId, WorkerId};

use crate::order::{AssignWorker, ChangeStatus, CreateOrder, NewOrderLine};
use crate::status::{OrderStatus, OrderType};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderItemInput {
    pub item_id: ItemId,
    pub quantity: i64,
    /// Price captured on the line; the catalog price is not consulted.
    pub unit_price: Decimal,
}

impl OrderItemInput {
    pub fn into_line(self) -> DomainResult<NewOrderLine> {
        Ok(NewOrderLine {
            item_id: self.item_id,
            quantity: self.quantity,
            unit_price: Money::new(self.unit_price)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderInput {
    pub order_number: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub assigned_worker_id: Option<WorkerId>,
    #[serde(default)]
    pub order_items: Vec<OrderItemInput>,
}

impl CreateOrderInput {
    /// Build the create command; status defaults to pending.
    pub fn into_command(self, order_id: OrderId, occurred_at: DateTime<Utc>) -> DomainResult<CreateOrder> {
        let lines = self
            .order_items
            .into_iter()
            .map(OrderItemInput::into_line)
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(CreateOrder {
            order_id,
            order_number: self.order_number,
            order_type: self.order_type,
            status: self.status.unwrap_or_default(),
            assigned_worker: self.assigned_worker_id,
            lines,
            occurred_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateOrderStatusInput {
    pub status: OrderStatus,
}

impl UpdateOrderStatusInput {
    pub fn into_command(self, order_id: OrderId, occurred_at: DateTime<Utc>) -> ChangeStatus {
        ChangeStatus {
            order_id,
            status: self.status,
            occurred_at,
        }
    }
}

/// `{"assignedWorkerId": null}` unassigns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssignWorkerInput {
    pub assigned_worker_id: Option<WorkerId>,
}

impl AssignWorkerInput {
    pub fn into_command(self, order_id: OrderId, occurred_at: DateTime<Utc>) -> AssignWorker {
        AssignWorker {
            order_id,
            worker_id: self.assigned_worker_id,
            occurred_at,
        }
    }
}
