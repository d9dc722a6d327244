use serde::Deserialize;

use stockyard_core::WorkerId;

use crate::order::Order;
use crate::status::{OrderStatus, OrderType};

/// Filters accepted by the order list endpoint (AND-combined).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,
    pub worker_id: Option<WorkerId>,
}

impl OrderQuery {
    pub fn matches(&self, order: &Order) -> bool {
        self.status.is_none_or(|s| order.status() == s)
            && self.order_type.is_none_or(|t| order.order_type() == t)
            && self
                .worker_id
                .is_none_or(|w| order.assigned_worker() == Some(w))
    }

    pub fn apply<'a, I>(&self, orders: I) -> Vec<&'a Order>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        orders.into_iter().filter(|order| self.matches(order)).collect()
    }
}
