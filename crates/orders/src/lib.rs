//! Warehouse orders domain module (event-sourced).
//!
//! Inbound and outbound orders, their lines with captured unit prices, the
//! status lifecycle, list filters and request bodies. Pure domain logic (no
//! IO, no HTTP, no storage).

pub mod input;
pub mod order;
pub mod query;
pub mod status;

pub use input::{AssignWorkerInput, CreateOrderInput, OrderItemInput, UpdateOrderStatusInput};
pub use order::{
    AddLine, AssignWorker, ChangeStatus, CreateOrder, LineAdded, NewOrderLine, Order, OrderCommand,
    OrderCreated, OrderEvent, OrderLine, StatusChanged, WorkerAssigned,
};
pub use query::OrderQuery;
pub use status::{OrderStatus, OrderType};
