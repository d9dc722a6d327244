use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockyard_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, Event, ItemId, Money, OrderId, WorkerId,
    order_value,
};

use crate::status::{OrderStatus, OrderType};

/// Order line: item, quantity and the unit price captured when the line was
/// recorded. Later catalog price changes never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub line_no: u32,
    pub item_id: ItemId,
    pub quantity: i64,
    pub unit_price: Money,
}

/// Line data supplied when creating an order or adding a line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub item_id: ItemId,
    pub quantity: i64,
    pub unit_price: Money,
}

/// Aggregate root: Order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    order_number: String,
    #[serde(rename = "type")]
    order_type: OrderType,
    status: OrderStatus,
    #[serde(rename = "assignedWorkerId")]
    assigned_worker: Option<WorkerId>,
    lines: Vec<OrderLine>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    version: u64,
    #[serde(skip)]
    created: bool,
}

impl Order {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: OrderId) -> Self {
        Self {
            id,
            order_number: String::new(),
            order_type: OrderType::Inbound,
            status: OrderStatus::Pending,
            assigned_worker: None,
            lines: Vec::new(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            version: 0,
            created: false,
        }
    }

    pub fn id_typed(&self) -> OrderId {
        self.id
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn order_type(&self) -> OrderType {
        self.order_type
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn assigned_worker(&self) -> Option<WorkerId> {
        self.assigned_worker
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_modifiable(&self) -> bool {
        matches!(self.status, OrderStatus::Pending)
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> DomainResult<i64> {
        self.lines.iter().try_fold(0i64, |total, line| {
            total
                .checked_add(line.quantity)
                .ok_or_else(|| DomainError::invalid_argument("order quantity total overflowed"))
        })
    }

    /// Order value over the captured line prices, at full precision.
    pub fn value(&self) -> DomainResult<Decimal> {
        order_value(self.lines.iter().map(|l| (l.quantity, l.unit_price.amount())))
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: CreateOrder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrder {
    pub order_id: OrderId,
    pub order_number: String,
    pub order_type: OrderType,
    /// Initial status; must not be terminal.
    pub status: OrderStatus,
    pub assigned_worker: Option<WorkerId>,
    pub lines: Vec<NewOrderLine>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AddLine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLine {
    pub order_id: OrderId,
    pub line: NewOrderLine,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AssignWorker. `None` unassigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignWorker {
    pub order_id: OrderId,
    pub worker_id: Option<WorkerId>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ChangeStatus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStatus {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderCommand {
    CreateOrder(CreateOrder),
    AddLine(AddLine),
    AssignWorker(AssignWorker),
    ChangeStatus(ChangeStatus),
}

/// Event: OrderCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub order_number: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub assigned_worker: Option<WorkerId>,
    pub lines: Vec<OrderLine>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: LineAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAdded {
    pub order_id: OrderId,
    pub line: OrderLine,
    pub occurred_at: DateTime<Utc>,
}

/// Event: WorkerAssigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerAssigned {
    pub order_id: OrderId,
    pub worker_id: Option<WorkerId>,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StatusChanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChanged {
    pub order_id: OrderId,
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderEvent {
    OrderCreated(OrderCreated),
    LineAdded(LineAdded),
    WorkerAssigned(WorkerAssigned),
    StatusChanged(StatusChanged),
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderCreated(_) => "orders.order.created",
            OrderEvent::LineAdded(_) => "orders.order.line_added",
            OrderEvent::WorkerAssigned(_) => "orders.order.worker_assigned",
            OrderEvent::StatusChanged(_) => "orders.order.status_changed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderCreated(e) => e.occurred_at,
            OrderEvent::LineAdded(e) => e.occurred_at,
            OrderEvent::WorkerAssigned(e) => e.occurred_at,
            OrderEvent::StatusChanged(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Order {
    type Command = OrderCommand;
    type Event = OrderEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            OrderEvent::OrderCreated(e) => {
                self.id = e.order_id;
                self.order_number = e.order_number.clone();
                self.order_type = e.order_type;
                self.status = e.status;
                self.assigned_worker = e.assigned_worker;
                self.lines = e.lines.clone();
                self.created_at = e.occurred_at;
                self.created = true;
            }
            OrderEvent::LineAdded(e) => {
                self.lines.push(e.line.clone());
            }
            OrderEvent::WorkerAssigned(e) => {
                self.assigned_worker = e.worker_id;
            }
            OrderEvent::StatusChanged(e) => {
                self.status = e.to;
            }
        }

        self.updated_at = Event::occurred_at(event);
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            OrderCommand::CreateOrder(cmd) => self.handle_create(cmd),
            OrderCommand::AddLine(cmd) => self.handle_add_line(cmd),
            OrderCommand::AssignWorker(cmd) => self.handle_assign(cmd),
            OrderCommand::ChangeStatus(cmd) => self.handle_change_status(cmd),
        }
    }
}

fn validate_line(line: &NewOrderLine) -> DomainResult<()> {
    if line.quantity <= 0 {
        return Err(DomainError::validation(format!(
            "quantity must be positive (got {})",
            line.quantity
        )));
    }
    Ok(())
}

/// 1-based line number for the `offset`-th new line after `existing` lines.
fn line_number(existing: usize, offset: usize) -> DomainResult<u32> {
    existing
        .checked_add(offset)
        .and_then(|index| u32::try_from(index).ok())
        .and_then(|index| index.checked_add(1))
        .ok_or_else(|| DomainError::invariant("order has too many lines"))
}

impl Order {
    fn ensure_order_id(&self, order_id: OrderId) -> Result<(), DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        if self.id != order_id {
            return Err(DomainError::invariant("order_id mismatch"));
        }
        Ok(())
    }

    fn next_line(&self, offset: usize, line: &NewOrderLine) -> DomainResult<OrderLine> {
        Ok(OrderLine {
            line_no: line_number(self.lines.len(), offset)?,
            item_id: line.item_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
        })
    }

    fn handle_create(&self, cmd: &CreateOrder) -> Result<Vec<OrderEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("order already exists"));
        }
        if cmd.order_number.trim().is_empty() {
            return Err(DomainError::validation("order_number cannot be empty"));
        }
        if cmd.status.is_terminal() {
            return Err(DomainError::invariant(format!(
                "cannot create an order in terminal status '{}'",
                cmd.status
            )));
        }
        let mut lines = Vec::with_capacity(cmd.lines.len());
        for (offset, line) in cmd.lines.iter().enumerate() {
            validate_line(line)?;
            lines.push(self.next_line(offset, line)?);
        }

        Ok(vec![OrderEvent::OrderCreated(OrderCreated {
            order_id: cmd.order_id,
            order_number: cmd.order_number.trim().to_string(),
            order_type: cmd.order_type,
            status: cmd.status,
            assigned_worker: cmd.assigned_worker,
            lines,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_add_line(&self, cmd: &AddLine) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_order_id(cmd.order_id)?;

        if !self.is_modifiable() {
            return Err(DomainError::invariant(
                "lines can only be added while the order is pending",
            ));
        }
        validate_line(&cmd.line)?;

        Ok(vec![OrderEvent::LineAdded(LineAdded {
            order_id: cmd.order_id,
            line: self.next_line(0, &cmd.line)?,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_assign(&self, cmd: &AssignWorker) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_order_id(cmd.order_id)?;

        if self.status.is_terminal() {
            return Err(DomainError::invariant(format!(
                "cannot reassign a {} order",
                self.status
            )));
        }

        Ok(vec![OrderEvent::WorkerAssigned(WorkerAssigned {
            order_id: cmd.order_id,
            worker_id: cmd.worker_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_change_status(&self, cmd: &ChangeStatus) -> Result<Vec<OrderEvent>, DomainError> {
        self.ensure_order_id(cmd.order_id)?;

        if !self.status.can_transition_to(cmd.status) {
            return Err(DomainError::invariant(format!(
                "illegal status transition {} -> {}",
                self.status, cmd.status
            )));
        }

        Ok(vec![OrderEvent::StatusChanged(StatusChanged {
            order_id: cmd.order_id,
            from: self.status,
            to: cmd.status,
            occurred_at: cmd.occurred_at,
        })])
    }
}
