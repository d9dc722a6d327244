use core::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockyard_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, Event, ItemId, Money, inventory_value,
    serde_ext::double_option,
};

use crate::stock::{self, StockStatus};

/// Stock rotation method recorded on an item. Metadata only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum StockMethod {
    #[default]
    #[serde(rename = "FIFO")]
    Fifo,
    #[serde(rename = "FEFO")]
    Fefo,
    #[serde(rename = "LIFO")]
    Lifo,
}

impl StockMethod {
    pub const ALL: [StockMethod; 3] = [StockMethod::Fifo, StockMethod::Fefo, StockMethod::Lifo];

    pub fn as_str(&self) -> &'static str {
        match self {
            StockMethod::Fifo => "FIFO",
            StockMethod::Fefo => "FEFO",
            StockMethod::Lifo => "LIFO",
        }
    }
}

impl FromStr for StockMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StockMethod::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::validation(format!("unknown stock method '{s}'")))
    }
}

impl TryFrom<String> for StockMethod {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Aggregate root: InventoryItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: ItemId,
    item_code: String,
    name: String,
    description: Option<String>,
    category: String,
    location: String,
    current_stock: i64,
    min_stock_level: i64,
    unit_price: Money,
    method: StockMethod,
    #[serde(rename = "isActive")]
    active: bool,
    created_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
    #[serde(skip)]
    version: u64,
    #[serde(skip)]
    created: bool,
}

impl InventoryItem {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: ItemId) -> Self {
        Self {
            id,
            item_code: String::new(),
            name: String::new(),
            description: None,
            category: String::new(),
            location: String::new(),
            current_stock: 0,
            min_stock_level: 0,
            unit_price: Money::ZERO,
            method: StockMethod::default(),
            active: false,
            created_at: DateTime::<Utc>::default(),
            last_updated: DateTime::<Utc>::default(),
            version: 0,
            created: false,
        }
    }

    /// Rebuild an item from its event history.
    pub fn from_events<'a>(id: ItemId, events: impl IntoIterator<Item = &'a InventoryEvent>) -> Self {
        let mut item = Self::empty(id);
        for event in events {
            item.apply(event);
        }
        item
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn item_code(&self) -> &str {
        &self.item_code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn current_stock(&self) -> i64 {
        self.current_stock
    }

    pub fn min_stock_level(&self) -> i64 {
        self.min_stock_level
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn method(&self) -> StockMethod {
        self.method
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    /// False once the item has been retired (soft-deleted).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Badge shown next to the item. Fails when the minimum level is zero.
    pub fn stock_status(&self) -> DomainResult<StockStatus> {
        stock::classify(self.current_stock, self.min_stock_level)
    }

    pub fn is_low_stock(&self) -> bool {
        stock::is_low_stock(self.current_stock, self.min_stock_level)
    }

    /// `current_stock × unit_price` at full precision.
    pub fn stock_value(&self) -> DomainResult<Decimal> {
        inventory_value([self.valuation_input()])
    }

    /// `(current_stock, unit_price)` pair consumed by the valuation engine.
    pub fn valuation_input(&self) -> (i64, Decimal) {
        (self.current_stock, self.unit_price.amount())
    }
}

impl AggregateRoot for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: CreateItem (stock intake of a new catalog entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub item_id: ItemId,
    pub item_code: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub location: String,
    pub current_stock: i64,
    pub min_stock_level: i64,
    pub unit_price: Money,
    pub method: StockMethod,
    pub occurred_at: DateTime<Utc>,
}

/// Partial set of item field changes. `None` leaves a field untouched;
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemChanges {
    pub item_code: Option<String>,
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "double_option"
    )]
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub current_stock: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub unit_price: Option<Money>,
    pub method: Option<StockMethod>,
}

impl ItemChanges {
    pub fn is_empty(&self) -> bool {
        self == &ItemChanges::default()
    }
}

/// Command: UpdateItem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub item_id: ItemId,
    pub changes: ItemChanges,
    pub occurred_at: DateTime<Utc>,
}

/// Command: AdjustStock (receiving or fulfilment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustStock {
    pub item_id: ItemId,
    pub delta: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RetireItem (soft delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetireItem {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    CreateItem(CreateItem),
    UpdateItem(UpdateItem),
    AdjustStock(AdjustStock),
    RetireItem(RetireItem),
}

/// Event: ItemCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCreated {
    pub item_id: ItemId,
    pub item_code: String,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub location: String,
    pub current_stock: i64,
    pub min_stock_level: i64,
    pub unit_price: Money,
    pub method: StockMethod,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUpdated {
    pub item_id: ItemId,
    pub changes: ItemChanges,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockAdjusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjusted {
    pub item_id: ItemId,
    pub delta: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ItemRetired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRetired {
    pub item_id: ItemId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ItemCreated(ItemCreated),
    ItemUpdated(ItemUpdated),
    StockAdjusted(StockAdjusted),
    ItemRetired(ItemRetired),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ItemCreated(_) => "inventory.item.created",
            InventoryEvent::ItemUpdated(_) => "inventory.item.updated",
            InventoryEvent::StockAdjusted(_) => "inventory.item.stock_adjusted",
            InventoryEvent::ItemRetired(_) => "inventory.item.retired",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ItemCreated(e) => e.occurred_at,
            InventoryEvent::ItemUpdated(e) => e.occurred_at,
            InventoryEvent::StockAdjusted(e) => e.occurred_at,
            InventoryEvent::ItemRetired(e) => e.occurred_at,
        }
    }
}

impl Aggregate for InventoryItem {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ItemCreated(e) => {
                self.id = e.item_id;
                self.item_code = e.item_code.clone();
                self.name = e.name.clone();
                self.description = e.description.clone();
                self.category = e.category.clone();
                self.location = e.location.clone();
                self.current_stock = e.current_stock;
                self.min_stock_level = e.min_stock_level;
                self.unit_price = e.unit_price;
                self.method = e.method;
                self.active = true;
                self.created = true;
                self.created_at = e.occurred_at;
            }
            InventoryEvent::ItemUpdated(e) => {
                let c = &e.changes;
                if let Some(v) = &c.item_code {
                    self.item_code = v.clone();
                }
                if let Some(v) = &c.name {
                    self.name = v.clone();
                }
                if let Some(v) = &c.description {
                    self.description = v.clone();
                }
                if let Some(v) = &c.category {
                    self.category = v.clone();
                }
                if let Some(v) = &c.location {
                    self.location = v.clone();
                }
                if let Some(v) = c.current_stock {
                    self.current_stock = v;
                }
                if let Some(v) = c.min_stock_level {
                    self.min_stock_level = v;
                }
                if let Some(v) = c.unit_price {
                    self.unit_price = v;
                }
                if let Some(v) = c.method {
                    self.method = v;
                }
            }
            InventoryEvent::StockAdjusted(e) => {
                self.current_stock += e.delta;
            }
            InventoryEvent::ItemRetired(_) => {
                self.active = false;
            }
        }

        self.last_updated = Event::occurred_at(event);
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::CreateItem(cmd) => self.handle_create(cmd),
            InventoryCommand::UpdateItem(cmd) => self.handle_update(cmd),
            InventoryCommand::AdjustStock(cmd) => self.handle_adjust(cmd),
            InventoryCommand::RetireItem(cmd) => self.handle_retire(cmd),
        }
    }
}

fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: i64) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::validation(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(())
}

impl InventoryItem {
    fn ensure_live(&self, item_id: ItemId) -> Result<(), DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        if self.id != item_id {
            return Err(DomainError::invariant("item_id mismatch"));
        }
        if !self.active {
            return Err(DomainError::invariant("item has been retired"));
        }
        Ok(())
    }

    fn handle_create(&self, cmd: &CreateItem) -> Result<Vec<InventoryEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("item already exists"));
        }
        require_text("item_code", &cmd.item_code)?;
        require_text("name", &cmd.name)?;
        require_text("category", &cmd.category)?;
        require_text("location", &cmd.location)?;
        require_non_negative("current_stock", cmd.current_stock)?;
        require_non_negative("min_stock_level", cmd.min_stock_level)?;

        Ok(vec![InventoryEvent::ItemCreated(ItemCreated {
            item_id: cmd.item_id,
            item_code: cmd.item_code.trim().to_string(),
            name: cmd.name.clone(),
            description: cmd.description.clone(),
            category: cmd.category.clone(),
            location: cmd.location.clone(),
            current_stock: cmd.current_stock,
            min_stock_level: cmd.min_stock_level,
            unit_price: cmd.unit_price,
            method: cmd.method,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_update(&self, cmd: &UpdateItem) -> Result<Vec<InventoryEvent>, DomainError> {
        self.ensure_live(cmd.item_id)?;

        let c = &cmd.changes;
        if c.is_empty() {
            return Err(DomainError::validation("update contains no changes"));
        }
        if let Some(v) = &c.item_code {
            require_text("item_code", v)?;
        }
        if let Some(v) = &c.name {
            require_text("name", v)?;
        }
        if let Some(v) = &c.category {
            require_text("category", v)?;
        }
        if let Some(v) = &c.location {
            require_text("location", v)?;
        }
        if let Some(v) = c.current_stock {
            require_non_negative("current_stock", v)?;
        }
        if let Some(v) = c.min_stock_level {
            require_non_negative("min_stock_level", v)?;
        }

        let mut changes = c.clone();
        changes.item_code = changes.item_code.map(|code| code.trim().to_string());

        Ok(vec![InventoryEvent::ItemUpdated(ItemUpdated {
            item_id: cmd.item_id,
            changes,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_adjust(&self, cmd: &AdjustStock) -> Result<Vec<InventoryEvent>, DomainError> {
        self.ensure_live(cmd.item_id)?;

        if cmd.delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }

        let new_stock = self
            .current_stock
            .checked_add(cmd.delta)
            .ok_or_else(|| DomainError::invalid_argument("stock adjustment overflowed"))?;
        if new_stock < 0 {
            return Err(DomainError::invariant("stock cannot go negative"));
        }

        Ok(vec![InventoryEvent::StockAdjusted(StockAdjusted {
            item_id: cmd.item_id,
            delta: cmd.delta,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_retire(&self, cmd: &RetireItem) -> Result<Vec<InventoryEvent>, DomainError> {
        self.ensure_live(cmd.item_id)?;

        Ok(vec![InventoryEvent::ItemRetired(ItemRetired {
            item_id: cmd.item_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
