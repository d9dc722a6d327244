//! Request bodies for item create/update.
//!
//! Closed structs: unknown or mistyped fields fail deserialization instead of
//! leaking into persistence.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use stockyard_core::serde_ext::double_option;
use stockyard_core::{DomainResult, ItemId, Money};

use crate::item::{CreateItem, ItemChanges, StockMethod, UpdateItem};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateItemInput {
    pub item_code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: String,
    pub current_stock: i64,
    pub min_stock_level: i64,
    pub unit_price: Decimal,
    pub location: String,
    #[serde(default)]
    pub method: Option<StockMethod>,
}

impl CreateItemInput {
    /// Validate scalar ranges and build the create command (method defaults to FIFO).
    pub fn into_command(self, item_id: ItemId, occurred_at: DateTime<Utc>) -> DomainResult<CreateItem> {
        Ok(CreateItem {
            item_id,
            item_code: self.item_code,
            name: self.name,
            description: self.description,
            category: self.category,
            location: self.location,
            current_stock: self.current_stock,
            min_stock_level: self.min_stock_level,
            unit_price: Money::new(self.unit_price)?,
            method: self.method.unwrap_or_default(),
            occurred_at,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateItemInput {
    pub item_code: Option<String>,
    pub name: Option<String>,
    /// `null` clears the description.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub category: Option<String>,
    pub current_stock: Option<i64>,
    pub min_stock_level: Option<i64>,
    pub unit_price: Option<Decimal>,
    pub location: Option<String>,
    pub method: Option<StockMethod>,
}

impl UpdateItemInput {
    pub fn into_command(self, item_id: ItemId, occurred_at: DateTime<Utc>) -> DomainResult<UpdateItem> {
        let unit_price = self.unit_price.map(Money::new).transpose()?;
        Ok(UpdateItem {
            item_id,
            changes: ItemChanges {
                item_code: self.item_code,
                name: self.name,
                description: self.description,
                category: self.category,
                location: self.location,
                current_stock: self.current_stock,
                min_stock_level: self.min_stock_level,
                unit_price,
                method: self.method,
            },
            occurred_at,
        })
    }
}
