//! Request bodies for worker endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use stockyard_core::serde_ext::double_option;
use stockyard_core::{DomainResult, Percentage, WorkerId};

use crate::worker::{RegisterWorker, Worker, WorkerChanges};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateWorkerInput {
    pub name: String,
    pub email: String,
    pub position: String,
    #[serde(default)]
    pub shift: Option<String>,
    #[serde(default)]
    pub orders_processed: Option<i64>,
    #[serde(default)]
    pub accuracy: Option<Decimal>,
    #[serde(default)]
    pub productivity: Option<Decimal>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CreateWorkerInput {
    /// New workers start at 0 orders, 100% accuracy and productivity, active.
    pub fn into_worker(self, id: WorkerId, created_at: DateTime<Utc>) -> DomainResult<Worker> {
        let accuracy = self.accuracy.map(Percentage::new).transpose()?;
        let productivity = self.productivity.map(Percentage::new).transpose()?;

        Worker::register(
            id,
            RegisterWorker {
                name: self.name,
                email: self.email,
                position: self.position,
                shift: self.shift,
                orders_processed: self.orders_processed.unwrap_or(0),
                accuracy: accuracy.unwrap_or_else(Percentage::full),
                productivity: productivity.unwrap_or_else(Percentage::full),
                is_active: self.is_active.unwrap_or(true),
            },
            created_at,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateWorkerInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    /// `null` takes the worker off shift.
    #[serde(default, deserialize_with = "double_option")]
    pub shift: Option<Option<String>>,
    pub orders_processed: Option<i64>,
    pub accuracy: Option<Decimal>,
    pub productivity: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl UpdateWorkerInput {
    pub fn into_changes(self) -> DomainResult<WorkerChanges> {
        Ok(WorkerChanges {
            name: self.name,
            email: self.email,
            position: self.position,
            shift: self.shift,
            orders_processed: self.orders_processed,
            accuracy: self.accuracy.map(Percentage::new).transpose()?,
            productivity: self.productivity.map(Percentage::new).transpose()?,
            is_active: self.is_active,
        })
    }
}
