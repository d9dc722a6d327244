use chrono::{DateTime, Utc};
use serde::Serialize;

use stockyard_core::{DomainError, DomainResult, Entity, Percentage, WorkerId};

use crate::performance::{PerformanceScore, score_percentages};

/// Validated data for registering a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterWorker {
    pub name: String,
    pub email: String,
    pub position: String,
    pub shift: Option<String>,
    pub orders_processed: i64,
    pub accuracy: Percentage,
    pub productivity: Percentage,
    pub is_active: bool,
}

/// Partial set of worker field changes. `None` leaves a field untouched;
/// `shift: Some(None)` clears the shift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub shift: Option<Option<String>>,
    pub orders_processed: Option<i64>,
    pub accuracy: Option<Percentage>,
    pub productivity: Option<Percentage>,
    pub is_active: Option<bool>,
}

impl WorkerChanges {
    pub fn is_empty(&self) -> bool {
        self == &WorkerChanges::default()
    }
}

/// Warehouse worker. Performance counters are maintained externally; this
/// type only validates and stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    id: WorkerId,
    name: String,
    email: String,
    position: String,
    shift: Option<String>,
    orders_processed: i64,
    accuracy: Percentage,
    productivity: Percentage,
    is_active: bool,
    created_at: DateTime<Utc>,
}

fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_email(value: &str) -> DomainResult<()> {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DomainError::validation(format!("invalid email '{value}'"))),
    }
}

fn require_count(field: &str, value: i64) -> DomainResult<()> {
    if value < 0 {
        return Err(DomainError::validation(format!(
            "{field} cannot be negative (got {value})"
        )));
    }
    Ok(())
}

impl Worker {
    pub fn register(id: WorkerId, data: RegisterWorker, created_at: DateTime<Utc>) -> DomainResult<Self> {
        require_text("name", &data.name)?;
        require_email(&data.email)?;
        require_text("position", &data.position)?;
        require_count("orders_processed", data.orders_processed)?;

        Ok(Self {
            id,
            name: data.name,
            email: data.email.trim().to_lowercase(),
            position: data.position,
            shift: data.shift,
            orders_processed: data.orders_processed,
            accuracy: data.accuracy,
            productivity: data.productivity,
            is_active: data.is_active,
            created_at,
        })
    }

    pub fn id_typed(&self) -> WorkerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn shift(&self) -> Option<&str> {
        self.shift.as_deref()
    }

    pub fn orders_processed(&self) -> i64 {
        self.orders_processed
    }

    pub fn accuracy(&self) -> Percentage {
        self.accuracy
    }

    pub fn productivity(&self) -> Percentage {
        self.productivity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn performance(&self) -> PerformanceScore {
        score_percentages(self.accuracy, self.productivity)
    }

    /// Apply a partial update. Either every change is applied or none is.
    pub fn apply_update(&mut self, changes: WorkerChanges) -> DomainResult<()> {
        if changes.is_empty() {
            return Err(DomainError::validation("update contains no changes"));
        }
        if let Some(v) = &changes.name {
            require_text("name", v)?;
        }
        if let Some(v) = &changes.email {
            require_email(v)?;
        }
        if let Some(v) = &changes.position {
            require_text("position", v)?;
        }
        if let Some(v) = changes.orders_processed {
            require_count("orders_processed", v)?;
        }

        if let Some(v) = changes.name {
            self.name = v;
        }
        if let Some(v) = changes.email {
            self.email = v.trim().to_lowercase();
        }
        if let Some(v) = changes.position {
            self.position = v;
        }
        if let Some(v) = changes.shift {
            self.shift = v;
        }
        if let Some(v) = changes.orders_processed {
            self.orders_processed = v;
        }
        if let Some(v) = changes.accuracy {
            self.accuracy = v;
        }
        if let Some(v) = changes.productivity {
            self.productivity = v;
        }
        if let Some(v) = changes.is_active {
            self.is_active = v;
        }
        Ok(())
    }

    /// Soft delete.
    pub fn deactivate(&mut self) -> DomainResult<()> {
        if !self.is_active {
            return Err(DomainError::invariant("worker is already inactive"));
        }
        self.is_active = false;
        Ok(())
    }
}

impl Entity for Worker {
    type Id = WorkerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}
