use serde::Deserialize;

use stockyard_core::Entity;

use crate::worker::Worker;

/// Filters accepted by the worker list endpoint (AND-combined).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorkerQuery {
    pub active: Option<bool>,
    pub shift: Option<String>,
    /// Case-insensitive substring over name, email and position.
    pub search: Option<String>,
}

impl WorkerQuery {
    pub fn matches(&self, worker: &Worker) -> bool {
        if self.active.is_some_and(|active| worker.is_active() != active) {
            return false;
        }
        if let Some(shift) = &self.shift {
            if worker.shift() != Some(shift.as_str()) {
                return false;
            }
        }
        if let Some(needle) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            return [worker.name(), worker.email(), worker.position()]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
        }
        true
    }

    pub fn apply<'a, I>(&self, workers: I) -> Vec<&'a Worker>
    where
        I: IntoIterator<Item = &'a Worker>,
    {
        workers.into_iter().filter(|w| self.matches(w)).collect()
    }
}
