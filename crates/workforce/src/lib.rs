//! Workforce domain module.
//!
//! Worker records, performance scoring, list filters and request bodies.

pub mod input;
pub mod performance;
pub mod query;
pub mod worker;

pub use input::{CreateWorkerInput, UpdateWorkerInput};
pub use performance::{PerformanceScore, PerformanceTier, score, score_percentages};
pub use query::WorkerQuery;
pub use worker::{RegisterWorker, Worker, WorkerChanges};
