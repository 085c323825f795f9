// task-analytics/src/domain/mod.rs
pub mod task_model;
pub mod task_priority;
pub mod task_status;
