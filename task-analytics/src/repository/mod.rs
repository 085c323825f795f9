// task-analytics/src/repository/mod.rs
pub mod task_repository;
