// task-analytics/src/service/mod.rs
pub mod analytics_service;
pub mod productivity_analyzer;
pub mod statistics_aggregator;
