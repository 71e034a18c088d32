pub mod accounts;
pub mod config;
pub mod error;
pub mod planner;
pub mod telemetry;
