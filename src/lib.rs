pub mod chart;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod network;
pub mod report;
pub mod runner;
pub mod stats;
pub mod workload;
