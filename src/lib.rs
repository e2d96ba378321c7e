pub mod cli;
pub mod client;
pub mod core;
pub mod dashboard;
pub mod models;
pub mod strategy;
