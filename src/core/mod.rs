// Core business logic module

pub mod config;
pub mod health;

// Re-export commonly used items
pub use config::{CheckConfig, Config, ToleranceConfig};
