// memvitals library - public API

// Re-export error types
pub mod error;
pub use error::{HealthError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::health::{ComponentReport, HealthCheck, HealthRegistry, MemoryHealthCheck};

// Initialize logging
pub fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
