// Platform-specific code module

pub mod memory;

pub use memory::SystemMemorySource;
