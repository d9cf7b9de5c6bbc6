use anyhow::Result;

use crate::core::health::MEMORY_CHECK_VERSION;

pub fn execute() -> Result<()> {
    println!("memvitals version {}", env!("CARGO_PKG_VERSION"));
    println!("memory check report version {}", MEMORY_CHECK_VERSION);
    Ok(())
}
