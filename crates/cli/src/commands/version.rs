//! Version command implementation

use anyhow::Result;

/// Version string baked in at build time.
const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn execute() -> Result<()> {
    println!("SaaS Platform CLI v{VERSION}");
    Ok(())
}
