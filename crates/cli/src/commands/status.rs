//! Status command implementation

use anyhow::{Context, Result};
use saas_common::ProcessSpec;

pub fn execute() -> Result<()> {
    println!("Checking service status...");
    println!();

    ProcessSpec::make("status")
        .run()
        .context("Status check failed")?;

    println!();
    println!("View logs with: saas logs [service]");

    Ok(())
}
