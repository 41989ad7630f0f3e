//! Setup command implementation
//!
//! Bootstraps a local development environment through the platform's
//! `make setup` target: dependencies, service repositories, workspace
//! configuration.

use anyhow::{Context, Result};
use colored::Colorize;
use saas_common::ProcessSpec;
use tracing::debug;

pub fn execute() -> Result<()> {
    println!("Setting up development environment...");
    debug!("running make setup");

    ProcessSpec::make("setup").run().context("Setup failed")?;

    println!("{}", "✓ Setup complete!".green());
    println!("\nNext steps:");
    println!("  saas start    # Start all services");
    println!("  saas status   # Check service status");

    Ok(())
}
