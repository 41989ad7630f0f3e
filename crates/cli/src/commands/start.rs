//! Start command implementation
//!
//! Starts the full service fleet, or restarts a single service when one is
//! named. The `--dev` flag swaps in the hot-reload target; it applies to the
//! whole-fleet form only.

use anyhow::{Context, Result};
use colored::Colorize;
use saas_common::ProcessSpec;

use crate::cli::StartArgs;
use crate::commands::service_container;

pub fn execute(args: &StartArgs) -> Result<()> {
    match &args.service {
        None => {
            println!("Starting all services...");

            let target = if args.dev {
                println!("  (development mode with hot-reload)");
                "start-dev"
            } else {
                "start"
            };

            ProcessSpec::make(target)
                .run()
                .context("Failed to start services")?;
        }
        Some(service) => {
            println!("Starting {service}...");

            ProcessSpec::make("restart-service")
                .arg(format!("SERVICE={}", service_container(service)))
                .run()
                .with_context(|| format!("Failed to start {service}"))?;
        }
    }

    println!("{}", "✓ Services started!".green());
    println!("\nCheck status with: saas status");

    Ok(())
}
