//! Stop command implementation
//!
//! Stops the full fleet via `make stop`, or one service container directly
//! through docker-compose.

use anyhow::{Context, Result};
use colored::Colorize;
use saas_common::ProcessSpec;

use crate::cli::StopArgs;
use crate::commands::service_container;

/// Compose file that defines the platform's service containers.
const COMPOSE_FILE: &str = "docker/docker-compose.yml";

pub fn execute(args: &StopArgs) -> Result<()> {
    match &args.service {
        None => {
            println!("Stopping all services...");

            ProcessSpec::make("stop")
                .run()
                .context("Failed to stop services")?;
        }
        Some(service) => {
            println!("Stopping {service}...");

            ProcessSpec::new("docker-compose")
                .args(["-f", COMPOSE_FILE, "stop"])
                .arg(service_container(service))
                .run()
                .with_context(|| format!("Failed to stop {service}"))?;
        }
    }

    println!("{}", "✓ Services stopped!".green());

    Ok(())
}
