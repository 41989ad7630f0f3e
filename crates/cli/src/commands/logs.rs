//! Logs command implementation
//!
//! Streams logs for the whole fleet or a single service. Both make targets
//! stream until interrupted.

use anyhow::{Context, Result};
use saas_common::ProcessSpec;
use tracing::debug;

use crate::cli::LogsArgs;
use crate::commands::service_container;

pub fn execute(args: &LogsArgs) -> Result<()> {
    // TODO: thread --follow into the invocation once the logs targets grow a
    // non-following mode; today both targets stream regardless.
    if args.follow {
        debug!("--follow accepted; the logs targets already stream");
    }

    let spec = match &args.service {
        None => {
            println!("Viewing all service logs...");
            ProcessSpec::make("logs")
        }
        Some(service) => {
            println!("Viewing {service} logs...");
            ProcessSpec::make("logs-service")
                .arg(format!("SERVICE={}", service_container(service)))
        }
    };

    spec.run().context("Failed to view logs")?;

    Ok(())
}
