//! Deploy command implementation
//!
//! Fires the deploy target for the requested environment. Environment
//! validation happens at parse time; by the time this runs the value is one
//! of the known deployment targets.

use anyhow::{Context, Result};
use colored::Colorize;
use saas_common::ProcessSpec;
use tracing::debug;

use crate::cli::{DeployArgs, Environment};

pub fn execute(args: &DeployArgs) -> Result<()> {
    let target = match args.environment {
        Environment::Local => {
            println!("Deploying to local Kubernetes...");
            "deploy-local"
        }
        Environment::Dev => {
            println!("Deploying to development environment...");
            "deploy-dev"
        }
    };
    debug!("running make {target}");

    ProcessSpec::make(target)
        .run()
        .context("Deployment failed")?;

    println!("{}", "✓ Deployment complete!".green());

    Ok(())
}
