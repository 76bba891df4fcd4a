// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobspawner::config::DriverConfig;
use jobspawner::driver::{Driver, TokioDelay};
use jobspawner::jobs::{JobClient, JobsSpec};
use jobspawner::kubernetes::InClusterProvider;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // One thread of control, the pause between jobs idles the whole process
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let config = DriverConfig::default();
    info!(
        "Starting job spawner: namespace={}, image={}",
        config.namespace, config.image
    );

    let driver = Driver::new(
        config,
        |spec: JobsSpec| JobClient::new(spec, InClusterProvider),
        TokioDelay,
    );
    runtime.block_on(driver.run());

    Ok(())
}
