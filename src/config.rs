// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{driver, jobs};
use std::time::Duration;

/// Parameters of the driver loop
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Namespace every Job is created in
    pub namespace: String,
    /// Container image shared by all Jobs
    pub image: String,
    /// Name passed to `create` on each iteration
    pub job_name: String,
    pub iterations: u32,
    /// Pause after every iteration, the last one included
    pub interval: Duration,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            namespace: jobs::NAMESPACE.to_string(),
            image: jobs::IMAGE.to_string(),
            job_name: jobs::NAME.to_string(),
            iterations: driver::ITERATIONS,
            interval: Duration::from_secs(driver::INTERVAL_SECS),
        }
    }
}
