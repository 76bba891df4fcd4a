// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Driver loop spawning one Job per prefix.

use crate::config::DriverConfig;
use crate::jobs::{JobSpecRunner, JobsSpec};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

/// Pause between iterations
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Sleeps for real
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        sleep(duration).await;
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

#[async_trait]
impl<T: Delay + ?Sized> Delay for Arc<T> {
    async fn wait(&self, duration: Duration) {
        (**self).wait(duration).await
    }
}

/// Creates `config.job_name` once for every prefix `0..config.iterations`.
///
/// Failures are logged and the loop moves on. The pause follows every
/// iteration, the last one included, and nothing is ever deleted.
pub struct Driver<F, D> {
    config: DriverConfig,
    factory: F,
    delay: D,
}

impl<F, R, D> Driver<F, D>
where
    F: Fn(JobsSpec) -> R,
    R: JobSpecRunner,
    D: Delay,
{
    pub fn new(config: DriverConfig, factory: F, delay: D) -> Self {
        Self {
            config,
            factory,
            delay,
        }
    }

    pub async fn run(&self) {
        info!(
            "Spawning {} jobs named {} in namespace {}",
            self.config.iterations, self.config.job_name, self.config.namespace
        );

        for prefix in 0..self.config.iterations {
            let spec = JobsSpec::new(
                prefix.to_string(),
                &self.config.namespace,
                &self.config.image,
            );
            let resource_name = spec.resource_name(&self.config.job_name);
            let runner = (self.factory)(spec);

            if let Err(e) = runner.create(&self.config.job_name).await {
                error!("Failed to create job {}: {}", resource_name, e);
            }

            debug!("Waiting {:?} before next job", self.config.interval);
            self.delay.wait(self.config.interval).await;
        }

        info!("Driver finished after {} iterations", self.config.iterations);
    }
}
