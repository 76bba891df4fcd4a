// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Creating and deleting batch Jobs named from a prefix.

pub mod client;
pub mod fake;
pub mod spec;

pub use client::JobClient;
pub use fake::FakeJobRunner;
pub use spec::JobsSpec;

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Operations of a Job manager, implemented by the real client and by test doubles
#[async_trait]
pub trait JobSpecRunner: Send + Sync {
    /// Create the Job `<prefix>-<name>`
    async fn create(&self, name: &str) -> Result<()>;

    /// Delete the Job `<prefix>-<name>` and, in the foreground, its pods
    async fn delete(&self, name: &str) -> Result<()>;
}

#[async_trait]
impl<T: JobSpecRunner + ?Sized> JobSpecRunner for Arc<T> {
    async fn create(&self, name: &str) -> Result<()> {
        (**self).create(name).await
    }

    async fn delete(&self, name: &str) -> Result<()> {
        (**self).delete(name).await
    }
}
