// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory stand-in for [`JobClient`](super::JobClient).

use super::JobSpecRunner;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

type Behavior = Box<dyn Fn(&str) -> Result<()> + Send + Sync>;

#[derive(Debug, Default, Clone)]
struct Calls {
    created: Vec<String>,
    deleted: Vec<String>,
}

/// Job runner double that records calls and delegates results to closures.
///
/// Safe to share between tasks: the call log is guarded by a mutex that is
/// held while the behavior closure runs.
pub struct FakeJobRunner {
    create_fn: Behavior,
    delete_fn: Behavior,
    calls: Mutex<Calls>,
}

impl FakeJobRunner {
    pub fn new<C, D>(create_fn: C, delete_fn: D) -> Self
    where
        C: Fn(&str) -> Result<()> + Send + Sync + 'static,
        D: Fn(&str) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            create_fn: Box::new(create_fn),
            delete_fn: Box::new(delete_fn),
            calls: Mutex::new(Calls::default()),
        }
    }

    /// A runner whose operations always succeed
    pub fn succeeding() -> Self {
        Self::new(|_| Ok(()), |_| Ok(()))
    }

    pub fn create_calls(&self) -> usize {
        self.lock().created.len()
    }

    pub fn delete_calls(&self) -> usize {
        self.lock().deleted.len()
    }

    /// Names passed to `create`, in call order
    pub fn created(&self) -> Vec<String> {
        self.lock().created.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.lock().deleted.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Calls> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FakeJobRunner {
    fn default() -> Self {
        Self::succeeding()
    }
}

#[async_trait]
impl JobSpecRunner for FakeJobRunner {
    async fn create(&self, name: &str) -> Result<()> {
        let mut calls = self.lock();
        calls.created.push(name.to_string());
        (self.create_fn)(name)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let mut calls = self.lock();
        calls.deleted.push(name.to_string());
        (self.delete_fn)(name)
    }
}
