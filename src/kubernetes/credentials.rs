// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Credential providers handing out authenticated Kubernetes clients

use crate::error::{JobError, Result};
use kube::{Client, Config as KConfig};
use tracing::debug;

/// Source of a ready-to-use Kubernetes client.
///
/// Asked for a client on every Job operation; a failure here aborts the
/// operation before any request reaches the API server.
pub trait CredentialProvider: Send + Sync {
    fn connect(&self) -> Result<Client>;
}

/// Uses the service account token, CA bundle and API server address that the
/// hosting cluster mounts into the pod.
#[derive(Debug, Clone, Copy, Default)]
pub struct InClusterProvider;

impl CredentialProvider for InClusterProvider {
    fn connect(&self) -> Result<Client> {
        let config = KConfig::incluster().map_err(|e| {
            JobError::Credential(format!("Failed to read in-cluster config: {}", e))
        })?;
        debug!("Using in-cluster API server {}", config.cluster_url);

        Client::try_from(config)
            .map_err(|e| JobError::Credential(format!("Failed to create client: {}", e)))
    }
}

/// Hands out clones of an already built client
#[derive(Clone)]
pub struct StaticProvider {
    client: Client,
}

impl StaticProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl CredentialProvider for StaticProvider {
    fn connect(&self) -> Result<Client> {
        Ok(self.client.clone())
    }
}
