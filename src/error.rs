// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Failed to load in-cluster configuration: {0}")]
    Credential(String),

    #[error("Kubernetes API error: {0}")]
    Cluster(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, JobError>;
