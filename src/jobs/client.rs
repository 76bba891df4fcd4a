// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Job client backed by the Kubernetes batch API

use super::{JobSpecRunner, JobsSpec};
use crate::error::Result;
use crate::kubernetes::CredentialProvider;
use async_trait::async_trait;
use k8s_openapi::api::batch::v1::Job;
use kube::{
    api::{DeleteParams, PostParams},
    Api,
};
use tracing::{info, instrument};

/// Creates and deletes Jobs described by a [`JobsSpec`].
///
/// A client is requested from the provider on every call and every call is a
/// single request: no retries, no waiting for the Job to run.
pub struct JobClient<P> {
    spec: JobsSpec,
    provider: P,
}

impl<P: CredentialProvider> JobClient<P> {
    pub fn new(spec: JobsSpec, provider: P) -> Self {
        Self { spec, provider }
    }

    fn jobs(&self) -> Result<Api<Job>> {
        let client = self.provider.connect()?;
        Ok(Api::namespaced(client, &self.spec.namespace))
    }
}

#[async_trait]
impl<P: CredentialProvider> JobSpecRunner for JobClient<P> {
    #[instrument(skip(self), fields(prefix = %self.spec.prefix, namespace = %self.spec.namespace))]
    async fn create(&self, name: &str) -> Result<()> {
        let job = self.spec.build_job(name);
        let jobs = self.jobs()?;

        jobs.create(&PostParams::default(), &job).await?;

        info!(
            "Created job {}/{} with image {}",
            self.spec.namespace,
            self.spec.resource_name(name),
            self.spec.image
        );
        Ok(())
    }

    #[instrument(skip(self), fields(prefix = %self.spec.prefix, namespace = %self.spec.namespace))]
    async fn delete(&self, name: &str) -> Result<()> {
        let resource_name = self.spec.resource_name(name);
        let jobs = self.jobs()?;

        jobs.delete(&resource_name, &DeleteParams::foreground()).await?;

        info!("Deleted job {}/{}", self.spec.namespace, resource_name);
        Ok(())
    }
}
