// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::batch::v1::{Job, JobSpec as K8sJobSpec};
use k8s_openapi::api::core::v1::{Container, PodSpec, PodTemplateSpec};
use kube::api::ObjectMeta;

/// Everything needed to address and build Jobs on the cluster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobsSpec {
    /// Distinguishes batches of Jobs sharing the same name
    pub prefix: String,
    pub namespace: String,
    /// Image run by every Job built from this spec
    pub image: String,
}

impl JobsSpec {
    pub fn new(
        prefix: impl Into<String>,
        namespace: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            namespace: namespace.into(),
            image: image.into(),
        }
    }

    /// Name used for both the Job and its container
    pub fn resource_name(&self, name: &str) -> String {
        format!("{}-{}", self.prefix, name)
    }

    /// Build the Job descriptor submitted on create.
    ///
    /// One container, restart policy `Never`, nothing else set. Name validation
    /// is left to the API server.
    pub fn build_job(&self, name: &str) -> Job {
        let resource_name = self.resource_name(name);

        Job {
            metadata: ObjectMeta {
                name: Some(resource_name.clone()),
                namespace: Some(self.namespace.clone()),
                ..Default::default()
            },
            spec: Some(K8sJobSpec {
                template: PodTemplateSpec {
                    metadata: None,
                    spec: Some(PodSpec {
                        restart_policy: Some("Never".to_string()),
                        containers: vec![Container {
                            name: resource_name,
                            image: Some(self.image.clone()),
                            ..Default::default()
                        }],
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}
