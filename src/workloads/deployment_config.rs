// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! DeploymentConfig requests and client accessors

use crate::config::Config;
use crate::error::{Error, MutationError, Result};
use crate::metadata::{default_annotations, default_labels, generate_resource_name, merge_maps};
use crate::mutation::Mutation;
use crate::types::deployment_config::{DeploymentConfig, DeploymentConfigSpec};
use kube::{
    api::{ListParams, ObjectList},
    Api, Client, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Everything needed to produce a DeploymentConfig for an Argo CD instance
pub struct DeploymentConfigRequest {
    /// Explicit name; derived from instance and component when absent or empty
    pub name: Option<String>,
    pub instance_name: String,
    pub instance_namespace: String,
    pub component: String,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    /// Applied in order before the object is handed back
    pub mutations: Vec<Box<dyn Mutation>>,
    /// Passed to every mutation
    pub client: Client,
}

impl DeploymentConfigRequest {
    pub fn new(
        instance_name: impl Into<String>,
        instance_namespace: impl Into<String>,
        component: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            name: None,
            instance_name: instance_name.into(),
            instance_namespace: instance_namespace.into(),
            component: component.into(),
            labels: BTreeMap::new(),
            annotations: BTreeMap::new(),
            mutations: Vec::new(),
            client,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_annotations(mut self, annotations: BTreeMap<String, String>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn with_mutation(mut self, mutation: Box<dyn Mutation>) -> Self {
        self.mutations.push(mutation);
        self
    }

    /// Build the DeploymentConfig and run every mutation against it.
    pub async fn build(&self) -> std::result::Result<DeploymentConfig, MutationError> {
        self.build_from(None).await
    }

    /// Like [`build`](Self::build), handing `previous` to each mutation.
    ///
    /// A failing mutation does not stop the remaining ones and nothing is
    /// rolled back: on error the partially mutated object is returned inside
    /// the [`MutationError`] together with every failure.
    #[instrument(
        skip(self, previous),
        fields(instance = %self.instance_name, component = %self.component)
    )]
    pub async fn build_from(
        &self,
        previous: Option<&DeploymentConfig>,
    ) -> std::result::Result<DeploymentConfig, MutationError> {
        let mut deployment_config = new_deployment_config(
            self.name.as_deref(),
            &self.instance_name,
            &self.instance_namespace,
            &self.component,
            &self.labels,
            &self.annotations,
        );

        let mut failures = Vec::new();
        for (index, mutation) in self.mutations.iter().enumerate() {
            if let Err(e) = mutation
                .apply(previous, &mut deployment_config, &self.client)
                .await
            {
                warn!(
                    "Mutation {} on DeploymentConfig {} failed: {}",
                    index,
                    deployment_config.name_any(),
                    e
                );
                failures.push(e);
            }
        }

        if failures.is_empty() {
            Ok(deployment_config)
        } else {
            Err(MutationError {
                deployment_config: Box::new(deployment_config),
                failures,
            })
        }
    }
}

/// Build a DeploymentConfig for the given request and apply its mutations
pub async fn request_deployment_config(
    request: &DeploymentConfigRequest,
) -> std::result::Result<DeploymentConfig, MutationError> {
    request.build().await
}

fn new_deployment_config(
    name: Option<&str>,
    instance_name: &str,
    instance_namespace: &str,
    component: &str,
    labels: &BTreeMap<String, String>,
    annotations: &BTreeMap<String, String>,
) -> DeploymentConfig {
    let name = match name.filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => generate_resource_name(instance_name, component),
    };

    let mut deployment_config = DeploymentConfig::new(&name, DeploymentConfigSpec::default());
    deployment_config.metadata.namespace = Some(instance_namespace.to_string());
    deployment_config.metadata.labels = Some(merge_maps(
        default_labels(&name, instance_name, component),
        labels,
    ));
    deployment_config.metadata.annotations = Some(merge_maps(
        default_annotations(instance_name, instance_namespace),
        annotations,
    ));
    deployment_config
}

/// Name and namespace of an object about to be written
fn identity(deployment_config: &DeploymentConfig) -> Result<(String, String)> {
    let name = deployment_config
        .metadata
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| Error::InvalidObject("metadata.name is required".to_string()))?;
    let namespace = deployment_config
        .namespace()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            Error::InvalidObject(format!("metadata.namespace is required for {}", name))
        })?;
    Ok((name, namespace))
}

/// Create the DeploymentConfig. Fails with [`Error::AlreadyExists`] if the name is taken.
#[instrument(
    skip(client, deployment_config, config),
    fields(deployment_config = %deployment_config.name_any())
)]
pub async fn create_deployment_config(
    client: &Client,
    deployment_config: &DeploymentConfig,
    config: &Config,
) -> Result<DeploymentConfig> {
    let (name, namespace) = identity(deployment_config)?;
    let api: Api<DeploymentConfig> = Api::namespaced(client.clone(), &namespace);

    info!("Creating DeploymentConfig {}/{}", namespace, name);
    let created = api.create(&config.post_params(), deployment_config).await?;

    Ok(created)
}

/// Replace an existing DeploymentConfig.
///
/// The object is read first and must exist; the write is not issued otherwise.
/// It can still be deleted between the read and the write.
#[instrument(
    skip(client, deployment_config, config),
    fields(deployment_config = %deployment_config.name_any())
)]
pub async fn update_deployment_config(
    client: &Client,
    deployment_config: &DeploymentConfig,
    config: &Config,
) -> Result<DeploymentConfig> {
    let (name, namespace) = identity(deployment_config)?;
    get_deployment_config(client, &name, &namespace).await?;

    let api: Api<DeploymentConfig> = Api::namespaced(client.clone(), &namespace);

    info!("Updating DeploymentConfig {}/{}", namespace, name);
    let updated = api
        .replace(&name, &config.post_params(), deployment_config)
        .await?;

    Ok(updated)
}

/// Delete a DeploymentConfig; an already absent object counts as deleted
#[instrument(skip(client, config))]
pub async fn delete_deployment_config(
    client: &Client,
    name: &str,
    namespace: &str,
    config: &Config,
) -> Result<()> {
    match get_deployment_config(client, name, namespace).await {
        Ok(_) => {}
        Err(Error::NotFound(_)) => {
            debug!("DeploymentConfig {}/{} already absent", namespace, name);
            return Ok(());
        }
        Err(e) => return Err(e),
    }

    let api: Api<DeploymentConfig> = Api::namespaced(client.clone(), namespace);

    info!("Deleting DeploymentConfig {}/{}", namespace, name);
    api.delete(name, &config.delete_params()).await?;

    Ok(())
}

#[instrument(skip(client))]
pub async fn get_deployment_config(
    client: &Client,
    name: &str,
    namespace: &str,
) -> Result<DeploymentConfig> {
    let api: Api<DeploymentConfig> = Api::namespaced(client.clone(), namespace);

    debug!("Getting DeploymentConfig {}/{}", namespace, name);
    let deployment_config = api.get(name).await?;

    Ok(deployment_config)
}

/// List DeploymentConfigs in `namespace`, or across all namespaces when it is empty.
/// `list_params` is passed to the API server untouched.
#[instrument(skip(client))]
pub async fn list_deployment_configs(
    client: &Client,
    namespace: &str,
    list_params: &ListParams,
) -> Result<ObjectList<DeploymentConfig>> {
    let api: Api<DeploymentConfig> = if namespace.is_empty() {
        Api::all(client.clone())
    } else {
        Api::namespaced(client.clone(), namespace)
    };

    let list = api.list(list_params).await?;
    debug!("Found {} DeploymentConfigs", list.items.len());

    Ok(list)
}
