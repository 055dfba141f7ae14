// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Caller-supplied customization of resources while they are being built.

use crate::error::Result;
use crate::types::deployment_config::DeploymentConfig;
use async_trait::async_trait;
use kube::Client;

/// A single customization step applied to a DeploymentConfig under construction.
///
/// `previous` is the object currently stored in the cluster when the caller
/// supplies one, `target` the object being built. The client is available for
/// auxiliary lookups; mutations must not assume anything about ordering beyond
/// the order they were registered in.
#[async_trait]
pub trait Mutation: Send + Sync {
    async fn apply(
        &self,
        previous: Option<&DeploymentConfig>,
        target: &mut DeploymentConfig,
        client: &Client,
    ) -> Result<()>;
}

/// Adapts a synchronous closure into a [`Mutation`]
pub struct FnMutation<F>(F);

#[async_trait]
impl<F> Mutation for FnMutation<F>
where
    F: Fn(Option<&DeploymentConfig>, &mut DeploymentConfig, &Client) -> Result<()> + Send + Sync,
{
    async fn apply(
        &self,
        previous: Option<&DeploymentConfig>,
        target: &mut DeploymentConfig,
        client: &Client,
    ) -> Result<()> {
        (self.0)(previous, target, client)
    }
}

/// Box a closure as a mutation, ready to be pushed onto a request
pub fn mutate_with<F>(f: F) -> Box<dyn Mutation>
where
    F: Fn(Option<&DeploymentConfig>, &mut DeploymentConfig, &Client) -> Result<()>
        + Send
        + Sync
        + 'static,
{
    Box::new(FnMutation(f))
}
