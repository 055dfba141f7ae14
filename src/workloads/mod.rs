// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builders and client accessors for operator-managed workloads.

pub mod deployment_config;

pub use deployment_config::{
    create_deployment_config, delete_deployment_config, get_deployment_config,
    list_deployment_configs, request_deployment_config, update_deployment_config,
    DeploymentConfigRequest,
};
