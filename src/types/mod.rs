// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed cluster resources managed by the operator.

pub mod deployment_config;

pub use deployment_config::{DeploymentConfig, DeploymentConfigSpec, DeploymentConfigStatus};
