// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Naming and default metadata for operator-managed workloads

use crate::constants::{annotations, labels, APP_NAME, OPERATOR_NAME};
use std::collections::BTreeMap;

/// Name of a resource derived from its owning instance and component
pub fn generate_resource_name(instance_name: &str, component: &str) -> String {
    format!("{}-{}", instance_name, component)
}

/// Labels every workload carries
pub fn default_labels(name: &str, instance_name: &str, component: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (labels::NAME.to_string(), name.to_string()),
        (labels::INSTANCE.to_string(), instance_name.to_string()),
        (labels::PART_OF.to_string(), APP_NAME.to_string()),
        (labels::MANAGED_BY.to_string(), OPERATOR_NAME.to_string()),
        (labels::COMPONENT.to_string(), component.to_string()),
    ])
}

/// Annotations every workload carries
pub fn default_annotations(instance_name: &str, instance_namespace: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (annotations::NAME.to_string(), instance_name.to_string()),
        (annotations::NAMESPACE.to_string(), instance_namespace.to_string()),
    ])
}

/// Merge `overrides` into `base`; values from `overrides` win on key collision
pub fn merge_maps(
    mut base: BTreeMap<String, String>,
    overrides: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    base.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
    base
}
