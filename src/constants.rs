// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Well-known label keys applied to every workload
pub mod labels {
    /// Name of the workload itself
    pub const NAME: &str = "app.kubernetes.io/name";
    /// Owning Argo CD instance
    pub const INSTANCE: &str = "app.kubernetes.io/instance";
    /// Application the workload belongs to
    pub const PART_OF: &str = "app.kubernetes.io/part-of";
    /// Operator managing the workload
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
    /// Argo CD component, e.g. "server" or "repo-server"
    pub const COMPONENT: &str = "app.kubernetes.io/component";
}

/// Annotation keys pointing back at the owning Argo CD instance
pub mod annotations {
    /// Name of the owning Argo CD instance
    pub const NAME: &str = "argocds.argoproj.io/name";
    /// Namespace of the owning Argo CD instance
    pub const NAMESPACE: &str = "argocds.argoproj.io/namespace";
}

/// Value of the part-of label
pub const APP_NAME: &str = "argocd";

/// The operator name, used as managed-by label and default field manager
pub const OPERATOR_NAME: &str = "argocd-operator";
