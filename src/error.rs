// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::deployment_config::DeploymentConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Resource already exists: {0}")]
    AlreadyExists(String),

    #[error("Kubernetes API error: {0}")]
    Transport(#[source] kube::Error),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error("Mutation could not be applied: {0}")]
    InvalidMutation(String),

    #[error("Invalid DeploymentConfig: {0}")]
    InvalidObject(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Classifies API server responses into the error kinds callers match on.
impl From<kube::Error> for Error {
    fn from(err: kube::Error) -> Self {
        match err {
            kube::Error::Api(resp) if resp.code == 404 => Error::NotFound(resp.message),
            kube::Error::Api(resp) if resp.code == 409 && resp.reason == "AlreadyExists" => {
                Error::AlreadyExists(resp.message)
            }
            other => Error::Transport(other),
        }
    }
}

/// Returned when building a DeploymentConfig and one or more mutations fail.
///
/// Mutations are not rolled back, so `deployment_config` reflects every
/// mutation that succeeded. `failures` lists each failure in the order the
/// mutations ran.
#[derive(Error, Debug)]
#[error(
    "one or more mutation functions could not be applied: {}",
    join_messages(.failures)
)]
pub struct MutationError {
    pub deployment_config: Box<DeploymentConfig>,
    pub failures: Vec<Error>,
}

impl MutationError {
    pub fn into_parts(self) -> (DeploymentConfig, Vec<Error>) {
        (*self.deployment_config, self.failures)
    }
}

fn join_messages(failures: &[Error]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, Error>;
