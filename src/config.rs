// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::OPERATOR_NAME;
use anyhow::{Context, Result};
use kube::api::{DeleteParams, PostParams};
use std::env::{self, VarError};

/// Write options loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Field manager recorded by the API server for every write
    pub field_manager: String,
    /// Submit writes as server-side dry runs
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            field_manager: OPERATOR_NAME.to_string(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let field_manager =
            read_var("FIELD_MANAGER")?.unwrap_or_else(|| OPERATOR_NAME.to_string());
        let dry_run = match read_var("DRY_RUN")? {
            Some(raw) => raw
                .parse::<bool>()
                .with_context(|| format!("DRY_RUN must be 'true' or 'false', got '{}'", raw))?,
            None => false,
        };

        Ok(Config {
            field_manager,
            dry_run,
        })
    }

    pub fn post_params(&self) -> PostParams {
        PostParams {
            dry_run: self.dry_run,
            field_manager: Some(self.field_manager.clone()),
        }
    }

    pub fn delete_params(&self) -> DeleteParams {
        DeleteParams {
            dry_run: self.dry_run,
            ..Default::default()
        }
    }
}

/// Value of an environment variable, `None` when it is unset
fn read_var(name: &str) -> Result<Option<String>> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{} is not valid unicode", name)),
    }
}
