// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod mutation;
pub mod types;
pub mod workloads;

#[cfg(test)]
mod test_utils;

pub use error::{Error, MutationError, Result};
