// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the behaviors
//!
//! Most behaviors cannot fail: unsupported reshapes fall back to "leave the
//! label where it is" and elements without a label simply aren't editable.
//! What remains are invalid inputs at construction time, configuration
//! parsing, and commands the host modeling facade rejects.

use thiserror::Error;

/// Error reported by a host collaborator (modeling facade, command stack)
pub type HostError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors produced by this crate
#[derive(Debug, Error)]
pub enum BehaviorError {
    /// A connection route needs a start and an end
    #[error("waypoint sequence has {0} point(s), at least 2 required")]
    TooFewWaypoints(usize),

    /// The host refused to execute a modeling command
    #[error("modeling command `{command}` failed")]
    Host {
        command: &'static str,
        #[source]
        source: HostError,
    },

    /// Configuration could not be parsed
    #[error("invalid behavior configuration")]
    Config(#[from] toml::de::Error),
}

impl BehaviorError {
    /// Wrap a host failure for the named command
    pub fn host(command: &'static str, source: HostError) -> Self {
        Self::Host { command, source }
    }
}

pub type Result<T, E = BehaviorError> = std::result::Result<T, E>;
