// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for shapes, connections and labels.
//!
//! Each `ElementId` is a monotonically increasing `u64` taken from a global
//! atomic counter. A detached label refers to its owner through the owner's
//! id, never through a reference, so labels and owners can be cloned and
//! handed to the host independently.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a diagram element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(u64);

static ELEMENT_COUNTER: AtomicU64 = AtomicU64::new(1);

impl ElementId {
    /// Create a new unique element ID
    pub fn next() -> Self {
        Self(ELEMENT_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, for hosts that key their own registries by it
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::next()
    }
}
