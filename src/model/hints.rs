// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Why a connection route changed

use serde::{Deserialize, Serialize};

/// Structural hint produced by the host's reshape operation
///
/// Only the label tracking engine consumes these; they let it map a segment
/// of the old route to a segment of the new one without guessing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReshapeHints {
    /// No structural information
    #[default]
    None,

    /// A single segment was dragged; the segment that started at
    /// `segment_start_index` now starts at `new_segment_start_index`
    #[serde(rename_all = "camelCase")]
    SegmentMove {
        segment_start_index: usize,
        new_segment_start_index: usize,
    },

    /// The connection was reconnected at its source
    StartChanged,

    /// The connection was reconnected at its target
    EndChanged,
}

