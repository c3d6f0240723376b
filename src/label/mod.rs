// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! External label placement and tracking

pub mod placement;
pub mod tracking;

pub use placement::{
    default_label_anchor, external_label_bounds, external_label_mid, waypoints_mid,
};
pub use tracking::{
    label_reanchor_delta, nearest_segment_index, resolve_tracked_segment, segment_move_delta,
};
