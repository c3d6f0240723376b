// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing behaviors for a BPMN diagram editor.
//!
//! - [`label`]: external label placement, and keeping labels attached to a
//!   connection while it is reshaped
//! - [`editing`]: in-place label editing (editor placement, commit/cancel)
//! - [`resize`]: auto-resize policy for pools, lanes and sub processes
//! - [`geometry`]: the point/line helpers the above are built on
//!
//! The host editor stays in charge of its model. It passes element
//! snapshots in and receives bounds, deltas or commands issued through its
//! own [`host::Modeling`] facade.

pub mod config;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod host;
pub mod label;
pub mod model;
pub mod resize;
pub mod settings;

pub use config::{AutoResizeOptions, BehaviorConfig, EditingConfig, Sides};
pub use editing::{BpmnLabelEditing, DirectEditing, LabelEditingProvider};
pub use error::{BehaviorError, HostError, Result};
pub use geometry::{distance_point_to_line, distance_point_to_point, perpendicular_foot};
pub use host::{Canvas, ElementFactory, Modeling};
pub use label::{
    default_label_anchor, label_reanchor_delta, nearest_segment_index, resolve_tracked_segment,
};
pub use model::{
    Connection, Element, ElementId, ElementKind, Label, ReshapeHints, Shape, Waypoint, Waypoints,
};
pub use resize::{AutoResize, BpmnAutoResize, ResizeProvider};
