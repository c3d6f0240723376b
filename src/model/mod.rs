// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Diagram element model

pub mod element;
pub mod entity_id;
pub mod hints;
pub mod waypoints;

pub use element::{Connection, Element, ElementKind, Label, LabelAttribute, Shape};
pub use entity_id::ElementId;
pub use hints::ReshapeHints;
pub use waypoints::{Waypoint, Waypoints};
