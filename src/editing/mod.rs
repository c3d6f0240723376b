// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! In-place label editing

pub mod edit_types;
pub mod provider;
pub mod session;

pub use edit_types::{EditOutcome, EditTrigger, PointerEnvironment};
pub use provider::{
    Activation, BpmnLabelEditing, EditingBox, EditingOptions, LabelEditingProvider, TextAlignment,
};
pub use session::{DirectEditing, EditState};
