// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Host events that drive direct editing, and how a session ended

use crate::model::Element;

/// Host event relevant to an edit session
///
/// The host translates its own event bus into these; the session decides
/// whether each one starts, completes or cancels editing.
#[derive(Debug, Clone, Copy)]
pub enum EditTrigger<'a> {
    /// Element was double-clicked (activates editing)
    DoubleClick(&'a Element),

    /// Mouse went down somewhere on the canvas (completes)
    MouseDown,

    /// A drag gesture is starting (completes)
    DragInit,

    /// The viewport was scrolled or zoomed (completes)
    ViewboxChanged,

    /// The model changed through the command stack (cancels)
    CommandStackChanged,

    /// An element was dropped from the palette (may activate)
    CreateEnd {
        element: &'a Element,
        /// Whether the host actually executed the create
        can_execute: bool,
    },
}

/// How an edit session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Changes were handed to the provider
    Committed,

    /// Session closed without changes to commit
    Unchanged,

    /// Session was discarded
    Cancelled,
}

/// Kind of pointer input the host runs with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerEnvironment {
    /// Mouse or trackpad
    #[default]
    Desktop,

    /// Touch-capable device. Editing never starts on its own here, since
    /// an open text box interrupts touch gestures.
    Touch,
}
