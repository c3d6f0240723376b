// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Behavior settings and tuning constants.
//!
//! These are the compiled-in defaults. `config::BehaviorConfig` starts from
//! them and lets a host override the editing and auto-resize values from a
//! TOML file.

// ============================================================================
// LABEL SETTINGS
// ============================================================================
/// Default width of an external label
const LABEL_DEFAULT_WIDTH: f64 = 90.0;

/// Default height of an external label
const LABEL_DEFAULT_HEIGHT: f64 = 20.0;

/// Offset of a flow label from the mid of its connection
const FLOW_LABEL_INDENT: f64 = 15.0;

// ============================================================================
// DIRECT EDITING SETTINGS
// ============================================================================
/// The text editor never renders smaller than this scale
const EDIT_MIN_SCALE: f64 = 1.2;

/// Editing box size for pools, lanes and expanded sub processes
const EDIT_MIN_BOUNDS_WIDTH: f64 = 150.0;
const EDIT_MIN_BOUNDS_HEIGHT: f64 = 50.0;

/// Width of the vertical name band on the left of a pool/lane
const EDIT_POOL_HEAD_WIDTH: f64 = 30.0;

/// Autosizing editors stop growing at this height
const EDIT_MAX_AUTOSIZE_HEIGHT: f64 = 100.0;

/// Starting height of an autosizing editor on an external label
const EDIT_LABEL_DEFAULT_HEIGHT: f64 = 20.0;

// ============================================================================
// AUTO RESIZE SETTINGS
// ============================================================================
// Offsets: distance from the container edge that triggers growth.
// Padding: clearance kept between children and the edge after growth.

const AUTO_RESIZE_OFFSET_TOP: f64 = 60.0;
const AUTO_RESIZE_OFFSET_BOTTOM: f64 = 60.0;
const AUTO_RESIZE_OFFSET_LEFT: f64 = 100.0;
const AUTO_RESIZE_OFFSET_RIGHT: f64 = 100.0;

const AUTO_RESIZE_PADDING_TOP: f64 = 2.0;
const AUTO_RESIZE_PADDING_BOTTOM: f64 = 2.0;
const AUTO_RESIZE_PADDING_LEFT: f64 = 15.0;
const AUTO_RESIZE_PADDING_RIGHT: f64 = 15.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// External label geometry
pub mod label {
    use kurbo::Size;

    /// Default size of an external label
    pub const DEFAULT_SIZE: Size =
        Size::new(super::LABEL_DEFAULT_WIDTH, super::LABEL_DEFAULT_HEIGHT);

    /// Offset of a flow label from the mid of its connection
    pub const FLOW_INDENT: f64 = super::FLOW_LABEL_INDENT;
}

/// In-place text editing
pub mod editing {
    use kurbo::Size;

    /// Floor for the editor scale, regardless of zoom
    pub const MIN_SCALE: f64 = super::EDIT_MIN_SCALE;

    /// Editing box for pools, lanes and expanded sub processes
    pub const MIN_BOUNDS: Size =
        Size::new(super::EDIT_MIN_BOUNDS_WIDTH, super::EDIT_MIN_BOUNDS_HEIGHT);

    /// Width of the pool/lane name band
    pub const POOL_HEAD_WIDTH: f64 = super::EDIT_POOL_HEAD_WIDTH;

    /// Cap for autosizing editors
    pub const MAX_AUTOSIZE_HEIGHT: f64 = super::EDIT_MAX_AUTOSIZE_HEIGHT;

    /// Starting height for external label editors
    pub const LABEL_DEFAULT_HEIGHT: f64 = super::EDIT_LABEL_DEFAULT_HEIGHT;
}

/// Auto-resize trigger offsets and padding
pub mod auto_resize {
    /// Top, bottom, left, right
    pub const OFFSET: [f64; 4] = [
        super::AUTO_RESIZE_OFFSET_TOP,
        super::AUTO_RESIZE_OFFSET_BOTTOM,
        super::AUTO_RESIZE_OFFSET_LEFT,
        super::AUTO_RESIZE_OFFSET_RIGHT,
    ];

    /// Top, bottom, left, right
    pub const PADDING: [f64; 4] = [
        super::AUTO_RESIZE_PADDING_TOP,
        super::AUTO_RESIZE_PADDING_BOTTOM,
        super::AUTO_RESIZE_PADDING_LEFT,
        super::AUTO_RESIZE_PADDING_RIGHT,
    ];
}
