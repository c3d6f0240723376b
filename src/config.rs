// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration for the behaviors.
//!
//! Every field defaults to the matching constant in `settings`, so a host
//! only lists what it wants to change:
//!
//! ```toml
//! [editing]
//! min_scale = 1.0
//!
//! [auto_resize.padding]
//! left = 20.0
//! ```

use crate::error::Result;
use crate::settings;
use anyhow::Context;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-edge distances (top, bottom, left, right)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Sides {
    /// From `[top, bottom, left, right]`
    pub const fn from_array(sides: [f64; 4]) -> Self {
        Self {
            top: sides[0],
            bottom: sides[1],
            left: sides[2],
            right: sides[3],
        }
    }
}

/// Direct editing tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingConfig {
    pub min_scale: f64,
    pub min_bounds: Size,
    pub pool_head_width: f64,
    pub max_autosize_height: f64,
    pub label_default_height: f64,
}

impl Default for EditingConfig {
    fn default() -> Self {
        Self {
            min_scale: settings::editing::MIN_SCALE,
            min_bounds: settings::editing::MIN_BOUNDS,
            pool_head_width: settings::editing::POOL_HEAD_WIDTH,
            max_autosize_height: settings::editing::MAX_AUTOSIZE_HEIGHT,
            label_default_height: settings::editing::LABEL_DEFAULT_HEIGHT,
        }
    }
}

/// Auto-resize trigger offsets and padding, read by the host's trigger logic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoResizeOptions {
    pub offset: Sides,
    pub padding: Sides,
}

impl Default for AutoResizeOptions {
    fn default() -> Self {
        Self {
            offset: Sides::from_array(settings::auto_resize::OFFSET),
            padding: Sides::from_array(settings::auto_resize::PADDING),
        }
    }
}

/// All behavior configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub editing: EditingConfig,
    pub auto_resize: AutoResizeOptions,
}

impl BehaviorConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read behavior config {}", path.display()))?;
        let config = Self::from_toml_str(&source)
            .with_context(|| format!("Failed to parse behavior config {}", path.display()))?;
        tracing::info!("Loaded behavior config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BehaviorError;

    #[test]
    fn defaults_match_settings() {
        let config = BehaviorConfig::default();
        assert_eq!(config.editing.min_scale, 1.2);
        assert_eq!(config.editing.min_bounds, Size::new(150.0, 50.0));
        assert_eq!(config.editing.pool_head_width, 30.0);
        assert_eq!(config.editing.max_autosize_height, 100.0);
        assert_eq!(config.editing.label_default_height, 20.0);

        assert_eq!(
            config.auto_resize.offset,
            Sides {
                top: 60.0,
                bottom: 60.0,
                left: 100.0,
                right: 100.0
            }
        );
        assert_eq!(
            config.auto_resize.padding,
            Sides {
                top: 2.0,
                bottom: 2.0,
                left: 15.0,
                right: 15.0
            }
        );
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            BehaviorConfig::from_toml_str("").unwrap(),
            BehaviorConfig::default()
        );
    }

    #[test]
    fn partial_override() {
        let config = BehaviorConfig::from_toml_str(
            r#"
            [editing]
            min_scale = 1.0

            [auto_resize.padding]
            top = 4.0
            bottom = 4.0
            left = 20.0
            right = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(config.editing.min_scale, 1.0);
        assert_eq!(config.editing.pool_head_width, 30.0);
        assert_eq!(config.auto_resize.padding.left, 20.0);
        assert_eq!(config.auto_resize.offset.left, 100.0);
    }

    #[test]
    fn invalid_document() {
        let err = BehaviorConfig::from_toml_str("[editing]\nmin_scale = \"big\"").unwrap_err();
        assert!(matches!(err, BehaviorError::Config(_)));
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = BehaviorConfig::load(Path::new("/nonexistent/behavior.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/behavior.toml"));
    }
}
