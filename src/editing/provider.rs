// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Label editing policy: what text to edit, where the editor box goes, and
//! how the result is written back.

use crate::config::EditingConfig;
use crate::error::{BehaviorError, Result};
use crate::host::{Canvas, ElementFactory, Modeling};
use crate::model::{Element, ElementKind};
use kurbo::{Point, Rect, Size};
use serde::Serialize;

// ===== Editor Values =====

/// Where the in-place text editor appears, in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EditingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub mid: Point,
}

impl EditingBox {
    fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            mid: Point::new(x + width / 2.0, y + height / 2.0),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Horizontal text alignment inside the editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    #[default]
    Center,
    Left,
}

/// Editor presentation options
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditingOptions {
    /// Editor scale; never below the configured minimum
    pub scale: f64,
    /// Grow the editor with its content
    pub autosizing: bool,
    pub text_alignment: TextAlignment,
    pub default_height: Option<f64>,
    pub max_height: Option<f64>,
}

/// Everything the host needs to open an editor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Activation {
    pub bounds: EditingBox,
    pub text: String,
    pub options: EditingOptions,
    /// Screen units per model unit in `bounds` (1.0 for boxes sized in
    /// model units)
    pub box_scale: f64,
}

impl Activation {
    /// Model-space size for an editor box of `size`
    pub fn model_size(&self, size: Size) -> Size {
        Size::new(size.width / self.box_scale, size.height / self.box_scale)
    }
}

// ===== Provider Trait =====

/// Decides whether and how an element's label is edited in place
pub trait LabelEditingProvider {
    /// Editor placement and initial text, or `None` if `element` has nothing
    /// to edit
    fn activate<C: Canvas + ?Sized>(&self, canvas: &C, element: &Element) -> Option<Activation>;

    /// Commit edited text and the final editor size
    fn update<M: Modeling + ?Sized>(
        &self,
        modeling: &mut M,
        element: &Element,
        new_text: &str,
        new_size: Size,
    ) -> Result<()>;
}

// ===== BPMN Provider =====

/// Label editing for BPMN elements
#[derive(Debug, Clone)]
pub struct BpmnLabelEditing<F> {
    factory: F,
    config: EditingConfig,
}

impl<F: ElementFactory> BpmnLabelEditing<F> {
    pub fn new(factory: F) -> Self {
        Self::with_config(factory, EditingConfig::default())
    }

    pub fn with_config(factory: F, config: EditingConfig) -> Self {
        Self { factory, config }
    }

    pub fn config(&self) -> &EditingConfig {
        &self.config
    }

    /// Screen-space editor box for `element`.
    ///
    /// Pools and lanes edit their name in the vertical head band, expanded
    /// sub processes and collapsed pools along their top edge. Boxes that
    /// the editor scale would enlarge are shifted left so they stay
    /// centered on the element.
    pub fn editing_box<C: Canvas + ?Sized>(&self, canvas: &C, element: &Element) -> EditingBox {
        let target_bounds = element
            .label()
            .map_or_else(|| element.bounds(), |label| label.bounds);

        let zoom = canvas.zoom();
        let scale = zoom.max(self.config.min_scale);
        let absolute = canvas.absolute_bbox(target_bounds);

        let mut x = absolute.x0;
        let mut y = absolute.y0;
        let (mut width, mut height) = if element.waypoints().is_some() {
            (absolute.width(), absolute.height())
        } else {
            (target_bounds.width(), target_bounds.height())
        };

        let editing_label = element.label().is_some() || element.is_label();
        let center_horizontally = |x: &mut f64, width: f64| {
            *x += (width * zoom - width * scale) / 2.0;
        };

        match element.kind() {
            ElementKind::Participant { expanded: true } | ElementKind::Lane => {
                width = self.config.min_bounds.width;
                height = self.config.min_bounds.height;

                x += (self.config.pool_head_width * zoom - width * scale) / 2.0;
                y += (element.bounds().height() * zoom - height * scale) / 2.0;
            }
            ElementKind::SubProcess { expanded: true } | ElementKind::Participant { expanded: false } => {
                height = self.config.min_bounds.height;
                center_horizontally(&mut x, width);
            }
            ElementKind::Task => center_horizontally(&mut x, width),
            ElementKind::SubProcess { expanded: false }
            | ElementKind::TextAnnotation
            | ElementKind::Event
            | ElementKind::Gateway
            | ElementKind::DataStoreReference
            | ElementKind::DataObjectReference
            | ElementKind::SequenceFlow
            | ElementKind::MessageFlow
            | ElementKind::Association => {
                if editing_label {
                    center_horizontally(&mut x, width);
                }
            }
        }

        EditingBox::new(x, y, width, height)
    }

    fn editing_options(&self, zoom: f64, element: &Element) -> EditingOptions {
        let mut options = EditingOptions {
            scale: zoom.max(self.config.min_scale),
            autosizing: false,
            text_alignment: TextAlignment::Center,
            default_height: None,
            max_height: None,
        };

        if element.kind() == ElementKind::TextAnnotation {
            options.autosizing = true;
            options.text_alignment = TextAlignment::Left;
            options.default_height = Some(self.factory.default_size(element.kind()).height);
            options.max_height = Some(self.config.max_autosize_height);
        }

        if element.label().is_some() || element.is_label() {
            options.autosizing = true;
            options.default_height = Some(self.config.label_default_height);
            options.max_height = Some(self.config.max_autosize_height);
        }

        options
    }
}

impl<F: ElementFactory> LabelEditingProvider for BpmnLabelEditing<F> {
    fn activate<C: Canvas + ?Sized>(&self, canvas: &C, element: &Element) -> Option<Activation> {
        let text = element.label_text()?;

        let activation = Activation {
            bounds: self.editing_box(canvas, element),
            text: text.to_string(),
            options: self.editing_options(canvas.zoom(), element),
            // connection label boxes come from the absolute bbox
            box_scale: if element.waypoints().is_some() {
                canvas.zoom()
            } else {
                1.0
            },
        };

        tracing::debug!(
            "activate label editing on {:?} at {:?}",
            element.id(),
            activation.bounds
        );

        Some(activation)
    }

    fn update<M: Modeling + ?Sized>(
        &self,
        modeling: &mut M,
        element: &Element,
        new_text: &str,
        new_size: Size,
    ) -> Result<()> {
        // Only free-floating text boxes take over the editor size
        let resized_from = match element.label() {
            Some(label) => Some(label.bounds),
            None if element.is_label() || element.kind() == ElementKind::TextAnnotation => {
                Some(element.bounds())
            }
            None => None,
        };
        let new_bounds = resized_from.map(|bounds| Rect::from_origin_size(bounds.origin(), new_size));

        tracing::debug!(
            "update label of {:?}: {:?} (bounds {:?})",
            element.id(),
            new_text,
            new_bounds
        );

        modeling
            .update_label(element, new_text, new_bounds)
            .map_err(|source| {
                tracing::warn!("label update on {:?} rejected: {}", element.id(), source);
                BehaviorError::host("element.updateLabel", source)
            })
    }
}
