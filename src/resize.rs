// Copyright 2025 the Bpmn Behavior Authors
// SPDX-License-Identifier: Apache-2.0

//! Auto-resize of containers.
//!
//! When children are moved towards the edge of a pool, lane or sub process
//! the host grows the container. The host owns the trigger geometry (it
//! reads `AutoResizeOptions`); the provider here only decides whether a
//! container may grow and which modeling command grows it.

use crate::config::AutoResizeOptions;
use crate::error::{BehaviorError, Result};
use crate::host::Modeling;
use crate::model::{Element, ElementKind};
use kurbo::Rect;

// ===== Provider Trait =====

/// Policy for growing a container around moved elements
pub trait ResizeProvider {
    /// Whether `target` may be resized to fit `elements`
    fn can_resize(&self, elements: &[Element], target: &Element) -> bool;

    /// Resize `target` to `new_bounds`
    fn resize<M: Modeling + ?Sized>(
        &self,
        modeling: &mut M,
        target: &Element,
        new_bounds: Rect,
    ) -> Result<()>;
}

// ===== BPMN Provider =====

/// Auto-resize for participants, lanes and sub processes
#[derive(Debug, Clone, Default)]
pub struct BpmnAutoResize {
    options: AutoResizeOptions,
}

impl BpmnAutoResize {
    pub fn new(options: AutoResizeOptions) -> Self {
        Self { options }
    }

    /// Trigger offsets and padding for the host
    pub fn options(&self) -> &AutoResizeOptions {
        &self.options
    }
}

impl ResizeProvider for BpmnAutoResize {
    fn can_resize(&self, elements: &[Element], target: &Element) -> bool {
        if target.is_label() || !target.kind().is_container() {
            return false;
        }

        // Lanes are laid out by their pool, labels follow their owner
        !elements
            .iter()
            .any(|element| element.kind() == ElementKind::Lane || element.is_label())
    }

    fn resize<M: Modeling + ?Sized>(
        &self,
        modeling: &mut M,
        target: &Element,
        new_bounds: Rect,
    ) -> Result<()> {
        tracing::debug!("auto-resize {:?} to {:?}", target.id(), new_bounds);

        match target.kind() {
            ElementKind::Participant { .. } => modeling
                .resize_lane(target, new_bounds)
                .map_err(|source| BehaviorError::host("lane.resize", source)),
            _ => modeling
                .resize_shape(target, new_bounds)
                .map_err(|source| BehaviorError::host("shape.resize", source)),
        }
    }
}

// ===== Provider Registry =====

/// Registered resize providers, consulted in order
#[derive(Debug, Clone)]
pub struct AutoResize<P> {
    providers: Vec<P>,
}

impl<P: ResizeProvider> AutoResize<P> {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    pub fn register_provider(&mut self, provider: P) {
        self.providers.push(provider);
    }

    /// First provider that accepts resizing `target` for `elements`
    pub fn provider_for(&self, elements: &[Element], target: &Element) -> Option<&P> {
        self.providers
            .iter()
            .find(|provider| provider.can_resize(elements, target))
    }

    /// Resize `target` through the first accepting provider.
    ///
    /// Returns `Ok(false)` if no provider accepts.
    pub fn resize<M: Modeling + ?Sized>(
        &self,
        modeling: &mut M,
        elements: &[Element],
        target: &Element,
        new_bounds: Rect,
    ) -> Result<bool> {
        let Some(provider) = self.provider_for(elements, target) else {
            return Ok(false);
        };

        provider.resize(modeling, target, new_bounds).inspect_err(|err| {
            tracing::warn!("auto-resize of {:?} failed: {}", target.id(), err);
        })?;
        Ok(true)
    }
}

impl<P: ResizeProvider> Default for AutoResize<P> {
    fn default() -> Self {
        Self::new()
    }
}
